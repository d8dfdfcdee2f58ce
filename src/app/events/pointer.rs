use glam::Vec2;

/// Phase eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Finger/Maustaste gedrückt
    Down,
    /// Bewegung (mit oder ohne gedrückte Taste)
    Move,
    /// Losgelassen
    Up,
    /// Vom System abgebrochen
    Cancel,
}

/// Pointer-Event in Canvas-Koordinaten (bereits vom Host umgerechnet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in Canvas-Pixeln
    pub pos: Vec2,
    /// ID des Pointers (Maus, Finger, Stift)
    pub pointer_id: u64,
    /// Phase
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Kurzform für Tests und Host-Code.
    pub fn new(phase: PointerPhase, pos: Vec2, pointer_id: u64) -> Self {
        Self {
            pos,
            pointer_id,
            phase,
        }
    }
}
