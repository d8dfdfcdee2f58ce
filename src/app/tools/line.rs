//! Linienwerkzeug: erster Tap setzt den Start, zweiter Tap erzeugt die Linie.

use super::ToolResult;
use glam::Vec2;

/// Zustand der Zwei-Tap-Geste.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LinePhase {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Startpunkt gesetzt, wartet auf den Endpunkt
    Armed { start: Vec2 },
}

/// Linienwerkzeug
#[derive(Debug, Clone, Default)]
pub struct LineTool {
    phase: LinePhase,
}

impl LineTool {
    /// Erstellt ein Linienwerkzeug im Idle-Zustand.
    pub fn new() -> Self {
        Self {
            phase: LinePhase::Idle,
        }
    }

    /// Verarbeitet einen Tap.
    pub fn on_tap(&mut self, pos: Vec2) -> ToolResult {
        match self.phase {
            LinePhase::Idle => {
                self.phase = LinePhase::Armed { start: pos };
                ToolResult::LineArmed { start: pos }
            }
            LinePhase::Armed { start } => {
                self.phase = LinePhase::Idle;
                ToolResult::CreateLine { start, end: pos }
            }
        }
    }

    /// Bricht eine angefangene Geste ab. Gibt zurück, ob etwas abgebrochen wurde.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.is_armed();
        self.phase = LinePhase::Idle;
        was_armed
    }

    /// Aktueller Zustand
    pub fn phase(&self) -> LinePhase {
        self.phase
    }

    /// Ist ein Startpunkt gesetzt?
    pub fn is_armed(&self) -> bool {
        matches!(self.phase, LinePhase::Armed { .. })
    }

    /// Startpunkt der angefangenen Geste (für den gestrichelten Marker).
    pub fn pending_start(&self) -> Option<Vec2> {
        match self.phase {
            LinePhase::Armed { start } => Some(start),
            LinePhase::Idle => None,
        }
    }
}
