//! Fluchtpunkt-Handles greifen und ziehen.
//!
//! Ein Drag bindet genau eine Pointer-ID. Solange er aktiv ist, gehören alle
//! Move/Up/Cancel-Events dieser ID dem Drag, egal wo sie auftreten.

use crate::core::{clamp_vanishing_point, GuideId, GuideSet};
use glam::Vec2;

/// Aktiver Handle-Drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Gezogenes Raster
    pub target_grid_id: GuideId,
    /// Pointer, der den Drag hält
    pub pointer_id: u64,
}

impl DragState {
    /// Gehört das Event zu diesem Drag?
    pub fn owns(&self, pointer_id: u64) -> bool {
        self.pointer_id == pointer_id
    }
}

/// Sucht das erste aktive Raster (Einfüge-Reihenfolge), dessen Handle
/// höchstens `grab_radius` von `pos` entfernt ist.
pub fn pick_handle(guides: &GuideSet, pos: Vec2, grab_radius: f32) -> Option<GuideId> {
    guides
        .grids()
        .find(|grid| grid.enabled && pos.distance(grid.vanishing_point) <= grab_radius)
        .map(|grid| grid.id)
}

/// Zielposition des Fluchtpunkts für eine Pointer-Position während des Drags.
pub fn drag_target(pos: Vec2, canvas_size: [f32; 2], bottom_margin: f32) -> Vec2 {
    clamp_vanishing_point(pos, Vec2::from(canvas_size), bottom_margin)
}
