//! Raster-Werkzeug: Handle greifen oder neues Raster platzieren.

use super::{handle_drag, ToolResult};
use crate::core::{GridConfig, GuideSet};
use glam::Vec2;

/// Tap im Raster-Modus.
///
/// Liegt ein aktives Handle im Greif-Radius, beginnt ein Drag. Sonst wird
/// ein Raster mit den Werkzeug-Einstellungen am Tap-Punkt erzeugt.
pub fn on_tap(
    pos: Vec2,
    guides: &GuideSet,
    template: &GridConfig,
    grab_radius: f32,
) -> ToolResult {
    if let Some(grid_id) = handle_drag::pick_handle(guides, pos, grab_radius) {
        return ToolResult::BeginDrag { grid_id };
    }

    ToolResult::CreateGrid {
        config: GridConfig {
            vanishing_point: Some(pos),
            ..template.clone()
        },
    }
}
