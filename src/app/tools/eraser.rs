//! Radierer: entfernt den obersten getroffenen Eintrag.

use super::ToolResult;
use crate::core::{distance_to_segment, Guide, GuideId, GuideSet};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Sucht den obersten Eintrag unter `pos` (umgekehrte Einfüge-Reihenfolge).
///
/// Linien treffen bei Abstand < `line_erase_radius`, Raster nur über ihren
/// Fluchtpunkt (< `handle_erase_radius`). Inaktive Raster werden übersprungen.
pub fn pick_guide_at(guides: &GuideSet, pos: Vec2, options: &EditorOptions) -> Option<GuideId> {
    guides
        .iter()
        .rev()
        .find(|guide| match guide {
            Guide::Line(line) => {
                distance_to_segment(pos, line.start, line.end) < options.line_erase_radius
            }
            Guide::Grid(grid) => {
                grid.enabled && pos.distance(grid.vanishing_point) < options.handle_erase_radius
            }
        })
        .map(Guide::id)
}

/// Tap im Radierer-Modus: höchstens ein Eintrag wird entfernt.
pub fn on_tap(pos: Vec2, guides: &GuideSet, options: &EditorOptions) -> ToolResult {
    match pick_guide_at(guides, pos, options) {
        Some(id) => ToolResult::Remove { id },
        None => ToolResult::Nothing,
    }
}
