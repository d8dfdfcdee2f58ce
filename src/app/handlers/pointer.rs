//! Handler für Pointer-Events: Werkzeug-Taps und Handle-Drag.

use crate::app::tools::{eraser, grid_place, handle_drag, DragState, ToolResult};
use crate::app::{AppState, EditorTool};
use glam::Vec2;

use super::editing;

/// Pointer gedrückt: Tap des aktiven Werkzeugs.
///
/// Solange ein Drag gehalten wird, werden alle weiteren Pointer-Downs ignoriert.
pub fn pointer_down(state: &mut AppState, pos: Vec2, pointer_id: u64) {
    if let Some(drag) = state.editor.drag {
        log::debug!(
            "Pointer {} ignoriert: Raster {} wird von Pointer {} gezogen",
            pointer_id,
            drag.target_grid_id,
            drag.pointer_id
        );
        return;
    }

    let result = match state.editor.active_tool {
        EditorTool::Line => state.editor.line_tool.on_tap(pos),
        EditorTool::Grid => grid_place::on_tap(
            pos,
            &state.guides,
            &state.editor.settings.grid_template(),
            state.options.handle_grab_radius,
        ),
        EditorTool::Eraser => eraser::on_tap(pos, &state.guides, &state.options),
    };

    apply_tool_result(state, result, pointer_id);
}

/// Wendet das Ergebnis eines Werkzeug-Taps zentral auf den State an.
fn apply_tool_result(state: &mut AppState, result: ToolResult, pointer_id: u64) {
    match result {
        ToolResult::Nothing => log::debug!("Tap ohne Treffer"),
        ToolResult::LineArmed { start } => {
            log::debug!("Linien-Start gesetzt bei ({:.1}, {:.1})", start.x, start.y);
        }
        ToolResult::CreateLine { start, end } => {
            let style = state.editor.settings.line_style();
            let id = state.guides.create_line_guide(start, end, style);
            log::info!(
                "Hilfslinie {} erstellt: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                id,
                start.x,
                start.y,
                end.x,
                end.y
            );
        }
        ToolResult::CreateGrid { config } => editing::add_grid(state, config),
        ToolResult::Remove { id } => editing::remove_guide(state, id),
        ToolResult::BeginDrag { grid_id } => {
            state.editor.drag = Some(DragState {
                target_grid_id: grid_id,
                pointer_id,
            });
            log::debug!("Drag von Raster {} mit Pointer {} begonnen", grid_id, pointer_id);
        }
    }
}

/// Pointer bewegt: verschiebt den Fluchtpunkt des gezogenen Rasters.
pub fn pointer_move(state: &mut AppState, pos: Vec2, pointer_id: u64) {
    let Some(drag) = state.editor.drag else {
        return;
    };
    if !drag.owns(pointer_id) {
        return;
    }

    let target = handle_drag::drag_target(
        pos,
        state.view.canvas_size,
        state.options.drag_bottom_margin,
    );
    if !state.guides.set_vanishing_point(drag.target_grid_id, target) {
        log::debug!("Gezogenes Raster {} existiert nicht mehr", drag.target_grid_id);
        state.editor.release_drag();
    }
}

/// Pointer losgelassen: beendet den passenden Drag.
pub fn pointer_up(state: &mut AppState, pointer_id: u64) {
    end_drag(state, pointer_id, "beendet");
}

/// Pointer abgebrochen: beendet den passenden Drag ohne Rücksetzen.
pub fn pointer_cancel(state: &mut AppState, pointer_id: u64) {
    end_drag(state, pointer_id, "abgebrochen");
}

fn end_drag(state: &mut AppState, pointer_id: u64, reason: &str) {
    match state.editor.drag {
        Some(drag) if drag.owns(pointer_id) => {
            state.editor.release_drag();
            log::debug!("Drag von Raster {} {}", drag.target_grid_id, reason);
        }
        _ => {}
    }
}
