use crate::app::events::{PointerEvent, PointerPhase};
use crate::app::{AppCommand, AppIntent, AppState, EditorTool};
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn pointer_phases_map_to_matching_commands() {
    let state = AppState::new();
    let pos = Vec2::new(12.0, 34.0);

    let down = map_intent_to_commands(
        &state,
        AppIntent::PointerInput {
            event: PointerEvent::new(PointerPhase::Down, pos, 3),
        },
    );
    assert!(matches!(
        down[..],
        [AppCommand::PointerDown { pointer_id: 3, .. }]
    ));

    let cancel = map_intent_to_commands(
        &state,
        AppIntent::PointerInput {
            event: PointerEvent::new(PointerPhase::Cancel, pos, 3),
        },
    );
    assert!(matches!(cancel[..], [AppCommand::PointerCancel { pointer_id: 3 }]));
}

#[test]
fn clear_image_removes_background_then_guides() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ClearImageRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ClearBackground));
    assert!(matches!(commands[1], AppCommand::ClearGuides));
}

#[test]
fn add_grid_uses_canvas_center_and_tool_settings() {
    let mut state = AppState::new();
    state.view.canvas_size = [400.0, 300.0];
    state.editor.settings.grid_density = 9;

    let commands = map_intent_to_commands(&state, AppIntent::AddGridRequested);

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::AddGrid { config } => {
            assert_eq!(config.vanishing_point, Some(Vec2::new(200.0, 150.0)));
            assert_eq!(config.density, Some(9));
            assert_eq!(config.name, None);
            assert_eq!(config.color, None);
        }
        other => panic!("AddGrid erwartet, erhalten: {:?}", other),
    }
}

#[test]
fn tool_switch_maps_to_set_editor_tool() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::Eraser,
        },
    );

    assert!(matches!(
        commands[..],
        [AppCommand::SetEditorTool {
            tool: EditorTool::Eraser
        }]
    ));
}
