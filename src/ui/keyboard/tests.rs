use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, active_tool: EditorTool) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, active_tool);
        });
    });

    events
}

#[test]
fn test_num2_emits_grid_tool_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num2, egui::Modifiers::default()),
        EditorTool::Line,
    );

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::Grid
        }
    )));
}

#[test]
fn test_num_key_for_active_tool_does_nothing() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num3, egui::Modifiers::default()),
        EditorTool::Eraser,
    );

    assert!(events.is_empty());
}

#[test]
fn test_escape_emits_cancel() {
    let events = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        EditorTool::Line,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::CancelRequested)));
}

#[test]
fn test_ctrl_z_emits_undo() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND),
        EditorTool::Grid,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
}

#[test]
fn test_plain_z_does_nothing() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::default()),
        EditorTool::Line,
    );

    assert!(events.is_empty());
}
