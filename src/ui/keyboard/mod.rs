//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, EditorTool};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Escape verwirft eine angefangene Linie, Ctrl+Z macht einen Schritt
/// rückgängig, `1`/`2`/`3` wählen das Werkzeug.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, active_tool: EditorTool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Text-Eingaben (z.B. Slider-Werte) nicht abfangen
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_z, key_escape, key_1, key_2, key_3) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
            i.key_pressed(egui::Key::Num3),
        )
    });

    if modifiers.command && key_z && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if key_escape {
        events.push(AppIntent::CancelRequested);
    }

    if !modifiers.command {
        let requested = [
            (key_1, EditorTool::Line),
            (key_2, EditorTool::Grid),
            (key_3, EditorTool::Eraser),
        ]
        .into_iter()
        .find_map(|(pressed, tool)| pressed.then_some(tool));

        if let Some(tool) = requested.filter(|tool| *tool != active_tool) {
            events.push(AppIntent::SetEditorToolRequested { tool });
        }
    }

    events
}

#[cfg(test)]
mod tests;
