//! UI-Komponenten: Toolbar, Properties, Canvas, Input-Handling, Dialoge.

pub mod canvas;
pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Panels, Canvas, Dialoge).
/// Keyboard-Shortcuts und Pointer-Umrechnung sind in eigene Dateien extrahiert.
pub mod properties;
pub mod status;
pub mod toolbar;

pub use canvas::CanvasPainter;
pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

use crate::app::{AppIntent, EditorTool};

/// Sammelt die Keyboard-Shortcuts des Frames.
pub fn collect_keyboard_intents(ui: &egui::Ui, active_tool: EditorTool) -> Vec<AppIntent> {
    keyboard::collect_keyboard_intents(ui, active_tool)
}
