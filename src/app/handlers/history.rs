//! Handler für Undo und Abbruch der Linien-Geste.

use crate::app::AppState;

use super::editing;

/// Einstufiges Undo.
///
/// Eine angefangene Linie wird verworfen, ohne die Liste anzufassen.
/// Sonst wird der zuletzt hinzugefügte Eintrag entfernt.
pub fn undo(state: &mut AppState) {
    if state.editor.line_tool.cancel() {
        log::info!("Undo: Linien-Start verworfen");
        return;
    }

    match state.guides.pop_last() {
        Some(guide) => {
            editing::release_drag_on(state, guide.id());
            log::info!("Undo: Eintrag {} entfernt", guide.id());
        }
        None => log::debug!("Undo: nichts rückgängig zu machen"),
    }
}

/// Verwirft eine angefangene Linien-Geste (Escape).
pub fn cancel_line_gesture(state: &mut AppState) {
    if state.editor.line_tool.cancel() {
        log::debug!("Linien-Start verworfen");
    }
}
