//! Handler für Dialog-Anforderungen und Anwendungssteuerung.

use crate::app::AppState;

/// Fordert den Bild-Auswahldialog beim Host an.
pub fn request_open_image_dialog(state: &mut AppState) {
    state.ui.show_open_image_dialog = true;
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
