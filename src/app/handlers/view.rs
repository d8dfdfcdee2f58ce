//! Handler für Canvas-Größe und Hintergrundbild.

use crate::app::AppState;
use crate::core::{fit_canvas_to_image, BackgroundImage};
use crate::shared::options::CANVAS_DEFAULT_SIZE;
use glam::Vec2;
use std::sync::Arc;

/// Lädt ein Foto und setzt es als Hintergrund.
///
/// Bei Fehlern bleibt der State unverändert, der Fehler geht an den Aufrufer.
pub fn load_background_image(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let image = BackgroundImage::load_from_file(&path)?;
    set_background(state, Arc::new(image));
    Ok(())
}

/// Setzt ein fertig dekodiertes Bild als Hintergrund und passt den Canvas an.
pub fn set_background(state: &mut AppState, image: Arc<BackgroundImage>) {
    state.view.background = Some(image);
    state.view.background_dirty = true;
    refit_canvas(state);
}

/// Entfernt das Hintergrundbild.
pub fn clear_background(state: &mut AppState) {
    if state.view.background.take().is_some() {
        state.view.background_dirty = true;
        log::info!("Hintergrundbild entfernt");
    }
}

/// Übernimmt die verfügbare Breite.
///
/// Die erste Meldung passt den leeren Canvas ein, danach nur noch mit Hintergrundbild.
pub fn set_available_width(state: &mut AppState, width: f32) {
    let first_report = match state.view.available_width {
        Some(current) if current == width => return,
        Some(_) => false,
        None => true,
    };
    state.view.available_width = Some(width);
    if first_report || state.view.background.is_some() {
        refit_canvas(state);
    }
}

/// Passt den Canvas an das Bild (oder die Standardgröße) an.
///
/// Hilfslinien behalten ihre Canvas-Koordinaten.
fn refit_canvas(state: &mut AppState) {
    let source = match &state.view.background {
        Some(image) => {
            let (width, height) = image.dimensions();
            Vec2::new(width as f32, height as f32)
        }
        None => Vec2::from(CANVAS_DEFAULT_SIZE),
    };
    let max_width = match state.view.available_width {
        Some(available) => state.options.canvas_width_limit(available),
        None => state.options.canvas_max_width,
    };

    let fitted = fit_canvas_to_image(source, max_width);
    state.view.canvas_size = fitted.to_array();
    log::info!("Canvas-Größe: {:.0}x{:.0}", fitted.x, fitted.y);
}
