use crate::core::BackgroundImage;
use crate::shared::options::CANVAS_DEFAULT_SIZE;
use std::sync::Arc;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Canvas-Größe in Pixeln
    pub canvas_size: [f32; 2],
    /// Zuletzt gemeldete verfügbare Breite des Hosts
    pub available_width: Option<f32>,
    /// Hintergrundbild (Foto oder Kamera-Standbild)
    pub background: Option<Arc<BackgroundImage>>,
    /// Signalisiert, dass die Textur neu hochgeladen werden muss
    pub background_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            canvas_size: CANVAS_DEFAULT_SIZE,
            available_width: None,
            background: None,
            background_dirty: false,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
