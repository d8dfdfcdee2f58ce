//! Hintergrundbild (Foto oder Kamera-Standbild) unter den Hilfslinien.

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageReader, RgbaImage};
use std::io::BufReader;

/// Dekodiertes Referenzbild mit natürlicher Pixelgröße.
pub struct BackgroundImage {
    /// Bilddaten
    image_data: DynamicImage,
    /// Herkunft für Log-Ausgaben (Dateipfad oder "camera")
    source_label: String,
}

impl BackgroundImage {
    /// Lädt ein Foto aus einer Datei.
    ///
    /// Schlägt die Erkennung über die Dateiendung fehl, wird das Format
    /// anhand des Dateiinhalts erraten.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let image = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Dateiinhalt...",
                    path,
                    ext_err
                );
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Datei nicht gefunden: {}", path))?;
                ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| format!("Format-Erkennung fehlgeschlagen für: {}", path))?
                    .decode()
                    .with_context(|| format!("Fehler beim Dekodieren des Bildes: {}", path))?
            }
        };

        Ok(Self::from_image(image, path))
    }

    /// Übernimmt ein fertiges Kamera-Standbild (RGBA8, zeilenweise).
    pub fn from_rgba_frame(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        let actual = rgba.len();
        let buffer = RgbaImage::from_raw(width, height, rgba).with_context(|| {
            format!(
                "Kamera-Frame {}x{} erwartet {} Bytes, erhalten {}",
                width, height, expected, actual
            )
        })?;
        Ok(Self::from_image(DynamicImage::ImageRgba8(buffer), "camera"))
    }

    /// Erstellt ein Hintergrundbild aus einem bereits dekodierten Bild.
    pub fn from_image(image: DynamicImage, source_label: &str) -> Self {
        let (width, height) = image.dimensions();
        log::info!(
            "Hintergrundbild übernommen: {}x{} aus '{}'",
            width,
            height,
            source_label
        );
        Self {
            image_data: image,
            source_label: source_label.to_string(),
        }
    }

    /// Gibt die Bilddaten zurück
    pub fn image_data(&self) -> &DynamicImage {
        &self.image_data
    }

    /// Gibt die natürlichen Dimensionen des Bildes zurück
    pub fn dimensions(&self) -> (u32, u32) {
        self.image_data.dimensions()
    }

    /// Herkunft des Bildes
    pub fn source_label(&self) -> &str {
        &self.source_label
    }
}

impl std::fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.dimensions();
        f.debug_struct("BackgroundImage")
            .field("width", &width)
            .field("height", &height)
            .field("source_label", &self.source_label)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_frame_keeps_dimensions() {
        let bg = BackgroundImage::from_rgba_frame(4, 2, vec![255; 4 * 2 * 4])
            .expect("Frame sollte gültig sein");
        assert_eq!(bg.dimensions(), (4, 2));
        assert_eq!(bg.source_label(), "camera");
    }

    #[test]
    fn test_from_rgba_frame_rejects_short_buffer() {
        assert!(BackgroundImage::from_rgba_frame(4, 4, vec![0; 10]).is_err());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        assert!(BackgroundImage::load_from_file("/nonexistent/photo.png").is_err());
    }
}
