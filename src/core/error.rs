//! Fehlertypen des Guide-Modells.

use thiserror::Error;

/// Abgelehnte Operationen auf dem Guide-Modell.
///
/// Keiner dieser Fehler ist fatal: der Aufrufer behandelt sie als No-Op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuideError {
    /// Es existieren bereits `max` Raster.
    #[error("maximal {max} Raster erlaubt")]
    CapacityExceeded { max: usize },
    /// Farbangabe ist kein gültiges `#RRGGBB`.
    #[error("ungültige Farbe: {0:?}")]
    InvalidColor(String),
}
