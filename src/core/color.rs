//! Farben für Hilfslinien: Hex-Parsing (`#RRGGBB`) und RGBA-Blending.

use super::GuideError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feste Palette für automatisch vergebene Raster-Farben (Round-Robin).
pub const GRID_PALETTE: [GuideColor; 3] = [
    GuideColor::rgb(0xff, 0x7b, 0x54),
    GuideColor::rgb(0x4c, 0xc9, 0xf0),
    GuideColor::rgb(0xb5, 0xe4, 0x8c),
];

/// Opake RGB-Farbe einer Hilfslinie oder eines Rasters.
///
/// Wird in der Konfiguration als `#rrggbb`-String serialisiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GuideColor {
    r: u8,
    g: u8,
    b: u8,
}

impl GuideColor {
    /// Weiß (Startpunkt-Marker).
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// Schwarz (Handle-Outline).
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    /// Erstellt eine Farbe aus drei Kanälen.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parst einen Hex-String `#RRGGBB` (das `#` ist optional).
    ///
    /// Kanal-Dekodierung wie bei einem 24-Bit-Wert: Rot = Bits 16-23,
    /// Grün = Bits 8-15, Blau = Bits 0-7.
    pub fn from_hex(hex: &str) -> Result<Self, GuideError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GuideError::InvalidColor(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| GuideError::InvalidColor(hex.to_string()))?;
        Ok(Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        })
    }

    /// Gibt die Farbe als `#rrggbb` zurück.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Kombiniert die Farbe mit einem Alpha-Wert in [0, 1].
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha.clamp(0.0, 1.0),
        }
    }

    /// Rot-, Grün- und Blau-Kanal.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for GuideColor {
    fn default() -> Self {
        GRID_PALETTE[0]
    }
}

impl TryFrom<String> for GuideColor {
    type Error = GuideError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<GuideColor> for String {
    fn from(color: GuideColor) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for GuideColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Farbe mit Deckkraft, wie sie an den Painter übergeben wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Rot
    pub r: u8,
    /// Grün
    pub g: u8,
    /// Blau
    pub b: u8,
    /// Deckkraft in [0, 1]
    pub a: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Wandelt einen Hex-String plus Alpha in eine RGBA-Farbe um.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Result<Rgba, GuideError> {
    Ok(GuideColor::from_hex(hex)?.with_alpha(alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba_formats_channels_and_alpha() {
        let rgba = hex_to_rgba("#ff7b54", 0.5).expect("gültige Farbe");
        assert_eq!(rgba.to_string(), "rgba(255, 123, 84, 0.5)");
    }

    #[test]
    fn test_from_hex_accepts_missing_hash_and_uppercase() {
        let color = GuideColor::from_hex("4CC9F0").expect("gültige Farbe");
        assert_eq!(color.channels(), [0x4c, 0xc9, 0xf0]);
        assert_eq!(color.to_hex(), "#4cc9f0");
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(GuideColor::from_hex("#12345").is_err());
        assert!(GuideColor::from_hex("#zzzzzz").is_err());
        assert!(GuideColor::from_hex("").is_err());
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(GuideColor::WHITE.with_alpha(1.7).a, 1.0);
        assert_eq!(GuideColor::WHITE.with_alpha(-0.2).a, 0.0);
    }
}
