//! Zentrale Konfiguration für den Perspektiv-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::guide::{
    DEFAULT_GRID_DENSITY, DEFAULT_GRID_DEPTH, DEFAULT_GRID_OPACITY, DEFAULT_GRID_SPACING,
    DEFAULT_GRID_THICKNESS,
};
use crate::core::{DepthLinePolicy, GuideColor, GRID_PALETTE};
use serde::{Deserialize, Serialize};

// ── Hit-Test ────────────────────────────────────────────────────────

/// Radius (Pixel), innerhalb dessen der Radierer eine Linie trifft.
pub const LINE_ERASE_RADIUS: f32 = 20.0;
/// Radius (Pixel), innerhalb dessen der Radierer einen Fluchtpunkt trifft.
pub const HANDLE_ERASE_RADIUS: f32 = 30.0;
/// Radius (Pixel), innerhalb dessen ein Handle gegriffen wird.
pub const HANDLE_GRAB_RADIUS: f32 = 18.0;

// ── Handles & Marker ────────────────────────────────────────────────

/// Zeichen-Radius des Fluchtpunkt-Handles.
pub const HANDLE_RADIUS: f32 = 10.0;
/// Unterer Rand, den ein gezogener Fluchtpunkt nicht unterschreitet.
pub const DRAG_BOTTOM_MARGIN: f32 = 20.0;
/// Radius des gestrichelten Markers für den Linien-Startpunkt.
pub const PENDING_MARKER_RADIUS: f32 = 8.0;

// ── Canvas ──────────────────────────────────────────────────────────

/// Maximale Canvas-Breite nach dem Laden eines Bildes.
pub const CANVAS_MAX_WIDTH: f32 = 900.0;
/// Horizontaler Rand, der von der verfügbaren Breite abgezogen wird.
pub const CANVAS_MARGIN: f32 = 32.0;
/// Canvas-Größe ohne Hintergrundbild.
pub const CANVAS_DEFAULT_SIZE: [f32; 2] = [900.0, 600.0];

// ── Linien-Werkzeug ─────────────────────────────────────────────────

/// Standard-Linienstärke neuer Hilfslinien.
pub const LINE_WIDTH_DEFAULT: f32 = 3.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `perspective_guides.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Hit-Test ────────────────────────────────────────────────
    /// Radierer-Trefferradius für Linien
    pub line_erase_radius: f32,
    /// Radierer-Trefferradius für Fluchtpunkte
    pub handle_erase_radius: f32,
    /// Greif-Radius für Fluchtpunkt-Handles
    pub handle_grab_radius: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Zeichen-Radius der Handles
    pub handle_radius: f32,
    /// Unterer Rand beim Ziehen eines Fluchtpunkts
    pub drag_bottom_margin: f32,
    /// Radius des Startpunkt-Markers
    pub pending_marker_radius: f32,
    /// Verteilung der Tiefenlinien
    pub depth_policy: DepthLinePolicy,

    // ── Werkzeug-Standardwerte ──────────────────────────────────
    /// Startfarbe für Linien und Raster
    pub default_color: GuideColor,
    /// Startstärke für Linien
    pub default_line_width: f32,
    /// Start-Density für neue Raster
    pub default_grid_density: u32,
    /// Start-Anzahl Tiefenlinien für neue Raster
    pub default_grid_depth: u32,
    /// Start-Abstand der Tiefenlinien
    pub default_grid_spacing: f32,
    /// Start-Linienstärke für neue Raster
    pub default_grid_thickness: f32,
    /// Start-Deckkraft für neue Raster
    pub default_grid_opacity: f32,

    // ── Canvas ──────────────────────────────────────────────────
    /// Maximale Canvas-Breite nach dem Laden eines Bildes
    pub canvas_max_width: f32,
    /// Horizontaler Rand (von verfügbarer Breite abgezogen)
    pub canvas_margin: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            line_erase_radius: LINE_ERASE_RADIUS,
            handle_erase_radius: HANDLE_ERASE_RADIUS,
            handle_grab_radius: HANDLE_GRAB_RADIUS,

            handle_radius: HANDLE_RADIUS,
            drag_bottom_margin: DRAG_BOTTOM_MARGIN,
            pending_marker_radius: PENDING_MARKER_RADIUS,
            depth_policy: DepthLinePolicy::FadedCount,

            default_color: GRID_PALETTE[0],
            default_line_width: LINE_WIDTH_DEFAULT,
            default_grid_density: DEFAULT_GRID_DENSITY,
            default_grid_depth: DEFAULT_GRID_DEPTH,
            default_grid_spacing: DEFAULT_GRID_SPACING,
            default_grid_thickness: DEFAULT_GRID_THICKNESS,
            default_grid_opacity: DEFAULT_GRID_OPACITY,

            canvas_max_width: CANVAS_MAX_WIDTH,
            canvas_margin: CANVAS_MARGIN,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("perspective_guides"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("perspective_guides.toml")
    }

    /// Maximale Canvas-Breite bei gegebener verfügbarer Fensterbreite.
    ///
    /// `min(available_width - canvas_margin, canvas_max_width)`
    pub fn canvas_width_limit(&self, available_width: f32) -> f32 {
        (available_width - self.canvas_margin).min(self.canvas_max_width)
    }
}
