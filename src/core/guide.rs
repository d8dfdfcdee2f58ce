//! Datenmodell der Hilfslinien: einzelne Linien und Fluchtpunkt-Raster.

use super::GuideColor;
use glam::Vec2;

/// Intern vergebene ID einer Hilfslinie oder eines Rasters.
pub type GuideId = u64;

/// Maximale Anzahl gleichzeitig existierender Raster.
pub const MAX_GRIDS: usize = 3;

/// Standard-Anzahl Fächerlinien eines Rasters.
pub const DEFAULT_GRID_DENSITY: u32 = 18;
/// Minimale Anzahl Fächer-Schritte (auch bei kleinerer Density).
pub const MIN_GRID_STEPS: u32 = 4;
/// Standard-Anzahl Tiefenlinien (Policy mit fester Anzahl).
pub const DEFAULT_GRID_DEPTH: u32 = 6;
/// Standard-Abstand der Tiefenlinien in Pixeln (Policy mit festem Abstand).
pub const DEFAULT_GRID_SPACING: f32 = 80.0;
/// Standard-Linienstärke eines Rasters.
pub const DEFAULT_GRID_THICKNESS: f32 = 2.0;
/// Standard-Deckkraft eines Rasters.
pub const DEFAULT_GRID_OPACITY: f32 = 0.85;

/// Automatische Raster-Namen, vergeben nach erstem freien Eintrag.
pub const GRID_LABELS: [&str; MAX_GRIDS] = ["Grid A", "Grid B", "Grid C"];

/// Stil einer Hilfslinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Linienfarbe
    pub color: GuideColor,
    /// Linienstärke in Pixeln
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: GuideColor::default(),
            width: 3.0,
        }
    }
}

/// Einzelne gerade Referenzlinie.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGuide {
    /// Eindeutige ID
    pub id: GuideId,
    /// Startpunkt (Canvas-Pixel)
    pub start: Vec2,
    /// Endpunkt (Canvas-Pixel)
    pub end: Vec2,
    /// Farbe und Stärke
    pub style: LineStyle,
}

impl LineGuide {
    /// Null-Länge-Linien werden als Punkt gezeichnet.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Fluchtpunkt-Raster: Fächerlinien plus Tiefenlinien.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveGrid {
    /// Eindeutige ID
    pub id: GuideId,
    /// Anzeigename ("Grid A" …)
    pub name: String,
    /// Linien- und Handle-Farbe
    pub color: GuideColor,
    /// Nur aktive Raster werden gezeichnet und getroffen
    pub enabled: bool,
    /// Fluchtpunkt (Canvas-Pixel)
    pub vanishing_point: Vec2,
    /// Anzahl Fächerlinien (mindestens 4 Schritte beim Zeichnen)
    pub density: u32,
    /// Anzahl Tiefenlinien (Policy mit fester Anzahl)
    pub depth: u32,
    /// Abstand der Tiefenlinien in Pixeln (Policy mit festem Abstand)
    pub spacing: f32,
    /// Linienstärke
    pub thickness: f32,
    /// Deckkraft in [0, 1]
    pub opacity: f32,
}

/// Teil-Konfiguration eines Rasters.
///
/// Beim Erstellen werden fehlende Felder mit Standardwerten belegt,
/// beim Aktualisieren bleiben fehlende Felder unverändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridConfig {
    pub name: Option<String>,
    pub color: Option<GuideColor>,
    pub enabled: Option<bool>,
    pub vanishing_point: Option<Vec2>,
    pub density: Option<u32>,
    pub depth: Option<u32>,
    pub spacing: Option<f32>,
    pub thickness: Option<f32>,
    pub opacity: Option<f32>,
}

impl GridConfig {
    /// Konfiguration mit gesetztem Fluchtpunkt, alle anderen Felder offen.
    pub fn at(vanishing_point: Vec2) -> Self {
        Self {
            vanishing_point: Some(vanishing_point),
            ..Self::default()
        }
    }

    /// Überschreibt nur die gesetzten Felder des Rasters.
    pub(crate) fn apply_to(&self, grid: &mut PerspectiveGrid) {
        if let Some(name) = &self.name {
            grid.name.clone_from(name);
        }
        if let Some(color) = self.color {
            grid.color = color;
        }
        if let Some(enabled) = self.enabled {
            grid.enabled = enabled;
        }
        if let Some(point) = self.vanishing_point {
            grid.vanishing_point = point;
        }
        if let Some(density) = self.density {
            grid.density = density;
        }
        if let Some(depth) = self.depth {
            grid.depth = depth;
        }
        if let Some(spacing) = self.spacing {
            grid.spacing = spacing;
        }
        if let Some(thickness) = self.thickness {
            grid.thickness = thickness;
        }
        if let Some(opacity) = self.opacity {
            grid.opacity = opacity;
        }
    }
}

/// Eintrag im GuideSet.
#[derive(Debug, Clone, PartialEq)]
pub enum Guide {
    /// Gerade Hilfslinie
    Line(LineGuide),
    /// Fluchtpunkt-Raster
    Grid(PerspectiveGrid),
}

impl Guide {
    /// ID des Eintrags.
    pub fn id(&self) -> GuideId {
        match self {
            Guide::Line(line) => line.id,
            Guide::Grid(grid) => grid.id,
        }
    }

    /// Gibt das Raster zurück, falls der Eintrag eines ist.
    pub fn as_grid(&self) -> Option<&PerspectiveGrid> {
        match self {
            Guide::Grid(grid) => Some(grid),
            Guide::Line(_) => None,
        }
    }

    /// Gibt die Linie zurück, falls der Eintrag eine ist.
    pub fn as_line(&self) -> Option<&LineGuide> {
        match self {
            Guide::Line(line) => Some(line),
            Guide::Grid(_) => None,
        }
    }
}
