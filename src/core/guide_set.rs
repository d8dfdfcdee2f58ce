//! Das GuideSet: geordnete Sammlung aller Hilfslinien und Raster einer Sitzung.

use super::guide::{
    DEFAULT_GRID_DENSITY, DEFAULT_GRID_DEPTH, DEFAULT_GRID_OPACITY, DEFAULT_GRID_SPACING,
    DEFAULT_GRID_THICKNESS, GRID_LABELS,
};
use super::{
    Guide, GuideError, GuideId, GridConfig, LineGuide, LineStyle, PerspectiveGrid, GRID_PALETTE,
    MAX_GRIDS,
};
use glam::Vec2;
use indexmap::IndexMap;

/// Container für alle Guides.
///
/// Einfüge-Reihenfolge = Z-Reihenfolge = Zeichen-Reihenfolge.
#[derive(Debug, Clone)]
pub struct GuideSet {
    /// Alle Einträge, indexiert nach ID, in Einfüge-Reihenfolge
    guides: IndexMap<GuideId, Guide>,
    /// Nächste zu vergebende ID
    next_id: GuideId,
    /// Anzahl bisher erstellter Raster (für Farb-Round-Robin)
    grids_created: usize,
}

impl GuideSet {
    /// Erstellt ein leeres GuideSet.
    pub fn new() -> Self {
        Self {
            guides: IndexMap::new(),
            next_id: 1,
            grids_created: 0,
        }
    }

    fn allocate_id(&mut self) -> GuideId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Legt eine neue Hilfslinie an. Keine geometrische Validierung.
    pub fn create_line_guide(&mut self, start: Vec2, end: Vec2, style: LineStyle) -> GuideId {
        let id = self.allocate_id();
        self.guides.insert(
            id,
            Guide::Line(LineGuide {
                id,
                start,
                end,
                style,
            }),
        );
        id
    }

    /// Legt ein neues Raster an.
    ///
    /// Fehlende Felder werden mit Standardwerten belegt. Schlägt fehl, wenn
    /// bereits [`MAX_GRIDS`] Raster existieren; der Zustand bleibt dann unverändert.
    pub fn create_grid(&mut self, config: GridConfig) -> Result<GuideId, GuideError> {
        if self.is_at_capacity() {
            return Err(GuideError::CapacityExceeded { max: MAX_GRIDS });
        }

        let name = config.name.clone().unwrap_or_else(|| self.free_grid_label());
        let color = config
            .color
            .unwrap_or(GRID_PALETTE[self.grids_created % GRID_PALETTE.len()]);

        let id = self.allocate_id();
        let mut grid = PerspectiveGrid {
            id,
            name,
            color,
            enabled: true,
            vanishing_point: Vec2::ZERO,
            density: DEFAULT_GRID_DENSITY,
            depth: DEFAULT_GRID_DEPTH,
            spacing: DEFAULT_GRID_SPACING,
            thickness: DEFAULT_GRID_THICKNESS,
            opacity: DEFAULT_GRID_OPACITY,
        };
        config.apply_to(&mut grid);

        self.guides.insert(id, Guide::Grid(grid));
        self.grids_created += 1;
        Ok(id)
    }

    /// Erster Raster-Name, der aktuell nicht vergeben ist.
    fn free_grid_label(&self) -> String {
        GRID_LABELS
            .iter()
            .find(|label| !self.grids().any(|grid| grid.name == **label))
            .map_or_else(
                || format!("Grid {}", self.grid_count() + 1),
                |label| (*label).to_string(),
            )
    }

    /// Aktualisiert nur die gesetzten Felder eines Rasters.
    ///
    /// Unbekannte IDs und IDs von Linien sind ein stiller No-Op (`false`).
    pub fn update_grid(&mut self, id: GuideId, patch: &GridConfig) -> bool {
        match self.guides.get_mut(&id) {
            Some(Guide::Grid(grid)) => {
                patch.apply_to(grid);
                true
            }
            _ => false,
        }
    }

    /// Verschiebt den Fluchtpunkt eines Rasters.
    pub fn set_vanishing_point(&mut self, id: GuideId, point: Vec2) -> bool {
        match self.guides.get_mut(&id) {
            Some(Guide::Grid(grid)) => {
                grid.vanishing_point = point;
                true
            }
            _ => false,
        }
    }

    /// Aktiviert/deaktiviert ein Raster (Zeichnen + Hit-Test), ohne es zu löschen.
    pub fn set_enabled(&mut self, id: GuideId, enabled: bool) -> bool {
        match self.guides.get_mut(&id) {
            Some(Guide::Grid(grid)) => {
                grid.enabled = enabled;
                true
            }
            _ => false,
        }
    }

    /// Entfernt einen Eintrag. Gibt zurück, ob etwas entfernt wurde.
    pub fn remove_guide(&mut self, id: GuideId) -> bool {
        // shift_remove erhält die Reihenfolge der übrigen Einträge
        self.guides.shift_remove(&id).is_some()
    }

    /// Entfernt den zuletzt hinzugefügten Eintrag (Stack-Pop).
    pub fn pop_last(&mut self) -> Option<Guide> {
        self.guides.pop().map(|(_, guide)| guide)
    }

    /// Entfernt alle Einträge.
    pub fn clear(&mut self) {
        self.guides.clear();
    }

    /// Gibt einen Eintrag per ID zurück.
    pub fn get(&self, id: GuideId) -> Option<&Guide> {
        self.guides.get(&id)
    }

    /// Gibt ein Raster per ID zurück.
    pub fn grid(&self, id: GuideId) -> Option<&PerspectiveGrid> {
        self.get(id).and_then(Guide::as_grid)
    }

    /// Iteriert in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Guide> {
        self.guides.values()
    }

    /// Iteriert über alle Raster in Einfüge-Reihenfolge.
    pub fn grids(&self) -> impl Iterator<Item = &PerspectiveGrid> {
        self.guides.values().filter_map(Guide::as_grid)
    }

    /// Anzahl aller Einträge.
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    /// Anzahl der Raster (aktiv und inaktiv).
    pub fn grid_count(&self) -> usize {
        self.grids().count()
    }

    /// Gibt `true` zurück, wenn keine weiteren Raster erstellt werden können.
    pub fn is_at_capacity(&self) -> bool {
        self.grid_count() >= MAX_GRIDS
    }
}

impl Default for GuideSet {
    fn default() -> Self {
        Self::new()
    }
}
