//! Handler für Guide-Editing: Werkzeug, Raster, Entfernen, Einstellungen.

use crate::app::{AppState, EditorTool, ToolSettings};
use crate::core::{GridConfig, GuideId};

/// Wechselt das aktive Editor-Werkzeug und setzt laufende Gesten zurück.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.reset_gestures();
    state.editor.active_tool = tool;
    log::info!("Werkzeug gewechselt: {:?}", tool);
}

/// Legt ein Raster an. Bei voller Kapazität passiert nichts.
pub fn add_grid(state: &mut AppState, config: GridConfig) {
    match state.guides.create_grid(config) {
        Ok(id) => {
            if let Some(grid) = state.guides.grid(id) {
                log::info!(
                    "{} (ID {}) erstellt bei ({:.1}, {:.1})",
                    grid.name,
                    id,
                    grid.vanishing_point.x,
                    grid.vanishing_point.y
                );
            }
        }
        Err(e) => log::warn!("Raster nicht erstellt: {}", e),
    }
}

/// Aktualisiert die gesetzten Felder eines Rasters.
pub fn update_grid(state: &mut AppState, id: GuideId, patch: GridConfig) {
    if !state.guides.update_grid(id, &patch) {
        log::debug!("Raster {} nicht gefunden, Update ignoriert", id);
        return;
    }
    if patch.enabled == Some(false) {
        release_drag_on(state, id);
    }
    log::debug!("Raster {} aktualisiert", id);
}

/// Entfernt einen Eintrag (Radierer oder Löschen-Button).
pub fn remove_guide(state: &mut AppState, id: GuideId) {
    if state.guides.remove_guide(id) {
        release_drag_on(state, id);
        log::info!("Eintrag {} entfernt", id);
    } else {
        log::debug!("Eintrag {} nicht gefunden", id);
    }
}

/// Blendet ein Raster ein oder aus.
pub fn set_grid_enabled(state: &mut AppState, id: GuideId, enabled: bool) {
    if !state.guides.set_enabled(id, enabled) {
        log::debug!("Raster {} nicht gefunden", id);
        return;
    }
    if !enabled {
        release_drag_on(state, id);
    }
    log::info!(
        "Raster {} {}",
        id,
        if enabled { "eingeblendet" } else { "ausgeblendet" }
    );
}

/// Entfernt alle Hilfslinien und Raster samt laufender Gesten.
pub fn clear_guides(state: &mut AppState) {
    let count = state.guides.len();
    state.guides.clear();
    state.editor.reset_gestures();
    log::info!("{} Einträge entfernt", count);
}

/// Übernimmt neue Werkzeug-Einstellungen für künftige Einträge.
pub fn set_tool_settings(state: &mut AppState, settings: ToolSettings) {
    state.editor.settings = settings;
}

/// Gibt den Drag frei, falls er das Raster `id` hält.
pub(crate) fn release_drag_on(state: &mut AppState, id: GuideId) {
    if state
        .editor
        .drag
        .is_some_and(|drag| drag.target_grid_id == id)
    {
        state.editor.release_drag();
        log::debug!("Drag von Raster {} freigegeben", id);
    }
}
