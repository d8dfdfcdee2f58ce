//! Toolbar für Werkzeugauswahl und Sitzungs-Aktionen.

use crate::app::{AppIntent, AppState, EditorTool};
use crate::core::MAX_GRIDS;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            for (index, tool) in EditorTool::ALL.into_iter().enumerate() {
                let label = format!("{} ({})", tool.label(), index + 1);
                if ui
                    .add(egui::Button::new(label).selected(active == tool))
                    .clicked()
                    && active != tool
                {
                    events.push(AppIntent::SetEditorToolRequested { tool });
                }
            }

            ui.separator();

            if ui
                .add_enabled(state.can_add_grid(), egui::Button::new("➕ Raster"))
                .on_disabled_hover_text(format!("Maximal {} Raster", MAX_GRIDS))
                .clicked()
            {
                events.push(AppIntent::AddGridRequested);
            }

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶ Rückgängig"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }

            let has_guides = !state.guides.is_empty() || state.editor.line_tool.is_armed();
            if ui
                .add_enabled(has_guides, egui::Button::new("Hilfslinien löschen"))
                .clicked()
            {
                events.push(AppIntent::ClearGuidesRequested);
            }

            ui.separator();

            if ui.button("📷 Foto öffnen…").clicked() {
                events.push(AppIntent::OpenImageRequested);
            }

            let has_image = state.view.background.is_some();
            if ui
                .add_enabled(has_image || has_guides, egui::Button::new("Bild entfernen"))
                .clicked()
            {
                events.push(AppIntent::ClearImageRequested);
            }
        });
    });

    events
}
