//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::MAX_GRIDS;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let grid_count = state.guides.grid_count();
            ui.label(format!(
                "Einträge: {} | Raster: {}/{}",
                state.guide_count(),
                grid_count,
                MAX_GRIDS
            ));

            ui.separator();

            let [width, height] = state.view.canvas_size;
            ui.label(format!("Canvas: {:.0}×{:.0}", width, height));

            ui.separator();

            match state.view.background.as_deref() {
                Some(background) => {
                    let (w, h) = background.dimensions();
                    ui.label(format!("Bild: {} ({}×{})", background.source_label(), w, h));
                }
                None => {
                    ui.label("Kein Bild geladen");
                }
            }

            if let Some(command) = state.command_log.last_user_action() {
                ui.separator();
                ui.label(format!("Zuletzt: {}", command.label()));
            }

            if let Some(drag) = state.editor.drag {
                ui.separator();
                ui.label(format!("Ziehe Raster {}", drag.target_grid_id));
            }
        });
    });
}
