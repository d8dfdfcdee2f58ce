//! Properties-Panel (rechte Seitenleiste): Werkzeug-Einstellungen und Raster-Liste.

use crate::app::{AppIntent, AppState, EditorTool};
use crate::core::{GridConfig, GuideColor, PerspectiveGrid};

const DENSITY_RANGE: std::ops::RangeInclusive<u32> = 4..=48;
const DEPTH_RANGE: std::ops::RangeInclusive<u32> = 0..=16;
const SPACING_RANGE: std::ops::RangeInclusive<f32> = 20.0..=200.0;
const THICKNESS_RANGE: std::ops::RangeInclusive<f32> = 1.0..=8.0;
const OPACITY_RANGE: std::ops::RangeInclusive<f32> = 0.1..=1.0;
const LINE_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 1.0..=12.0;

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(230.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Einstellungen");
            ui.separator();

            render_tool_settings(ui, state, &mut events);

            ui.separator();
            ui.heading("Raster");

            egui::ScrollArea::vertical().show(ui, |ui| {
                let mut any_grid = false;
                for grid in state.guides.grids() {
                    any_grid = true;
                    render_grid_entry(ui, grid, &mut events);
                }
                if !any_grid {
                    ui.label("Keine Raster");
                }
            });
        });

    events
}

fn color_picker(ui: &mut egui::Ui, color: &mut GuideColor) -> bool {
    let mut rgb = color.channels();
    let changed = ui.color_edit_button_srgb(&mut rgb).changed();
    if changed {
        *color = GuideColor::rgb(rgb[0], rgb[1], rgb[2]);
    }
    changed
}

fn render_tool_settings(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut settings = state.editor.settings.clone();

    ui.horizontal(|ui| {
        ui.label("Farbe:");
        color_picker(ui, &mut settings.color);
    });

    match state.editor.active_tool {
        EditorTool::Line => {
            ui.add(egui::Slider::new(&mut settings.line_width, LINE_WIDTH_RANGE).text("Stärke"));
        }
        EditorTool::Grid => {
            ui.add(egui::Slider::new(&mut settings.grid_density, DENSITY_RANGE).text("Dichte"));
            ui.add(egui::Slider::new(&mut settings.grid_depth, DEPTH_RANGE).text("Tiefe"));
            ui.add(egui::Slider::new(&mut settings.grid_spacing, SPACING_RANGE).text("Abstand"));
            ui.add(
                egui::Slider::new(&mut settings.grid_thickness, THICKNESS_RANGE).text("Stärke"),
            );
            ui.add(
                egui::Slider::new(&mut settings.grid_opacity, OPACITY_RANGE).text("Deckkraft"),
            );
        }
        EditorTool::Eraser => {
            ui.label("Keine Einstellungen");
        }
    }

    if settings != state.editor.settings {
        events.push(AppIntent::ToolSettingsChanged { settings });
    }
}

fn render_grid_entry(ui: &mut egui::Ui, grid: &PerspectiveGrid, events: &mut Vec<AppIntent>) {
    let mut edited = grid.clone();

    egui::CollapsingHeader::new(grid.name.as_str())
        .id_salt(grid.id)
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.checkbox(&mut edited.enabled, "Sichtbar").changed() {
                    events.push(AppIntent::SetGridEnabledRequested {
                        id: grid.id,
                        enabled: edited.enabled,
                    });
                }
                color_picker(ui, &mut edited.color);
                if ui.small_button("🗑").on_hover_text("Raster löschen").clicked() {
                    events.push(AppIntent::RemoveGuideRequested { id: grid.id });
                }
            });

            ui.label(format!(
                "Fluchtpunkt: ({:.0}, {:.0})",
                grid.vanishing_point.x, grid.vanishing_point.y
            ));
            ui.add(egui::Slider::new(&mut edited.density, DENSITY_RANGE).text("Dichte"));
            ui.add(egui::Slider::new(&mut edited.depth, DEPTH_RANGE).text("Tiefe"));
            ui.add(egui::Slider::new(&mut edited.spacing, SPACING_RANGE).text("Abstand"));
            ui.add(egui::Slider::new(&mut edited.thickness, THICKNESS_RANGE).text("Stärke"));
            ui.add(egui::Slider::new(&mut edited.opacity, OPACITY_RANGE).text("Deckkraft"));
        });

    if let Some(patch) = grid_patch(grid, &edited) {
        events.push(AppIntent::UpdateGridRequested { id: grid.id, patch });
    }
}

/// Teil-Update mit genau den Feldern, die sich im Panel geändert haben.
///
/// `enabled` läuft separat über `SetGridEnabledRequested`.
fn grid_patch(before: &PerspectiveGrid, after: &PerspectiveGrid) -> Option<GridConfig> {
    fn changed<T: PartialEq + Clone>(old: &T, new: &T) -> Option<T> {
        (old != new).then(|| new.clone())
    }

    let patch = GridConfig {
        color: changed(&before.color, &after.color),
        density: changed(&before.density, &after.density),
        depth: changed(&before.depth, &after.depth),
        spacing: changed(&before.spacing, &after.spacing),
        thickness: changed(&before.thickness, &after.thickness),
        opacity: changed(&before.opacity, &after.opacity),
        ..GridConfig::default()
    };

    (patch != GridConfig::default()).then_some(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuideSet;
    use glam::Vec2;

    fn sample_grid() -> PerspectiveGrid {
        let mut set = GuideSet::new();
        let id = set
            .create_grid(GridConfig::at(Vec2::new(10.0, 10.0)))
            .expect("Raster erwartet");
        set.grid(id).cloned().expect("Raster erwartet")
    }

    #[test]
    fn test_unchanged_grid_yields_no_patch() {
        let grid = sample_grid();
        assert_eq!(grid_patch(&grid, &grid.clone()), None);
    }

    #[test]
    fn test_patch_contains_only_changed_fields() {
        let grid = sample_grid();
        let edited = PerspectiveGrid {
            density: 30,
            opacity: 0.5,
            ..grid.clone()
        };

        let patch = grid_patch(&grid, &edited).expect("Patch erwartet");
        assert_eq!(patch.density, Some(30));
        assert_eq!(patch.opacity, Some(0.5));
        assert_eq!(patch.color, None);
        assert_eq!(patch.vanishing_point, None);
    }
}
