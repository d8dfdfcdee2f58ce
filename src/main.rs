//! Perspective Guides.
//!
//! Perspektiv-Hilfslinien und Fluchtpunkt-Raster über einem Referenzfoto,
//! um beim Zeichnen die Perspektive zu prüfen.

use eframe::egui;
use perspective_guides::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Perspective Guides v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Perspective Guides"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Perspective Guides",
            options,
            Box::new(|_cc| Ok(Box::new(GuidesApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct GuidesApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    canvas: ui::CanvasPainter,
}

impl GuidesApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
            canvas: ui::CanvasPainter::new(),
        }
    }
}

impl eframe::App for GuidesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.canvas.sync_background(ctx, &mut self.state.view);

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events || self.state.view.background_dirty {
            ctx.request_repaint();
        }
    }
}

impl GuidesApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let available_width = ui.available_width();
            if self.state.view.available_width != Some(available_width) {
                events.push(AppIntent::AvailableWidthChanged {
                    width: available_width,
                });
            }

            events.extend(ui::collect_keyboard_intents(
                ui,
                self.state.editor.active_tool,
            ));

            let scene = self.controller.build_render_scene(&self.state);
            let [width, height] = scene.canvas_size;
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(width, height),
                egui::Sense::click_and_drag(),
            );

            self.canvas.paint(&ui.painter_at(rect), rect, &scene);
            events.extend(self.input.collect_canvas_events(ui, &response));

            ui.add_space(8.0);
            ui.label(scene.instruction);
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
