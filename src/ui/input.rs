//! Umrechnung von egui-Pointer-Events in Canvas-Koordinaten.
//!
//! egui liefert genau einen Pointer (Maus oder erster Finger), daher ID 0.
//! Pointer-Downs zählen nur innerhalb des Canvas und nur, wenn keine andere
//! Ebene (Popup, Fenster) darüber liegt. Moves und Ups werden nach einem Down
//! überall weitergereicht, damit ein Drag den Pointer behält.

use crate::app::{AppIntent, PointerEvent, PointerPhase};
use glam::Vec2;

/// Pointer-ID des egui-Pointers.
pub const PRIMARY_POINTER_ID: u64 = 0;

/// Input-Zustand über Frames hinweg.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde innerhalb des Canvas gedrückt und ist noch unten
    primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Pointer-Intents dieses Frames für den Canvas-Widget `response`.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        // Hit-Test von egui: false, wenn eine andere Ebene den Canvas verdeckt
        let canvas_on_top = response.contains_pointer() || response.is_pointer_button_down_on();
        let raw_events = ui.input(|i| i.events.clone());
        self.convert_events(&raw_events, response.rect, canvas_on_top)
    }

    fn convert_events(
        &mut self,
        raw_events: &[egui::Event],
        canvas_rect: egui::Rect,
        canvas_on_top: bool,
    ) -> Vec<AppIntent> {
        let to_canvas = |pos: egui::Pos2| {
            Vec2::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y)
        };
        let mut events = Vec::new();

        for event in raw_events {
            let converted = match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    if !canvas_on_top || !canvas_rect.contains(*pos) {
                        continue;
                    }
                    self.primary_down = true;
                    PointerEvent::new(PointerPhase::Down, to_canvas(*pos), PRIMARY_POINTER_ID)
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    if !std::mem::take(&mut self.primary_down) {
                        continue;
                    }
                    PointerEvent::new(PointerPhase::Up, to_canvas(*pos), PRIMARY_POINTER_ID)
                }
                egui::Event::PointerMoved(pos) if self.primary_down => {
                    PointerEvent::new(PointerPhase::Move, to_canvas(*pos), PRIMARY_POINTER_ID)
                }
                egui::Event::PointerGone if self.primary_down => {
                    self.primary_down = false;
                    PointerEvent::new(PointerPhase::Cancel, Vec2::ZERO, PRIMARY_POINTER_ID)
                }
                _ => continue,
            };
            events.push(AppIntent::PointerInput { event: converted });
        }

        events
    }
}
