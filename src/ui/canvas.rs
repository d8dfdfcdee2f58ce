//! Canvas-Painter: zeichnet eine `RenderScene` mit dem egui-Painter.

use crate::app::ViewState;
use crate::core::Rgba;
use crate::shared::{DrawPrimitive, RenderScene, StrokeStyle};
use glam::Vec2;

/// Segmente, aus denen ein gestrichelter Kreis angenähert wird.
const CIRCLE_SEGMENTS: usize = 48;
/// Hinweistext ohne Hintergrundbild.
const PLACEHOLDER_TEXT: &str = "Referenzfoto laden oder aufnehmen";

/// Hält die Hintergrund-Textur zwischen Frames.
#[derive(Default)]
pub struct CanvasPainter {
    texture: Option<egui::TextureHandle>,
}

impl CanvasPainter {
    /// Erstellt einen Painter ohne Textur.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt das Hintergrundbild neu hoch, wenn es sich geändert hat.
    pub fn sync_background(&mut self, ctx: &egui::Context, view: &mut ViewState) {
        if !view.background_dirty {
            return;
        }
        view.background_dirty = false;

        match view.background.as_deref() {
            Some(background) => {
                let rgba = background.image_data().to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                self.texture = Some(ctx.load_texture(
                    "background_image",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
                log::info!("Hintergrundbild als Textur hochgeladen: {}x{}", size[0], size[1]);
            }
            None => {
                self.texture = None;
                log::info!("Hintergrund-Textur entfernt");
            }
        }
    }

    /// Zeichnet die Szene in `rect` (Canvas-Ursprung = `rect.min`).
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        match (&self.texture, scene.has_background()) {
            (Some(texture), true) => {
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
            }
            _ => paint_placeholder(painter, rect),
        }

        let origin = rect.min.to_vec2();
        let to_screen = |p: Vec2| egui::pos2(p.x, p.y) + origin;

        for primitive in &scene.primitives {
            match primitive {
                DrawPrimitive::Segment { from, to, stroke } => {
                    paint_segment(painter, to_screen(*from), to_screen(*to), stroke)
                }
                DrawPrimitive::Circle {
                    center,
                    radius,
                    fill,
                    stroke,
                } => paint_circle(painter, to_screen(*center), *radius, *fill, stroke.as_ref()),
            }
        }
    }
}

fn to_color32(color: Rgba) -> egui::Color32 {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

fn to_stroke(style: &StrokeStyle) -> egui::Stroke {
    egui::Stroke::new(style.width, to_color32(style.color))
}

/// Dunkler Verlauf mit Hinweistext.
fn paint_placeholder(painter: &egui::Painter, rect: egui::Rect) {
    let top = egui::Color32::from_rgb(0x11, 0x12, 0x25);
    let bottom = egui::Color32::from_rgb(0x05, 0x05, 0x07);
    let middle = egui::Color32::from_rgb(0x0b, 0x0b, 0x16);

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), middle);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), middle);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));

    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        PLACEHOLDER_TEXT,
        egui::FontId::proportional(18.0),
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 115),
    );
}

fn paint_segment(painter: &egui::Painter, from: egui::Pos2, to: egui::Pos2, style: &StrokeStyle) {
    let stroke = to_stroke(style);

    // Null-Länge: als Punkt zeichnen
    if from == to {
        painter.circle_filled(from, style.width / 2.0, stroke.color);
        return;
    }

    match style.dash {
        Some([dash, gap]) => {
            painter.extend(egui::Shape::dashed_line(&[from, to], stroke, dash, gap));
        }
        None => {
            painter.line_segment([from, to], stroke);
            // Runde Enden nur bei deckenden Linien, sonst doppelte Deckkraft
            if style.color.a >= 1.0 {
                painter.circle_filled(from, style.width / 2.0, stroke.color);
                painter.circle_filled(to, style.width / 2.0, stroke.color);
            }
        }
    }
}

fn paint_circle(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    fill: Option<Rgba>,
    stroke: Option<&StrokeStyle>,
) {
    if let Some(fill) = fill {
        painter.circle_filled(center, radius, to_color32(fill));
    }

    let Some(style) = stroke else {
        return;
    };
    match style.dash {
        Some([dash, gap]) => {
            let points: Vec<egui::Pos2> = (0..=CIRCLE_SEGMENTS)
                .map(|i| {
                    let angle = std::f32::consts::TAU * i as f32 / CIRCLE_SEGMENTS as f32;
                    center + egui::vec2(angle.cos(), angle.sin()) * radius
                })
                .collect();
            painter.extend(egui::Shape::dashed_line(&points, to_stroke(style), dash, gap));
        }
        None => {
            painter.circle_stroke(center, radius, to_stroke(style));
        }
    }
}
