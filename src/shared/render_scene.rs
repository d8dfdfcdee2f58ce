//! Render-Szene als expliziter Übergabevertrag zwischen App und Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use crate::core::{BackgroundImage, Rgba};
use glam::Vec2;
use std::sync::Arc;

/// Strichmuster: sichtbare Länge, Lücke (Pixel).
pub type DashPattern = [f32; 2];

/// Strich-Stil eines Primitivs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Farbe inkl. Deckkraft
    pub color: Rgba,
    /// Strichstärke in Pixeln
    pub width: f32,
    /// Optionales Strichmuster (None = durchgezogen)
    pub dash: Option<DashPattern>,
}

impl StrokeStyle {
    /// Durchgezogener Strich.
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// Gestrichelter Strich.
    pub fn dashed(color: Rgba, width: f32, dash: DashPattern) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

/// Zeichen-Primitiv in Canvas-Pixeln.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// Liniensegment (Start == Ende wird als Punkt gezeichnet)
    Segment {
        from: Vec2,
        to: Vec2,
        stroke: StrokeStyle,
    },
    /// Kreis mit optionaler Füllung und optionalem Rand
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Rgba>,
        stroke: Option<StrokeStyle>,
    },
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Hintergrundbild (None = Platzhalter zeichnen)
    pub background: Option<Arc<BackgroundImage>>,
    /// Alle Primitive in Zeichen-Reihenfolge
    pub primitives: Vec<DrawPrimitive>,
    /// Hinweistext zum aktiven Werkzeug
    pub instruction: &'static str,
}

impl RenderScene {
    /// Gibt zurück, ob ein Hintergrundbild vorhanden ist.
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Anzahl der Segment-Primitive.
    pub fn segment_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Segment { .. }))
            .count()
    }

    /// Alle Kreis-Primitive (Handles und Marker).
    pub fn circles(&self) -> impl Iterator<Item = &DrawPrimitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Circle { .. }))
    }
}
