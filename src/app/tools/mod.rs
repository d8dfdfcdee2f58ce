//! Canvas-Werkzeuge: Linie, Raster platzieren, Radierer, Handle-Drag.
//!
//! Werkzeuge erzeugen reine Daten (`ToolResult`), die Mutation des
//! GuideSets erfolgt zentral im Pointer-Handler.

/// Radierer: Hit-Test in umgekehrter Einfüge-Reihenfolge.
pub mod eraser;
/// Raster platzieren per Tap (bzw. Handle greifen).
pub mod grid_place;
/// Fluchtpunkt-Handles greifen und ziehen (Pointer-Capture).
pub mod handle_drag;
/// Zwei-Tap-Linienwerkzeug.
pub mod line;

pub use handle_drag::DragState;
pub use line::{LinePhase, LineTool};

use crate::core::{GridConfig, GuideId};
use glam::Vec2;

/// Ergebnis eines Taps (reine Daten, keine Mutation).
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResult {
    /// Nichts zu tun (kein Treffer, oder Geste läuft weiter)
    Nothing,
    /// Linien-Startpunkt gesetzt, zweiter Tap ausstehend
    LineArmed { start: Vec2 },
    /// Neue Hilfslinie anlegen
    CreateLine { start: Vec2, end: Vec2 },
    /// Neues Raster anlegen
    CreateGrid { config: GridConfig },
    /// Eintrag entfernen
    Remove { id: GuideId },
    /// Drag auf einem Raster-Handle beginnen
    BeginDrag { grid_id: GuideId },
}
