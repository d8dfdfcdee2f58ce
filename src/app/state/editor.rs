use crate::app::tools::{DragState, LineTool};
use crate::core::{GridConfig, GuideColor, LineStyle};
use crate::shared::EditorOptions;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Zwei Taps erzeugen eine Hilfslinie
    #[default]
    Line,
    /// Tap platziert ein Raster, Handles können gezogen werden
    Grid,
    /// Tap entfernt den obersten getroffenen Eintrag
    Eraser,
}

impl EditorTool {
    /// Alle Werkzeuge in Toolbar-Reihenfolge.
    pub const ALL: [EditorTool; 3] = [EditorTool::Line, EditorTool::Grid, EditorTool::Eraser];

    /// Anzeigename für die Toolbar.
    pub fn label(self) -> &'static str {
        match self {
            EditorTool::Line => "Linie",
            EditorTool::Grid => "Raster",
            EditorTool::Eraser => "Radierer",
        }
    }

    /// Hinweistext unter dem Canvas.
    pub fn instruction(self) -> &'static str {
        match self {
            EditorTool::Line => {
                "Einmal tippen für den Anfang einer Hilfslinie, dann erneut tippen für das Ende."
            }
            EditorTool::Grid => {
                "Dort tippen, wo der Fluchtpunkt liegen soll. Vorhandene Fluchtpunkte lassen sich ziehen."
            }
            EditorTool::Eraser => {
                "Eine Hilfslinie oder einen Fluchtpunkt antippen, um sie zu entfernen. Rückgängig geht auch."
            }
        }
    }
}

/// Aktuelle Werkzeug-Einstellungen (Farbe, Stärke, Raster-Parameter).
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    /// Farbe für neue Linien und Raster
    pub color: GuideColor,
    /// Linienstärke neuer Hilfslinien
    pub line_width: f32,
    /// Density neuer Raster
    pub grid_density: u32,
    /// Anzahl Tiefenlinien neuer Raster
    pub grid_depth: u32,
    /// Tiefenlinien-Abstand neuer Raster
    pub grid_spacing: f32,
    /// Linienstärke neuer Raster
    pub grid_thickness: f32,
    /// Deckkraft neuer Raster
    pub grid_opacity: f32,
}

impl ToolSettings {
    /// Startwerte aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            color: options.default_color,
            line_width: options.default_line_width,
            grid_density: options.default_grid_density,
            grid_depth: options.default_grid_depth,
            grid_spacing: options.default_grid_spacing,
            grid_thickness: options.default_grid_thickness,
            grid_opacity: options.default_grid_opacity,
        }
    }

    /// Stil für neue Hilfslinien.
    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            color: self.color,
            width: self.line_width,
        }
    }

    /// Vorlage für neue Raster (Name bleibt automatisch).
    pub fn grid_template(&self) -> GridConfig {
        GridConfig {
            color: Some(self.color),
            density: Some(self.grid_density),
            depth: Some(self.grid_depth),
            spacing: Some(self.grid_spacing),
            thickness: Some(self.grid_thickness),
            opacity: Some(self.grid_opacity),
            ..GridConfig::default()
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Zwei-Tap-Linienwerkzeug
    pub line_tool: LineTool,
    /// Aktiver Handle-Drag (höchstens einer)
    pub drag: Option<DragState>,
    /// Einstellungen für neue Einträge
    pub settings: ToolSettings,
}

impl EditorToolState {
    /// Erstellt den Werkzeugzustand mit Einstellungen aus den Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            active_tool: EditorTool::Line,
            line_tool: LineTool::new(),
            drag: None,
            settings: ToolSettings::from_options(options),
        }
    }

    /// Gibt den Drag frei. Gibt den freigegebenen Drag zurück.
    pub fn release_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Setzt alle laufenden Gesten zurück (Linie + Drag).
    pub fn reset_gestures(&mut self) {
        self.line_tool.cancel();
        self.drag = None;
    }
}
