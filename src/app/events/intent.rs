use super::super::state::{EditorTool, ToolSettings};
use super::PointerEvent;
use crate::core::{BackgroundImage, GridConfig, GuideId};
use std::sync::Arc;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer-Event auf dem Canvas (oder gecaptured außerhalb)
    PointerInput { event: PointerEvent },
    /// Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Rückgängig (Button oder Ctrl+Z)
    UndoRequested,
    /// Angefangene Linie abbrechen (Escape)
    CancelRequested,
    /// Alle Hilfslinien entfernen
    ClearGuidesRequested,
    /// Hintergrundbild und alle Hilfslinien entfernen
    ClearImageRequested,
    /// Raster per Button hinzufügen (Canvas-Mitte)
    AddGridRequested,
    /// Raster-Einstellungen geändert (nur gesetzte Felder)
    UpdateGridRequested { id: GuideId, patch: GridConfig },
    /// Eintrag gezielt löschen
    RemoveGuideRequested { id: GuideId },
    /// Raster ein-/ausblenden
    SetGridEnabledRequested { id: GuideId, enabled: bool },
    /// Bild-Auswahldialog öffnen
    OpenImageRequested,
    /// Bilddatei wurde im Dialog gewählt
    BackgroundImageSelected { path: String },
    /// Fertig dekodiertes Standbild (z.B. Kamera) liegt vor
    BackgroundImageReady { image: Arc<BackgroundImage> },
    /// Verfügbare Breite des Host-Fensters hat sich geändert
    AvailableWidthChanged { width: f32 },
    /// Werkzeug-Einstellungen (Farbe, Stärke, Density …) geändert
    ToolSettingsChanged { settings: ToolSettings },
    /// Anwendung beenden
    ExitRequested,
}
