use super::super::state::{EditorTool, ToolSettings};
use crate::core::{BackgroundImage, GridConfig, GuideId};
use glam::Vec2;
use std::sync::Arc;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Pointer gedrückt (Tap des aktiven Werkzeugs)
    PointerDown { pos: Vec2, pointer_id: u64 },
    /// Pointer bewegt (nur relevant für den aktiven Drag)
    PointerMove { pos: Vec2, pointer_id: u64 },
    /// Pointer losgelassen
    PointerUp { pointer_id: u64 },
    /// Pointer vom System abgebrochen
    PointerCancel { pointer_id: u64 },
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Einen Schritt rückgängig machen
    Undo,
    /// Angefangene Linien-Geste verwerfen
    CancelLineGesture,
    /// Alle Hilfslinien entfernen
    ClearGuides,
    /// Hintergrundbild entfernen
    ClearBackground,
    /// Raster mit Konfiguration anlegen
    AddGrid { config: GridConfig },
    /// Raster teilweise aktualisieren
    UpdateGrid { id: GuideId, patch: GridConfig },
    /// Eintrag entfernen
    RemoveGuide { id: GuideId },
    /// Raster aktivieren/deaktivieren
    SetGridEnabled { id: GuideId, enabled: bool },
    /// Bild-Auswahldialog anfordern
    RequestOpenImageDialog,
    /// Bilddatei laden und als Hintergrund setzen
    LoadBackgroundImage { path: String },
    /// Fertiges Bild als Hintergrund setzen
    SetBackground { image: Arc<BackgroundImage> },
    /// Verfügbare Breite übernehmen und Canvas neu einpassen
    SetAvailableWidth { width: f32 },
    /// Werkzeug-Einstellungen übernehmen
    SetToolSettings { settings: ToolSettings },
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// `true` für Befehle, die der Nutzer bewusst auslöst (keine Pointer-Bewegung, kein Layout).
    pub fn is_user_action(&self) -> bool {
        !matches!(
            self,
            Self::PointerMove { .. }
                | Self::PointerUp { .. }
                | Self::PointerCancel { .. }
                | Self::SetAvailableWidth { .. }
        )
    }

    /// Kurzbezeichnung für die Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "Tippen",
            Self::PointerMove { .. } => "Pointer bewegt",
            Self::PointerUp { .. } => "Pointer losgelassen",
            Self::PointerCancel { .. } => "Pointer abgebrochen",
            Self::SetEditorTool { .. } => "Werkzeug gewechselt",
            Self::Undo => "Rückgängig",
            Self::CancelLineGesture => "Linie verworfen",
            Self::ClearGuides => "Hilfslinien gelöscht",
            Self::ClearBackground => "Bild entfernt",
            Self::AddGrid { .. } => "Raster hinzugefügt",
            Self::UpdateGrid { .. } => "Raster geändert",
            Self::RemoveGuide { .. } => "Eintrag entfernt",
            Self::SetGridEnabled { .. } => "Raster umgeschaltet",
            Self::RequestOpenImageDialog => "Bild öffnen",
            Self::LoadBackgroundImage { .. } => "Bild geladen",
            Self::SetBackground { .. } => "Bild übernommen",
            Self::SetAvailableWidth { .. } => "Breite angepasst",
            Self::SetToolSettings { .. } => "Einstellungen geändert",
            Self::RequestExit => "Beenden",
        }
    }
}
