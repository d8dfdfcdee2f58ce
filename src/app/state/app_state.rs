use crate::app::CommandLog;
use crate::core::GuideSet;
use crate::shared::EditorOptions;

use super::{EditorToolState, ViewState};

/// UI-bezogener Zustand (Dialog-Anforderungen an den Host)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Host soll den Bild-Auswahldialog öffnen
    pub show_open_image_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung (eine Zeichensitzung)
pub struct AppState {
    /// Alle Hilfslinien und Raster
    pub guides: GuideSet,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Radien, Standardwerte, Policy)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            guides: GuideSet::new(),
            editor: EditorToolState::new(&options),
            view: ViewState::new(),
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Anzahl Einträge (für UI-Anzeige)
    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }

    /// Kann noch ein Raster erstellt werden? (Button-Zustand)
    pub fn can_add_grid(&self) -> bool {
        !self.guides.is_at_capacity()
    }

    /// Gibt es etwas rückgängig zu machen?
    pub fn can_undo(&self) -> bool {
        self.editor.line_tool.is_armed() || !self.guides.is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
