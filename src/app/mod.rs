//! Application-Layer: Controller, State, Events, Handler und Werkzeuge.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Guides, Werkzeug, View).
pub mod state;
pub mod tools;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerEvent, PointerPhase};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorTool, EditorToolState, ToolSettings, UiState, ViewState};
