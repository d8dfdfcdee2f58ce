//! Application State: zentrale Datenhaltung der Sitzung.

mod app_state;
mod editor;
mod view;

pub use app_state::{AppState, UiState};
pub use editor::{EditorTool, EditorToolState, ToolSettings};
pub use view::ViewState;
