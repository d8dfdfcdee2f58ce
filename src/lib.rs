//! Perspective Guides Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, PointerEvent,
    PointerPhase, ToolSettings, UiState, ViewState,
};
pub use core::{
    BackgroundImage, DepthLinePolicy, GridConfig, Guide, GuideColor, GuideError, GuideId,
    GuideSet, LineGuide, LineStyle, PerspectiveGrid, Rgba, MAX_GRIDS,
};
pub use shared::{DrawPrimitive, EditorOptions, RenderScene};
