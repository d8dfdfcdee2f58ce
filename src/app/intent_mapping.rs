//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::PointerPhase;
use super::{AppCommand, AppIntent, AppState};
use crate::core::GridConfig;
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerInput { event } => {
            let pointer_id = event.pointer_id;
            let command = match event.phase {
                PointerPhase::Down => AppCommand::PointerDown {
                    pos: event.pos,
                    pointer_id,
                },
                PointerPhase::Move => AppCommand::PointerMove {
                    pos: event.pos,
                    pointer_id,
                },
                PointerPhase::Up => AppCommand::PointerUp { pointer_id },
                PointerPhase::Cancel => AppCommand::PointerCancel { pointer_id },
            };
            vec![command]
        }
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::CancelRequested => vec![AppCommand::CancelLineGesture],
        AppIntent::ClearGuidesRequested => vec![AppCommand::ClearGuides],
        AppIntent::ClearImageRequested => {
            vec![AppCommand::ClearBackground, AppCommand::ClearGuides]
        }
        AppIntent::AddGridRequested => {
            let center = Vec2::from(state.view.canvas_size) / 2.0;
            // Farbe bleibt offen: die Palette unterscheidet die Raster
            vec![AppCommand::AddGrid {
                config: GridConfig {
                    vanishing_point: Some(center),
                    color: None,
                    ..state.editor.settings.grid_template()
                },
            }]
        }
        AppIntent::UpdateGridRequested { id, patch } => {
            vec![AppCommand::UpdateGrid { id, patch }]
        }
        AppIntent::RemoveGuideRequested { id } => vec![AppCommand::RemoveGuide { id }],
        AppIntent::SetGridEnabledRequested { id, enabled } => {
            vec![AppCommand::SetGridEnabled { id, enabled }]
        }
        AppIntent::OpenImageRequested => vec![AppCommand::RequestOpenImageDialog],
        AppIntent::BackgroundImageSelected { path } => {
            vec![AppCommand::LoadBackgroundImage { path }]
        }
        AppIntent::BackgroundImageReady { image } => vec![AppCommand::SetBackground { image }],
        AppIntent::AvailableWidthChanged { width } => {
            vec![AppCommand::SetAvailableWidth { width }]
        }
        AppIntent::ToolSettingsChanged { settings } => {
            vec![AppCommand::SetToolSettings { settings }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
