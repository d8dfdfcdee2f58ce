//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer ===
            AppCommand::PointerDown { pos, pointer_id } => {
                handlers::pointer::pointer_down(state, pos, pointer_id)
            }
            AppCommand::PointerMove { pos, pointer_id } => {
                handlers::pointer::pointer_move(state, pos, pointer_id)
            }
            AppCommand::PointerUp { pointer_id } => {
                handlers::pointer::pointer_up(state, pointer_id)
            }
            AppCommand::PointerCancel { pointer_id } => {
                handlers::pointer::pointer_cancel(state, pointer_id)
            }

            // === Editing ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::AddGrid { config } => handlers::editing::add_grid(state, config),
            AppCommand::UpdateGrid { id, patch } => {
                handlers::editing::update_grid(state, id, patch)
            }
            AppCommand::RemoveGuide { id } => handlers::editing::remove_guide(state, id),
            AppCommand::SetGridEnabled { id, enabled } => {
                handlers::editing::set_grid_enabled(state, id, enabled)
            }
            AppCommand::ClearGuides => handlers::editing::clear_guides(state),
            AppCommand::SetToolSettings { settings } => {
                handlers::editing::set_tool_settings(state, settings)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::CancelLineGesture => handlers::history::cancel_line_gesture(state),

            // === Hintergrund & Canvas ===
            AppCommand::LoadBackgroundImage { path } => {
                handlers::view::load_background_image(state, path)?
            }
            AppCommand::SetBackground { image } => handlers::view::set_background(state, image),
            AppCommand::ClearBackground => handlers::view::clear_background(state),
            AppCommand::SetAvailableWidth { width } => {
                handlers::view::set_available_width(state, width)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestOpenImageDialog => {
                handlers::dialog::request_open_image_dialog(state)
            }
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
