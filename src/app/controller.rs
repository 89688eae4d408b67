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
        // Reine Cursor-Updates nicht loggen
        if !matches!(command, AppCommand::UpdateCursor { .. }) {
            state.command_log.record(&command);
        }
        use super::handlers;

        match command {
            // === Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::UpdateCursor { screen_pos } => {
                handlers::view::update_cursor(state, screen_pos)
            }

            // === Kurve ===
            AppCommand::BeginHandleDrag { screen_pos } => {
                handlers::curve::begin_drag(state, screen_pos)
            }
            AppCommand::DragHandle { screen_pos } => handlers::curve::drag(state, screen_pos),
            AppCommand::EndHandleDrag => handlers::curve::end_drag(state),
            AppCommand::ResetCurve => handlers::curve::reset(state),

            // === Optionen ===
            AppCommand::SetPickPolicy { policy } => {
                handlers::options::set_pick_policy(state, policy)?
            }
            AppCommand::SetLoopOrientation { enabled } => {
                handlers::options::set_loop_orientation(state, enabled)?
            }

            // === Anwendung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
