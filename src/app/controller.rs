//! Application Controller für zentrale Event-Verarbeitung und Frame-Takt.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und den Frame-Ablauf auf dem AppState.
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
            // === Pfade ===
            AppCommand::AddPoint { position, velocity } => {
                handlers::path::add_point(state, position, velocity)
            }
            AppCommand::DeleteLastPoint => handlers::path::delete_last_point(state),
            AppCommand::AcceleratePath => handlers::path::accelerate(state),
            AppCommand::SlowDownPath => handlers::path::slow_down(state),
            AppCommand::CreatePath => handlers::path::create_path(state),
            AppCommand::SelectNextPath => handlers::path::select_next(state),
            AppCommand::ResetPaths => handlers::path::reset(state),

            // === Darstellung ===
            AppCommand::AdjustResolution { delta } => {
                handlers::view::adjust_resolution(state, delta)
            }
            AppCommand::TogglePause => handlers::view::toggle_pause(state),
            AppCommand::ToggleHelp => handlers::view::toggle_help(state),
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size)?,
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }

    /// Führt einen Frame aus: Kinematik (falls nicht pausiert), dann Kurven.
    ///
    /// Muss nach allen Intents des Frames und vor dem Rendern laufen.
    pub fn step_frame(&mut self, state: &mut AppState) {
        if !state.view.paused {
            let (width, height) = state.view.canvas_bounds();
            state.paths.advance_all(width, height);
        }

        state.paths.recompute_all(state.resolution);

        state.view.hue = (state.view.hue + state.options.hue_step).rem_euclid(360.0);
    }

    /// Baut die RenderScene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
