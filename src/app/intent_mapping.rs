//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddPointRequested { position } => {
            // Zufallsrichtung wird hier gezogen, damit der Command deterministisch ist
            let velocity = random_velocity(state.options.velocity_max);
            vec![AppCommand::AddPoint { position, velocity }]
        }
        AppIntent::DeletePointRequested => vec![AppCommand::DeleteLastPoint],
        AppIntent::AccelerateRequested => vec![AppCommand::AcceleratePath],
        AppIntent::SlowDownRequested => vec![AppCommand::SlowDownPath],
        AppIntent::IncreaseResolutionRequested => vec![AppCommand::AdjustResolution { delta: 1 }],
        AppIntent::DecreaseResolutionRequested => {
            vec![AppCommand::AdjustResolution { delta: -1 }]
        }
        AppIntent::NewPathRequested => vec![AppCommand::CreatePath],
        AppIntent::SelectNextPathRequested => vec![AppCommand::SelectNextPath],
        AppIntent::ResetRequested => vec![AppCommand::ResetPaths],
        AppIntent::TogglePauseRequested => vec![AppCommand::TogglePause],
        AppIntent::ToggleHelpRequested => vec![AppCommand::ToggleHelp],
        AppIntent::CanvasResized { size } => {
            if size == state.view.canvas_size {
                Vec::new()
            } else {
                vec![AppCommand::SetCanvasSize { size }]
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Zufällige Startrichtung, je Achse gleichverteilt in `[0, max)`.
fn random_velocity(max: f32) -> Vec2 {
    Vec2::new(fastrand::f32() * max, fastrand::f32() * max)
}
