//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::PointerButton;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerPressed {
            screen_pos,
            button: PointerButton::Primary,
        } => vec![AppCommand::BeginHandleDrag { screen_pos }],
        AppIntent::PointerPressed { .. } => vec![],
        AppIntent::PointerMoved { screen_pos } => {
            if state.dragged_index().is_some() {
                vec![AppCommand::DragHandle { screen_pos }]
            } else {
                vec![AppCommand::UpdateCursor { screen_pos }]
            }
        }
        AppIntent::PointerReleased {
            button: PointerButton::Primary,
        } => vec![AppCommand::EndHandleDrag],
        AppIntent::PointerReleased { .. } => vec![],
        AppIntent::ResetCurveRequested => vec![AppCommand::EndHandleDrag, AppCommand::ResetCurve],
        AppIntent::PickPolicyChanged { policy } => vec![AppCommand::SetPickPolicy { policy }],
        AppIntent::LoopOrientationToggled { enabled } => {
            vec![AppCommand::SetLoopOrientation { enabled }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
