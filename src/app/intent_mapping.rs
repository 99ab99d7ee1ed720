//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartAlignmentRequested => {
            if state.is_aligning() {
                log::warn!("Ausrichtung läuft bereits, Start ignoriert");
                Vec::new()
            } else {
                vec![
                    AppCommand::DismissOutcome,
                    AppCommand::StartAlignment {
                        count: state.placeholder_count,
                    },
                ]
            }
        }
        AppIntent::CancelAlignmentRequested => vec![AppCommand::CancelAlignment],
        AppIntent::PlaceholderCountChanged { count } => {
            vec![AppCommand::SetPlaceholderCount { count }]
        }
        AppIntent::SurfaceInput { event } => {
            if state.is_aligning() {
                vec![AppCommand::DispatchSurfaceEvent { event }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ResultDismissed => vec![AppCommand::DismissOutcome],
        AppIntent::ExitRequested => {
            if state.is_aligning() {
                vec![AppCommand::CancelAlignment, AppCommand::RequestExit]
            } else {
                vec![AppCommand::RequestExit]
            }
        }
    }
}
