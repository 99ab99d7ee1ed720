//! Application Controller für zentrale Event-Verarbeitung.

use super::host::Painter;
use super::{AppCommand, AppIntent, AppState};

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
            // === Ausrichtung ===
            AppCommand::StartAlignment { count } => handlers::alignment::start(state, count)?,
            AppCommand::CancelAlignment => handlers::alignment::cancel(state),
            AppCommand::SetPlaceholderCount { count } => {
                handlers::alignment::set_placeholder_count(state, count)
            }
            AppCommand::DispatchSurfaceEvent { event } => {
                handlers::alignment::dispatch(state, event)
            }

            // === Canvas ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::DismissOutcome => handlers::dialog::dismiss_outcome(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Zeichnet das Overlay der laufenden Ausrichtung (Paint-Callback).
    pub fn paint_overlay(&self, state: &mut AppState, painter: &mut dyn Painter) {
        super::handlers::alignment::paint(state, painter);
    }
}
