//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an die Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            AppCommand::StartPlayback => handlers::playback::start(state),
            AppCommand::StopPlayback => handlers::playback::stop(state),
            AppCommand::ResetPuzzle => handlers::playback::reset(state),
            AppCommand::SetDiskCount { count } => handlers::playback::set_disk_count(state, count),
            AppCommand::SetSpeedMultiplier { multiplier } => {
                handlers::playback::set_speed_multiplier(state, multiplier)
            }
            AppCommand::AdvanceAnimation => handlers::playback::advance(state),
        }

        Ok(())
    }
}
