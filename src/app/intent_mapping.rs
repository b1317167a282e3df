//! Intent→Command Mapping: übersetzt UI-Eingaben in Zustandsänderungen.

use super::state::AppState;
use super::{AppCommand, AppIntent};

/// Übersetzt einen Intent in null oder mehr Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartRequested => vec![AppCommand::StartPlayback],
        AppIntent::StopRequested => vec![AppCommand::StopPlayback],
        AppIntent::ResetRequested => vec![AppCommand::ResetPuzzle],

        // Eine neue Disk-Anzahl baut das Puzzle immer neu auf
        AppIntent::DiskCountChanged { count } => vec![
            AppCommand::SetDiskCount { count },
            AppCommand::ResetPuzzle,
        ],

        AppIntent::SpeedChanged { multiplier } => {
            vec![AppCommand::SetSpeedMultiplier { multiplier }]
        }

        // Ticks außerhalb des Abspielens verwerfen (z.B. nach Finished)
        AppIntent::FrameTicked => {
            if state.playback.is_running() {
                vec![AppCommand::AdvanceAnimation]
            } else {
                Vec::new()
            }
        }
    }
}
