//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, PlaybackState};

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Disks: {} | Moves queued: {}",
                state.puzzle.disk_count(),
                state.moves.len()
            ));

            ui.separator();

            let playback = match state.playback {
                PlaybackState::Paused => "Paused",
                PlaybackState::Running => "Running",
                PlaybackState::Finished => "Finished",
            };
            ui.label(format!("Playback: {}", playback));

            // Statuszeile des Animators ("N moves remaining" / "Finished")
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg.as_str()).strong());
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
