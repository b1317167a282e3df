//! Bedienleiste: Disk-Anzahl, Geschwindigkeit, Start/Stop/Reset.

use crate::app::{AppIntent, AppState, PlaybackState};

/// Rendert die Bedienleiste und gibt erzeugte Intents zurück.
pub fn render_controls(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Disks:");
            let mut disk_count = state.ui.disk_count_input;
            if ui
                .add(egui::DragValue::new(&mut disk_count).range(1..=8))
                .changed()
            {
                events.push(AppIntent::DiskCountChanged { count: disk_count });
            }

            ui.separator();

            ui.label("Speed:");
            let mut multiplier = state.ui.speed_multiplier;
            if ui
                .add(
                    egui::DragValue::new(&mut multiplier)
                        .range(0.25..=16.0)
                        .speed(0.1)
                        .suffix("x"),
                )
                .changed()
            {
                events.push(AppIntent::SpeedChanged { multiplier });
            }

            ui.separator();

            let running = state.playback == PlaybackState::Running;
            if ui
                .add_enabled(!running, egui::Button::new("▶ Start"))
                .clicked()
            {
                events.push(AppIntent::StartRequested);
            }
            if ui
                .add_enabled(running, egui::Button::new("⏸ Stop"))
                .clicked()
            {
                events.push(AppIntent::StopRequested);
            }
            if ui.button("↺ Reset").clicked() {
                events.push(AppIntent::ResetRequested);
            }
        });
    });

    events
}
