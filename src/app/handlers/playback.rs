//! Handler für Abspielsteuerung und Puzzle-Aufbau.

use crate::app::animator;
use crate::app::state::{AppState, PlaybackState};
use crate::core::{plan_moves, Puzzle};

/// Startet das Abspielen. Läuft die Animation bereits, passiert nichts.
pub fn start(state: &mut AppState) {
    if state.playback.is_running() {
        return;
    }
    state.clock.start();
    state.playback = PlaybackState::Running;
    log::info!("Abspielen gestartet ({} Züge offen)", state.moves.len());
}

/// Hält das Abspielen an; die Uhr friert die Leg-Fortschritte ein.
pub fn stop(state: &mut AppState) {
    if !state.playback.is_running() {
        return;
    }
    state.clock.stop();
    state.playback = PlaybackState::Paused;
    log::info!("Abspielen angehalten");
}

/// Baut das Puzzle aus der aktuellen Disk-Anzahl neu auf und plant die
/// komplette Zugfolge von Pol 0 nach Pol 2.
pub fn reset(state: &mut AppState) {
    state.clock.reset();
    state.legs.clear();
    state.leg_started_at = 0.0;
    state.playback = PlaybackState::Paused;

    state.puzzle = Puzzle::new(state.ui.disk_count_input);
    state.moves = plan_moves(state.puzzle.disk_count(), 0, 2).into();
    state.ui.status_message = None;

    log::info!(
        "Puzzle zurückgesetzt: {} Disks, {} Züge geplant",
        state.puzzle.disk_count(),
        state.moves.len()
    );
}

/// Übernimmt die gewünschte Disk-Anzahl (wirksam beim nächsten Reset).
pub fn set_disk_count(state: &mut AppState, count: usize) {
    state.ui.disk_count_input = count;
}

/// Übernimmt den Geschwindigkeitsfaktor (wirksam ab dem nächsten Zug).
pub fn set_speed_multiplier(state: &mut AppState, multiplier: f32) {
    state.ui.speed_multiplier = multiplier;
}

/// Schaltet den Animator auf die aktuelle Uhrzeit weiter.
pub fn advance(state: &mut AppState) {
    let now = state.clock.elapsed();
    animator::tick(state, now);
}
