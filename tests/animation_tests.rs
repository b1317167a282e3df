use approx::assert_relative_eq;
use hanoi_visualizer::app::animator;
use hanoi_visualizer::core::layout;
use hanoi_visualizer::{AppController, AppIntent, AppState, PlaybackState};

/// Baut einen Zustand mit `disks` Disks über den regulären Intent-Fluss.
fn state_with_disks(disks: usize) -> AppState {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::DiskCountChanged { count: disks })
        .expect("DiskCountChanged sollte ohne Fehler durchlaufen");
    state
}

#[test]
fn test_first_tick_starts_move_at_curve_start() {
    let mut state = state_with_disks(2);
    let top_disk_pos = state.puzzle.disks[1].pos;

    animator::tick(&mut state, 0.0);

    // t = 0: Disk steht exakt am Startpunkt des ersten Legs
    let leg = state.legs[0];
    assert_eq!(leg.disk, 1);
    assert_relative_eq!(leg.curve.start.x, top_disk_pos.x);
    assert_relative_eq!(leg.curve.start.y, top_disk_pos.y);
    assert_relative_eq!(state.puzzle.disks[1].pos.x, top_disk_pos.x);
    assert_relative_eq!(state.puzzle.disks[1].pos.y, top_disk_pos.y);
}

#[test]
fn test_leg_completes_exactly_at_curve_end() {
    let mut state = state_with_disks(1);

    animator::tick(&mut state, 0.0);
    let leg = state.legs[0];
    assert!(leg.duration > 0.0);

    animator::tick(&mut state, leg.duration);

    // t = 1: Endpunkt exakt erreicht, Leg konsumiert
    assert_relative_eq!(state.puzzle.disks[0].pos.x, leg.curve.end.x);
    assert_relative_eq!(state.puzzle.disks[0].pos.y, leg.curve.end.y);
    assert_eq!(state.legs.len(), 3);
}

#[test]
fn test_speed_multiplier_shortens_leg_durations() {
    let mut slow = state_with_disks(2);
    let mut fast = state_with_disks(2);
    fast.ui.speed_multiplier = 2.0;

    animator::tick(&mut slow, 0.0);
    animator::tick(&mut fast, 0.0);

    for (slow_leg, fast_leg) in slow.legs.iter().zip(fast.legs.iter()) {
        assert_relative_eq!(slow_leg.duration, fast_leg.duration * 2.0);
    }
}

#[test]
fn test_single_disk_playback_reports_finished() {
    let mut state = state_with_disks(1);

    animator::tick(&mut state, 0.0);
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("1 moves remaining")
    );

    // Jeder Tick mit deutlich späterer Uhrzeit schließt genau das vorderste Leg ab
    let mut now = 0.0;
    for _ in 0..4 {
        now += 1.0e6;
        animator::tick(&mut state, now);
    }
    assert!(state.legs.is_empty());

    animator::tick(&mut state, now);
    assert_eq!(state.playback, PlaybackState::Finished);
    assert_eq!(state.ui.status_message.as_deref(), Some("Finished"));
}

#[test]
fn test_full_playback_lands_all_disks_on_destination() {
    let mut controller = AppController::new();
    let mut state = state_with_disks(3);
    controller
        .handle_intent(&mut state, AppIntent::StartRequested)
        .expect("StartRequested sollte ohne Fehler durchlaufen");

    // Synthetische Zeit in 50-ms-Schritten bis zum Ende abspielen
    let mut now = 0.0;
    for _ in 0..200_000 {
        animator::tick(&mut state, now);
        assert!(state.puzzle.is_ordered(), "Invariante verletzt bei t = {now}");
        if state.playback == PlaybackState::Finished {
            break;
        }
        now += 0.05;
    }

    assert_eq!(state.playback, PlaybackState::Finished);
    assert!(state.moves.is_empty());
    assert_eq!(state.puzzle.stacks[2], vec![0, 1, 2]);
    assert_eq!(state.puzzle.stack_height(0), 0);
    assert_eq!(state.puzzle.stack_height(1), 0);

    // Jede Disk ruht exakt auf ihrem Slot des Ziel-Pols
    for (slot, &disk_id) in state.puzzle.stacks[2].iter().enumerate() {
        let disk = state.puzzle.disks[disk_id];
        let rest = layout::disk_rest_pos(2, disk.width, slot + 1);
        assert_relative_eq!(disk.pos.x, rest.x);
        assert_relative_eq!(disk.pos.y, rest.y);
    }
}
