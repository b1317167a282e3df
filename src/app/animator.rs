//! Frame-getriebener Animator: konsumiert Move- und Leg-Queues.
//!
//! Pro Tick wird das vorderste Leg entlang seiner Bézier-Kurve ausgewertet.
//! Ist die Leg-Queue leer, wird der nächste Zug begonnen: oberste Disk
//! umstapeln und vier Legs (Anheben, Traverse, Anflug, Absetzen) einreihen.
//! Ist auch die Move-Queue leer, endet das Abspielen mit "Finished".

use super::state::{AppState, PlaybackState};
use crate::core::curve::{Leg, QuadBezier};
use crate::core::layout;
use crate::core::planner::Move;
use glam::Vec2;

/// Vertikale Grundgeschwindigkeit in Pixeln pro Sekunde bei Faktor 1.0.
pub const PIXEL_SPEED_BASE: f64 = 400.0;

/// Schaltet die Animation auf Uhrzeit `now` (Sekunden) weiter.
pub fn tick(state: &mut AppState, now: f64) {
    if state.legs.is_empty() {
        begin_next_move(state);
        state.leg_started_at = now;
    }

    let Some(leg) = state.legs.front() else {
        finish(state);
        return;
    };

    let t = if leg.duration > 0.0 {
        (((now - state.leg_started_at) / leg.duration).min(1.0)).max(0.0) as f32
    } else {
        1.0
    };
    state.puzzle.disks[leg.disk].pos = leg.curve.point_at(t);

    if t >= 1.0 {
        state.legs.pop_front();
        state.leg_started_at = now;
    }
}

/// Beendet das Abspielen, wenn keine Züge mehr anstehen.
fn finish(state: &mut AppState) {
    if state.playback == PlaybackState::Finished {
        return;
    }
    state.clock.stop();
    state.playback = PlaybackState::Finished;
    log::info!("Alle Züge abgespielt");
}

/// Zieht den nächsten Zug aus der Queue und baut seine vier Legs.
fn begin_next_move(state: &mut AppState) {
    // Statuszeile zählt den beginnenden Zug mit
    let remaining = state.moves.len();
    let Some(mv) = state.moves.pop_front() else {
        state.ui.status_message = Some("Finished".to_string());
        return;
    };
    state.ui.status_message = Some(format!("{remaining} moves remaining"));

    let Some(disk_id) = state.puzzle.pop_disk(mv.from) else {
        log::warn!("Zug {}→{} ohne Disk auf dem Quell-Pol", mv.from, mv.to);
        return;
    };
    state.puzzle.push_disk(mv.to, disk_id);

    let disk = state.puzzle.disks[disk_id];
    let rest_height = state.puzzle.stack_height(mv.to);
    // Der Faktor wird pro Zug gelesen; Änderungen greifen ab dem nächsten Zug
    let pixel_speed = PIXEL_SPEED_BASE * f64::from(state.ui.speed_multiplier);

    for curve in move_curves(disk.pos, disk.width, mv, rest_height) {
        let duration = f64::from((curve.end.y - curve.control.y).abs()) / pixel_speed / 2.0;
        state.legs.push_back(Leg {
            disk: disk_id,
            curve,
            duration,
        });
    }
}

/// Die vier Kurven eines Zuges: Anheben, Traverse, Anflug, Absetzen.
///
/// `rest_height` ist die Stapelhöhe am Ziel inklusive der bewegten Disk.
fn move_curves(start: Vec2, disk_width: f32, mv: Move, rest_height: usize) -> [QuadBezier; 4] {
    let apex_y = layout::traverse_apex_y();
    let lift_end = Vec2::new(layout::disk_left_x(mv.from, disk_width), layout::POLE_TOP_Y);
    let mid_x = (layout::POLE_MID_X[mv.from] + layout::POLE_MID_X[mv.to]) / 2.0;
    let traverse_end = Vec2::new(mid_x - disk_width / 2.0, apex_y);
    let approach_end = Vec2::new(layout::disk_left_x(mv.to, disk_width), layout::POLE_TOP_Y);
    let rest = layout::disk_rest_pos(mv.to, disk_width, rest_height);

    [
        // Anheben: vom Stapel senkrecht zur Pol-Oberkante
        QuadBezier {
            start,
            control: start + Vec2::new(0.0, layout::SLOT_PITCH),
            end: lift_end,
        },
        // Traverse: bogenförmig zur Mitte zwischen den Polen
        QuadBezier {
            start: lift_end,
            control: Vec2::new(lift_end.x, apex_y),
            end: traverse_end,
        },
        // Anflug: Bogen hinunter zur Ziel-Pol-Oberkante
        QuadBezier {
            start: traverse_end,
            control: Vec2::new(approach_end.x, apex_y),
            end: approach_end,
        },
        // Absetzen: senkrecht auf den Ruheplatz
        QuadBezier {
            start: approach_end,
            control: Vec2::new(rest.x, rest.y - layout::SLOT_PITCH),
            end: rest,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_move_curves_chain_seamlessly() {
        let start = layout::disk_rest_pos(0, 130.0, 3);
        let curves = move_curves(start, 130.0, Move { from: 0, to: 2 }, 1);

        for pair in curves.windows(2) {
            assert_relative_eq!(pair[0].end.x, pair[1].start.x);
            assert_relative_eq!(pair[0].end.y, pair[1].start.y);
        }
    }

    #[test]
    fn test_last_curve_ends_on_rest_position() {
        let start = layout::disk_rest_pos(0, 190.0, 1);
        let curves = move_curves(start, 190.0, Move { from: 0, to: 1 }, 1);
        let rest = layout::disk_rest_pos(1, 190.0, 1);

        assert_relative_eq!(curves[3].end.x, rest.x);
        assert_relative_eq!(curves[3].end.y, rest.y);
    }

    #[test]
    fn test_traverse_runs_at_apex_height() {
        let start = layout::disk_rest_pos(1, 100.0, 2);
        let curves = move_curves(start, 100.0, Move { from: 1, to: 2 }, 4);

        assert_relative_eq!(curves[1].end.y, layout::traverse_apex_y());
        assert_relative_eq!(curves[2].start.y, layout::traverse_apex_y());
    }
}
