//! Szenen-Geometrie: Pole, Bodenplatte und Disk-Stapel in Szenen-Pixeln.

use glam::Vec2;

/// X-Mittelpunkte der drei Pole.
pub const POLE_MID_X: [f32; 3] = [150.0, 350.0, 550.0];
/// Obere Y-Kante der Pole.
pub const POLE_TOP_Y: f32 = 200.0;
/// Höhe eines Stapel-Slots (Disk-Höhe plus Fuge).
pub const SLOT_PITCH: f32 = 20.0;
/// Maximale Stapeltiefe; bestimmt die Pol-Höhe.
pub const POLE_SLOTS: usize = 13;
/// Untere Y-Kante der Pole (= Oberkante der Bodenplatte).
pub const POLE_BOTTOM_Y: f32 = POLE_TOP_Y + SLOT_PITCH * POLE_SLOTS as f32;
/// Breite eines Pols.
pub const POLE_WIDTH: f32 = 20.0;
/// Sichtbare Disk-Höhe (ein Pixel schmaler als der Slot).
pub const DISK_HEIGHT: f32 = 19.0;
/// Breite der größten Disk.
pub const DISK_BASE_WIDTH: f32 = 190.0;
/// Breitenabnahme pro Disk.
pub const DISK_WIDTH_STEP: f32 = 30.0;
/// Disks mit dieser Breite oder schmaler werden nicht mehr erzeugt.
pub const DISK_MIN_WIDTH: f32 = 20.0;
/// Höhe der Bodenplatte.
pub const BASE_HEIGHT: f32 = 20.0;
/// Überstand der Bodenplatte links und rechts über die äußeren Pole.
pub const BASE_OVERHANG: f32 = 100.0;
/// Höhe der Traverse über der Pol-Oberkante.
pub const TRAVERSE_RAISE: f32 = 100.0;

/// Linke X-Kante einer Disk, zentriert über einem Pol.
pub fn disk_left_x(pole: usize, disk_width: f32) -> f32 {
    POLE_MID_X[pole] - disk_width / 2.0
}

/// Ruhe-Y (obere Kante) einer Disk bei gegebener Stapelhöhe.
///
/// `stack_height` zählt die Disks des Stapels inklusive der Disk selbst:
/// die unterste Disk hat Stapelhöhe 1.
pub fn disk_rest_y(stack_height: usize) -> f32 {
    POLE_BOTTOM_Y - SLOT_PITCH * stack_height as f32
}

/// Ruheposition (linke obere Ecke) einer Disk auf einem Pol.
pub fn disk_rest_pos(pole: usize, disk_width: f32, stack_height: usize) -> Vec2 {
    Vec2::new(disk_left_x(pole, disk_width), disk_rest_y(stack_height))
}

/// Y-Niveau der Traverse, auf dem Disks zwischen den Polen wandern.
pub fn traverse_apex_y() -> f32 {
    POLE_TOP_Y - TRAVERSE_RAISE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pole_bottom_matches_slot_count() {
        assert_relative_eq!(POLE_BOTTOM_Y, 460.0);
    }

    #[test]
    fn test_disk_rest_y_stacks_upwards() {
        assert_relative_eq!(disk_rest_y(1), 440.0);
        assert_relative_eq!(disk_rest_y(2), 420.0);
        assert!(disk_rest_y(2) < disk_rest_y(1));
    }

    #[test]
    fn test_disk_left_x_centers_on_pole() {
        assert_relative_eq!(disk_left_x(0, 190.0), 55.0);
        assert_relative_eq!(disk_left_x(2, 40.0), 530.0);
    }

    #[test]
    fn test_traverse_apex_above_poles() {
        assert!(traverse_apex_y() < POLE_TOP_Y);
    }
}
