//! Quadratische Bézier-Kurven und Animations-Legs.

use super::puzzle::DiskId;
use glam::Vec2;

/// Quadratische Bézier-Kurve mit einem Kontrollpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier {
    /// Startpunkt (t = 0)
    pub start: Vec2,
    /// Kontrollpunkt
    pub control: Vec2,
    /// Endpunkt (t = 1)
    pub end: Vec2,
}

impl QuadBezier {
    /// Wertet die Kurve bei `t ∈ [0, 1]` aus.
    ///
    /// `(1−t)²·start + 2t(1−t)·control + t²·end`; bei t = 0 bzw. t = 1
    /// exakt Start- bzw. Endpunkt.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.start * u * u + self.control * 2.0 * t * u + self.end * t * t
    }
}

/// Ein Animations-Segment: eine Disk folgt einer Kurve über eine Dauer.
///
/// Vier Legs pro Zug: Anheben, Traverse, Anflug, Absetzen.
#[derive(Debug, Clone, Copy)]
pub struct Leg {
    /// Die bewegte Disk
    pub disk: DiskId,
    /// Flugbahn des Legs
    pub curve: QuadBezier,
    /// Dauer in Sekunden
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_curve() -> QuadBezier {
        QuadBezier {
            start: Vec2::new(10.0, 400.0),
            control: Vec2::new(10.0, 200.0),
            end: Vec2::new(120.0, 200.0),
        }
    }

    #[test]
    fn test_point_at_zero_is_start() {
        let curve = sample_curve();
        let p = curve.point_at(0.0);
        assert_relative_eq!(p.x, curve.start.x);
        assert_relative_eq!(p.y, curve.start.y);
    }

    #[test]
    fn test_point_at_one_is_end() {
        let curve = sample_curve();
        let p = curve.point_at(1.0);
        assert_relative_eq!(p.x, curve.end.x);
        assert_relative_eq!(p.y, curve.end.y);
    }

    #[test]
    fn test_midpoint_is_pulled_towards_control() {
        let curve = sample_curve();
        let p = curve.point_at(0.5);
        // Mittelwert aus Sehnen-Mitte und Kontrollpunkt
        assert_relative_eq!(p.x, (curve.start.x + curve.end.x) / 4.0 + curve.control.x / 2.0);
        assert_relative_eq!(p.y, (curve.start.y + curve.end.y) / 4.0 + curve.control.y / 2.0);
    }

    #[test]
    fn test_degenerate_curve_stays_in_place() {
        let p = Vec2::new(42.0, 7.0);
        let curve = QuadBezier {
            start: p,
            control: p,
            end: p,
        };
        let q = curve.point_at(0.37);
        assert_relative_eq!(q.x, p.x);
        assert_relative_eq!(q.y, p.y);
    }
}
