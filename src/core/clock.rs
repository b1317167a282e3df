//! Pausierbare Abspiel-Uhr für die Animation.

use std::time::Instant;

/// Wandzeit-Uhr, die nur während des Abspielens läuft.
///
/// `stop` friert [`PlaybackClock::elapsed`] ein; `start` setzt die Zählung an
/// der eingefrorenen Stelle fort (Basiszeit-Verschiebung). Der Animator
/// konsumiert die Zeit als nacktes `f64`, damit Tests synthetische Zeiten
/// einspeisen können.
#[derive(Debug, Clone, Default)]
pub struct PlaybackClock {
    /// Bis zum letzten Stopp aufgelaufene Sekunden
    accumulated: f64,
    /// Zeitpunkt des letzten Starts, solange die Uhr läuft
    resumed_at: Option<Instant>,
}

impl PlaybackClock {
    /// Erstellt eine gestoppte Uhr bei 0 Sekunden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lässt die Uhr weiterlaufen. Läuft sie bereits, passiert nichts.
    pub fn start(&mut self) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(Instant::now());
        }
    }

    /// Hält die Uhr an und friert die verstrichene Zeit ein.
    pub fn stop(&mut self) {
        if let Some(resumed_at) = self.resumed_at.take() {
            self.accumulated += resumed_at.elapsed().as_secs_f64();
        }
    }

    /// Setzt die Uhr gestoppt auf 0 Sekunden zurück.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.resumed_at = None;
    }

    /// Verstrichene Abspielzeit in Sekunden.
    pub fn elapsed(&self) -> f64 {
        let running = self
            .resumed_at
            .map(|resumed_at| resumed_at.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        self.accumulated + running
    }

    /// Ob die Uhr gerade läuft.
    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_fresh_clock_is_stopped_at_zero() {
        let clock = PlaybackClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn test_elapsed_advances_while_running() {
        let mut clock = PlaybackClock::new();
        clock.start();
        sleep(Duration::from_millis(15));
        assert!(clock.elapsed() >= 0.015);
        assert!(clock.is_running());
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let mut clock = PlaybackClock::new();
        clock.start();
        sleep(Duration::from_millis(10));
        clock.stop();

        let frozen = clock.elapsed();
        sleep(Duration::from_millis(10));
        assert_eq!(clock.elapsed(), frozen);
    }

    #[test]
    fn test_restart_resumes_from_frozen_value() {
        let mut clock = PlaybackClock::new();
        clock.start();
        sleep(Duration::from_millis(10));
        clock.stop();
        let frozen = clock.elapsed();

        clock.start();
        sleep(Duration::from_millis(10));
        assert!(clock.elapsed() >= frozen + 0.01);
    }

    #[test]
    fn test_reset_returns_to_zero() {
        let mut clock = PlaybackClock::new();
        clock.start();
        sleep(Duration::from_millis(5));
        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), 0.0);
    }
}
