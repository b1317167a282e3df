//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Leg, Move, PlaybackClock, Puzzle};
use crate::shared::VisualizerOptions;
use std::collections::VecDeque;

/// Abspielzustand der Animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Uhr steht; Fortsetzen ist möglich
    #[default]
    Paused,
    /// Animation läuft, Frames werden angefordert
    Running,
    /// Alle Züge abgespielt; nur Reset hilft weiter
    Finished,
}

impl PlaybackState {
    /// Ob gerade animiert wird.
    pub fn is_running(&self) -> bool {
        matches!(self, PlaybackState::Running)
    }
}

/// UI-naher Zustand: Eingabefelder und Statuszeile.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Gewünschte Disk-Anzahl (Eingabefeld)
    pub disk_count_input: usize,
    /// Geschwindigkeitsfaktor (Eingabefeld)
    pub speed_multiplier: f32,
    /// Statuszeile, z.B. "5 moves remaining" oder "Finished"
    pub status_message: Option<String>,
}

/// Zentraler Anwendungszustand.
pub struct AppState {
    /// Disk-Tabelle und Pol-Stapel
    pub puzzle: Puzzle,
    /// Geplante Züge, vorne konsumiert
    pub moves: VecDeque<Move>,
    /// Legs des laufenden Zuges, vorne konsumiert
    pub legs: VecDeque<Leg>,
    /// Uhrzeit (Sekunden), zu der das vorderste Leg begonnen hat
    pub leg_started_at: f64,
    /// Abspiel-Uhr; steht während Pausen
    pub clock: PlaybackClock,
    /// Abspielzustand
    pub playback: PlaybackState,
    /// Eingaben und Statuszeile
    pub ui: UiState,
    /// Persistierte Laufzeit-Optionen
    pub options: VisualizerOptions,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt den Startzustand: Puzzle aufgebaut, Züge geplant, Uhr gestoppt.
    pub fn new() -> Self {
        Self::with_options(VisualizerOptions::default())
    }

    /// Wie [`AppState::new`], aber mit explizit geladenen Optionen.
    pub fn with_options(options: VisualizerOptions) -> Self {
        let mut state = Self {
            puzzle: Puzzle::new(0),
            moves: VecDeque::new(),
            legs: VecDeque::new(),
            leg_started_at: 0.0,
            clock: PlaybackClock::new(),
            playback: PlaybackState::Paused,
            ui: UiState {
                disk_count_input: options.default_disk_count,
                speed_multiplier: options.default_speed_multiplier,
                status_message: None,
            },
            options,
            command_log: CommandLog::new(),
        };
        super::handlers::playback::reset(&mut state);
        state
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
