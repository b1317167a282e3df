//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Abspielen starten
    StartRequested,
    /// Abspielen anhalten
    StopRequested,
    /// Puzzle neu aufbauen und Züge neu planen
    ResetRequested,
    /// Disk-Anzahl im Eingabefeld geändert (impliziert Reset)
    DiskCountChanged { count: usize },
    /// Geschwindigkeitsfaktor geändert (wirkt ab dem nächsten Zug)
    SpeedChanged { multiplier: f32 },
    /// Ein Animations-Frame ist fällig
    FrameTicked,
}

/// Commands mutieren den AppState; ausgeführt vom Controller.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Uhr starten, Playback auf Running
    StartPlayback,
    /// Uhr anhalten, Playback auf Paused
    StopPlayback,
    /// Disks neu erzeugen, Zugfolge neu planen, Uhr nullen
    ResetPuzzle,
    /// Gewünschte Disk-Anzahl übernehmen
    SetDiskCount { count: usize },
    /// Geschwindigkeitsfaktor übernehmen
    SetSpeedMultiplier { multiplier: f32 },
    /// Animator um einen Tick weiterschalten
    AdvanceAnimation,
}
