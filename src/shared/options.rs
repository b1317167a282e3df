//! Zentrale Konfiguration des Visualizers.
//!
//! `VisualizerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Abspielen ───────────────────────────────────────────────────────

/// Standard-Anzahl Disks beim Start.
pub const DEFAULT_DISK_COUNT: usize = 5;
/// Standard-Geschwindigkeitsfaktor.
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 1.0;
/// Frame-Intervall des Animations-Ticks in Millisekunden.
pub const FRAME_INTERVAL_MS: u64 = 50;

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Füllfarbe der Disks (RGBA: Blau).
pub const DISK_COLOR: [f32; 4] = [0.25, 0.55, 0.95, 1.0];
/// Füllfarbe jeder zweiten Disk (RGBA: helleres Blau).
pub const DISK_COLOR_ALT: [f32; 4] = [0.45, 0.7, 1.0, 1.0];
/// Farbe der Pole (RGBA: Braun).
pub const POLE_COLOR: [f32; 4] = [0.55, 0.38, 0.2, 1.0];
/// Farbe der Bodenplatte (RGBA: dunkleres Braun).
pub const BASE_COLOR: [f32; 4] = [0.45, 0.3, 0.15, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `hanoi_visualizer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizerOptions {
    /// Disk-Anzahl beim Start
    pub default_disk_count: usize,
    /// Geschwindigkeitsfaktor beim Start
    pub default_speed_multiplier: f32,
    /// Füllfarbe der Disks (RGBA)
    pub disk_color: [f32; 4],
    /// Füllfarbe jeder zweiten Disk (RGBA)
    pub disk_color_alt: [f32; 4],
    /// Farbe der Pole (RGBA)
    pub pole_color: [f32; 4],
    /// Farbe der Bodenplatte (RGBA)
    pub base_color: [f32; 4],
}

impl Default for VisualizerOptions {
    fn default() -> Self {
        Self {
            default_disk_count: DEFAULT_DISK_COUNT,
            default_speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            disk_color: DISK_COLOR,
            disk_color_alt: DISK_COLOR_ALT,
            pole_color: POLE_COLOR,
            base_color: BASE_COLOR,
        }
    }
}

impl VisualizerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("hanoi_visualizer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("hanoi_visualizer.toml")
    }
}
