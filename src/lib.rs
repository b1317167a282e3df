//! Towers-of-Hanoi Visualizer.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, PlaybackState, UiState};
pub use crate::core::{
    plan_moves, spare_pole, Disk, DiskId, Leg, Move, PlaybackClock, Puzzle, QuadBezier,
};
pub use shared::VisualizerOptions;
