//! Core-Domäne: Zugplanung, Kurven, Puzzle-Zustand, Layout und Uhr.

pub mod clock;
pub mod curve;
pub mod layout;
pub mod planner;
pub mod puzzle;

pub use clock::PlaybackClock;
pub use curve::{Leg, QuadBezier};
pub use planner::{plan_moves, spare_pole, Move, PoleIndex};
pub use puzzle::{Disk, DiskId, Puzzle};
