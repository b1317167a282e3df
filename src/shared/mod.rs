//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::VisualizerOptions;
pub use options::FRAME_INTERVAL_MS;
