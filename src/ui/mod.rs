//! UI-Komponenten: Bedienleiste, Szene und Status-Bar (egui).

pub mod controls;
pub mod scene;
pub mod status;

pub use controls::render_controls;
pub use scene::render_scene;
pub use status::render_status_bar;
