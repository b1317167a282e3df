//! Towers-of-Hanoi Visualizer.
//!
//! Animiert die optimale Zugfolge des Hanoi-Puzzles: rekursiv geplante Züge,
//! abgespielt als Bézier-Kurvenflüge der Disks zwischen drei Polen.

use eframe::egui;
use hanoi_visualizer::shared::FRAME_INTERVAL_MS;
use hanoi_visualizer::{ui, AppController, AppIntent, AppState, VisualizerOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Hanoi Visualizer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([720.0, 580.0])
                .with_title("Towers of Hanoi"),
            ..Default::default()
        };

        eframe::run_native(
            "Towers of Hanoi",
            options,
            Box::new(|_cc| Ok(Box::new(VisualizerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct VisualizerApp {
    state: AppState,
    controller: AppController,
}

impl VisualizerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = VisualizerOptions::config_path();
        let visualizer_options = VisualizerOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(visualizer_options),
            controller: AppController::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_controls(ctx, &self.state));
        ui::render_scene(ctx, &self.state);

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = self.collect_ui_events(ctx);

        if self.state.playback.is_running() {
            events.push(AppIntent::FrameTicked);
        }

        self.process_events(events);

        // Fester Tick-Takt, solange die Animation läuft
        if self.state.playback.is_running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(FRAME_INTERVAL_MS));
        }
    }
}
