//! Screen-Measure.
//!
//! Transparentes, immer-im-Vordergrund liegendes Overlay zum Messen von
//! Längenverhältnissen und Winkeln über beliebigem Bildschirminhalt.

use eframe::egui;
use screen_measure::{ui, AppController, AppIntent, AppState, OverlayOptions};

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

        log::info!("Screen-Measure v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_fullscreen(true)
                .with_decorations(false)
                .with_transparent(true)
                .with_always_on_top()
                .with_title("Screen-Measure"),
            ..Default::default()
        };

        eframe::run_native(
            "Screen-Measure",
            options,
            Box::new(|_cc| Ok(Box::new(OverlayApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct OverlayApp {
    state: AppState,
    controller: AppController,
}

impl OverlayApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let mut state = AppState::new();
        state.options = OverlayOptions::load_from_file(&OverlayOptions::config_path());

        Self {
            state,
            controller: AppController::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::show_settings_panel(ctx, &self.state));
        events.extend(ui::render_overlay(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }

    /// Transparenter Fenster-Hintergrund — die Deckkraft malt das Overlay
    /// selbst über die Optionen.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }
}
