//! Knot-Screensaver.
//!
//! Kontrollpunkte per Maus setzen; geschlossene, geglättete Kurven
//! laufen durch die driftenden und an den Rändern abprallenden Punkte.

use eframe::egui;
use knot_screensaver::{ui, AppController, AppIntent, AppState, ScreensaverOptions};

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

        log::info!("Knot-Screensaver v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ScreensaverOptions::config_path();
        let screensaver_options = ScreensaverOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([
                    screensaver_options.canvas_width,
                    screensaver_options.canvas_height,
                ])
                .with_title("Knot Screensaver"),
            ..Default::default()
        };

        eframe::run_native(
            "Knot Screensaver",
            options,
            Box::new(|_cc| Ok(Box::new(ScreensaverApp::new(screensaver_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ScreensaverApp {
    state: AppState,
    controller: AppController,
}

impl ScreensaverApp {
    fn new(options: ScreensaverOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for ScreensaverApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                // Reihenfolge pro Frame: Intents → Kinematik → Kurven → Zeichnen
                let events = ui::collect_canvas_events(ui, &response, rect);
                self.process_events(events);
                self.controller.step_frame(&mut self.state);

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                ui::paint_scene(&painter, rect, &scene);
                ui::paint_help_overlay(&painter, rect, &scene);
            });

        // Animation läuft kontinuierlich
        ctx.request_repaint();
    }
}

impl ScreensaverApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
