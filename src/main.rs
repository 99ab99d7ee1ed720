//! Arc Aligner.
//!
//! Desktop-Host für die Bogen-Ausrichtung: eine Canvas-Fläche, über die sich
//! das Ausrichtungs-Overlay legt, plus Menü, Toolbar, Statusleiste und Optionen.

use arc_aligner::{ui, AlignerOptions, AppController, AppIntent, AppState};
use eframe::egui;

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

        log::info!("Arc Aligner v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_title("Arc Aligner"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Arc Aligner",
            options,
            Box::new(|_cc| Ok(Box::new(AlignerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct AlignerApp {
    state: AppState,
    controller: AppController,
    canvas_input: ui::CanvasInput,
}

impl AlignerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AlignerOptions::config_path();
        let options = AlignerOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            canvas_input: ui::CanvasInput::new(),
        }
    }
}

impl eframe::App for AlignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        self.show_canvas(ctx);

        if self.state.surface.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}

impl AlignerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::show_outcome_window(ctx, &self.state));

        events
    }

    /// Canvas-Fläche: Eingaben sofort verarbeiten, danach das Overlay zeichnen.
    fn show_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(250)))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());

                let mut events = self.canvas_input.collect_intents(ui, &response);
                events.extend(ui::collect_keyboard_intents(
                    ui,
                    self.state.is_aligning(),
                ));
                self.process_events(events);

                if response.hovered() {
                    ctx.set_cursor_icon(ui::canvas::cursor_icon(self.state.surface.cursor()));
                }

                let mut overlay = ui::EguiPainter::new(&painter, response.rect.min);
                self.controller.paint_overlay(&mut self.state, &mut overlay);
            });
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
