//! Map Marker Editor.
//!
//! Desktop-Werkzeug zum Verwalten von Karten-Markern mit Suche,
//! lokaler Persistenz und Wikipedia-basierter Umgebungsanalyse.

use eframe::egui;
use map_marker_editor::app::handlers;
use map_marker_editor::{ui, AppCommand, AppController, AppIntent, AppOptions, AppState};

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

        log::info!("Map Marker Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Map Marker Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Map Marker Editor",
            options,
            Box::new(|_cc| Ok(Box::new(MarkerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MarkerApp {
    state: AppState,
    controller: AppController,
}

impl MarkerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let app_options = AppOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = app_options;

        let mut controller = AppController::new();
        if let Err(e) = controller.handle_command(&mut state, AppCommand::LoadStoredMarkers) {
            log::error!("Marker-Bestand konnte nicht geladen werden: {:#}", e);
        }

        Self { state, controller }
    }
}

impl eframe::App for MarkerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        let lookup_changed = handlers::lookup::pump(&mut self.state);
        self.state.view.prune_bounce(std::time::Instant::now());

        self.maybe_request_repaint(ctx, has_meaningful_events, lookup_changed);
    }
}

impl MarkerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_list_panel(ctx, &mut self.state));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));
        events.extend(ui::show_detail_window(ctx, &mut self.state));
        events.extend(ui::show_help_window(ctx, &self.state));
        events.extend(ui::render_map_view(ctx, &self.state));

        // Kontextmenü zuletzt, damit es über der Karte liegt
        events.extend(ui::render_context_menu(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(
        &self,
        ctx: &egui::Context,
        has_meaningful_events: bool,
        lookup_changed: bool,
    ) {
        let lookup_pending = self
            .state
            .overlay
            .area_lookup
            .as_ref()
            .is_some_and(|session| !session.is_settled());

        if has_meaningful_events
            || lookup_changed
            || lookup_pending
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
            || self.state.view.bounce_active(std::time::Instant::now())
        {
            ctx.request_repaint();
        }
    }
}
