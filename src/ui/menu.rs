//! Top-Menü (File, View, Help) inklusive Listen-Umschalter.

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            // Umschalter für das Listen-Panel, wie der Drawer-Button im Header
            let toggle_label = if state.layout.list_panel_visible {
                "☰ Hide List"
            } else {
                "☰ Show List"
            };
            if ui.button(toggle_label).clicked() {
                events.push(AppIntent::PanelToggleRequested);
            }

            ui.separator();

            ui.menu_button("File", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Controls").clicked() {
                    events.push(AppIntent::HelpRequested);
                    ui.close();
                }

                if ui.button("About").clicked() {
                    log::info!("Map Marker Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
