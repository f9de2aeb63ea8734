//! Hilfe-Panel mit Bedienungshinweisen.

use crate::app::{ActiveOverlay, AppIntent, AppState};

/// Zeigt das Hilfe-Panel; gibt erzeugte Events zurück.
pub fn show_help_window(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if state.overlay.active != ActiveOverlay::HelpPanel {
        return events;
    }

    let mut open = true;
    egui::Window::new("Help")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(380.0)
        .resizable(false)
        .collapsible(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("Left click on the map: add a marker. If a menu or window is open, the click only closes it.");
            ui.label("Left click on a marker: select it and open its details with the area analysis.");
            ui.label("Right click: context menu for the map or for a marker.");
            ui.label("Drag with the left mouse button: pan the map.");
            ui.label("Scroll: zoom towards the pointer.");
            ui.label("Escape: close menus and windows.");

            ui.separator();

            ui.label("Markers are stored locally and restored on the next start.");
            ui.label("The search field filters the list and the map at the same time.");
        });

    if !open {
        events.push(AppIntent::OverlayDismissRequested);
    }

    events
}
