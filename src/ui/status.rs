//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::GeoPos;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Markers: {} | Visible: {}",
                state.marker_count(),
                state.visible_count()
            ));

            ui.separator();

            let center = GeoPos::from_world(state.view.camera.center);
            ui.label(format!(
                "Zoom: {:.2}x | Center: {}",
                state.view.camera.zoom, center
            ));

            ui.separator();

            // Selektierter Marker
            match state
                .overlay
                .selected_marker
                .and_then(|id| state.registry.get(id))
            {
                Some(marker) => ui.label(format!("Selected: {}", marker.title)),
                None => ui.label("Selected: none"),
            };

            // Statusnachricht (z.B. fehlgeschlagene Speicherung)
            if let Some(ref msg) = state.store_warning {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
