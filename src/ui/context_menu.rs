//! Kontextmenü der Kartenansicht (Hintergrund- und Marker-Variante).

use crate::app::{AppIntent, AppState, MenuVariant};

/// Helper-Funktion: Erstellt einen Button, der bei Klick einen Intent emittiert.
///
/// Geschlossen wird das Menü nicht hier, sondern über den Command-Fluss
/// des ausgelösten Intents; jeder Eintrag schließt per Mapping zuerst alle
/// Overlays.
fn button_intent(ui: &mut egui::Ui, label: &str, intent: AppIntent, events: &mut Vec<AppIntent>) {
    if ui.button(label).clicked() {
        events.push(intent);
    }
}

/// Zeigt das offene Kontextmenü an der beim Öffnen eingefrorenen Position.
///
/// Sichtbarkeit und Inhalt kommen vollständig aus dem Overlay-State.
pub fn render_context_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(menu) = state.overlay.context_menu else {
        return events;
    };

    egui::Area::new(egui::Id::new("map_context_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(menu.screen_pos[0], menu.screen_pos[1]))
        .show(ctx, |ui| {
            egui::Frame::popup(&ctx.style()).show(ui, |ui| {
                ui.set_min_width(180.0);

                match menu.variant {
                    MenuVariant::Background { world_pos } => {
                        button_intent(
                            ui,
                            "Add Marker",
                            AppIntent::AddMarkerHereRequested { world_pos },
                            &mut events,
                        );
                    }
                    MenuVariant::Marker { marker_id } => {
                        button_intent(
                            ui,
                            "Rename Marker",
                            AppIntent::RenameRequested { id: marker_id },
                            &mut events,
                        );
                        button_intent(
                            ui,
                            "Remove Marker",
                            AppIntent::RemoveRequested { id: marker_id },
                            &mut events,
                        );

                        ui.separator();

                        button_intent(
                            ui,
                            "Analyze Surrounding Area",
                            AppIntent::AnalyzeRequested { id: marker_id },
                            &mut events,
                        );
                    }
                }
            });
        });

    events
}
