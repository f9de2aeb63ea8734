//! Detailfenster des selektierten Markers mit Umgebungsanalyse.

use crate::app::{ActiveOverlay, AppIntent, AppState};
use crate::lookup::{ItemStatus, LookupPhase};

/// Zeigt die Marker-Details; gibt erzeugte Events zurück.
pub fn show_detail_window(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if state.overlay.active != ActiveOverlay::MarkerDetail {
        return events;
    }
    let Some(id) = state.overlay.selected_marker else {
        return events;
    };
    let Some(marker) = state.registry.get(id) else {
        return events;
    };
    let position = marker.position;

    let mut open = true;
    egui::Window::new("Marker Details")
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .default_width(320.0)
        .resizable(false)
        .collapsible(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Name:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.overlay.rename_buffer)
                        .desired_width(f32::INFINITY),
                );

                // Fokus genau einmal nach dem Öffnen setzen
                if state.overlay.focus_rename {
                    response.request_focus();
                    state.overlay.focus_rename = false;
                }

                if response.changed() {
                    events.push(AppIntent::DetailNameEdited {
                        text: state.overlay.rename_buffer.clone(),
                    });
                }
            });

            ui.label(format!("Position: {position}"));
            ui.hyperlink_to(
                "Open Street View",
                format!(
                    "https://www.google.com/maps/@?api=1&map_action=pano&viewpoint={},{}",
                    position.lat, position.lng
                ),
            );

            if ui.button("Remove Marker").clicked() {
                events.push(AppIntent::DeleteSelectedRequested);
            }

            ui.separator();
            ui.heading("Surrounding Area");
            render_area_section(ui, state);
        });

    if !open {
        events.push(AppIntent::OverlayDismissRequested);
    }

    events
}

/// Rendert den Analyse-Abschnitt für den aktuell laufenden Lookup.
fn render_area_section(ui: &mut egui::Ui, state: &AppState) {
    let Some(session) = state.overlay.area_lookup.as_ref() else {
        ui.weak("No analysis running");
        return;
    };

    match session.phase() {
        LookupPhase::SearchingPlaces => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Searching nearby places...");
            });
        }
        LookupPhase::NoPlaces => {
            ui.weak("No nearby places found");
        }
        LookupPhase::Ready { items } => {
            egui::ScrollArea::vertical()
                .max_height(320.0)
                .show(ui, |ui| {
                    for (index, item) in items.iter().enumerate() {
                        render_area_item(ui, index, item);
                    }
                });
        }
    }
}

fn render_area_item(ui: &mut egui::Ui, index: usize, item: &crate::lookup::AreaInfoItem) {
    let header = match item.place.distance_m {
        Some(distance) => format!("{} ({:.0} m)", item.place.name, distance),
        None => item.place.name.clone(),
    };

    egui::CollapsingHeader::new(header)
        .id_salt(index)
        .default_open(false)
        .show(ui, |ui| {
            match &item.status {
                ItemStatus::Pending { .. } => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading articles...");
                    });
                }
                ItemStatus::Failed => {
                    ui.weak("Failed to get wikipedia resources.");
                }
                ItemStatus::Resolved { links } => {
                    if links.is_empty() {
                        ui.weak("No related Wikipedia links available");
                    } else {
                        for link in links {
                            ui.hyperlink_to(&link.title, &link.url);
                            ui.small(format!("(Attribution: {})", link.url));
                        }
                    }
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Google Search:");
                ui.hyperlink_to(&item.place.name, &item.fallback_url);
            });
        });
}
