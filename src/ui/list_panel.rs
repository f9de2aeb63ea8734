//! Listen-Panel mit Suchfeld und gefilterten Marker-Zeilen.

use crate::app::{AppIntent, AppState};

/// Rendert das linke Listen-Panel; bei schmalem Layout ausgeblendet.
pub fn render_list_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.layout.list_panel_visible {
        return events;
    }

    egui::SidePanel::left("marker_list")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Markers");

            let search_field = egui::TextEdit::singleline(&mut state.search.text)
                .hint_text("Search markers...")
                .desired_width(f32::INFINITY);
            if ui.add(search_field).changed() {
                events.push(AppIntent::SearchChanged {
                    text: state.search.text.clone(),
                });
            }

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for entry in &state.search.filtered {
                    let row_id = state.registry.id_at(entry.original_index);
                    let is_selected =
                        row_id.is_some() && row_id == state.overlay.selected_marker;

                    if ui.selectable_label(is_selected, &entry.title).clicked() {
                        events.push(AppIntent::ListRowActivated {
                            original_index: entry.original_index,
                        });
                    }
                }
            });

            ui.separator();
            ui.small(format!(
                "{} of {} markers",
                state.search.filtered.len(),
                state.registry.len()
            ));
        });

    events
}
