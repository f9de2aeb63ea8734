//! Optionen-Dialog für Analyse, Marker-Darstellung, Kamera und Layout.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Umgebungsanalyse ────────────────────────────
                    ui.collapsing("Umgebungsanalyse", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Suchradius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.places_radius_m)
                                        .range(50..=1000)
                                        .speed(10)
                                        .suffix(" m"),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Links pro Ort:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.wiki_link_cap)
                                        .range(1..=10)
                                        .speed(1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Frist pro Ort:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.lookup_timeout_secs)
                                        .range(1..=30)
                                        .speed(1)
                                        .suffix(" s"),
                                )
                                .changed();
                        });
                    });

                    // ── Marker ──────────────────────────────────────
                    ui.collapsing("Marker", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Pin-Größe (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_size_px)
                                        .range(3.0..=20.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_pick_radius_px)
                                        .range(4.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Pin-Farbe:", &mut opts.marker_color);
                        changed |= color_edit(ui, "Selektiert:", &mut opts.marker_color_selected);
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_step)
                                        .range(1.01..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });

                    // ── Layout ──────────────────────────────────────
                    ui.collapsing("Layout", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Schmal-Schwelle:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.narrow_layout_breakpoint_px)
                                        .range(300.0..=1200.0)
                                        .speed(5.0)
                                        .suffix(" px"),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
