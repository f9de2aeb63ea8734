//! Kartenansicht: Pan/Zoom, Marker-Picking und Pin-Rendering.

use std::time::Instant;

use glam::DVec2;

use crate::app::state::BounceState;
use crate::app::{AppIntent, AppState, GeoCamera, GeoPos, MarkerId};
use crate::shared::options::BOUNCE_AMPLITUDE_PX;
use crate::shared::BOUNCE_DURATION_SECS;

/// Zielabstand der Gitterlinien in Pixeln.
const GRID_TARGET_SPACING_PX: f32 = 90.0;
/// Dauer einer einzelnen Bounce-Periode (zwei Perioden pro Animation).
const BOUNCE_CYCLE_SECS: f32 = 0.7;

/// Rendert die Kartenfläche und sammelt Viewport-Events.
pub fn render_map_view(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
            let viewport_size = [rect.width(), rect.height()];

            // Größe jeden Frame melden; der Handler erkennt Übergänge selbst
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });

            collect_keyboard_events(ui, state, &mut events);
            collect_pointer_events(ui, &response, rect, viewport_size, state, &mut events);
            paint_map(ui, rect, viewport_size, state);
        });

    events
}

fn collect_keyboard_events(ui: &egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let key_escape_pressed = ui.input(|i| i.key_pressed(egui::Key::Escape));

    if key_escape_pressed && state.overlay.is_any_open() {
        events.push(AppIntent::OverlayDismissRequested);
    }
}

fn collect_pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    viewport_size: [f32; 2],
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    let camera = &state.view.camera;

    // Links-Drag: Kamera verschieben
    if response.dragged_by(egui::PointerButton::Primary) {
        let pointer_delta = ui.input(|i| i.pointer.delta());
        if pointer_delta != egui::Vec2::ZERO {
            let dpp = camera.degrees_per_pixel(viewport_size[1]);
            // Schirm-y zeigt nach unten, Breitengrad nach oben
            events.push(AppIntent::CameraPan {
                delta: DVec2::new(
                    -f64::from(pointer_delta.x) * dpp,
                    f64::from(pointer_delta.y) * dpp,
                ),
            });
        }
    }

    // Scroll-Zoom auf die Mausposition
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta != 0.0 && response.hovered() {
        let step = state.options.camera_scroll_zoom_step;
        let factor = if scroll_delta > 0.0 { step } else { 1.0 / step };
        let focus_world = response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, rect, viewport_size, camera));

        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }

    let pick_radius =
        camera.pick_radius_world(viewport_size[1], state.options.marker_pick_radius_px);

    // Linksklick: Marker treffen oder freie Fläche
    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let world_pos = screen_pos_to_world(pointer_pos, rect, viewport_size, camera);

            match state.registry.nearest_visible_within(world_pos, pick_radius) {
                Some(id) => events.push(AppIntent::MarkerClicked { id }),
                None => events.push(AppIntent::MapClicked {
                    world_pos: GeoPos::from_world(world_pos),
                }),
            }
        }
    }

    // Rechtsklick: Kontextmenü an der Klickposition anfordern
    if response.secondary_clicked() {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let world_pos = screen_pos_to_world(pointer_pos, rect, viewport_size, camera);
            let screen_pos = [pointer_pos.x, pointer_pos.y];

            match state.registry.nearest_visible_within(world_pos, pick_radius) {
                Some(id) => events.push(AppIntent::MarkerContextRequested { id, screen_pos }),
                None => events.push(AppIntent::BackgroundContextRequested {
                    world_pos: GeoPos::from_world(world_pos),
                    screen_pos,
                }),
            }
        }
    }
}

/// Rechnet eine absolute Bildschirmposition in Weltkoordinaten um.
fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    rect: egui::Rect,
    viewport_size: [f32; 2],
    camera: &GeoCamera,
) -> DVec2 {
    let local = pointer_pos - rect.min;
    camera.screen_to_world([local.x, local.y], viewport_size)
}

fn paint_map(ui: &egui::Ui, rect: egui::Rect, viewport_size: [f32; 2], state: &AppState) {
    let painter = ui.painter_at(rect);
    let camera = &state.view.camera;
    let now = Instant::now();

    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(24, 28, 34));
    paint_grid(&painter, rect, viewport_size, camera);

    let selected = state.overlay.selected_marker;
    let normal_color = color32(state.options.marker_color);
    let selected_color = color32(state.options.marker_color_selected);

    // Selektierter Marker zuletzt, damit er oben liegt
    let mut deferred = None;

    for marker in state.registry.markers().filter(|m| m.visible) {
        if Some(marker.id) == selected {
            deferred = Some(marker);
            continue;
        }
        paint_marker(
            &painter,
            rect,
            viewport_size,
            state,
            marker.position,
            marker.id,
            normal_color,
            now,
        );
    }

    if let Some(marker) = deferred {
        paint_marker(
            &painter,
            rect,
            viewport_size,
            state,
            marker.position,
            marker.id,
            selected_color,
            now,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_marker(
    painter: &egui::Painter,
    rect: egui::Rect,
    viewport_size: [f32; 2],
    state: &AppState,
    position: GeoPos,
    id: MarkerId,
    fill: egui::Color32,
    now: Instant,
) {
    let screen = state
        .view
        .camera
        .world_to_screen(position.to_world(), viewport_size);
    let anchor = egui::pos2(rect.min.x + screen[0], rect.min.y + screen[1]);

    if !rect.expand(BOUNCE_AMPLITUDE_PX + 32.0).contains(anchor) {
        return;
    }

    let bounce = bounce_offset_px(state.view.bounce, id, now);
    let anchor = egui::pos2(anchor.x, anchor.y + bounce);

    paint_marker_pin(painter, anchor, state.options.marker_size_px, fill);
}

fn paint_marker_pin(painter: &egui::Painter, anchor: egui::Pos2, size_px: f32, fill: egui::Color32) {
    let head_center = egui::pos2(anchor.x, anchor.y - size_px * 1.8);
    let outline = egui::Stroke::new(1.5, egui::Color32::from_gray(20));

    painter.line_segment([anchor, head_center], egui::Stroke::new(2.0, fill));
    painter.circle(head_center, size_px, fill, outline);
    painter.circle_filled(head_center, size_px * 0.35, egui::Color32::WHITE);
}

/// Vertikaler Pixel-Offset der Bounce-Animation (negativ = nach oben).
fn bounce_offset_px(bounce: Option<BounceState>, id: MarkerId, now: Instant) -> f32 {
    let Some(bounce) = bounce else {
        return 0.0;
    };
    if bounce.marker_id != id {
        return 0.0;
    }

    let elapsed = now.duration_since(bounce.started).as_secs_f32();
    if elapsed >= BOUNCE_DURATION_SECS {
        return 0.0;
    }

    -(std::f32::consts::PI * elapsed / BOUNCE_CYCLE_SECS).sin().abs() * BOUNCE_AMPLITUDE_PX
}

fn paint_grid(
    painter: &egui::Painter,
    rect: egui::Rect,
    viewport_size: [f32; 2],
    camera: &GeoCamera,
) {
    let dpp = camera.degrees_per_pixel(viewport_size[1]);
    let step = nice_grid_step(dpp * f64::from(GRID_TARGET_SPACING_PX));
    if !(step > 0.0) {
        return;
    }

    let top_left = camera.screen_to_world([0.0, 0.0], viewport_size);
    let bottom_right = camera.screen_to_world([viewport_size[0], viewport_size[1]], viewport_size);
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(44));

    let mut lng = (top_left.x / step).floor() * step;
    while lng <= bottom_right.x {
        let x = camera.world_to_screen(DVec2::new(lng, camera.center.y), viewport_size)[0];
        let x = rect.min.x + x;
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            stroke,
        );
        lng += step;
    }

    // bottom_right.y ist der kleinste sichtbare Breitengrad
    let mut lat = (bottom_right.y / step).floor() * step;
    while lat <= top_left.y {
        let y = camera.world_to_screen(DVec2::new(camera.center.x, lat), viewport_size)[1];
        let y = rect.min.y + y;
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            stroke,
        );
        lat += step;
    }
}

/// Rundet eine rohe Schrittweite auf 1/2/5-Vielfache einer Zehnerpotenz.
fn nice_grid_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }

    let exponent = raw.log10().floor();
    let base = 10f64.powf(exponent);
    let mantissa = raw / base;

    let factor = if mantissa < 1.5 {
        1.0
    } else if mantissa < 3.5 {
        2.0
    } else if mantissa < 7.5 {
        5.0
    } else {
        10.0
    };

    base * factor
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
