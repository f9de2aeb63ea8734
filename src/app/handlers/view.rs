//! Handler für Kamera, Viewport und Listen-Layout.

use crate::app::AppState;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by(state.options.camera_zoom_step);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by(1.0 / state.options.camera_zoom_step);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: glam::DVec2) {
    state.view.camera.pan(delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_world: Option<glam::DVec2>) {
    state.view.camera.zoom_towards(factor, focus_world);
}

/// Aktualisiert die Viewport-Größe und prüft die Layout-Schwelle.
///
/// Die Liste reagiert nur auf das Überqueren der Schwelle; innerhalb
/// eines Regimes bleibt ein manuell gewählter Zustand erhalten.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;

    let width = size[0];
    let breakpoint = state.options.narrow_layout_breakpoint_px;
    match state.layout.last_width {
        None => {
            // Erste Größenmeldung legt den Zustand absolut fest.
            state.layout.list_panel_visible = width >= breakpoint;
        }
        Some(last_width) => {
            let was_narrow = last_width < breakpoint;
            let is_narrow = width < breakpoint;
            if is_narrow != was_narrow {
                state.layout.list_panel_visible = !is_narrow;
                log::debug!(
                    "Layout-Schwelle überquert ({last_width:.0}px -> {width:.0}px), Markerliste {}",
                    if is_narrow { "ausgeblendet" } else { "eingeblendet" }
                );
            }
        }
    }
    state.layout.last_width = Some(width);
}

/// Blendet die Markerliste unabhängig von der Layout-Schwelle um.
pub fn toggle_list_panel(state: &mut AppState) {
    state.layout.list_panel_visible = !state.layout.list_panel_visible;
}
