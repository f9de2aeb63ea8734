//! Handler für Overlays: Kontextmenü, Detailansicht, Hilfe-Panel.

use std::time::Instant;

use crate::app::handlers::lookup;
use crate::app::state::{ActiveOverlay, BounceState, ContextMenuState, MenuVariant};
use crate::app::AppState;
use crate::core::{MarkerId, RegistryError};

/// Schließt alle Overlays und verwirft eine laufende Analyse.
///
/// Gibt zurück, ob vorher etwas offen war. Die Selektion bleibt erhalten.
pub fn close_all(state: &mut AppState) -> bool {
    let was_open = state.overlay.is_any_open();
    state.overlay.active = ActiveOverlay::None;
    state.overlay.context_menu = None;
    state.overlay.focus_rename = false;
    if let Some(session) = state.overlay.area_lookup.take() {
        log::debug!(
            "Umgebungsanalyse verworfen (Marker {}, Generation {})",
            session.marker_id(),
            session.generation()
        );
    }
    was_open
}

/// Öffnet das Kontextmenü an der Bildschirmposition.
///
/// Die Inhaltsvariante wird beim Öffnen eingefroren.
pub fn open_context_menu(state: &mut AppState, variant: MenuVariant, screen_pos: [f32; 2]) {
    close_all(state);
    state.overlay.context_menu = Some(ContextMenuState {
        screen_pos,
        variant,
    });
    state.overlay.active = ActiveOverlay::ContextMenu;
}

/// Öffnet das Hilfe-Panel.
pub fn open_help(state: &mut AppState) {
    close_all(state);
    state.overlay.active = ActiveOverlay::HelpPanel;
}

/// Selektiert einen Marker: zentriert die Kamera, startet die
/// Sprung-Animation, öffnet die Detailansicht und die Umgebungsanalyse.
pub fn select_marker(state: &mut AppState, id: MarkerId, focus_rename: bool) -> anyhow::Result<()> {
    let marker = state.registry.get(id).ok_or(RegistryError::NotFound(id))?;
    let position = marker.position;
    let title = marker.title.clone();

    close_all(state);
    state.overlay.selected_marker = Some(id);
    state.view.camera.look_at(position.to_world());
    start_bounce(state, id);
    state.overlay.rename_buffer = title;
    state.overlay.focus_rename = focus_rename;
    state.overlay.active = ActiveOverlay::MarkerDetail;
    lookup::start_area_lookup(state, id, position);
    Ok(())
}

/// Startet die Sprung-Animation. Läuft sie für denselben Marker noch,
/// bleibt der Startzeitpunkt unverändert.
fn start_bounce(state: &mut AppState, id: MarkerId) {
    let now = Instant::now();
    let same_marker_running =
        state.view.bounce_active(now) && state.view.bounce.is_some_and(|b| b.marker_id == id);
    if same_marker_running {
        return;
    }
    state.view.bounce = Some(BounceState {
        marker_id: id,
        started: now,
    });
}
