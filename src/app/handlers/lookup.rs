//! Handler für die Umgebungsanalyse der Detailansicht.

use crate::app::AppState;
use crate::core::{GeoPos, MarkerId};
use crate::lookup::AreaLookupSession;

/// Startet die Umgebungsanalyse für den selektierten Marker.
pub fn start_area_lookup(state: &mut AppState, id: MarkerId, center: GeoPos) {
    state.overlay.area_lookup = Some(AreaLookupSession::start(
        id,
        center,
        &state.services,
        &state.options,
    ));
}

/// Zieht pro Frame eingegangene Analyse-Ergebnisse ab und prüft Fristen.
///
/// Gibt true zurück, wenn sich der sichtbare Zustand geändert hat.
pub fn pump(state: &mut AppState) -> bool {
    let Some(session) = state.overlay.area_lookup.as_mut() else {
        return false;
    };
    session.pump(&state.services, &state.options)
}
