//! Handler für Filter und Listenprojektion.

use crate::app::AppState;
use crate::core::filter;

/// Übernimmt neuen Suchtext und berechnet die Sichtbarkeit neu.
pub fn apply_filter(state: &mut AppState, text: String) {
    state.search.text = text;
    refresh(state);
}

/// Berechnet Sichtbarkeit und Listenprojektion aus dem aktuellen Suchtext.
///
/// Der Filter ist der einzige Schreiber der Marker-Sichtbarkeit; jede
/// Bestandsänderung ruft diese Funktion erneut auf.
pub fn refresh(state: &mut AppState) {
    let matching = filter::filter_indices(state.registry.entries(), &state.search.text);

    let decisions: Vec<_> = (0..state.registry.len())
        .filter_map(|index| {
            state
                .registry
                .id_at(index)
                .map(|id| (id, matching.contains(&index)))
        })
        .collect();
    for (id, visible) in decisions {
        if let Err(e) = state.registry.set_visibility(id, visible) {
            log::debug!("Sichtbarkeit nicht aktualisiert: {e}");
        }
    }

    state.search.filtered = state
        .registry
        .entries()
        .iter()
        .filter(|entry| entry.visible)
        .cloned()
        .collect();
}
