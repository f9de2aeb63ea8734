//! Handler für den Marker-Bestand und dessen Persistenz.

use crate::app::handlers::{overlay, search};
use crate::app::AppState;
use crate::core::{GeoPos, MarkerId, MarkerRecord};
use crate::storage;

/// Warnung beim ersten fehlgeschlagenen Store-Zugriff.
const STORE_WARNING: &str =
    "Marker können nicht gespeichert werden; Änderungen gelten nur für diese Sitzung.";

/// Legt einen Marker an, persistiert und aktualisiert die Liste.
pub fn add(state: &mut AppState, position: GeoPos, title: String) {
    let id = state.registry.add(position, title);
    log::info!("Marker {id} bei {position} angelegt");
    search::refresh(state);
    persist(state);
}

/// Benennt einen Marker um, persistiert und aktualisiert die Liste.
pub fn rename(state: &mut AppState, id: MarkerId, title: String) -> anyhow::Result<()> {
    state.registry.rename(id, title)?;
    search::refresh(state);
    persist(state);
    Ok(())
}

/// Entfernt einen Marker, persistiert und aktualisiert die Liste.
///
/// Ist der entfernte Marker selektiert, schließt auch die Detailansicht.
pub fn remove(state: &mut AppState, id: MarkerId) -> anyhow::Result<()> {
    let removed = state.registry.remove(id)?;
    log::info!("Marker {id} entfernt: {}", removed.title);
    if state.overlay.selected_marker == Some(id) {
        overlay::close_all(state);
        state.overlay.selected_marker = None;
    }
    search::refresh(state);
    persist(state);
    Ok(())
}

/// Löscht den aktuell selektierten Marker.
pub fn delete_selected(state: &mut AppState) -> anyhow::Result<()> {
    if let Some(id) = state.overlay.selected_marker {
        remove(state, id)?;
    }
    Ok(())
}

/// Lädt den Bestand aus dem Store oder legt die Standardmarker an.
///
/// Leerer, fehlender oder unlesbarer Slot führt zum Standardbestand;
/// ein nicht erreichbarer Store zusätzlich zur einmaligen Warnung.
pub fn load_or_seed(state: &mut AppState) {
    let loaded = match state.store.load() {
        Ok(Some(payload)) => match storage::decode(&payload) {
            Ok(records) if !records.is_empty() => Some(records),
            Ok(_) => {
                log::info!("Store ist leer, Standardmarker werden angelegt");
                None
            }
            Err(e) => {
                log::warn!("Store-Inhalt unlesbar, Standardmarker werden angelegt: {e}");
                None
            }
        },
        Ok(None) => {
            log::info!("Kein Store-Slot vorhanden, Standardmarker werden angelegt");
            None
        }
        Err(e) => {
            log::warn!("Store nicht erreichbar: {e:#}");
            note_store_warning(state);
            None
        }
    };

    match loaded {
        Some(records) => {
            let count = records.len();
            state.registry.replace_from_records(records);
            log::info!("{count} Marker aus dem Store geladen");
            search::refresh(state);
        }
        None => {
            seed_defaults(state);
            search::refresh(state);
            persist(state);
        }
    }
}

fn seed_defaults(state: &mut AppState) {
    let records = storage::DEFAULT_MARKERS
        .iter()
        .map(|(position, title)| MarkerRecord {
            position: *position,
            title: (*title).to_string(),
        })
        .collect();
    state.registry.replace_from_records(records);
}

/// Schreibt den aktuellen Bestand in den Store.
///
/// Fehler sind nicht fatal: einmalige Warnung, Sitzung läuft weiter.
fn persist(state: &mut AppState) {
    let records = state.registry.records();
    let payload = match storage::encode(&records) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Marker-Bestand nicht serialisierbar: {e}");
            note_store_warning(state);
            return;
        }
    };
    if let Err(e) = state.store.save(&payload) {
        log::warn!("Store-Schreibzugriff fehlgeschlagen: {e:#}");
        note_store_warning(state);
    }
}

fn note_store_warning(state: &mut AppState) {
    if state.store_warning.is_none() {
        state.store_warning = Some(STORE_WARNING.to_string());
    }
}
