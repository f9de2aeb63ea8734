//! JSON-Codec für den persistenten Marker-Bestand.
//!
//! Gespeichert wird ein Array aus `{"position": {"lat", "lng"}, "title"}`
//! in kanonischer Reihenfolge, unter dem Slot-Namen `local_markers`.

use crate::core::{GeoPos, MarkerRecord};

/// Slot-Name des Marker-Bestands im Store.
pub const STORE_KEY: &str = "local_markers";

/// Standard-Marker für die erste Sitzung (leerer Store).
pub const DEFAULT_MARKERS: [(GeoPos, &str); 5] = [
    (GeoPos::new(40.7127, -74.0134), "World Trade Center"),
    (GeoPos::new(40.7484, -73.9857), "Empire State Building"),
    (GeoPos::new(40.7548, -73.9774), "The Roosevelt Hotel"),
    (GeoPos::new(40.7587, -73.9787), "Rockefeller Center"),
    (GeoPos::new(40.6892, -74.0445), "Statue of Liberty"),
];

/// Serialisiert Records als JSON-Array.
pub fn encode(records: &[MarkerRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// Parst einen gespeicherten JSON-Bestand.
pub fn decode(payload: &str) -> serde_json::Result<Vec<MarkerRecord>> {
    serde_json::from_str(payload)
}
