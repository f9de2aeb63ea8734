//! Marker-Datentypen: Laufzeit-Marker und persistente Records.

use serde::{Deserialize, Serialize};

use super::GeoPos;

/// Stabile Identität eines Markers innerhalb einer Sitzung.
///
/// IDs werden von der Registry fortlaufend vergeben und nie wiederverwendet,
/// auch nicht nach dem Entfernen eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(u64);

impl MarkerId {
    /// Erstellt eine ID aus einem Rohwert (Registry-intern und Tests).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Gibt den Rohwert der ID zurück.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein Karten-Marker mit Position, Titel und Sichtbarkeit.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Stabile ID (sitzungsweit eindeutig)
    pub id: MarkerId,
    /// Geographische Position
    pub position: GeoPos,
    /// Anzeigename
    pub title: String,
    /// Sichtbarkeit auf der Karte (wird vom Filter gesteuert)
    pub visible: bool,
}

/// Persistente Projektion eines Markers.
///
/// Entspricht exakt dem gespeicherten JSON-Format
/// `{"position": {"lat": .., "lng": ..}, "title": ".."}`.
/// Sichtbarkeit und ID werden bewusst nicht gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// Geographische Position
    pub position: GeoPos,
    /// Anzeigename
    pub title: String,
}
