use crate::core::ListEntry;

/// Zustand der Suche über die Markerliste
#[derive(Default)]
pub struct SearchState {
    /// Aktueller Suchtext
    pub text: String,
    /// Sichtbare Listeneinträge in kanonischer Reihenfolge
    pub filtered: Vec<ListEntry>,
}

impl SearchState {
    /// Erstellt den Standard-Such-Zustand (leerer Suchtext).
    pub fn new() -> Self {
        Self::default()
    }
}
