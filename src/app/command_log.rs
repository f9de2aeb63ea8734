//! Protokoll aller ausgeführten Commands.
//!
//! Dient der Nachvollziehbarkeit in Tests und als Ansatzpunkt für ein
//! späteres Undo. Das Log hält eine Kopie jedes Commands in
//! Ausführungsreihenfolge und deckelt seinen Umfang.

use super::AppCommand;

/// Chronik der ausgeführten Commands.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Protokolliert einen Command vor seiner Ausführung.
    ///
    /// Läuft das Log voll, fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Anzahl der protokollierten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True, wenn noch nichts protokolliert wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf alle Einträge in Ausführungsreihenfolge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
