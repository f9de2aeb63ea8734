//! Store-Abstraktion für den persistenten Marker-Bestand.
//!
//! Der Store ist ein einzelner benannter Slot mit einem JSON-String.
//! Schreibfehler sind nicht fatal: die Sitzung läuft im Speicher weiter.

use std::path::PathBuf;

use super::records::STORE_KEY;

/// Persistenter Slot für den Marker-Bestand.
pub trait MarkerStore {
    /// Liest den Slot. `None` = Slot existiert (noch) nicht.
    fn load(&self) -> anyhow::Result<Option<String>>;

    /// Schreibt den Slot vollständig neu.
    fn save(&mut self, payload: &str) -> anyhow::Result<()>;
}

/// Datei-basierter Store: `local_markers.json` neben der Binary.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Erstellt einen Store für den angegebenen Datei-Pfad.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Ermittelt den Standard-Pfad neben der Binary.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("map_marker_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(format!("{STORE_KEY}.json"))
    }
}

impl MarkerStore for FileStore {
    fn load(&self) -> anyhow::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Store-Datei nicht lesbar: {}", self.path.display()))),
        }
    }

    fn save(&mut self, payload: &str) -> anyhow::Result<()> {
        std::fs::write(&self.path, payload).map_err(|e| {
            anyhow::Error::new(e)
                .context(format!("Store-Datei nicht schreibbar: {}", self.path.display()))
        })
    }
}

/// In-Memory-Store für Tests und als Fallback ohne Dateizugriff.
#[derive(Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// Erstellt einen leeren In-Memory-Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Store mit vorbefülltem Slot.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }
}

impl MarkerStore for MemoryStore {
    fn load(&self) -> anyhow::Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, payload: &str) -> anyhow::Result<()> {
        self.slot = Some(payload.to_string());
        Ok(())
    }
}
