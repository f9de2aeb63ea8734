//! Persistenz des Marker-Bestands.
//!
//! [`records`] definiert das JSON-Format des Slots, [`store`] die
//! austauschbare Ablage (Datei oder In-Memory).

pub mod records;
pub mod store;

pub use records::{decode, encode, DEFAULT_MARKERS, STORE_KEY};
pub use store::{FileStore, MarkerStore, MemoryStore};
