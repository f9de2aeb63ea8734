//! Map Marker Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod lookup;
pub mod shared;
pub mod storage;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use core::{GeoCamera, GeoPos, ListEntry, Marker, MarkerId, MarkerRecord, MarkerRegistry};
pub use lookup::{AreaLookupSession, LookupPhase, LookupServices, NearbyPlace, RelatedLink};
pub use shared::AppOptions;
pub use storage::{FileStore, MarkerStore, MemoryStore};
