//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Marker, Overlays, View).
pub mod state;

pub use crate::core::{GeoCamera, GeoPos, MarkerId, MarkerRegistry};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{ActiveOverlay, AppState, MenuVariant, OverlayState, ViewState};
