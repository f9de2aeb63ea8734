//! Zentrale Datenhaltung der Anwendung.

mod app_state;
mod layout;
mod overlay;
mod search;
mod view;

pub use app_state::AppState;
pub use layout::LayoutState;
pub use overlay::{ActiveOverlay, ContextMenuState, MenuVariant, OverlayState};
pub use search::SearchState;
pub use view::{BounceState, ViewState};
