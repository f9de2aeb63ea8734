//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::AppOptions;
pub use options::{BOUNCE_DURATION_SECS, DEFAULT_MARKER_TITLE};
