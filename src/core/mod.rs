//! Core-Domänentypen: Marker, Registry, Filter, Kamera.

pub mod camera;
pub mod filter;
pub mod geo;
pub mod marker;
pub mod registry;

pub use camera::GeoCamera;
pub use geo::GeoPos;
pub use marker::{Marker, MarkerId, MarkerRecord};
pub use registry::{ListEntry, MarkerRegistry, RegistryError};
