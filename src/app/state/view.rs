use std::time::Instant;

use crate::core::{GeoCamera, MarkerId};
use crate::shared::BOUNCE_DURATION_SECS;

/// Laufende Sprung-Animation eines Markers
#[derive(Debug, Clone, Copy)]
pub struct BounceState {
    /// Marker, der animiert wird
    pub marker_id: MarkerId,
    /// Startzeitpunkt der Animation
    pub started: Instant,
}

/// View-bezogener Anwendungszustand
pub struct ViewState {
    /// Geo-Kamera für die Kartenansicht
    pub camera: GeoCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Laufende Sprung-Animation (None = keine)
    pub bounce: Option<BounceState>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: GeoCamera::new(),
            viewport_size: [0.0, 0.0],
            bounce: None,
        }
    }

    /// True, solange die Sprung-Animation noch läuft.
    pub fn bounce_active(&self, now: Instant) -> bool {
        self.bounce.is_some_and(|b| {
            now.duration_since(b.started).as_secs_f32() < BOUNCE_DURATION_SECS
        })
    }

    /// Entfernt eine abgelaufene Sprung-Animation.
    pub fn prune_bounce(&mut self, now: Instant) {
        if !self.bounce_active(now) {
            self.bounce = None;
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
