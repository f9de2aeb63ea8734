//! 2D-Kamera über der Karte: Pan und Zoom in geographischen Koordinaten.

use glam::DVec2;

/// Kamera mit Pan und Zoom.
///
/// Welt-Koordinaten sind Grad: x = Längengrad, y = Breitengrad.
/// Screen-Koordinaten laufen nach unten, Breitengrade nach oben;
/// die Umrechnung negiert deshalb die y-Achse.
#[derive(Debug, Clone)]
pub struct GeoCamera {
    /// Kamera-Zentrum in Welt-Koordinaten (Längengrad, Breitengrad)
    pub center: DVec2,
    /// Zoom-Level (1.0 = BASE_EXTENT_DEG Halbhöhe sichtbar)
    pub zoom: f64,
}

impl GeoCamera {
    /// Sichtbare Welt-Halbhöhe in Grad bei Zoom 1.0.
    pub const BASE_EXTENT_DEG: f64 = 0.08;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.05;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 64.0;

    /// Start-Zentrum der Karte (Lower Manhattan).
    pub const START_CENTER: DVec2 = DVec2::new(-74.005466, 40.710992);
    /// Start-Zoom beim Anwendungsstart.
    pub const START_ZOOM: f64 = 8.0;

    /// Erstellt die Kamera in der Start-Ansicht.
    pub fn new() -> Self {
        Self {
            center: Self::START_CENTER,
            zoom: Self::START_ZOOM,
        }
    }

    /// Zentriert die Kamera auf einen Punkt.
    pub fn look_at(&mut self, target: DVec2) {
        self.center = target;
    }

    /// Verschiebt die Kamera (Pan) um ein Welt-Delta.
    pub fn pan(&mut self, delta: DVec2) {
        self.center += delta;
    }

    /// Ändert den Zoom-Level um einen Faktor.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt um einen Faktor und hält dabei den Fokuspunkt fest,
    /// damit die Stelle unter dem Mauszeiger stehen bleibt.
    pub fn zoom_towards(&mut self, factor: f64, focus_world: Option<DVec2>) {
        let old_zoom = self.zoom;
        self.zoom_by(factor);
        let applied = self.zoom / old_zoom;
        if let Some(focus) = focus_world {
            self.center = focus + (self.center - focus) / applied;
        }
    }

    /// Grad pro Screen-Pixel bei aktueller Viewport-Höhe.
    pub fn degrees_per_pixel(&self, viewport_height: f32) -> f64 {
        let vh = f64::from(viewport_height.max(1.0));
        2.0 * Self::BASE_EXTENT_DEG / (self.zoom * vh)
    }

    /// Pick-Radius in Welt-Einheiten (Grad) für Marker-Hit-Tests.
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f64 {
        f64::from(pick_radius_px) * self.degrees_per_pixel(viewport_height)
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport-Ursprung)
    /// in Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: [f32; 2], viewport_size: [f32; 2]) -> DVec2 {
        let dpp = self.degrees_per_pixel(viewport_size[1]);
        let dx = f64::from(screen_pos[0] - viewport_size[0] / 2.0) * dpp;
        let dy = f64::from(screen_pos[1] - viewport_size[1] / 2.0) * dpp;
        DVec2::new(self.center.x + dx, self.center.y - dy)
    }

    /// Konvertiert Welt-Koordinaten in Screen-Koordinaten
    /// (relativ zum Viewport-Ursprung).
    pub fn world_to_screen(&self, world_pos: DVec2, viewport_size: [f32; 2]) -> [f32; 2] {
        let dpp = self.degrees_per_pixel(viewport_size[1]);
        let x = viewport_size[0] / 2.0 + ((world_pos.x - self.center.x) / dpp) as f32;
        let y = viewport_size[1] / 2.0 - ((world_pos.y - self.center.y) / dpp) as f32;
        [x, y]
    }
}

impl Default for GeoCamera {
    fn default() -> Self {
        Self::new()
    }
}
