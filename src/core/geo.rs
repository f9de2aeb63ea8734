//! Geographische Position (WGS-84) als Basistyp für Marker und Kamera.

use serde::{Deserialize, Serialize};

/// Geographische Koordinate in Grad (WGS-84).
///
/// Die Feldnamen `lat`/`lng` sind Teil des persistenten Store-Formats
/// und dürfen nicht umbenannt werden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPos {
    /// Breitengrad in Grad (positiv = Nord)
    pub lat: f64,
    /// Längengrad in Grad (positiv = Ost)
    pub lng: f64,
}

impl GeoPos {
    /// Erstellt eine Position aus Breiten- und Längengrad.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Konvertiert in Welt-Koordinaten der Kamera (x = Längengrad, y = Breitengrad).
    pub fn to_world(self) -> glam::DVec2 {
        glam::DVec2::new(self.lng, self.lat)
    }

    /// Erstellt eine Position aus Welt-Koordinaten der Kamera.
    pub fn from_world(world: glam::DVec2) -> Self {
        Self {
            lat: world.y,
            lng: world.x,
        }
    }
}

impl std::fmt::Display for GeoPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_roundtrip_keeps_axes() {
        let pos = GeoPos::new(40.7127, -74.0134);
        let world = pos.to_world();
        assert_eq!(world.x, -74.0134);
        assert_eq!(world.y, 40.7127);
        assert_eq!(GeoPos::from_world(world), pos);
    }

    #[test]
    fn test_serde_uses_lat_lng_field_names() {
        let pos = GeoPos::new(40.7484, -73.9857);
        let json = serde_json::to_string(&pos).expect("GeoPos sollte serialisierbar sein");
        assert_eq!(json, r#"{"lat":40.7484,"lng":-73.9857}"#);

        let back: GeoPos = serde_json::from_str(&json).expect("GeoPos sollte deserialisierbar sein");
        assert_eq!(back, pos);
    }
}
