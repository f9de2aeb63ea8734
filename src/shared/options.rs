//! Zentrale Konfiguration für den Map-Marker-Editor.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Umgebungssuche ──────────────────────────────────────────────────

/// Suchradius für Orte in der Umgebung eines Markers (Meter).
pub const PLACES_SEARCH_RADIUS_M: u32 = 250;
/// Kleinster einstellbarer Suchradius (Meter).
pub const PLACES_SEARCH_RADIUS_MIN_M: u32 = 50;
/// Größter einstellbarer Suchradius (Meter).
pub const PLACES_SEARCH_RADIUS_MAX_M: u32 = 1000;
/// Maximal angezeigte Wikipedia-Links pro Ort.
pub const WIKI_LINK_CAP: usize = 10;
/// Logischer Timeout pro Link-Abfrage (Sekunden). Antworten danach
/// werden verworfen.
pub const LOOKUP_TIMEOUT_SECS: u32 = 8;

// ── Layout ──────────────────────────────────────────────────────────

/// Viewport-Breite (Pixel), unterhalb derer die Marker-Liste
/// automatisch ausgeblendet wird.
pub const NARROW_LAYOUT_BREAKPOINT_PX: f32 = 600.0;

// ── Marker-Darstellung ──────────────────────────────────────────────

/// Pin-Radius in Screen-Pixeln.
pub const MARKER_SIZE_PX: f32 = 7.0;
/// Pick-Radius für Klick-Treffer in Screen-Pixeln.
pub const MARKER_PICK_RADIUS_PX: f32 = 14.0;
/// Füllfarbe der Marker-Pins (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [0.85, 0.15, 0.15, 1.0];
/// Füllfarbe des selektierten Pins (RGBA: Orange).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.6, 0.1, 1.0];

/// Dauer der Bounce-Animation nach Marker-Auswahl (Sekunden, zwei Sprünge).
pub const BOUNCE_DURATION_SECS: f32 = 1.4;
/// Maximale Sprunghöhe der Bounce-Animation in Pixeln.
pub const BOUNCE_AMPLITUDE_PX: f32 = 18.0;

/// Titel für neu per Klick angelegte Marker.
pub const DEFAULT_MARKER_TITLE: &str = "New Marker";

// ── Kamera ──────────────────────────────────────────────────────────

/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `map_marker_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppOptions {
    // ── Umgebungssuche ──────────────────────────────────────────
    /// Suchradius für Orte in der Umgebung (Meter)
    pub places_radius_m: u32,
    /// Maximal angezeigte Wikipedia-Links pro Ort
    pub wiki_link_cap: usize,
    /// Logischer Timeout pro Link-Abfrage (Sekunden)
    pub lookup_timeout_secs: u32,

    // ── Layout ──────────────────────────────────────────────────
    /// Breakpoint für das automatische Ausblenden der Marker-Liste (Pixel)
    pub narrow_layout_breakpoint_px: f32,

    // ── Marker ──────────────────────────────────────────────────
    /// Pin-Radius in Screen-Pixeln
    pub marker_size_px: f32,
    /// Pick-Radius für Klick-Treffer in Screen-Pixeln
    pub marker_pick_radius_px: f32,
    /// Füllfarbe der Marker-Pins
    pub marker_color: [f32; 4],
    /// Füllfarbe des selektierten Pins
    pub marker_color_selected: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            places_radius_m: PLACES_SEARCH_RADIUS_M,
            wiki_link_cap: WIKI_LINK_CAP,
            lookup_timeout_secs: LOOKUP_TIMEOUT_SECS,

            narrow_layout_breakpoint_px: NARROW_LAYOUT_BREAKPOINT_PX,

            marker_size_px: MARKER_SIZE_PX,
            marker_pick_radius_px: MARKER_PICK_RADIUS_PX,
            marker_color: MARKER_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,

            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_marker_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_marker_editor.toml")
    }

    /// Suchradius auf den gültigen Bereich begrenzt.
    pub fn clamped_places_radius_m(&self) -> u32 {
        self.places_radius_m
            .clamp(PLACES_SEARCH_RADIUS_MIN_M, PLACES_SEARCH_RADIUS_MAX_M)
    }

    /// Logischer Lookup-Timeout als `Duration`.
    pub fn lookup_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.lookup_timeout_secs.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_toml_roundtrip() {
        let mut opts = AppOptions::default();
        opts.places_radius_m = 500;
        opts.wiki_link_cap = 5;

        let toml_text = toml::to_string_pretty(&opts).expect("Optionen sollten serialisierbar sein");
        let back: AppOptions =
            toml::from_str(&toml_text).expect("Optionen sollten deserialisierbar sein");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_radius_clamped_to_valid_range() {
        let mut opts = AppOptions::default();
        opts.places_radius_m = 5;
        assert_eq!(opts.clamped_places_radius_m(), PLACES_SEARCH_RADIUS_MIN_M);
        opts.places_radius_m = 99_999;
        assert_eq!(opts.clamped_places_radius_m(), PLACES_SEARCH_RADIUS_MAX_M);
    }
}
