use crate::core::{GeoPos, MarkerId};
use crate::lookup::AreaLookupSession;

/// Welche Overlay-Fläche gerade offen ist. Es ist höchstens eine offen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveOverlay {
    /// Kein Overlay offen
    #[default]
    None,
    /// Kontextmenü (Hintergrund- oder Marker-Variante)
    ContextMenu,
    /// Detailansicht des selektierten Markers
    MarkerDetail,
    /// Hilfe-Panel
    HelpPanel,
}

/// Inhaltsvariante des Kontextmenüs, beim Öffnen eingefroren.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuVariant {
    /// Rechtsklick auf freie Kartenfläche
    Background { world_pos: GeoPos },
    /// Rechtsklick auf einen Marker
    Marker { marker_id: MarkerId },
}

/// Zustand des offenen Kontextmenüs
#[derive(Debug, Clone, Copy)]
pub struct ContextMenuState {
    /// Bildschirmposition der oberen linken Ecke
    pub screen_pos: [f32; 2],
    /// Eingefrorene Inhaltsvariante
    pub variant: MenuVariant,
}

/// Overlay-bezogener Anwendungszustand
#[derive(Default)]
pub struct OverlayState {
    /// Aktive Overlay-Fläche
    pub active: ActiveOverlay,
    /// Selektierter Marker (bleibt über das Schließen der Ansicht hinaus erhalten)
    pub selected_marker: Option<MarkerId>,
    /// Arbeitskopie des Namens in der Detailansicht
    pub rename_buffer: String,
    /// Namensfeld beim nächsten Frame fokussieren
    pub focus_rename: bool,
    /// Offenes Kontextmenü (None = geschlossen)
    pub context_menu: Option<ContextMenuState>,
    /// Laufende Umgebungsanalyse der Detailansicht
    pub area_lookup: Option<AreaLookupSession>,
}

impl OverlayState {
    /// Erstellt den Standard-Overlay-Zustand (alles geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// True, wenn irgendeine Overlay-Fläche offen ist.
    pub fn is_any_open(&self) -> bool {
        self.active != ActiveOverlay::None
    }
}
