use super::super::state::MenuVariant;
use crate::core::{GeoPos, MarkerId};
use crate::shared::AppOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Marker an Position anlegen und persistieren
    AddMarker { position: GeoPos, title: String },
    /// Marker umbenennen und persistieren
    RenameMarker { id: MarkerId, title: String },
    /// Marker entfernen und persistieren
    RemoveMarker { id: MarkerId },
    /// Filtertext anwenden und Sichtbarkeit neu berechnen
    ApplyFilter { text: String },
    /// Bestand aus dem Store laden, bei leerem Store Standardmarker anlegen
    LoadStoredMarkers,
    /// Kontextmenü an Bildschirmposition öffnen
    OpenContextMenu {
        variant: MenuVariant,
        screen_pos: [f32; 2],
    },
    /// Marker selektieren: zentrieren, anspringen, Detailansicht öffnen
    SelectMarker { id: MarkerId, focus_rename: bool },
    /// Alle Overlays schließen und laufende Analyse verwerfen
    CloseAllOverlays,
    /// Hilfe-Panel öffnen
    OpenHelp,
    /// Selektierten Marker löschen
    DeleteSelectedMarker,
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::DVec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f64,
        focus_world: Option<glam::DVec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen und Layout-Schwelle prüfen
    SetViewportSize { size: [f32; 2] },
    /// Markerliste ein-/ausblenden
    ToggleListPanel,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: AppOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
