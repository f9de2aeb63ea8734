use crate::core::{GeoPos, MarkerId};
use crate::shared::AppOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Suchtext der Markerliste wurde geändert
    SearchChanged { text: String },
    /// Linksklick auf freie Kartenfläche
    MapClicked { world_pos: GeoPos },
    /// Linksklick auf einen Marker
    MarkerClicked { id: MarkerId },
    /// Rechtsklick auf freie Kartenfläche (Kontextmenü)
    BackgroundContextRequested {
        world_pos: GeoPos,
        screen_pos: [f32; 2],
    },
    /// Rechtsklick auf einen Marker (Kontextmenü)
    MarkerContextRequested {
        id: MarkerId,
        screen_pos: [f32; 2],
    },
    /// Kontextmenü: Marker an der angeklickten Position anlegen
    AddMarkerHereRequested { world_pos: GeoPos },
    /// Kontextmenü: Marker umbenennen (Detailansicht mit Fokus im Namensfeld)
    RenameRequested { id: MarkerId },
    /// Kontextmenü: Marker entfernen
    RemoveRequested { id: MarkerId },
    /// Kontextmenü: Umgebung des Markers analysieren
    AnalyzeRequested { id: MarkerId },
    /// Listeneintrag wurde angeklickt (Index bezieht sich auf die Gesamtliste)
    ListRowActivated { original_index: usize },
    /// Namensfeld der Detailansicht wurde editiert
    DetailNameEdited { text: String },
    /// Offene Overlays schließen (Escape oder Schließen-Knopf)
    OverlayDismissRequested,
    /// Selektierten Marker löschen
    DeleteSelectedRequested,
    /// Hilfe-Panel öffnen
    HelpRequested,
    /// Markerliste ein-/ausblenden
    PanelToggleRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_world: Option<glam::DVec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: AppOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
