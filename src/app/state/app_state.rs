use crate::app::CommandLog;
use crate::core::MarkerRegistry;
use crate::lookup::LookupServices;
use crate::shared::AppOptions;
use crate::storage::{FileStore, MarkerStore};

use super::{LayoutState, OverlayState, SearchState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kanonischer Marker-Bestand mit Listenprojektion
    pub registry: MarkerRegistry,
    /// Such-State
    pub search: SearchState,
    /// Overlay-State (Kontextmenü, Detailansicht, Hilfe)
    pub overlay: OverlayState,
    /// View-State
    pub view: ViewState,
    /// Layout-State der Markerliste
    pub layout: LayoutState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radius, Fristen, Farben)
    pub options: AppOptions,
    /// Dienste der Umgebungsanalyse
    pub services: LookupServices,
    /// Persistenter Store für den Marker-Bestand
    pub store: Box<dyn MarkerStore>,
    /// Einmalige Warnung, wenn der Store nicht erreichbar ist
    pub store_warning: Option<String>,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den App-State mit Datei-Store und Wikipedia-Diensten.
    pub fn new() -> Self {
        Self::with_parts(
            Box::new(FileStore::new(FileStore::default_path())),
            LookupServices::live(),
        )
    }

    /// Erstellt den App-State mit austauschbarem Store und Diensten.
    pub fn with_parts(store: Box<dyn MarkerStore>, services: LookupServices) -> Self {
        Self {
            registry: MarkerRegistry::new(),
            search: SearchState::new(),
            overlay: OverlayState::new(),
            view: ViewState::new(),
            layout: LayoutState::new(),
            command_log: CommandLog::new(),
            options: AppOptions::default(),
            services,
            store,
            store_warning: None,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl aller Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.registry.len()
    }

    /// Gibt die Anzahl sichtbarer Marker zurück (für UI-Anzeige)
    pub fn visible_count(&self) -> usize {
        self.registry.visible_len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
