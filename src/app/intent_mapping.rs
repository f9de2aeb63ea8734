//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::{ActiveOverlay, MenuVariant};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::DEFAULT_MARKER_TITLE;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SearchChanged { text } => vec![AppCommand::ApplyFilter { text }],
        AppIntent::MapClicked { world_pos } => {
            // Klick auf freie Fläche: offene Overlays nur schließen,
            // sonst direkt einen neuen Marker anlegen.
            if state.overlay.is_any_open() {
                vec![AppCommand::CloseAllOverlays]
            } else {
                vec![AppCommand::AddMarker {
                    position: world_pos,
                    title: DEFAULT_MARKER_TITLE.to_string(),
                }]
            }
        }
        AppIntent::MarkerClicked { id } => vec![AppCommand::SelectMarker {
            id,
            focus_rename: false,
        }],
        AppIntent::BackgroundContextRequested {
            world_pos,
            screen_pos,
        } => vec![AppCommand::OpenContextMenu {
            variant: MenuVariant::Background { world_pos },
            screen_pos,
        }],
        AppIntent::MarkerContextRequested { id, screen_pos } => {
            vec![AppCommand::OpenContextMenu {
                variant: MenuVariant::Marker { marker_id: id },
                screen_pos,
            }]
        }
        AppIntent::AddMarkerHereRequested { world_pos } => vec![
            AppCommand::CloseAllOverlays,
            AppCommand::AddMarker {
                position: world_pos,
                title: DEFAULT_MARKER_TITLE.to_string(),
            },
        ],
        AppIntent::RenameRequested { id } => vec![AppCommand::SelectMarker {
            id,
            focus_rename: true,
        }],
        AppIntent::RemoveRequested { id } => vec![
            AppCommand::CloseAllOverlays,
            AppCommand::RemoveMarker { id },
        ],
        AppIntent::AnalyzeRequested { id } => vec![AppCommand::SelectMarker {
            id,
            focus_rename: false,
        }],
        AppIntent::ListRowActivated { original_index } => {
            // Veraltete Zeilen (Index nach Remove nicht mehr belegt) verfallen.
            match state.registry.id_at(original_index) {
                Some(id) => vec![AppCommand::SelectMarker {
                    id,
                    focus_rename: false,
                }],
                None => Vec::new(),
            }
        }
        AppIntent::DetailNameEdited { text } => {
            // Nur solange die Detailansicht offen ist; späte Edits verfallen.
            if state.overlay.active == ActiveOverlay::MarkerDetail {
                match state.overlay.selected_marker {
                    Some(id) => vec![AppCommand::RenameMarker { id, title: text }],
                    None => Vec::new(),
                }
            } else {
                Vec::new()
            }
        }
        AppIntent::OverlayDismissRequested => vec![AppCommand::CloseAllOverlays],
        AppIntent::DeleteSelectedRequested => match state.overlay.selected_marker {
            Some(_) => vec![AppCommand::DeleteSelectedMarker],
            None => Vec::new(),
        },
        AppIntent::HelpRequested => vec![AppCommand::OpenHelp],
        AppIntent::PanelToggleRequested => vec![AppCommand::ToggleListPanel],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
