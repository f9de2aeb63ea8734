//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Feature-Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Marker-Bestand ===
            AppCommand::AddMarker { position, title } => {
                handlers::markers::add(state, position, title)
            }
            AppCommand::RenameMarker { id, title } => handlers::markers::rename(state, id, title)?,
            AppCommand::RemoveMarker { id } => handlers::markers::remove(state, id)?,
            AppCommand::DeleteSelectedMarker => handlers::markers::delete_selected(state)?,
            AppCommand::LoadStoredMarkers => handlers::markers::load_or_seed(state),

            // === Suche & Liste ===
            AppCommand::ApplyFilter { text } => handlers::search::apply_filter(state, text),
            AppCommand::ToggleListPanel => handlers::view::toggle_list_panel(state),

            // === Overlays ===
            AppCommand::OpenContextMenu {
                variant,
                screen_pos,
            } => handlers::overlay::open_context_menu(state, variant, screen_pos),
            AppCommand::SelectMarker { id, focus_rename } => {
                handlers::overlay::select_marker(state, id, focus_rename)?
            }
            AppCommand::CloseAllOverlays => {
                handlers::overlay::close_all(state);
            }
            AppCommand::OpenHelp => handlers::overlay::open_help(state),

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Dialoge & Anwendung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
