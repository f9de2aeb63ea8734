//! UI-Komponenten: Menü, Markerliste, Kartenansicht, Overlays, Dialoge.

mod context_menu;
mod detail_window;
mod help_window;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Fenster).
/// Modulare Aufteilung: Kartenansicht, Listen-Panel und Overlay-Fenster
/// sind in eigene Dateien extrahiert.
pub mod list_panel;
pub mod map_view;
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use context_menu::render_context_menu;
pub use detail_window::show_detail_window;
pub use help_window::show_help_window;
pub use list_panel::render_list_panel;
pub use map_view::render_map_view;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
