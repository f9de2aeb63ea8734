/// Zustand des responsiven Listen-Layouts
pub struct LayoutState {
    /// Ob die Markerliste angezeigt wird
    pub list_panel_visible: bool,
    /// Zuletzt gemeldete Viewport-Breite (None vor dem ersten Resize)
    pub last_width: Option<f32>,
}

impl LayoutState {
    /// Erstellt den Standard-Layout-Zustand (Liste sichtbar).
    pub fn new() -> Self {
        Self {
            list_panel_visible: true,
            last_width: None,
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}
