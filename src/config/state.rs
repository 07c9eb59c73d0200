// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    Table,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the search box (raw, pre-normalization)
    pub search_text: String,

    /// Whether the suggestions dropdown is showing
    pub suggestions_open: bool,

    /// Cards or compact table
    pub view: ViewMode,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            search_text: s!(),
            suggestions_open: false,
            view: ViewMode::Grid,
            window_w: 900,
            window_h: 640,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
