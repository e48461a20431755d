//! Application state definitions

use super::forms::RecommendationForm;
use super::settings_state::SettingsState;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Business profile form with the results panel
    #[default]
    Recommend,
    Settings,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Recommend => "Recommendations",
            Self::Settings => "Settings",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: RecommendationForm,
    pub settings: SettingsState,
    /// Scroll offset of the results panel
    pub results_scroll: u16,
}

impl AppState {
    /// Switch between the form and the settings screen
    pub fn toggle_settings(&mut self) {
        self.current_view = match self.current_view {
            View::Recommend => View::Settings,
            View::Settings => View::Recommend,
        };
    }

    pub fn scroll_results_down(&mut self) {
        self.results_scroll = self.results_scroll.saturating_add(1);
    }

    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    pub fn reset_results_scroll(&mut self) {
        self.results_scroll = 0;
    }
}
