//! Settings panel state

use super::theme::{Theme, ThemeStore};
use crate::config::TuiConfig;

/// A selectable row in the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Theme(Theme),
    Animations,
    Notifications,
    Autosave,
}

impl SettingsRow {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Theme(theme) => theme.label(),
            Self::Animations => "Animations",
            Self::Notifications => "Notifications",
            Self::Autosave => "Auto-save",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Theme(theme) => theme.description(),
            Self::Animations => "Enable smooth transitions and effects",
            Self::Notifications => "Receive updates about your recommendations",
            Self::Autosave => "Automatically save your inputs",
        }
    }
}

const ROWS: [SettingsRow; 6] = [
    SettingsRow::Theme(Theme::Light),
    SettingsRow::Theme(Theme::Dark),
    SettingsRow::Theme(Theme::System),
    SettingsRow::Animations,
    SettingsRow::Notifications,
    SettingsRow::Autosave,
];

/// Local UI preference toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    pub selected_index: usize,
    pub animations: bool,
    pub notifications: bool,
    pub autosave: bool,
    /// Changed since the last save
    pub dirty: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selected_index: 0,
            animations: true,
            notifications: true,
            autosave: true,
            dirty: false,
        }
    }
}

impl SettingsState {
    pub fn from_config(config: &TuiConfig) -> Self {
        Self {
            animations: config.animations(),
            notifications: config.notifications(),
            autosave: config.autosave(),
            ..Self::default()
        }
    }

    pub fn rows() -> &'static [SettingsRow] {
        &ROWS
    }

    pub fn selected_row(&self) -> SettingsRow {
        ROWS[self.selected_index.min(ROWS.len() - 1)]
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index < ROWS.len() - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Apply the selected row: pick a theme or flip a toggle
    pub fn activate(&mut self, themes: &mut dyn ThemeStore) {
        match self.selected_row() {
            SettingsRow::Theme(theme) => self.select_theme(theme, themes),
            SettingsRow::Animations => self.toggle_animations(),
            SettingsRow::Notifications => self.toggle_notifications(),
            SettingsRow::Autosave => self.toggle_autosave(),
        }
    }

    pub fn select_theme(&mut self, theme: Theme, themes: &mut dyn ThemeStore) {
        if themes.theme() != theme {
            themes.set_theme(theme);
            self.dirty = true;
        }
    }

    pub fn toggle_animations(&mut self) {
        self.animations = !self.animations;
        self.dirty = true;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
        self.dirty = true;
    }

    pub fn toggle_autosave(&mut self) {
        self.autosave = !self.autosave;
        self.dirty = true;
    }

    /// Whether a toggle row is switched on; theme rows report selection
    pub fn is_row_on(&self, row: SettingsRow, themes: &dyn ThemeStore) -> bool {
        match row {
            SettingsRow::Theme(theme) => themes.theme() == theme,
            SettingsRow::Animations => self.animations,
            SettingsRow::Notifications => self.notifications,
            SettingsRow::Autosave => self.autosave,
        }
    }

    /// Write the preferences into `config`
    pub fn apply_to(&self, config: &mut TuiConfig, themes: &dyn ThemeStore) {
        config.theme = Some(themes.theme());
        config.animations = Some(self.animations);
        config.notifications = Some(self.notifications);
        config.autosave = Some(self.autosave);
    }
}
