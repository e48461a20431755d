//! Theme preference and colour palettes

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// User theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Light => "Bright and clear interface",
            Self::Dark => "Easy on the eyes",
            Self::System => "Match your terminal settings",
        }
    }
}

/// Read and write access to the global theme preference
pub trait ThemeStore {
    fn theme(&self) -> Theme;
    fn set_theme(&mut self, theme: Theme);
}

/// Resolved colours for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
    pub skeleton: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Reset,
        text: Color::White,
        muted: Color::DarkGray,
        accent: Color::Cyan,
        border: Color::DarkGray,
        success: Color::Green,
        error: Color::Red,
        skeleton: Color::Rgb(60, 60, 70),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(250, 250, 250),
        text: Color::Black,
        muted: Color::Gray,
        accent: Color::Blue,
        border: Color::Gray,
        success: Color::Rgb(0, 128, 0),
        error: Color::Rgb(200, 0, 0),
        skeleton: Color::Rgb(220, 220, 225),
    };
}

/// Global theme collaborator handed to the views by reference
#[derive(Debug, Clone)]
pub struct ThemeContext {
    theme: Theme,
    system_is_dark: bool,
}

impl ThemeContext {
    /// Create a context, detecting the terminal background for `System`
    pub fn new(theme: Theme) -> Self {
        let hint = std::env::var("COLORFGBG").ok();
        Self::with_system_dark(theme, system_prefers_dark(hint.as_deref()))
    }

    pub fn with_system_dark(theme: Theme, system_is_dark: bool) -> Self {
        Self {
            theme,
            system_is_dark,
        }
    }

    /// Whether the effective theme is dark
    pub fn is_dark(&self) -> bool {
        match self.theme {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => self.system_is_dark,
        }
    }

    pub fn palette(&self) -> Palette {
        if self.is_dark() {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }
}

impl ThemeStore for ThemeContext {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn set_theme(&mut self, theme: Theme) {
        tracing::debug!("Theme set to {}", theme.label());
        self.theme = theme;
    }
}

/// Interpret a `COLORFGBG` value ("fg;bg"); dark when absent or unparsable
fn system_prefers_dark(hint: Option<&str>) -> bool {
    hint.and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| matches!(bg, 0..=6 | 8))
        .unwrap_or(true)
}
