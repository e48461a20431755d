//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod results;
mod settings_panel;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, content_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Recommend => forms::draw_recommend(frame, content_area, app),
        View::Settings => settings_panel::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Toasts float above everything else
    if let Some(toast) = app.toasts.current() {
        components::render_toast(frame, toast, &app.theme.palette());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{Notifier, Theme, ThemeContext, Toast};
    use crate::webhook::MockRecommendationClientTrait;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        App::from_parts(
            TuiConfig::default(),
            Arc::new(MockRecommendationClientTrait::new()),
            ThemeContext::with_system_dark(Theme::Dark, true),
            None,
        )
    }

    fn buffer_to_string(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_idle_screen_shows_form_and_placeholder() {
        let content = render(&test_app());
        assert!(content.contains("Synkrone.in"));
        assert!(content.contains("Industry"));
        assert!(content.contains("Primary Challenge"));
        assert!(content.contains("Get Expert Recommendations"));
        assert!(content.contains("Ready to Transform Your Business?"));
        assert!(content.contains("Ready"));
    }

    #[test]
    fn test_settings_screen_lists_preferences() {
        let mut app = test_app();
        app.state.toggle_settings();
        let content = render(&app);
        assert!(content.contains("Appearance"));
        assert!(content.contains("Animations"));
        assert!(content.contains("Notifications"));
        assert!(content.contains("Auto-save"));
        assert!(content.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_toast_overlay_is_drawn() {
        let mut app = test_app();
        app.toasts
            .notify(Toast::destructive("Request Timeout", "Try again"));
        let content = render(&app);
        assert!(content.contains("Request Timeout"));
    }

    #[test]
    fn test_status_message_replaces_draft_note() {
        let mut app = test_app();
        app.status_message = Some("Settings saved".to_string());
        let content = render(&app);
        assert!(content.contains("Settings saved"));
        assert!(!content.contains("Draft saved"));
    }
}
