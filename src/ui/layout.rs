//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use crate::ui::settings_panel::APP_DESCRIPTION;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the product name and current view
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let tab = |view: View| {
        let style = if app.state.current_view == view {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        };
        Span::styled(format!(" {} ", view.title()), style)
    };

    let line = Line::from(vec![
        Span::styled(
            "Synkrone.in",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {APP_DESCRIPTION}   "),
            Style::default().fg(palette.muted),
        ),
        tab(View::Recommend),
        tab(View::Settings),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(header, area);
}

/// Shortcut hints for the current view
pub fn shortcut_hints(app: &App) -> &'static str {
    match app.state.current_view {
        View::Recommend if app.controller.can_retry() => {
            "Ctrl+R: retry | Ctrl+L: reset | F2: settings | Ctrl+C: quit"
        }
        View::Recommend if app.controller.state().recommendation().is_some() => {
            "Ctrl+Y: copy | PgUp/PgDn: scroll | Ctrl+L: reset | F2: settings | Ctrl+C: quit"
        }
        View::Recommend => "Tab: next field | Ctrl+S: submit | F2: settings | Ctrl+C: quit",
        View::Settings => "↑/↓: select | Enter/Space: apply | Ctrl+S: save | Esc: back",
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let mut spans = vec![Span::styled(
        format!(" {} ", app.controller.state().label()),
        Style::default()
            .fg(palette.background)
            .bg(palette.accent),
    )];

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {message} "),
            Style::default().fg(palette.success),
        ));
    } else if let Some(saved_at) = app.draft_saved_at {
        spans.push(Span::styled(
            format!(" Draft saved {} ", saved_at.with_timezone(&chrono::Local).format("%H:%M")),
            Style::default().fg(palette.muted),
        ));
    }

    spans.push(Span::styled(
        format!(" {}", shortcut_hints(app)),
        Style::default().fg(palette.muted),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
