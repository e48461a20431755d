//! Settings panel view

use crate::app::App;
use crate::state::{SettingsRow, SettingsState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Shown in the About section
pub const APP_DESCRIPTION: &str = "Strategic Consulting & Business Process Automation for SMEs";

/// Draw the settings panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let settings = &app.state.settings;

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut content = vec![
        Line::from(Span::styled(
            "Customize your experience",
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        heading("Appearance"),
    ];

    for (index, row) in SettingsState::rows().iter().enumerate() {
        if index == 3 {
            content.push(Line::from(""));
            content.push(heading("Preferences"));
        }

        let is_selected = settings.selected_index == index;
        let is_on = settings.is_row_on(*row, &app.theme);
        let marker = match (row, is_on) {
            (SettingsRow::Theme(_), true) => "(•)",
            (SettingsRow::Theme(_), false) => "( )",
            (_, true) => "[on ]",
            (_, false) => "[off]",
        };

        let pointer = if is_selected { "▸ " } else { "  " };
        let label_style = if is_selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let marker_style = if is_on {
            Style::default().fg(palette.success)
        } else {
            Style::default().fg(palette.muted)
        };

        content.push(Line::from(vec![
            Span::styled(pointer, Style::default().fg(palette.accent)),
            Span::styled(format!("{marker} "), marker_style),
            Span::styled(row.label(), label_style),
            Span::styled(
                format!("  {}", row.description()),
                Style::default().fg(palette.muted),
            ),
        ]));
    }

    content.push(Line::from(""));
    content.push(heading("About"));
    content.push(Line::from(vec![
        Span::styled("Version: ", Style::default().fg(palette.muted)),
        Span::styled(env!("CARGO_PKG_VERSION"), Style::default().fg(palette.text)),
    ]));
    content.push(Line::from(vec![
        Span::styled("Description: ", Style::default().fg(palette.muted)),
        Span::styled(APP_DESCRIPTION, Style::default().fg(palette.text)),
    ]));

    if settings.dirty && !settings.autosave {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "Unsaved changes (Ctrl+S to save)",
            Style::default().fg(palette.error),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Settings ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
