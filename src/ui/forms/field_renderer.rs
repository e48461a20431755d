//! Field rendering utilities for forms

use crate::state::{FormField, Palette};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    palette: &Palette,
) {
    let border_style = if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let text_style = Style::default().fg(palette.text);
    let placeholder_style = Style::default()
        .fg(palette.muted)
        .add_modifier(Modifier::ITALIC);
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(palette.accent),
    );

    let mut lines: Vec<Line> = if field.value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder.as_str(),
            placeholder_style,
        ))]
    } else if field.is_multiline {
        field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, text_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(field.value.as_str(), text_style))]
    };

    if is_active {
        if field.value.is_empty() {
            lines[0].spans.insert(0, cursor);
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let title = if field.is_missing() && !is_active {
        Line::from(vec![
            Span::raw(format!(" {} ", field.title())),
            Span::styled("* ", Style::default().fg(palette.error)),
        ])
    } else {
        Line::from(format!(" {} ", field.title()))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    // Keep the cursor line visible in tall multiline values
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}
