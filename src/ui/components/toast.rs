//! Toast overlay component

use crate::state::{Palette, Toast, ToastVariant};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_MAX_WIDTH: u16 = 48;

/// Area for a toast anchored to the top-right corner of `area`
pub fn toast_area(area: Rect, toast: &Toast) -> Rect {
    let width = TOAST_MAX_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let description_lines = wrap_text(&toast.description, inner_width).len() as u16;
    // title + description + borders
    let height = (1 + description_lines + 2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1u16.min(area.height.saturating_sub(height)),
        width,
        height,
    }
}

/// Render the toast overlay
pub fn render_toast(frame: &mut Frame, toast: &Toast, palette: &Palette) {
    let area = toast_area(frame.area(), toast);
    let color = match toast.variant {
        ToastVariant::Default => palette.accent,
        ToastVariant::Destructive => palette.error,
    };

    frame.render_widget(Clear, area);

    let content = vec![
        Line::from(Span::styled(
            toast.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            toast.description.as_str(),
            Style::default().fg(palette.text),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(palette.background)),
        );

    frame.render_widget(paragraph, area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
        }
        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }
    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
}
