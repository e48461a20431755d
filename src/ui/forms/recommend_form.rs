//! Business profile form with the results panel

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, RecommendationForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::results;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Submit button label for the current request state
pub fn submit_label(is_loading: bool) -> &'static str {
    if is_loading {
        "Analyzing..."
    } else {
        "Get Expert Recommendations"
    }
}

/// Draw the form (left) and the results (right)
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_form(frame, chunks[0], app);
    results::draw(frame, chunks[1], app);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let form = &app.state.form;
    let is_loading = app.controller.is_loading();

    let block = Block::default()
        .title(" Describe Your Business Challenge ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Industry
            Constraint::Length(3),             // Company size
            Constraint::Min(4),                // Business context
            Constraint::Min(5),                // Primary challenge
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Hint
        ])
        .split(inner);

    for index in 0..RecommendationForm::SUBMIT_ROW {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                chunks[index],
                field,
                form.active_field() == index,
                &palette,
            );
        }
    }

    let can_submit = form.is_complete() && !is_loading;
    render_button(
        frame,
        chunks[4],
        submit_label(is_loading),
        form.is_submit_row_active(),
        can_submit,
        &palette,
    );

    let hint = if is_loading {
        Line::from(Span::styled(
            "Waiting for the recommendation service...",
            Style::default().fg(palette.muted),
        ))
    } else if form.is_complete() {
        Line::from(Span::styled(
            "Ready to submit",
            Style::default().fg(palette.success),
        ))
    } else {
        Line::from(Span::styled(
            format!("Required: {}", form.missing_labels()),
            Style::default().fg(palette.muted),
        ))
    };
    frame.render_widget(Paragraph::new(hint), chunks[5]);
}
