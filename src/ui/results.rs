//! Results panel: view selection and rendering

use crate::app::App;
use crate::state::{Palette, RequestState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Note shown under a successful recommendation
pub const NEXT_STEPS: &str = "Schedule a detailed consultation to develop an implementation \
roadmap. These recommendations are starting points for deeper strategic discussions tailored \
to your unique business needs.";

/// What the results panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView<'a> {
    /// Nothing submitted yet
    Empty,
    /// Placeholder blocks while a request is in flight
    Skeleton,
    Alert {
        title: &'static str,
        message: String,
        can_retry: bool,
    },
    Cards {
        strategic: &'a str,
        bpa: &'a str,
        next_steps: &'static str,
    },
}

/// Pick the view for a request state
pub fn select_view(state: &RequestState) -> ResultView<'_> {
    match state {
        RequestState::Idle => ResultView::Empty,
        RequestState::Loading { .. } => ResultView::Skeleton,
        RequestState::Error(error) => ResultView::Alert {
            title: error.title(),
            message: error.to_string(),
            can_retry: true,
        },
        RequestState::Success(recommendation) => ResultView::Cards {
            strategic: &recommendation.strategic,
            bpa: &recommendation.bpa,
            next_steps: NEXT_STEPS,
        },
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    match select_view(app.controller.state()) {
        ResultView::Empty => draw_empty(frame, area, &palette),
        ResultView::Skeleton => draw_skeleton(frame, area, &palette, app.skeleton_pulse()),
        ResultView::Alert {
            title,
            message,
            can_retry,
        } => draw_alert(frame, area, &palette, title, &message, can_retry),
        ResultView::Cards {
            strategic,
            bpa,
            next_steps,
        } => draw_cards(
            frame,
            area,
            &palette,
            [strategic, bpa, next_steps],
            app.state.results_scroll,
        ),
    }
}

fn draw_empty(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top_padding = inner.height.saturating_sub(3) / 2;
    let mut content = vec![Line::from(""); top_padding as usize];
    content.push(Line::from(Span::styled(
        "Ready to Transform Your Business?",
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Fill out the form to receive personalized strategic and automation recommendations",
        Style::default().fg(palette.muted),
    )));

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// Skeleton colour, brightened by the pulse phase when animating
fn skeleton_color(palette: &Palette, pulse: Option<f32>) -> Color {
    match (palette.skeleton, pulse) {
        (Color::Rgb(r, g, b), Some(phase)) => {
            let lift = |c: u8| {
                let target = if c > 127 { c.saturating_sub(40) } else { c.saturating_add(40) };
                (c as f32 + (target as f32 - c as f32) * phase.clamp(0.0, 1.0)) as u8
            };
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        (color, _) => color,
    }
}

fn draw_skeleton(frame: &mut Frame, area: Rect, palette: &Palette, pulse: Option<f32>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().fg(skeleton_color(palette, pulse));

    for (chunk, title) in chunks
        .iter()
        .zip(["Strategic Recommendation", "BPA Opportunity"])
    {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);

        let width = inner.width as usize;
        let lines: Vec<Line> = [100usize, 92, 96, 70]
            .iter()
            .take(inner.height as usize)
            .map(|percent| Line::from(Span::styled("▆".repeat(width * percent / 100), bar_style)))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn draw_alert(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    title: &str,
    message: &str,
    can_retry: bool,
) {
    let mut content = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(palette.text))),
    ];

    if can_retry {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "Ctrl+R",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to Try Again"),
        ]));
    }

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.error)),
    );

    let height = area.height.min(9);
    frame.render_widget(paragraph, Rect { height, ..area });
}

fn draw_cards(frame: &mut Frame, area: Rect, palette: &Palette, texts: [&str; 3], scroll: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(area);

    let [strategic, bpa, next_steps] = texts;

    for (chunk, (title, body)) in chunks
        .iter()
        .zip([("Strategic Recommendation", strategic), ("BPA Opportunity", bpa)])
    {
        let card = Paragraph::new(body)
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {title} "),
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            );
        frame.render_widget(card, *chunk);
    }

    let note = Paragraph::new(Line::from(vec![
        Span::styled(
            "Next Steps: ",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(next_steps, Style::default().fg(palette.muted)),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(note, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Recommendation;
    use crate::webhook::RecommendationError;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn test_idle_is_empty() {
        assert_eq!(select_view(&RequestState::Idle), ResultView::Empty);
    }

    #[test]
    fn test_loading_is_skeleton() {
        let state = RequestState::Loading {
            request_id: Uuid::new_v4(),
        };
        assert_eq!(select_view(&state), ResultView::Skeleton);
    }

    #[test]
    fn test_error_is_alert_with_retry() {
        let state = RequestState::Error(RecommendationError::Timeout);
        assert_eq!(
            select_view(&state),
            ResultView::Alert {
                title: "Request Timeout",
                message: "The request timed out. Please try again.".to_string(),
                can_retry: true,
            }
        );
    }

    #[test]
    fn test_success_is_cards_with_next_steps() {
        let state = RequestState::Success(Recommendation {
            strategic: "X".to_string(),
            bpa: "Y".to_string(),
        });
        assert_eq!(
            select_view(&state),
            ResultView::Cards {
                strategic: "X",
                bpa: "Y",
                next_steps: NEXT_STEPS,
            }
        );
    }

    #[test]
    fn test_skeleton_static_without_pulse() {
        assert_eq!(skeleton_color(&Palette::DARK, None), Palette::DARK.skeleton);
    }

    #[test]
    fn test_skeleton_pulse_changes_colour() {
        let start = skeleton_color(&Palette::DARK, Some(0.0));
        let peak = skeleton_color(&Palette::DARK, Some(1.0));
        assert_eq!(start, Palette::DARK.skeleton);
        assert_ne!(start, peak);
    }
}
