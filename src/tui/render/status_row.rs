use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(message) = &app.status_message {
                Line::from(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.green).bg(bg),
                ))
            } else if !app.search_input.is_empty() {
                with_hint(
                    vec![Span::styled(
                        format!(" /{}", app.search_input),
                        Style::default().fg(app.theme.dim).bg(bg),
                    )],
                    "Esc clear filter",
                    app,
                    width,
                )
            } else {
                with_hint(
                    Vec::new(),
                    "/ search  Enter expand  e edit  d delete  ? help  q quit",
                    app,
                    width,
                )
            }
        }
        Mode::Search => with_hint(
            vec![
                Span::styled(
                    format!(" /{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ],
            "Enter keep filter  Esc clear",
            app,
            width,
        ),
        Mode::Edit => {
            let marker = if app.draft_modified() {
                Span::styled(" \u{25CF} modified", Style::default().fg(app.theme.yellow).bg(bg))
            } else {
                Span::styled(" unchanged", Style::default().fg(app.theme.dim).bg(bg))
            };
            with_hint(vec![marker], "Enter save  Esc cancel", app, width)
        }
        // The popup carries its own hints
        Mode::Confirm => Line::from(Span::styled(
            " ".repeat(width),
            Style::default().bg(bg),
        )),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Left-aligned spans with a dim right-aligned hint, padded to full width.
fn with_hint<'a>(mut spans: Vec<Span<'a>>, hint: &'a str, app: &App, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
