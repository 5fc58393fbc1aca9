use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    ("j / \u{2193}", "move down"),
    ("k / \u{2191}", "move up"),
    ("Enter / Space", "expand or collapse record"),
    ("/", "search by first name"),
    ("e", "edit record"),
    ("d", "delete record (asks first)"),
    ("Esc", "clear filter / cancel"),
    ("q", "quit"),
];

/// Render the help overlay listing key bindings
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let popup_h: u16 = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let mut lines = vec![
        Line::from(Span::styled(
            " Keys",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<14}", key),
                Style::default().fg(app.theme.cyan).bg(bg),
            ),
            Span::styled(*action, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
