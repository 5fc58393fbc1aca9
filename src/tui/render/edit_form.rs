use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::draft::{self, Field};
use crate::tui::app::App;

/// Render the inline edit form for the open draft.
///
/// One row per field; the focused row shows the live typing buffer with a
/// block cursor. The save hint only appears once the draft actually differs
/// from the stored record — saving an unmodified draft is disallowed.
pub fn render_edit_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(edit) = &app.edit else {
        return;
    };
    let bg = app.theme.background;
    let modified = app.draft_modified();

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            "  editing ",
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Span::styled(
            edit.draft.full_name(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if modified { "  \u{25CF} modified" } else { "" },
            Style::default().fg(app.theme.yellow).bg(bg),
        ),
    ]));
    lines.push(Line::default());

    for (i, field) in app.edit_fields().iter().enumerate() {
        let focused = i == edit.focus;
        let label_style = if focused {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        let value_style = Style::default()
            .fg(if focused {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(bg);

        let value = if focused {
            edit.buffer.clone()
        } else {
            draft::field_value(&edit.draft, *field)
        };

        let mut spans = vec![
            Span::styled(format!("  {:<14}", field.label()), label_style),
            Span::styled(value, value_style),
        ];
        if focused {
            if *field == Field::Gender {
                spans.push(Span::styled(
                    "  (space to toggle)",
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            } else {
                spans.push(Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    let hint = if modified {
        "  Enter save   Esc cancel   Tab next field"
    } else {
        "  Esc cancel   Tab next field"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
