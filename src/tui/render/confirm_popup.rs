use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::{centered_rect_fixed, wrap_text};

/// Render the delete confirmation popup over the list
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(id) = app.pending_delete.as_deref() else {
        return;
    };
    // The record may already be gone (stale pending id); confirming such a
    // delete is a no-op, but the prompt still needs something to show.
    let name = app
        .store
        .get(id)
        .map(|r| r.full_name())
        .unwrap_or_else(|| "this record".to_string());

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut styled_lines: Vec<(String, Style)> = Vec::new();
    styled_lines.push((" Delete record".into(), header_style));
    styled_lines.push(("".into(), text_style));
    let question = format!("Are you sure you want to delete \u{201c}{}\u{201d}?", name);
    for s in wrap_text(" ", &question, inner_w) {
        styled_lines.push((s, text_style));
    }
    styled_lines.push(("".into(), text_style));
    styled_lines.push((" y delete   n cancel".into(), hint_style));

    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::test_app;
    use crate::tui::render::test_helpers::render_to_string;

    #[test]
    fn test_popup_names_the_target() {
        let mut app = test_app();
        app.request_delete("2");
        let out = render_to_string(60, 14, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(out.contains("Delete record"));
        assert!(out.contains("Brian Cole"));
        assert!(out.contains("y delete   n cancel"));
    }

    #[test]
    fn test_popup_with_stale_pending_id() {
        let mut app = test_app();
        app.request_delete("2");
        app.store.delete("2");
        let out = render_to_string(60, 14, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(out.contains("this record"));
    }
}
