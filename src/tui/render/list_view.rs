use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{AgeField, UserRecord};
use crate::ops::age::age_on;
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::{push_highlighted_spans, wrap_text};

/// Render the searchable, expandable record list.
///
/// Each record is one name row; the expanded record additionally shows its
/// detail panel (age / gender / country, description, picture) directly
/// below, accordion style.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let height = area.height as usize;

    let search_re = app.search_highlight_re();
    let cursor = app.cursor;

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_rows: (usize, usize) = (0, 0);

    let visible = app.visible_records();
    if visible.is_empty() {
        let message = if app.store.is_empty() {
            "no records loaded"
        } else {
            "no matching records"
        };
        let line = Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(vec![line]), area);
        return;
    }

    for (i, record) in visible.iter().enumerate() {
        let is_expanded = app.expanded.as_deref() == Some(record.id.as_str());
        let is_cursor = i == cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let marker = if is_expanded { "\u{25BE}" } else { "\u{25B8}" };
        let name_style = Style::default()
            .fg(app.theme.text_bright)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD);
        let match_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);

        let mut spans = vec![Span::styled(
            format!("  {} ", marker),
            Style::default().fg(app.theme.highlight).bg(row_bg),
        )];
        push_highlighted_spans(
            &mut spans,
            &record.first,
            name_style,
            match_style,
            search_re.as_ref(),
        );
        spans.push(Span::styled(
            format!(" {}", record.last),
            name_style,
        ));
        if is_cursor {
            let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            if used < width {
                spans.push(Span::styled(
                    " ".repeat(width - used),
                    Style::default().bg(row_bg),
                ));
            }
        }

        let row_start = lines.len();
        lines.push(Line::from(spans));

        if is_expanded {
            push_detail_lines(&mut lines, app, record, width);
        }

        if is_cursor {
            cursor_rows = (row_start, lines.len());
        }
    }

    // Keep the cursor's rows inside the viewport
    let (cur_start, cur_end) = cursor_rows;
    if cur_start < app.scroll_offset {
        app.scroll_offset = cur_start;
    } else if cur_end > app.scroll_offset + height {
        app.scroll_offset = cur_end.saturating_sub(height);
    }
    if app.scroll_offset >= lines.len() {
        app.scroll_offset = lines.len().saturating_sub(1);
    }

    let end = (app.scroll_offset + height).min(lines.len());
    let window: Vec<Line> = lines[app.scroll_offset..end].to_vec();
    frame.render_widget(Paragraph::new(window), area);
}

/// The age cell for a record under the active age policy.
pub fn age_display(app: &App, record: &UserRecord) -> String {
    let derived = age_on(record.dob.as_deref(), app.today);
    let age = match app.config.age_field {
        AgeField::Derived => derived,
        AgeField::Editable => record.age.or(derived),
    };
    match age {
        Some(n) => format!("{} years", n),
        None => "N/A".to_string(),
    }
}

fn push_detail_lines(lines: &mut Vec<Line>, app: &App, record: &UserRecord, width: usize) {
    let bg = app.theme.background;
    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default().fg(app.theme.text).bg(bg);

    lines.push(Line::from(vec![
        Span::styled("      Age ", label),
        Span::styled(age_display(app, record), value),
        Span::styled("   Gender ", label),
        Span::styled(record.gender.as_str().to_string(), value),
        Span::styled("   Country ", label),
        Span::styled(record.country.clone(), value),
    ]));

    lines.push(Line::from(Span::styled("      Description", label)));
    let wrap_width = width.saturating_sub(2).max(12);
    for text in wrap_text("      ", &record.description, wrap_width) {
        lines.push(Line::from(Span::styled(text, value)));
    }

    if !record.picture.is_empty() {
        let picture = truncate_to_width(&record.picture, width.saturating_sub(16));
        lines.push(Line::from(vec![
            Span::styled("      Picture ", label),
            Span::styled(picture, value),
        ]));
    }

    lines.push(Line::from(Span::styled(
        "      e edit   d delete",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
}
