use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Search mode directs keystrokes into the search term. The filtered view
/// re-derives on every keystroke — there is no debounce and no separate
/// "executed" query.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Keep the filter, return to navigation
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }

        // Drop the filter entirely (the search box close button)
        (_, KeyCode::Esc) => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }

        (_, KeyCode::Backspace) => {
            app.search_input.pop();
            app.clamp_cursor();
        }

        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.clamp_cursor();
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::test_app;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_search(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_filter_applies_per_keystroke() {
        let mut app = test_app();
        app.mode = Mode::Search;

        type_str(&mut app, "a");
        assert_eq!(app.visible_records().len(), 3);
        type_str(&mut app, "n");
        // "an" matches Brian and Sana
        assert_eq!(app.visible_records().len(), 2);
        type_str(&mut app, "a");
        // "ana" matches only Sana
        assert_eq!(app.visible_records().len(), 1);
    }

    #[test]
    fn test_backspace_widens_filter() {
        let mut app = test_app();
        app.mode = Mode::Search;
        type_str(&mut app, "sana");
        assert_eq!(app.visible_records().len(), 1);
        handle_search(&mut app, key(KeyCode::Backspace));
        handle_search(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.search_input, "sa");
        assert_eq!(app.visible_records().len(), 1);
    }

    #[test]
    fn test_enter_keeps_filter_esc_clears_it() {
        let mut app = test_app();
        app.mode = Mode::Search;
        type_str(&mut app, "sana");
        handle_search(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.search_input, "sana");

        app.mode = Mode::Search;
        handle_search(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.search_input, "");
    }

    #[test]
    fn test_cursor_clamped_as_filter_narrows() {
        let mut app = test_app();
        app.cursor = 2;
        app.mode = Mode::Search;
        type_str(&mut app, "sana");
        assert_eq!(app.cursor, 0);
    }
}
