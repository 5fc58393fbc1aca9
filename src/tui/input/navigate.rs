use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }

        // Help
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            let count = app.visible_records().len();
            if count > 0 && app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            let count = app.visible_records().len();
            app.cursor = count.saturating_sub(1);
        }

        // Toggle the detail panel for the record under the cursor
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            if let Some(id) = app.cursor_record_id() {
                app.toggle_expansion(&id);
            }
        }

        // Edit the record under the cursor
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            if let Some(id) = app.cursor_record_id() {
                app.begin_edit(&id);
            }
        }

        // Request deletion (goes through confirmation)
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(id) = app.cursor_record_id() {
                app.request_delete(&id);
            }
        }

        // Start typing a search
        (KeyModifiers::NONE, KeyCode::Char('/')) => {
            app.mode = Mode::Search;
        }

        // Clear the active filter
        (_, KeyCode::Esc) => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.clamp_cursor();
            }
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

    #[test]
    fn test_cursor_moves_within_visible_list() {
        let mut app = test_app();
        handle_navigate(&mut app, key(KeyCode::Char('j')));
        handle_navigate(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 2);
        // Clamped at the end
        handle_navigate(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 2);
        handle_navigate(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_enter_toggles_expansion_of_cursor_record() {
        let mut app = test_app();
        app.cursor = 1;
        handle_navigate(&mut app, key(KeyCode::Enter));
        assert_eq!(app.expanded.as_deref(), Some("2"));
        handle_navigate(&mut app, key(KeyCode::Enter));
        assert_eq!(app.expanded, None);
    }

    #[test]
    fn test_e_begins_edit_d_requests_delete() {
        let mut app = test_app();
        handle_navigate(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.mode, crate::tui::app::Mode::Edit);
        assert_eq!(app.edit.as_ref().unwrap().id, "1");

        let mut app = test_app();
        handle_navigate(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.mode, crate::tui::app::Mode::Confirm);
        assert_eq!(app.pending_delete.as_deref(), Some("1"));
    }

    #[test]
    fn test_esc_clears_filter() {
        let mut app = test_app();
        app.search_input = "ame".to_string();
        app.cursor = 0;
        handle_navigate(&mut app, key(KeyCode::Esc));
        assert_eq!(app.search_input, "");
        assert_eq!(app.visible_records().len(), 3);
    }

    #[test]
    fn test_actions_are_noops_on_empty_list() {
        let mut app = test_app();
        app.search_input = "zzz".to_string();
        handle_navigate(&mut app, key(KeyCode::Char('e')));
        assert!(app.edit.is_none());
        handle_navigate(&mut app, key(KeyCode::Char('d')));
        assert!(app.pending_delete.is_none());
        handle_navigate(&mut app, key(KeyCode::Enter));
        assert!(app.expanded.is_none());
    }
}
