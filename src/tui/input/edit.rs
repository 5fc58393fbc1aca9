use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::draft::{self, Field};
use crate::tui::app::App;

/// Edit mode owns the keyboard completely: every key lands in the form, so
/// expansion and deletion cannot touch the record while its draft is open.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(field) = app.focused_field() else {
        app.cancel_edit();
        return;
    };

    match (key.modifiers, key.code) {
        // Cancel: discard the draft unconditionally
        (_, KeyCode::Esc) => {
            app.cancel_edit();
        }

        // Save; a no-op while the draft is unmodified
        (_, KeyCode::Enter) => {
            app.save_edit();
        }

        // Field focus movement (commits the current buffer)
        (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::Down) => {
            let next = app.edit.as_ref().map(|e| e.focus + 1).unwrap_or(0);
            let last = app.edit_fields().len() - 1;
            app.focus_field(if next > last { 0 } else { next });
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            let fields = app.edit_fields();
            let focus = app.edit.as_ref().map(|e| e.focus).unwrap_or(0);
            let prev = if focus == 0 { fields.len() - 1 } else { focus - 1 };
            app.focus_field(prev);
        }

        // Gender is a toggle, not a text input
        (_, KeyCode::Left | KeyCode::Right)
        | (KeyModifiers::NONE, KeyCode::Char(' '))
            if field == Field::Gender =>
        {
            if let Some(edit) = &mut app.edit {
                let toggled = edit.draft.gender.toggled();
                draft::set_field(&mut edit.draft, Field::Gender, toggled.as_str());
                edit.buffer = toggled.as_str().to_string();
            }
        }

        (_, KeyCode::Backspace) => {
            if let Some(edit) = &mut app.edit {
                edit.buffer.pop();
            }
            apply_buffer_live(app, field);
        }

        // Type character. Characters the field does not accept are silently
        // dropped — the field visually does not change.
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if !field.accepts_char(c) {
                return;
            }
            if let Some(edit) = &mut app.edit {
                edit.buffer.push(c);
            }
            apply_buffer_live(app, field);
        }

        _ => {}
    }
}

/// Push the buffer into the draft after each keystroke so the dirty check
/// tracks live. Unlike the snap-back on focus change, a rejection here
/// leaves the buffer alone: the user may be mid-way through retyping a
/// value (an empty name is invalid but a fine transient state).
fn apply_buffer_live(app: &mut App, field: Field) {
    if let Some(edit) = &mut app.edit {
        let value = edit.buffer.clone();
        draft::set_field(&mut edit.draft, field, &value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use crate::tui::app::{Mode, tests::test_app};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_edit(app, key(KeyCode::Char(c)));
        }
    }

    fn clear_field(app: &mut App) {
        let len = app.edit.as_ref().unwrap().buffer.len();
        for _ in 0..len {
            handle_edit(app, key(KeyCode::Backspace));
        }
    }

    #[test]
    fn test_digits_into_name_field_are_dropped() {
        let mut app = test_app();
        app.begin_edit("1");
        clear_field(&mut app);
        type_str(&mut app, "John2");
        assert_eq!(app.edit.as_ref().unwrap().buffer, "John");
        assert_eq!(app.edit.as_ref().unwrap().draft.first, "John");
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut app = test_app();
        app.begin_edit("1");
        let count = app.edit_fields().len();
        for _ in 0..count {
            handle_edit(&mut app, key(KeyCode::Tab));
        }
        // Wrapped back to the first field
        assert_eq!(app.edit.as_ref().unwrap().focus, 0);
    }

    #[test]
    fn test_gender_toggles_with_space() {
        let mut app = test_app();
        app.begin_edit("1");
        let gender_idx = app
            .edit_fields()
            .iter()
            .position(|f| *f == Field::Gender)
            .unwrap();
        app.focus_field(gender_idx);

        handle_edit(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.edit.as_ref().unwrap().draft.gender, Gender::Male);
        handle_edit(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.edit.as_ref().unwrap().draft.gender, Gender::Female);
        // Typing into the gender field does nothing
        type_str(&mut app, "x");
        assert_eq!(app.edit.as_ref().unwrap().buffer, "Female");
    }

    #[test]
    fn test_enter_saves_modified_draft() {
        let mut app = test_app();
        app.begin_edit("1");
        type_str(&mut app, "na");
        handle_edit(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.get("1").unwrap().first, "Ameliana");
    }

    #[test]
    fn test_enter_on_unmodified_draft_stays_editing() {
        let mut app = test_app();
        app.begin_edit("1");
        handle_edit(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.edit.is_some());
    }

    #[test]
    fn test_esc_cancels_without_store_change() {
        let mut app = test_app();
        app.begin_edit("1");
        type_str(&mut app, "xyz");
        handle_edit(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.get("1").unwrap().first, "Amelia");
    }

    #[test]
    fn test_dirty_tracks_live_and_reverts() {
        let mut app = test_app();
        app.begin_edit("1");
        assert!(!app.draft_modified());
        type_str(&mut app, "s");
        assert!(app.draft_modified());
        handle_edit(&mut app, key(KeyCode::Backspace));
        assert!(!app.draft_modified());
    }
}
