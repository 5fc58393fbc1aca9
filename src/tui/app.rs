use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::config_io::load_config;
use crate::io::data_io::load_records;
use crate::model::{AgeField, AppConfig, UserRecord};
use crate::ops::draft::{self, Field};
use crate::ops::filter::{filter_records, highlight_re};
use crate::ops::store::RecordStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    Edit,
    Confirm,
}

/// In-progress edit of one record: a staged draft plus form focus state.
///
/// At most one of these exists at a time. Edit mode captures all input, so
/// nothing can toggle expansion or request a delete while a draft is open —
/// the only exits are an explicit save or cancel.
#[derive(Debug, Clone)]
pub struct EditState {
    /// Id of the record being edited (immutable)
    pub id: String,
    /// Staged working copy; merged into the store only on save
    pub draft: UserRecord,
    /// Index into `App::edit_fields()` of the focused form row
    pub focus: usize,
    /// Text of the focused field as currently typed
    pub buffer: String,
}

/// Main application state
pub struct App {
    /// The authoritative record collection
    pub store: RecordStore,
    pub config: AppConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// "Today" for age derivation, fixed at startup
    pub today: NaiveDate,
    /// Current search term; the visible list is always derived from
    /// (store, search_input), never cached
    pub search_input: String,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// First visible row of the list viewport
    pub scroll_offset: usize,
    /// Id of the single expanded record, if any
    pub expanded: Option<String>,
    /// Open edit draft, if any (mode == Edit)
    pub edit: Option<EditState>,
    /// Id awaiting delete confirmation (mode == Confirm); last request wins
    pub pending_delete: Option<String>,
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(records: Vec<UserRecord>, config: AppConfig, today: NaiveDate) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            store: RecordStore::load(records),
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            today,
            search_input: String::new(),
            cursor: 0,
            scroll_offset: 0,
            expanded: None,
            edit: None,
            pending_delete: None,
            show_help: false,
            status_message: None,
        }
    }

    // ── Derived views ──────────────────────────────────────────────

    /// The filtered view: records whose first name contains the search term,
    /// case-insensitively, in store order.
    pub fn visible_records(&self) -> Vec<&UserRecord> {
        filter_records(self.store.records(), &self.search_input)
    }

    /// Regex for highlighting the search match inside first names.
    pub fn search_highlight_re(&self) -> Option<Regex> {
        highlight_re(&self.search_input)
    }

    /// Id of the record under the cursor, if any.
    pub fn cursor_record_id(&self) -> Option<String> {
        self.visible_records()
            .get(self.cursor)
            .map(|r| r.id.clone())
    }

    /// Keep the cursor inside the visible list after a filter change or a
    /// delete shrinks it.
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_records().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    // ── Expansion ──────────────────────────────────────────────────

    /// Collapse if `id` is expanded, otherwise expand it. Expanding one
    /// record implicitly collapses any other — at most one is ever open.
    pub fn toggle_expansion(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    // ── Inline editor ──────────────────────────────────────────────

    /// The form rows, in display order. Age only appears under the
    /// `editable` policy; under `derived` it is computed from dob.
    pub fn edit_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::First, Field::Last, Field::Dob];
        if self.config.age_field == AgeField::Editable {
            fields.push(Field::Age);
        }
        fields.extend([
            Field::Gender,
            Field::Country,
            Field::Description,
            Field::Picture,
        ]);
        fields
    }

    /// Enter edit mode for a record, staging a copy of it as the draft.
    /// A stale id (record no longer in the store) is a no-op.
    pub fn begin_edit(&mut self, id: &str) {
        let Some(record) = self.store.get(id) else {
            return;
        };
        let draft = record.clone();
        let fields = self.edit_fields();
        let buffer = draft::field_value(&draft, fields[0]);
        self.edit = Some(EditState {
            id: id.to_string(),
            draft,
            focus: 0,
            buffer,
        });
        self.expanded = Some(id.to_string());
        self.mode = Mode::Edit;
    }

    /// The field currently focused in the edit form.
    pub fn focused_field(&self) -> Option<Field> {
        let edit = self.edit.as_ref()?;
        self.edit_fields().get(edit.focus).copied()
    }

    /// Apply the typed buffer to the draft via field validation. A rejected
    /// value resets the buffer to the draft's current value, so the form
    /// snaps back instead of holding invalid text.
    pub fn commit_field_buffer(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if let Some(edit) = &mut self.edit {
            let value = edit.buffer.clone();
            if !draft::set_field(&mut edit.draft, field, &value) {
                edit.buffer = draft::field_value(&edit.draft, field);
            }
        }
    }

    /// Move form focus, committing the current buffer first.
    pub fn focus_field(&mut self, index: usize) {
        self.commit_field_buffer();
        let fields = self.edit_fields();
        if let Some(edit) = &mut self.edit {
            edit.focus = index.min(fields.len() - 1);
            edit.buffer = draft::field_value(&edit.draft, fields[edit.focus]);
        }
    }

    /// Dirty check against the record currently in the store. False when
    /// the draft is untouched or the record has been deleted underneath.
    pub fn draft_modified(&self) -> bool {
        let Some(edit) = &self.edit else {
            return false;
        };
        match self.store.get(&edit.id) {
            Some(original) => draft::modified(&edit.draft, original),
            None => false,
        }
    }

    /// Save the draft back to the store. Disallowed (no-op, stays in edit
    /// mode) while unmodified; a stale id drops the draft and returns to
    /// viewing without touching the store.
    pub fn save_edit(&mut self) {
        self.commit_field_buffer();
        let Some(edit) = &self.edit else {
            return;
        };
        if !self.store.contains(&edit.id) {
            // Record deleted out from under the draft
            self.edit = None;
            self.mode = Mode::Navigate;
            self.status_message = Some("record no longer exists".to_string());
            return;
        }
        if !self.draft_modified() {
            return;
        }
        let edit = self.edit.take().unwrap();
        let name = edit.draft.full_name();
        self.store.update(&edit.id, edit.draft);
        self.mode = Mode::Navigate;
        self.status_message = Some(format!("saved \"{}\"", name));
        self.clamp_cursor();
    }

    /// Discard the draft unconditionally; the store is unchanged.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.mode = Mode::Navigate;
    }

    // ── Delete confirmation ────────────────────────────────────────

    /// Ask for confirmation before deleting. A request while another is
    /// pending overwrites it — last request wins.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
        self.mode = Mode::Confirm;
    }

    /// Confirmed: remove the record and clear the pending id. The filtered
    /// view picks the change up on the next render; the cursor is clamped
    /// to the now-smaller list.
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            let name = self.store.get(&id).map(|r| r.full_name());
            self.store.delete(&id);
            if self.expanded.as_deref() == Some(id.as_str()) {
                self.expanded = None;
            }
            if let Some(name) = name {
                self.status_message = Some(format!("deleted \"{}\"", name));
            }
            self.clamp_cursor();
        }
        self.mode = Mode::Navigate;
    }

    /// Cancelled: clear the pending id, no mutation.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.mode = Mode::Navigate;
    }
}

/// Run the TUI application
pub fn run(
    data_path: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    // A broken data source leaves the store empty and reports on the status
    // row; the UI still comes up.
    let (records, load_error) = match load_records(data_path) {
        Ok(records) => (records, None),
        Err(e) => (Vec::new(), Some(e.to_string())),
    };

    let today = chrono::Local::now().date_naive();
    let mut app = App::new(records, config, today);
    if let Some(err) = load_error {
        app.status_message = Some(format!("load failed: {}", err));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
