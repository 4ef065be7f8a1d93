//! Modal State Machine
//!
//! The top-level control flow of the engine: an input event (a resolved
//! [`KeyBinding`]) enters [`Editor::handle_key`], the active mode resolves it
//! against the merged binding table (remap overrides over defaults), the named
//! action is looked up case-insensitively in the [`ActionRegistry`], and the
//! action mutates state directly and/or issues a reversible command through
//! the history stack.
//!
//! # Modes
//!
//! Normal, Insert, Visual, and Command. Visual's sub-kind (character, line,
//! block) is carried on the active selection; Command's sub-kind (ex command
//! vs. search) is a field. Transitions happen only through resolved actions
//! such as `switch_to_insert` — there is no other path that changes mode.
//! Each mode has an entry hook that normalizes state (entering Visual seeds a
//! 1x1 selection at the cursor).
//!
//! # External collaborators
//!
//! Actions reach outward only through the narrow [`EditorHooks`] and
//! [`ClipboardProvider`] traits. Both have no-op defaults so hosts and tests
//! implement only what they observe.
//!
//! # Example
//!
//! ```rust
//! use tabgrid_core::{ActionRegistry, Document, Editor, KeyBinding, Mode, Position};
//!
//! let registry = ActionRegistry::with_defaults();
//! let mut editor = Editor::new(Document::new(5, 5));
//!
//! editor.handle_key(KeyBinding::char('3'), &registry);
//! editor.handle_key(KeyBinding::char('j'), &registry);
//! assert_eq!(editor.cursor(), Position::new(3, 0));
//!
//! editor.handle_key(KeyBinding::char('v'), &registry);
//! assert_eq!(editor.mode(), Mode::Visual);
//! ```

use crate::commands::{
    AlignColumnsCommand, BulkSetCommand, CommandHistory, DeleteColumnCommand, DeleteRowCommand,
    GridCommand, InsertColumnCommand, InsertRowCommand, SetCellCommand, SortRowsCommand,
    column_display_widths,
};
use crate::content::{ContentKind, SelectionRange, YankedContent};
use crate::document::{Document, Position};
use crate::key::{Key, KeyBinding};
use crate::keymap::{KeyBindingConfig, RemapDiagnostic};
use crate::paste::{PasteCellsCommand, PasteColumnsCommand, PasteOverSelectionCommand,
    PasteRowsCommand};
use std::collections::HashMap;

/// The four top-level input modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Navigation and operators.
    Normal,
    /// Cell text entry.
    Insert,
    /// Selection building; the character/line/block sub-kind lives on the
    /// active selection.
    Visual,
    /// Ex-command or search input; the sub-kind is [`CommandKind`].
    Command,
}

/// What the Command mode input line is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// An ex command (`:w`, `:q`, ...).
    Ex,
    /// A search pattern (`/...`).
    Search,
}

/// State change categories reported to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeType {
    /// Document content changed (a command executed, was undone, or redone).
    DocumentModified,
    /// The cursor moved.
    CursorMoved,
    /// The visual selection changed.
    SelectionChanged,
    /// The mode changed.
    ModeChanged,
    /// The search result set changed.
    SearchChanged,
}

/// A state change record delivered to subscribers.
#[derive(Debug, Clone)]
pub struct StateChange {
    /// Change category.
    pub change_type: StateChangeType,
    /// Version before the change.
    pub old_version: u64,
    /// Version after the change.
    pub new_version: u64,
}

/// State change callback type.
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;

/// Outward calls from actions to the embedding application.
///
/// Every method has a no-op default; hosts override what they handle.
pub trait EditorHooks {
    /// `:w` / `:wq` — the host should persist the document.
    fn save_requested(&mut self) {}
    /// `:q` / `:q!` — the host should close the view; `force` skips the
    /// modified check.
    fn quit_requested(&mut self, _force: bool) {}
    /// The view should scroll the cursor row to the vertical center.
    fn scroll_to_center(&mut self) {}
    /// Column display widths changed (after `align_columns`).
    fn column_widths_updated(&mut self, _widths: &[usize]) {}
    /// A yank captured new content.
    fn yank_performed(&mut self, _content: &YankedContent) {}
    /// The previous tab/document should be focused.
    fn previous_tab_requested(&mut self) {}
    /// The next tab/document should be focused.
    fn next_tab_requested(&mut self) {}
}

/// Clipboard transport, replaceable and allowed to fail.
///
/// A provider that cannot serve the grid format returns `None`; the editor
/// then falls back to its in-session register.
pub trait ClipboardProvider {
    /// Publish a content snapshot.
    fn set_content(&mut self, _content: &YankedContent) {}
    /// Retrieve the last published snapshot, if the transport has one.
    fn get_content(&mut self) -> Option<YankedContent> {
        None
    }
}

/// Hooks implementation that ignores everything.
#[derive(Debug, Default)]
pub struct NoopHooks;
impl EditorHooks for NoopHooks {}

/// Clipboard that stores nothing and returns nothing.
#[derive(Debug, Default)]
pub struct NoopClipboard;
impl ClipboardProvider for NoopClipboard {}

/// An action implementation: receives the editor and the resolved count.
pub type ActionFn = fn(&mut Editor, u32);

/// Case-insensitive map from action name to implementation.
///
/// Owned by the composition root and passed by reference into
/// [`Editor::handle_key`]; there is deliberately no global registry.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, ActionFn>,
}

impl ActionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in action.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, f) in BUILTIN_ACTIONS {
            registry.register(name, *f);
        }
        registry
    }

    /// Register (or replace) an action. Names are case-insensitive.
    pub fn register(&mut self, name: &str, f: ActionFn) {
        self.actions.insert(name.to_ascii_lowercase(), f);
    }

    /// Look up an action by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<ActionFn> {
        self.actions.get(&name.to_ascii_lowercase()).copied()
    }

    /// All registered names, sorted (deterministic enumeration for
    /// diagnostics and docs).
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.actions.len())
            .finish()
    }
}

/// The modal grid editor: document, history, cursor, selection, register,
/// bindings, and the dispatch state machine.
pub struct Editor {
    doc: Document,
    history: CommandHistory,
    cursor: Position,
    mode: Mode,
    visual_anchor: Option<Position>,
    visual_kind: ContentKind,
    register: Option<YankedContent>,
    pending_count: Option<u32>,
    command_kind: CommandKind,
    command_buffer: String,
    insert_buffer: String,
    last_matches: Vec<Position>,
    bindings: KeyBindingConfig,
    hooks: Box<dyn EditorHooks>,
    clipboard: Box<dyn ClipboardProvider>,
    version: u64,
    callbacks: Vec<StateChangeCallback>,
}

impl Editor {
    /// Create an editor over `doc` with no-op collaborators and the default
    /// key bindings.
    pub fn new(doc: Document) -> Self {
        Self::with_collaborators(doc, Box::new(NoopHooks), Box::new(NoopClipboard))
    }

    /// Create an editor with explicit hook and clipboard collaborators.
    pub fn with_collaborators(
        doc: Document,
        hooks: Box<dyn EditorHooks>,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> Self {
        Self {
            doc,
            history: CommandHistory::new(),
            cursor: Position::new(0, 0),
            mode: Mode::Normal,
            visual_anchor: None,
            visual_kind: ContentKind::Character,
            register: None,
            pending_count: None,
            command_kind: CommandKind::Ex,
            command_buffer: String::new(),
            insert_buffer: String::new(),
            last_matches: Vec::new(),
            bindings: KeyBindingConfig::defaults(),
            hooks,
            clipboard,
            version: 0,
            callbacks: Vec::new(),
        }
    }

    /// The document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The active visual selection, if any: spans from the visual anchor to
    /// the cursor, carrying the visual sub-kind.
    pub fn selection(&self) -> Option<SelectionRange> {
        self.visual_anchor
            .map(|anchor| SelectionRange::new(self.visual_kind, anchor, self.cursor))
    }

    /// The in-session last-yank register.
    pub fn register(&self) -> Option<&YankedContent> {
        self.register.as_ref()
    }

    /// The Command-mode input line being collected.
    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    /// What Command mode is collecting (meaningful while in Command mode).
    pub fn command_kind(&self) -> CommandKind {
        self.command_kind
    }

    /// The Insert-mode edit buffer for the current cell.
    pub fn insert_buffer(&self) -> &str {
        &self.insert_buffer
    }

    /// The accumulated numeric prefix, if one is pending.
    pub fn pending_count(&self) -> Option<u32> {
        self.pending_count
    }

    /// Undo/redo history (read access for status displays).
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Positions of the current search result set, in row-major order.
    pub fn search_matches(&self) -> &[Position] {
        &self.last_matches
    }

    /// Apply a remap file over the current bindings, returning its parse
    /// diagnostics.
    pub fn apply_remap(&mut self, text: &str) -> Vec<RemapDiagnostic> {
        self.bindings.apply_remap(text)
    }

    /// The merged binding table.
    pub fn bindings(&self) -> &KeyBindingConfig {
        &self.bindings
    }

    /// Subscribe to state change notifications.
    pub fn subscribe(&mut self, callback: impl FnMut(&StateChange) + Send + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Dispatch one key press through the active mode.
    ///
    /// Runs the full resolve -> act -> command chain to completion before
    /// returning; the engine is single-threaded and nothing suspends
    /// mid-operation.
    pub fn handle_key(&mut self, binding: KeyBinding, registry: &ActionRegistry) {
        match self.mode {
            Mode::Normal | Mode::Visual => self.handle_modal_key(binding, registry),
            Mode::Insert => self.handle_insert_key(binding, registry),
            Mode::Command => self.handle_command_key(binding, registry),
        }
    }

    fn handle_modal_key(&mut self, binding: KeyBinding, registry: &ActionRegistry) {
        // Digit accumulation: '0' only continues an existing count (a bare
        // '0' is the move_row_start binding).
        if binding.mods.is_empty()
            && let Key::Char(ch) = binding.key
            && ch.is_ascii_digit()
            && (ch != '0' || self.pending_count.is_some())
        {
            let digit = (ch as u8 - b'0') as u32;
            let next = self
                .pending_count
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit);
            self.pending_count = Some(next);
            return;
        }

        if let Some(action) = self
            .bindings
            .resolve(self.mode, &binding)
            .map(str::to_string)
        {
            let count = self.take_count();
            if let Some(f) = registry.get(&action) {
                f(self, count);
            }
        } else {
            // Unbound key: drop any pending count.
            self.pending_count = None;
        }
    }

    fn handle_insert_key(&mut self, binding: KeyBinding, registry: &ActionRegistry) {
        if let Some(action) = self
            .bindings
            .resolve(Mode::Insert, &binding)
            .map(str::to_string)
        {
            if let Some(f) = registry.get(&action) {
                f(self, 1);
            }
            return;
        }
        match binding.key {
            Key::Backspace => {
                self.insert_buffer.pop();
            }
            _ => {
                if let Some(ch) = binding.to_char() {
                    self.insert_buffer.push(ch);
                }
            }
        }
    }

    fn handle_command_key(&mut self, binding: KeyBinding, registry: &ActionRegistry) {
        if let Some(action) = self
            .bindings
            .resolve(Mode::Command, &binding)
            .map(str::to_string)
        {
            if let Some(f) = registry.get(&action) {
                f(self, 1);
            }
            return;
        }
        match binding.key {
            Key::Backspace => {
                self.command_buffer.pop();
            }
            _ => {
                if let Some(ch) = binding.to_char() {
                    self.command_buffer.push(ch);
                }
            }
        }
    }

    fn take_count(&mut self) -> u32 {
        self.pending_count.take().unwrap_or(1).max(1)
    }

    /// Mode transition with exit/entry normalization.
    fn enter_mode(&mut self, mode: Mode) {
        if self.mode == Mode::Insert && mode != Mode::Insert {
            self.commit_insert();
        }
        self.mode = mode;
        match mode {
            Mode::Normal => {
                self.visual_anchor = None;
                self.pending_count = None;
            }
            Mode::Insert => {}
            Mode::Visual => {
                // Entry seeds a 1x1 selection at the cursor.
                if self.visual_anchor.is_none() {
                    self.visual_anchor = Some(self.cursor);
                }
            }
            Mode::Command => self.command_buffer.clear(),
        }
        self.notify(StateChangeType::ModeChanged);
    }

    fn commit_insert(&mut self) {
        let value = std::mem::take(&mut self.insert_buffer);
        if self.doc.get(self.cursor) != Some(value.as_str()) {
            self.run_command(Box::new(SetCellCommand::new(self.cursor, value)));
        }
    }

    fn run_command(&mut self, cmd: Box<dyn GridCommand>) {
        self.history.execute(cmd, &mut self.doc);
        self.notify(StateChangeType::DocumentModified);
    }

    fn set_cursor(&mut self, pos: Position) {
        let pos = pos.clamp(&self.doc);
        if pos != self.cursor {
            self.cursor = pos;
            if self.mode == Mode::Visual {
                self.notify(StateChangeType::SelectionChanged);
            } else {
                self.notify(StateChangeType::CursorMoved);
            }
        }
    }

    fn move_cursor(&mut self, delta_row: isize, delta_col: isize) {
        let row = self.cursor.row.saturating_add_signed(delta_row);
        let col = self.cursor.col.saturating_add_signed(delta_col);
        self.set_cursor(Position::new(row, col));
    }

    fn notify(&mut self, change_type: StateChangeType) {
        let old_version = self.version;
        self.version += 1;
        let change = StateChange {
            change_type,
            old_version,
            new_version: self.version,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }

    fn yank(&mut self) {
        let sel = self.selection().unwrap_or(SelectionRange::new(
            ContentKind::Character,
            self.cursor,
            self.cursor,
        ));
        let content = YankedContent::capture(&self.doc, &sel);
        self.clipboard.set_content(&content);
        self.hooks.yank_performed(&content);
        self.register = Some(content);
        if self.mode == Mode::Visual {
            self.enter_mode(Mode::Normal);
        }
    }

    fn delete_selection(&mut self) {
        let Some(sel) = self.selection() else {
            return;
        };
        // A delete yanks first, like any vim-family editor.
        let content = YankedContent::capture(&self.doc, &sel);
        self.clipboard.set_content(&content);
        self.hooks.yank_performed(&content);
        self.register = Some(content);

        let (row_range, col_range) = sel.materialize(&self.doc);
        let mut edits = Vec::new();
        for r in row_range {
            for c in col_range.clone() {
                let pos = Position::new(r, c);
                if let Some(old) = self.doc.get(pos) {
                    if !old.is_empty() {
                        edits.push((pos, old.to_string(), String::new()));
                    }
                }
            }
        }
        if !edits.is_empty() {
            self.run_command(Box::new(BulkSetCommand::new("delete selection", edits)));
        }
        self.enter_mode(Mode::Normal);
    }

    /// Fetch paste content: the clipboard snapshot if the transport has one,
    /// otherwise the in-session register.
    fn paste_content(&mut self) -> Option<YankedContent> {
        self.clipboard
            .get_content()
            .or_else(|| self.register.clone())
            .filter(|c| !c.is_empty())
    }

    fn paste(&mut self, before: bool) {
        let Some(content) = self.paste_content() else {
            return;
        };

        if self.mode == Mode::Visual
            && let Some(sel) = self.selection()
        {
            let (row_range, col_range) = sel.materialize(&self.doc);
            let anchor = Position::new(row_range.start, col_range.start);
            self.run_command(Box::new(PasteOverSelectionCommand::new(
                anchor,
                row_range.len(),
                col_range.len(),
                content,
            )));
            self.enter_mode(Mode::Normal);
            return;
        }

        match content.kind() {
            ContentKind::Line => {
                self.run_command(Box::new(PasteRowsCommand::new(
                    self.cursor.row,
                    before,
                    content,
                )));
            }
            ContentKind::Block => {
                self.run_command(Box::new(PasteColumnsCommand::new(
                    self.cursor.col,
                    before,
                    content,
                )));
            }
            ContentKind::Character => {
                self.run_command(Box::new(PasteCellsCommand::new(self.cursor, content)));
            }
        }
    }

    fn start_visual(&mut self, kind: ContentKind) {
        self.visual_kind = kind;
        self.enter_mode(Mode::Visual);
        self.notify(StateChangeType::SelectionChanged);
    }

    fn start_command(&mut self, kind: CommandKind) {
        self.command_kind = kind;
        self.enter_mode(Mode::Command);
    }

    fn commit_command(&mut self) {
        let input = std::mem::take(&mut self.command_buffer);
        let kind = self.command_kind;
        self.enter_mode(Mode::Normal);
        match kind {
            CommandKind::Ex => self.run_ex(&input),
            CommandKind::Search => self.run_search(&input),
        }
    }

    fn run_ex(&mut self, input: &str) {
        match input.trim() {
            "w" => self.hooks.save_requested(),
            "q" => self.hooks.quit_requested(false),
            "q!" => self.hooks.quit_requested(true),
            "wq" => {
                self.hooks.save_requested();
                self.hooks.quit_requested(false);
            }
            "sort" => self.run_command(Box::new(SortRowsCommand::new(self.cursor.col, true))),
            "sort!" => self.run_command(Box::new(SortRowsCommand::new(self.cursor.col, false))),
            _ => {}
        }
    }

    fn run_search(&mut self, input: &str) {
        // A `\r` prefix switches this one search to regex matching.
        let (pattern, use_regex) = match input.strip_prefix("\\r") {
            Some(rest) => (rest, true),
            None => (input, false),
        };
        let matches = self.doc.find_matches(pattern, use_regex, true);
        self.doc.set_match_flags(&matches);
        self.last_matches = matches;
        self.notify(StateChangeType::SearchChanged);
        self.jump_to_match_from(self.cursor, true);
    }

    /// Move to the nearest match at/after (`forward`) or before `from`,
    /// wrapping around the document.
    fn jump_to_match_from(&mut self, from: Position, forward: bool) {
        if self.last_matches.is_empty() {
            return;
        }
        let target = if forward {
            self.last_matches
                .iter()
                .find(|p| **p >= from)
                .or_else(|| self.last_matches.first())
        } else {
            self.last_matches
                .iter()
                .rev()
                .find(|p| **p < from)
                .or_else(|| self.last_matches.last())
        };
        if let Some(&pos) = target {
            self.set_cursor(pos);
        }
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("mode", &self.mode)
            .field("cursor", &self.cursor)
            .field("rows", &self.doc.row_count())
            .field("cols", &self.doc.col_count())
            .finish()
    }
}

/// Built-in action table: the stable names remap files bind against.
const BUILTIN_ACTIONS: &[(&str, ActionFn)] = &[
    ("move_left", |ed, n| ed.move_cursor(0, -(n as isize))),
    ("move_down", |ed, n| ed.move_cursor(n as isize, 0)),
    ("move_up", |ed, n| ed.move_cursor(-(n as isize), 0)),
    ("move_right", |ed, n| ed.move_cursor(0, n as isize)),
    // Fast movement carries an intrinsic x10 multiplier on top of the count.
    ("move_left_fast", |ed, n| {
        ed.move_cursor(0, -((n * 10) as isize))
    }),
    ("move_down_fast", |ed, n| ed.move_cursor((n * 10) as isize, 0)),
    ("move_up_fast", |ed, n| {
        ed.move_cursor(-((n * 10) as isize), 0)
    }),
    ("move_right_fast", |ed, n| ed.move_cursor(0, (n * 10) as isize)),
    ("move_row_start", |ed, _| {
        ed.set_cursor(Position::new(ed.cursor.row, 0))
    }),
    ("move_row_end", |ed, _| {
        let col = ed.doc.col_count().saturating_sub(1);
        ed.set_cursor(Position::new(ed.cursor.row, col));
    }),
    ("move_top", |ed, _| {
        ed.set_cursor(Position::new(0, ed.cursor.col))
    }),
    ("move_bottom", |ed, _| {
        let row = ed.doc.row_count().saturating_sub(1);
        ed.set_cursor(Position::new(row, ed.cursor.col));
    }),
    ("switch_to_normal", |ed, _| ed.enter_mode(Mode::Normal)),
    ("switch_to_insert", |ed, _| {
        ed.insert_buffer.clear();
        ed.enter_mode(Mode::Insert);
    }),
    ("switch_to_insert_after", |ed, _| {
        ed.insert_buffer = ed.doc.get(ed.cursor).unwrap_or("").to_string();
        ed.enter_mode(Mode::Insert);
    }),
    ("switch_to_visual", |ed, _| {
        ed.start_visual(ContentKind::Character)
    }),
    ("switch_to_visual_line", |ed, _| ed.start_visual(ContentKind::Line)),
    ("switch_to_visual_block", |ed, _| {
        ed.start_visual(ContentKind::Block)
    }),
    ("start_ex_command", |ed, _| ed.start_command(CommandKind::Ex)),
    ("start_search", |ed, _| ed.start_command(CommandKind::Search)),
    ("commit_command", |ed, _| ed.commit_command()),
    ("clear_cell", |ed, _| {
        ed.run_command(Box::new(SetCellCommand::new(ed.cursor, "")))
    }),
    ("yank_selection", |ed, _| ed.yank()),
    ("delete_selection", |ed, _| ed.delete_selection()),
    ("paste_after", |ed, _| ed.paste(false)),
    ("paste_before", |ed, _| ed.paste(true)),
    ("undo", |ed, _| {
        if ed.history.can_undo() {
            let _ = ed.history.undo(&mut ed.doc);
            ed.notify(StateChangeType::DocumentModified);
        }
    }),
    ("redo", |ed, _| {
        if ed.history.can_redo() {
            let _ = ed.history.redo(&mut ed.doc);
            ed.notify(StateChangeType::DocumentModified);
        }
    }),
    ("insert_row_above", |ed, _| {
        ed.run_command(Box::new(InsertRowCommand::new(ed.cursor.row)))
    }),
    ("insert_row_below", |ed, _| {
        ed.run_command(Box::new(InsertRowCommand::new(ed.cursor.row + 1)))
    }),
    ("insert_column_left", |ed, _| {
        ed.run_command(Box::new(InsertColumnCommand::new(ed.cursor.col)))
    }),
    ("insert_column_right", |ed, _| {
        ed.run_command(Box::new(InsertColumnCommand::new(ed.cursor.col + 1)))
    }),
    ("delete_row", |ed, _| {
        ed.run_command(Box::new(DeleteRowCommand::new(ed.cursor.row)));
        ed.set_cursor(ed.cursor);
    }),
    ("delete_column", |ed, _| {
        ed.run_command(Box::new(DeleteColumnCommand::new(ed.cursor.col)));
        ed.set_cursor(ed.cursor);
    }),
    ("sort_asc", |ed, _| {
        ed.run_command(Box::new(SortRowsCommand::new(ed.cursor.col, true)))
    }),
    ("sort_desc", |ed, _| {
        ed.run_command(Box::new(SortRowsCommand::new(ed.cursor.col, false)))
    }),
    ("align_columns", |ed, _| {
        ed.run_command(Box::new(AlignColumnsCommand::new()));
        let widths = column_display_widths(&ed.doc);
        ed.hooks.column_widths_updated(&widths);
    }),
    ("search_next", |ed, _| {
        let from = Position::new(ed.cursor.row, ed.cursor.col + 1);
        ed.jump_to_match_from(from, true);
    }),
    ("search_prev", |ed, _| {
        ed.jump_to_match_from(ed.cursor, false);
    }),
    ("scroll_center", |ed, _| ed.hooks.scroll_to_center()),
    ("next_tab", |ed, _| ed.hooks.next_tab_requested()),
    ("prev_tab", |ed, _| ed.hooks.previous_tab_requested()),
];
