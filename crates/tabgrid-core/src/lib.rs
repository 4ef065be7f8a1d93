#![warn(missing_docs)]
//! Tabgrid Core - Headless Modal Grid-Editing Engine
//!
//! # Overview
//!
//! `tabgrid-core` is the editing kernel of a modal (vim-style) editor for
//! rectangular text grids (TSV/CSV documents). It owns state, dispatch, and
//! mutation; it does not render. The embedding application provides a grid
//! view and feeds resolved key presses in; the core calls back out through
//! narrow hook traits for everything it cannot do itself (saving, quitting,
//! scrolling, OS clipboard transport).
//!
//! # Core Features
//!
//! - **Grid document model**: a rectangular string grid with structural
//!   row/column edits, stable sorting, and search
//! - **Reversible commands**: every mutation is a command with an exact
//!   inverse, on bounded undo/redo stacks
//! - **Paste geometry**: line-wise, block-wise, and character-wise yank/paste
//!   with modulo tiling over selections
//! - **Modal dispatch**: Normal/Insert/Visual/Command modes, numeric prefix
//!   counts, and a case-insensitive action registry
//! - **Configurable bindings**: a bidirectional key-notation mini-language
//!   and a vim-flavored remap-file parser with non-fatal diagnostics
//!
//! # Control Flow
//!
//! ```text
//! key press
//!   └─> active mode resolves (key, modifiers) in the merged binding table
//!         └─> action name looked up in the ActionRegistry
//!               └─> action mutates editor state and/or executes a
//!                   GridCommand through the CommandHistory
//!                     └─> subscribers observe a StateChange
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tabgrid_core::{ActionRegistry, Delimiter, Document, Editor, KeyBinding, parse_notation};
//!
//! let rows = Delimiter::Tsv.parse("name\tscore\nalice\t3\nbob\t7");
//! let registry = ActionRegistry::with_defaults();
//! let mut editor = Editor::new(Document::from_rows(rows));
//!
//! // j moves down, i enters insert mode, typed keys edit the cell.
//! editor.handle_key(KeyBinding::char('j'), &registry);
//! editor.handle_key(KeyBinding::char('i'), &registry);
//! for ch in "carol".chars() {
//!     editor.handle_key(KeyBinding::char(ch), &registry);
//! }
//! editor.handle_key(parse_notation("<Esc>").unwrap(), &registry);
//!
//! assert_eq!(editor.document().get(editor.cursor()), Some("carol"));
//! ```
//!
//! # Module Description
//!
//! - [`document`] - grid document model (positions, cells, rows)
//! - [`delimiter`] - Tsv/Csv text codecs
//! - [`content`] - yanked-content and selection value types
//! - [`commands`] - reversible command system and history stacks
//! - [`paste`] - paste geometry (insert-style and overwrite-style)
//! - [`key`] - key model and notation mini-language
//! - [`keymap`] - binding tables and remap-file parsing
//! - [`editor`] - modal state machine, actions, and hooks
//!
//! # Concurrency Model
//!
//! Single-threaded, synchronous, cooperative: each key press runs one full
//! resolve -> act -> command chain to completion before the next is accepted.
//! Nothing here is safe for concurrent access; drive the editor from one
//! logical input stream.

pub mod commands;
pub mod content;
pub mod delimiter;
pub mod document;
pub mod editor;
pub mod key;
pub mod keymap;
pub mod paste;

pub use commands::{
    AlignColumnsCommand, BulkSetCommand, CommandHistory, DeleteColumnCommand, DeleteRowCommand,
    GridCommand, HistoryError, InsertColumnCommand, InsertRowCommand, MAX_HISTORY, SetCellCommand,
    SortRowsCommand, column_display_widths, display_width,
};
pub use content::{ContentKind, SelectionRange, YankedContent};
pub use delimiter::Delimiter;
pub use document::{Cell, Document, Position, Row};
pub use editor::{
    ActionFn, ActionRegistry, ClipboardProvider, CommandKind, Editor, EditorHooks, Mode,
    NoopClipboard, NoopHooks, StateChange, StateChangeCallback, StateChangeType,
};
pub use key::{Key, KeyBinding, Modifiers, parse_notation, to_notation};
pub use keymap::{KeyBindingConfig, RemapDiagnostic, parse_remap};
pub use paste::{
    PasteCellsCommand, PasteColumnsCommand, PasteOverSelectionCommand, PasteRowsCommand, fill_rect,
};
