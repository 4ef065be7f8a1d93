//! Reversible Command System
//!
//! Every document mutation flows through a [`GridCommand`]: an operation that
//! captures enough pre-state at execute time to invert itself exactly. The
//! round-trip contract is strict: `execute()` then `undo()` must restore the
//! document to a state identical in cell values, row count, column count, and
//! row-index sequencing.
//!
//! Commands snapshot old values *before* writing. This ordering is mandatory
//! whenever a command touches overlapping positions; reading after a partial
//! write would bake corrupted state into the undo record.
//!
//! [`CommandHistory`] owns two bounded stacks (undo and redo, max depth 100).
//! Executing a new command clears the redo stack; trimming discards from the
//! oldest end.
//!
//! # Example
//!
//! ```rust
//! use tabgrid_core::{CommandHistory, Document, Position, SetCellCommand};
//!
//! let mut doc = Document::new(2, 2);
//! let mut history = CommandHistory::new();
//!
//! history.execute(Box::new(SetCellCommand::new(Position::new(0, 0), "x")), &mut doc);
//! assert_eq!(doc.get(Position::new(0, 0)), Some("x"));
//!
//! history.undo(&mut doc).unwrap();
//! assert_eq!(doc.get(Position::new(0, 0)), Some(""));
//!
//! history.redo(&mut doc).unwrap();
//! assert_eq!(doc.get(Position::new(0, 0)), Some("x"));
//! ```

use crate::document::{Cell, Document, Position, Row};
use std::collections::VecDeque;
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

/// Maximum depth of each history stack; the oldest entry is discarded beyond
/// this.
pub const MAX_HISTORY: usize = 100;

/// Errors from [`CommandHistory::undo`] / [`CommandHistory::redo`].
///
/// Calling either on an empty stack is a caller logic error (the caller is
/// expected to gate on [`CommandHistory::can_undo`] / `can_redo`), not a
/// recoverable runtime condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// The undo stack is empty.
    #[error("nothing to undo")]
    NothingToUndo,
    /// The redo stack is empty.
    #[error("nothing to redo")]
    NothingToRedo,
}

/// A reversible document operation.
///
/// Implementations capture their undo snapshot during [`execute`]
/// (read-before-write) and must tolerate being re-executed after an undo
/// (that is how redo works).
///
/// [`execute`]: GridCommand::execute
pub trait GridCommand {
    /// Apply the operation to the document.
    fn execute(&mut self, doc: &mut Document);
    /// Exactly invert the most recent [`execute`](GridCommand::execute).
    fn undo(&mut self, doc: &mut Document);
    /// Short human-readable description (for logs and debugging aids).
    fn describe(&self) -> String;
}

/// Bounded undo/redo stacks of executed commands.
#[derive(Default)]
pub struct CommandHistory {
    undo_stack: VecDeque<Box<dyn GridCommand>>,
    redo_stack: VecDeque<Box<dyn GridCommand>>,
}

impl CommandHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `cmd` against `doc`, push it onto the undo stack, and clear the
    /// redo stack. Trims the undo stack from the oldest end beyond
    /// [`MAX_HISTORY`].
    pub fn execute(&mut self, mut cmd: Box<dyn GridCommand>, doc: &mut Document) {
        cmd.execute(doc);
        self.undo_stack.push_back(cmd);
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Undo the most recent command, moving it to the redo stack.
    pub fn undo(&mut self, doc: &mut Document) -> Result<(), HistoryError> {
        let mut cmd = self
            .undo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToUndo)?;
        cmd.undo(doc);
        self.redo_stack.push_back(cmd);
        if self.redo_stack.len() > MAX_HISTORY {
            self.redo_stack.pop_front();
        }
        Ok(())
    }

    /// Re-execute the most recently undone command, moving it back to the
    /// undo stack.
    pub fn redo(&mut self, doc: &mut Document) -> Result<(), HistoryError> {
        let mut cmd = self
            .redo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToRedo)?;
        cmd.execute(doc);
        self.undo_stack.push_back(cmd);
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.pop_front();
        }
        Ok(())
    }

    /// Whether an undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Current undo stack depth.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Current redo stack depth.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop both stacks (e.g. after loading a new document).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl std::fmt::Debug for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHistory")
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .finish()
    }
}

/// Set a single cell's value.
#[derive(Debug)]
pub struct SetCellCommand {
    pos: Position,
    new_value: String,
    old_value: Option<String>,
}

impl SetCellCommand {
    /// Set the cell at `pos` to `value`.
    pub fn new(pos: Position, value: impl Into<String>) -> Self {
        Self {
            pos,
            new_value: value.into(),
            old_value: None,
        }
    }
}

impl GridCommand for SetCellCommand {
    fn execute(&mut self, doc: &mut Document) {
        self.old_value = doc.get(self.pos).map(str::to_string);
        doc.set_cell(self.pos, self.new_value.clone());
    }

    fn undo(&mut self, doc: &mut Document) {
        if let Some(old) = self.old_value.take() {
            doc.set_cell(self.pos, old);
        }
    }

    fn describe(&self) -> String {
        format!("set cell ({}, {})", self.pos.row, self.pos.col)
    }
}

/// Batched cell edits with caller-supplied old/new pairs.
///
/// This is the find/replace workhorse: regex compilation and match expansion
/// are the caller's responsibility, the command is a pure batched
/// set-with-undo.
#[derive(Debug)]
pub struct BulkSetCommand {
    label: String,
    edits: Vec<BulkEdit>,
}

#[derive(Debug)]
struct BulkEdit {
    pos: Position,
    old_value: String,
    new_value: String,
}

impl BulkSetCommand {
    /// Build a bulk edit from `(position, old, new)` triples.
    pub fn new(
        label: impl Into<String>,
        edits: impl IntoIterator<Item = (Position, String, String)>,
    ) -> Self {
        Self {
            label: label.into(),
            edits: edits
                .into_iter()
                .map(|(pos, old_value, new_value)| BulkEdit {
                    pos,
                    old_value,
                    new_value,
                })
                .collect(),
        }
    }

    /// Number of edits in the batch.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

impl GridCommand for BulkSetCommand {
    fn execute(&mut self, doc: &mut Document) {
        for edit in &self.edits {
            doc.set_cell(edit.pos, edit.new_value.clone());
        }
    }

    fn undo(&mut self, doc: &mut Document) {
        // Reverse order so overlapping edits unwind correctly.
        for edit in self.edits.iter().rev() {
            doc.set_cell(edit.pos, edit.old_value.clone());
        }
    }

    fn describe(&self) -> String {
        format!("{} ({} cells)", self.label, self.edits.len())
    }
}

/// Insert an empty row; undone by deleting at the same index.
#[derive(Debug)]
pub struct InsertRowCommand {
    at: usize,
}

impl InsertRowCommand {
    /// Insert before row `at`.
    pub fn new(at: usize) -> Self {
        Self { at }
    }
}

impl GridCommand for InsertRowCommand {
    fn execute(&mut self, doc: &mut Document) {
        doc.insert_row(self.at);
    }

    fn undo(&mut self, doc: &mut Document) {
        doc.delete_row(self.at);
    }

    fn describe(&self) -> String {
        format!("insert row {}", self.at)
    }
}

/// Delete a row, snapshotting its content for re-insertion on undo.
#[derive(Debug)]
pub struct DeleteRowCommand {
    at: usize,
    removed: Option<Vec<Cell>>,
}

impl DeleteRowCommand {
    /// Delete the row at `at`.
    pub fn new(at: usize) -> Self {
        Self { at, removed: None }
    }
}

impl GridCommand for DeleteRowCommand {
    fn execute(&mut self, doc: &mut Document) {
        self.removed = doc.delete_row(self.at);
    }

    fn undo(&mut self, doc: &mut Document) {
        if let Some(cells) = self.removed.take() {
            doc.restore_row(self.at, cells);
        }
    }

    fn describe(&self) -> String {
        format!("delete row {}", self.at)
    }
}

/// Insert an empty column; undone by deleting at the same index.
#[derive(Debug)]
pub struct InsertColumnCommand {
    at: usize,
}

impl InsertColumnCommand {
    /// Insert before column `at`.
    pub fn new(at: usize) -> Self {
        Self { at }
    }
}

impl GridCommand for InsertColumnCommand {
    fn execute(&mut self, doc: &mut Document) {
        doc.insert_column(self.at);
    }

    fn undo(&mut self, doc: &mut Document) {
        doc.delete_column(self.at);
    }

    fn describe(&self) -> String {
        format!("insert column {}", self.at)
    }
}

/// Delete a column, snapshotting its content for re-insertion on undo.
#[derive(Debug)]
pub struct DeleteColumnCommand {
    at: usize,
    removed: Option<Vec<Cell>>,
}

impl DeleteColumnCommand {
    /// Delete the column at `at`.
    pub fn new(at: usize) -> Self {
        Self { at, removed: None }
    }
}

impl GridCommand for DeleteColumnCommand {
    fn execute(&mut self, doc: &mut Document) {
        self.removed = doc.delete_column(self.at);
    }

    fn undo(&mut self, doc: &mut Document) {
        if let Some(cells) = self.removed.take() {
            doc.restore_column(self.at, cells);
        }
    }

    fn describe(&self) -> String {
        format!("delete column {}", self.at)
    }
}

/// Stable sort of all rows by one column's values.
///
/// Undo replaces the row list wholesale with the pre-sort sequence and
/// renumbers, restoring the exact original order (including ties).
#[derive(Debug)]
pub struct SortRowsCommand {
    col: usize,
    ascending: bool,
    before: Option<Vec<Row>>,
}

impl SortRowsCommand {
    /// Sort by column `col`, ascending or descending.
    pub fn new(col: usize, ascending: bool) -> Self {
        Self {
            col,
            ascending,
            before: None,
        }
    }
}

impl GridCommand for SortRowsCommand {
    fn execute(&mut self, doc: &mut Document) {
        self.before = Some(doc.rows().to_vec());
        doc.sort_by_column(self.col, self.ascending);
    }

    fn undo(&mut self, doc: &mut Document) {
        if let Some(rows) = self.before.take() {
            doc.replace_rows(rows);
        }
    }

    fn describe(&self) -> String {
        format!(
            "sort by column {} {}",
            self.col,
            if self.ascending {
                "ascending"
            } else {
                "descending"
            }
        )
    }
}

/// Pad every cell with trailing spaces so each column has a uniform display
/// width (the column's maximum).
///
/// Widths follow UAX #11: CJK ideographs, kana, full-width forms, CJK
/// punctuation, and Hangul count as 2 cells. Only cells whose value actually
/// changed are recorded for undo (sparse diff), which also makes the command
/// idempotent across a second run.
#[derive(Debug)]
pub struct AlignColumnsCommand {
    changed: Vec<(Position, String)>,
    widths: Vec<usize>,
}

impl AlignColumnsCommand {
    /// Align every column of the document.
    pub fn new() -> Self {
        Self {
            changed: Vec::new(),
            widths: Vec::new(),
        }
    }

    /// The per-column display widths computed by the last
    /// [`execute`](GridCommand::execute).
    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }
}

impl Default for AlignColumnsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl GridCommand for AlignColumnsCommand {
    fn execute(&mut self, doc: &mut Document) {
        self.changed.clear();
        self.widths = column_display_widths(doc);

        let row_count = doc.row_count();
        for r in 0..row_count {
            for (c, &target) in self.widths.iter().enumerate() {
                let pos = Position::new(r, c);
                let value = doc.get(pos).unwrap_or("");
                let width = display_width(value);
                if width < target {
                    let padded = format!("{}{}", value, " ".repeat(target - width));
                    self.changed.push((pos, value.to_string()));
                    doc.set_cell(pos, padded);
                }
            }
        }
    }

    fn undo(&mut self, doc: &mut Document) {
        for (pos, old) in self.changed.drain(..) {
            doc.set_cell(pos, old);
        }
    }

    fn describe(&self) -> String {
        format!("align columns ({} cells padded)", self.changed.len())
    }
}

/// Maximum display width of each column's values.
pub fn column_display_widths(doc: &Document) -> Vec<usize> {
    (0..doc.col_count())
        .map(|c| {
            doc.rows()
                .iter()
                .map(|r| display_width(&r.cells[c].value))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Display width of a string in terminal cells, per UAX #11.
///
/// Wide code points (CJK ideographs, Hiragana, Katakana, full-width forms,
/// CJK punctuation, Hangul) count as 2; everything else as 1.
pub fn display_width(s: &str) -> usize {
    s.chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
        .sum()
}
