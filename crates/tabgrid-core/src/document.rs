//! Grid Document Model
//!
//! The document is a rectangular, mutable grid of string cells. Unlike a text
//! buffer, the unit of editing is the cell, and the structural operations work
//! on whole rows and columns.
//!
//! # Rectangularity Invariant
//!
//! After *any* mutating operation, every row holds exactly
//! [`Document::col_count`] cells. Structural operations (row/column
//! insert/delete, [`Document::ensure_size`]) maintain this themselves; cell
//! edits cannot violate it.
//!
//! # Bounds Policy
//!
//! Cell access and structural edits are bounds-checked and silently ignore
//! out-of-range positions/indices. Callers that need to know whether an index
//! is valid check `row_count`/`col_count` up front.
//!
//! # Example
//!
//! ```rust
//! use tabgrid_core::{Document, Position};
//!
//! let mut doc = Document::new(2, 3);
//! doc.set_cell(Position::new(0, 1), "hello");
//! assert_eq!(doc.get(Position::new(0, 1)), Some("hello"));
//!
//! doc.insert_row(1);
//! assert_eq!(doc.row_count(), 3);
//! assert_eq!(doc.get(Position::new(1, 1)), Some(""));
//! ```

use regex::RegexBuilder;
use std::cmp::Ordering;

/// A cell coordinate (row and column indices, both zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Clamp this position into the document's extents
    /// (`[0, row_count) x [0, col_count)`).
    ///
    /// An empty document clamps everything to the origin.
    pub fn clamp(self, doc: &Document) -> Self {
        Self {
            row: self.row.min(doc.row_count().saturating_sub(1)),
            col: self.col.min(doc.col_count().saturating_sub(1)),
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single grid cell: a string value plus an ephemeral search-match flag.
///
/// The match flag is presentation state (highlighting); it is not part of the
/// document content and never participates in undo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Cell value.
    pub value: String,
    /// Whether this cell is part of the current search result set.
    pub is_match: bool,
}

impl Cell {
    /// Create a cell with the given value and no match flag.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_match: false,
        }
    }
}

/// An ordered list of cells carrying its own row index.
///
/// The index duplicates the row's place in the document and is kept consistent
/// by every structural operation; views key off it for stable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// This row's index within the document.
    pub index: usize,
    /// The row's cells, exactly `col_count` of them.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a row of `cols` empty cells at `index`.
    pub fn new(index: usize, cols: usize) -> Self {
        Self {
            index,
            cells: vec![Cell::default(); cols],
        }
    }

    /// Build a row from string values.
    pub fn from_values(index: usize, values: impl IntoIterator<Item = String>) -> Self {
        Self {
            index,
            cells: values.into_iter().map(Cell::new).collect(),
        }
    }
}

/// A rectangular grid of string cells.
///
/// Created on load, mutated for the session through the command system, and
/// discarded on close. See the module docs for the rectangularity invariant
/// and the bounds policy.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rows: Vec<Row>,
    cols: usize,
}

impl Document {
    /// Create a document of `rows` x `cols` empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|i| Row::new(i, cols)).collect(),
            cols,
        }
    }

    /// Build a document from parsed row values, padding ragged rows with empty
    /// cells so the result is rectangular.
    pub fn from_rows(values: Vec<Vec<String>>) -> Self {
        let cols = values.iter().map(Vec::len).max().unwrap_or(0);
        let rows = values
            .into_iter()
            .enumerate()
            .map(|(i, mut v)| {
                v.resize(cols, String::new());
                Row::from_values(i, v)
            })
            .collect();
        Self { rows, cols }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (uniform across all rows).
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the document has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols == 0
    }

    /// The rows, in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Cell value at `pos`, or `None` out of range.
    pub fn get(&self, pos: Position) -> Option<&str> {
        self.rows
            .get(pos.row)
            .and_then(|r| r.cells.get(pos.col))
            .map(|c| c.value.as_str())
    }

    /// Whether the cell at `pos` carries the search-match flag.
    pub fn is_match(&self, pos: Position) -> bool {
        self.rows
            .get(pos.row)
            .and_then(|r| r.cells.get(pos.col))
            .is_some_and(|c| c.is_match)
    }

    /// Set the cell value at `pos`. Out-of-range positions are ignored.
    pub fn set_cell(&mut self, pos: Position, value: impl Into<String>) {
        if let Some(cell) = self
            .rows
            .get_mut(pos.row)
            .and_then(|r| r.cells.get_mut(pos.col))
        {
            cell.value = value.into();
        }
    }

    /// Insert an empty row before index `at`. Valid range is `[0, row_count]`
    /// (inserting at `row_count` appends); anything else is ignored.
    pub fn insert_row(&mut self, at: usize) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(at, self.cols));
        self.renumber_rows();
    }

    /// Delete the row at `at`, returning its cells. Out-of-range indices are
    /// ignored and return `None`.
    pub fn delete_row(&mut self, at: usize) -> Option<Vec<Cell>> {
        if at >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(at);
        self.renumber_rows();
        Some(removed.cells)
    }

    /// Re-insert a previously deleted row's cells at `at`. The cell list is
    /// padded or truncated to the current column count.
    pub fn restore_row(&mut self, at: usize, mut cells: Vec<Cell>) {
        if at > self.rows.len() {
            return;
        }
        cells.resize(self.cols, Cell::default());
        self.rows.insert(at, Row { index: at, cells });
        self.renumber_rows();
    }

    /// Insert an empty column before index `at`. Valid range is
    /// `[0, col_count]`; anything else is ignored.
    pub fn insert_column(&mut self, at: usize) {
        if at > self.cols {
            return;
        }
        for row in &mut self.rows {
            row.cells.insert(at, Cell::default());
        }
        self.cols += 1;
    }

    /// Delete the column at `at`, returning its cells top-to-bottom.
    /// Out-of-range indices are ignored and return `None`.
    pub fn delete_column(&mut self, at: usize) -> Option<Vec<Cell>> {
        if at >= self.cols {
            return None;
        }
        let removed = self.rows.iter_mut().map(|r| r.cells.remove(at)).collect();
        self.cols -= 1;
        Some(removed)
    }

    /// Re-insert a previously deleted column at `at`. The cell list is padded
    /// with empty cells if shorter than the current row count.
    pub fn restore_column(&mut self, at: usize, cells: Vec<Cell>) {
        if at > self.cols {
            return;
        }
        let mut it = cells.into_iter();
        for row in &mut self.rows {
            row.cells.insert(at, it.next().unwrap_or_default());
        }
        self.cols += 1;
    }

    /// Stable sort of all rows by the cell value at `col`, using ordinal
    /// (byte-wise) string comparison. Ties keep their original relative order.
    /// Row indices are reassigned `0..n` afterwards. Out-of-range columns are
    /// ignored.
    pub fn sort_by_column(&mut self, col: usize, ascending: bool) {
        if col >= self.cols {
            return;
        }
        self.rows.sort_by(|a, b| {
            let ord = a.cells[col].value.cmp(&b.cells[col].value);
            if ascending { ord } else { ord.reverse() }
        });
        self.renumber_rows();
    }

    /// Replace the entire row list (undo of a sort). Indices are reassigned.
    pub fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.renumber_rows();
    }

    /// Scan the grid row-major for cells matching `text` and return their
    /// positions in scan order.
    ///
    /// With `use_regex` the text is compiled as a regex and matched anywhere in
    /// the cell value; an invalid pattern yields an empty result, never an
    /// error. Without it, a plain substring search is performed, honoring
    /// `case_sensitive` in both flavors.
    pub fn find_matches(&self, text: &str, use_regex: bool, case_sensitive: bool) -> Vec<Position> {
        if text.is_empty() {
            return Vec::new();
        }

        let matcher: Box<dyn Fn(&str) -> bool> = if use_regex {
            let Ok(re) = RegexBuilder::new(text)
                .case_insensitive(!case_sensitive)
                .build()
            else {
                return Vec::new();
            };
            Box::new(move |value: &str| re.is_match(value))
        } else if case_sensitive {
            let needle = text.to_string();
            Box::new(move |value: &str| value.contains(&needle))
        } else {
            let needle = text.to_lowercase();
            Box::new(move |value: &str| value.to_lowercase().contains(&needle))
        };

        let mut found = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.cells.iter().enumerate() {
                if matcher(&cell.value) {
                    found.push(Position::new(r, c));
                }
            }
        }
        found
    }

    /// Mark the given positions as search matches, clearing all others first.
    pub fn set_match_flags(&mut self, positions: &[Position]) {
        self.clear_match_flags();
        for pos in positions {
            if let Some(cell) = self
                .rows
                .get_mut(pos.row)
                .and_then(|r| r.cells.get_mut(pos.col))
            {
                cell.is_match = true;
            }
        }
    }

    /// Clear every search-match flag.
    pub fn clear_match_flags(&mut self) {
        for row in &mut self.rows {
            for cell in &mut row.cells {
                cell.is_match = false;
            }
        }
    }

    /// Grow the document so it holds at least `rows` x `cols` cells, padding
    /// with empty cells. Never shrinks. New rows append at the bottom, new
    /// columns at the right.
    pub fn ensure_size(&mut self, rows: usize, cols: usize) {
        if cols > self.cols {
            for row in &mut self.rows {
                row.cells.resize(cols, Cell::default());
            }
            self.cols = cols;
        }
        while self.rows.len() < rows {
            let index = self.rows.len();
            self.rows.push(Row::new(index, self.cols));
        }
    }

    /// The full cell-value matrix, row-major. Used for snapshot comparisons
    /// and by the sort command's undo.
    pub fn snapshot_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.cells.iter().map(|c| c.value.clone()).collect())
            .collect()
    }

    fn renumber_rows(&mut self) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.index = i;
        }
    }
}
