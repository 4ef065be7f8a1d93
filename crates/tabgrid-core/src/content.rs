//! Yanked Content & Selection Value Types
//!
//! Immutable snapshots describing copied and selected regions of the grid.
//!
//! [`YankedContent`] is a frozen, deep-copied row-major buffer: once captured
//! it is fully independent of later document mutation. [`SelectionRange`] is a
//! normalized rectangle (start <= end on both axes) tagged with the selection
//! geometry.

use crate::document::{Document, Position};

/// The three selection/paste geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// An arbitrary rectangle of cells.
    Character,
    /// Whole rows.
    Line,
    /// Whole columns.
    Block,
}

/// A frozen snapshot of copied cells: a row-major string buffer with explicit
/// extents and a source geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YankedContent {
    kind: ContentKind,
    rows: usize,
    cols: usize,
    values: Vec<String>,
}

impl YankedContent {
    /// Build content from row-major values. Ragged input rows are padded with
    /// empty strings to the widest row.
    pub fn from_values(kind: ContentKind, values: Vec<Vec<String>>) -> Self {
        let rows = values.len();
        let cols = values.iter().map(Vec::len).max().unwrap_or(0);
        let mut buf = Vec::with_capacity(rows * cols);
        for mut row in values {
            row.resize(cols, String::new());
            buf.extend(row);
        }
        Self {
            kind,
            rows,
            cols,
            values: buf,
        }
    }

    /// Deep-copy the cells covered by `sel` out of `doc`.
    ///
    /// Line selections capture the full document width; Block selections
    /// capture the full document height; Character selections capture exactly
    /// the selection rectangle. Cells outside the document read as empty.
    pub fn capture(doc: &Document, sel: &SelectionRange) -> Self {
        let (row_range, col_range) = sel.materialize(doc);
        let mut values = Vec::with_capacity(row_range.len());
        for r in row_range.clone() {
            let row: Vec<String> = col_range
                .clone()
                .map(|c| doc.get(Position::new(r, c)).unwrap_or("").to_string())
                .collect();
            values.push(row);
        }
        Self::from_values(sel.kind, values)
    }

    /// The source geometry of this content.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Row extent of the buffer.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column extent of the buffer.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the buffer holds no cells.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Bounds-checked access: the value at `(r, c)`, or `""` out of range.
    pub fn at(&self, r: usize, c: usize) -> &str {
        if r < self.rows && c < self.cols {
            &self.values[r * self.cols + c]
        } else {
            ""
        }
    }

    /// The value at `(r mod rows, c mod cols)` — the modulo-tiling read used
    /// by overwrite-style paste.
    pub fn at_tiled(&self, r: usize, c: usize) -> &str {
        if self.is_empty() {
            ""
        } else {
            self.at(r % self.rows, c % self.cols)
        }
    }
}

/// A normalized selection rectangle with a geometry kind.
///
/// `start` and `end` are both inclusive, with `start.row <= end.row` and
/// `start.col <= end.col` guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// Selection geometry.
    pub kind: ContentKind,
    /// Top-left corner (inclusive).
    pub start: Position,
    /// Bottom-right corner (inclusive).
    pub end: Position,
}

impl SelectionRange {
    /// Create a selection from two corners in any order; the result is
    /// normalized so `start` is the top-left corner.
    pub fn new(kind: ContentKind, a: Position, b: Position) -> Self {
        Self {
            kind,
            start: Position::new(a.row.min(b.row), a.col.min(b.col)),
            end: Position::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Number of rows covered.
    pub fn rows(&self) -> usize {
        self.end.row - self.start.row + 1
    }

    /// Number of columns covered.
    pub fn cols(&self) -> usize {
        self.end.col - self.start.col + 1
    }

    /// Resolve this selection against a document into concrete half-open row
    /// and column ranges: Line spans the full width, Block the full height.
    pub fn materialize(
        &self,
        doc: &Document,
    ) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        match self.kind {
            ContentKind::Character => (
                self.start.row..self.end.row + 1,
                self.start.col..self.end.col + 1,
            ),
            ContentKind::Line => (self.start.row..self.end.row + 1, 0..doc.col_count()),
            ContentKind::Block => (0..doc.row_count(), self.start.col..self.end.col + 1),
        }
    }
}
