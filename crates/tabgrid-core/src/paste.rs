//! Paste Geometry
//!
//! Two families of paste, both reversible commands:
//!
//! - **Insert-style** (Normal mode, cursor-relative): Line content inserts
//!   whole rows, Block content inserts whole columns, Character content
//!   overwrites a rectangle at the cursor, growing the document if needed.
//! - **Overwrite-style** (Visual mode, onto an existing selection): never grows
//!   the document. An effective fill rectangle is computed from the selection
//!   and content shapes, then every cell in it takes
//!   `content[r % rows][c % cols]` — one modulo-tiling rule that both expands
//!   to cover larger content and repeats smaller content across a larger
//!   selection.
//!
//! The fill rectangle rules live in [`fill_rect`]; the two degenerate-strip
//! overrides decide which axis may drive expansion when one side is a 1-wide
//! or 1-tall strip.

use crate::commands::GridCommand;
use crate::content::YankedContent;
use crate::document::{Document, Position};

/// Effective fill rectangle `(rows, cols)` for an overwrite-style paste.
///
/// 1. Base rule: `max` per axis.
/// 2. Vertical 1-wide selection strip + horizontal 1-tall content strip:
///    the content row is replicated down every selection row.
/// 3. Horizontal 1-tall selection strip + vertical 1-wide content strip:
///    the content column is replicated across every selection column.
pub fn fill_rect(
    sel_rows: usize,
    sel_cols: usize,
    content_rows: usize,
    content_cols: usize,
) -> (usize, usize) {
    if sel_rows > 1 && sel_cols == 1 && content_rows == 1 && content_cols > 1 {
        return (sel_rows, content_cols);
    }
    if sel_rows == 1 && sel_cols > 1 && content_rows > 1 && content_cols == 1 {
        return (content_rows, sel_cols);
    }
    (sel_rows.max(content_rows), sel_cols.max(content_cols))
}

/// Insert-style paste of Line content: new rows at the cursor.
#[derive(Debug)]
pub struct PasteRowsCommand {
    cursor_row: usize,
    before: bool,
    content: YankedContent,
    inserted_at: Option<usize>,
}

impl PasteRowsCommand {
    /// Paste `content` as whole rows at `cursor_row`, before or after it.
    pub fn new(cursor_row: usize, before: bool, content: YankedContent) -> Self {
        Self {
            cursor_row,
            before,
            content,
            inserted_at: None,
        }
    }
}

impl GridCommand for PasteRowsCommand {
    fn execute(&mut self, doc: &mut Document) {
        let at = if self.before {
            self.cursor_row
        } else {
            self.cursor_row + 1
        }
        .min(doc.row_count());
        self.inserted_at = Some(at);

        for i in 0..self.content.rows() {
            doc.insert_row(at + i);
            let width = self.content.cols().min(doc.col_count());
            for c in 0..width {
                doc.set_cell(Position::new(at + i, c), self.content.at(i, c));
            }
        }
    }

    fn undo(&mut self, doc: &mut Document) {
        if let Some(at) = self.inserted_at.take() {
            // Descending order keeps the remaining indices valid.
            for i in (0..self.content.rows()).rev() {
                doc.delete_row(at + i);
            }
        }
    }

    fn describe(&self) -> String {
        format!("paste {} rows", self.content.rows())
    }
}

/// Insert-style paste of Block content: new columns at the cursor.
#[derive(Debug)]
pub struct PasteColumnsCommand {
    cursor_col: usize,
    before: bool,
    content: YankedContent,
    inserted_at: Option<usize>,
}

impl PasteColumnsCommand {
    /// Paste `content` as whole columns at `cursor_col`, before or after it.
    pub fn new(cursor_col: usize, before: bool, content: YankedContent) -> Self {
        Self {
            cursor_col,
            before,
            content,
            inserted_at: None,
        }
    }
}

impl GridCommand for PasteColumnsCommand {
    fn execute(&mut self, doc: &mut Document) {
        let at = if self.before {
            self.cursor_col
        } else {
            self.cursor_col + 1
        }
        .min(doc.col_count());
        self.inserted_at = Some(at);

        for i in 0..self.content.cols() {
            doc.insert_column(at + i);
            // Content rows map to document rows by index, not wrapped.
            let height = self.content.rows().min(doc.row_count());
            for r in 0..height {
                doc.set_cell(Position::new(r, at + i), self.content.at(r, i));
            }
        }
    }

    fn undo(&mut self, doc: &mut Document) {
        if let Some(at) = self.inserted_at.take() {
            for i in (0..self.content.cols()).rev() {
                doc.delete_column(at + i);
            }
        }
    }

    fn describe(&self) -> String {
        format!("paste {} columns", self.content.cols())
    }
}

/// Insert-style paste of Character content: overwrite a rectangle at the
/// cursor, growing the document first if the content would exceed its bounds.
///
/// Undo restores the overwritten values and trims any rows/columns beyond the
/// pre-growth extents. This relies on [`Document::ensure_size`] only ever
/// appending at the tail.
#[derive(Debug)]
pub struct PasteCellsCommand {
    anchor: Position,
    content: YankedContent,
    old_values: Vec<(Position, String)>,
    old_extents: Option<(usize, usize)>,
}

impl PasteCellsCommand {
    /// Overwrite starting at `anchor` with `content`.
    pub fn new(anchor: Position, content: YankedContent) -> Self {
        Self {
            anchor,
            content,
            old_values: Vec::new(),
            old_extents: None,
        }
    }
}

impl GridCommand for PasteCellsCommand {
    fn execute(&mut self, doc: &mut Document) {
        self.old_values.clear();
        self.old_extents = Some((doc.row_count(), doc.col_count()));
        doc.ensure_size(
            self.anchor.row + self.content.rows(),
            self.anchor.col + self.content.cols(),
        );

        for r in 0..self.content.rows() {
            for c in 0..self.content.cols() {
                let pos = Position::new(self.anchor.row + r, self.anchor.col + c);
                if let Some(old) = doc.get(pos) {
                    self.old_values.push((pos, old.to_string()));
                }
                doc.set_cell(pos, self.content.at(r, c));
            }
        }
    }

    fn undo(&mut self, doc: &mut Document) {
        for (pos, old) in self.old_values.drain(..) {
            doc.set_cell(pos, old);
        }
        if let Some((rows, cols)) = self.old_extents.take() {
            debug_assert!(doc.row_count() >= rows && doc.col_count() >= cols);
            while doc.row_count() > rows {
                doc.delete_row(doc.row_count() - 1);
            }
            while doc.col_count() > cols {
                doc.delete_column(doc.col_count() - 1);
            }
        }
    }

    fn describe(&self) -> String {
        format!(
            "paste {}x{} cells at ({}, {})",
            self.content.rows(),
            self.content.cols(),
            self.anchor.row,
            self.anchor.col
        )
    }
}

/// Overwrite-style paste onto an existing selection.
///
/// The fill rectangle from [`fill_rect`] is anchored at the selection start
/// and tiled with the content via modulo indexing on both axes. Writes are
/// bounded by the document's current extents; the document never grows. Undo
/// restores only the recorded old values.
#[derive(Debug)]
pub struct PasteOverSelectionCommand {
    anchor: Position,
    sel_rows: usize,
    sel_cols: usize,
    content: YankedContent,
    old_values: Vec<(Position, String)>,
}

impl PasteOverSelectionCommand {
    /// Paste `content` over a materialized selection rectangle: `anchor` is
    /// the selection's top-left corner, `sel_rows`/`sel_cols` its extents.
    pub fn new(anchor: Position, sel_rows: usize, sel_cols: usize, content: YankedContent) -> Self {
        Self {
            anchor,
            sel_rows,
            sel_cols,
            content,
            old_values: Vec::new(),
        }
    }
}

impl GridCommand for PasteOverSelectionCommand {
    fn execute(&mut self, doc: &mut Document) {
        self.old_values.clear();
        if self.content.is_empty() {
            return;
        }
        let (fill_rows, fill_cols) = fill_rect(
            self.sel_rows,
            self.sel_cols,
            self.content.rows(),
            self.content.cols(),
        );
        for r in 0..fill_rows {
            for c in 0..fill_cols {
                let pos = Position::new(self.anchor.row + r, self.anchor.col + c);
                // Out-of-range cells are skipped: overwrite never grows.
                let Some(old) = doc.get(pos) else { continue };
                self.old_values.push((pos, old.to_string()));
                doc.set_cell(pos, self.content.at_tiled(r, c));
            }
        }
    }

    fn undo(&mut self, doc: &mut Document) {
        for (pos, old) in self.old_values.drain(..) {
            doc.set_cell(pos, old);
        }
    }

    fn describe(&self) -> String {
        format!(
            "paste over {}x{} selection at ({}, {})",
            self.sel_rows, self.sel_cols, self.anchor.row, self.anchor.col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;

    fn content(kind: ContentKind, values: Vec<Vec<&str>>) -> YankedContent {
        YankedContent::from_values(
            kind,
            values
                .into_iter()
                .map(|r| r.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }

    #[test]
    fn fill_rect_base_rule() {
        assert_eq!(fill_rect(2, 2, 3, 1), (3, 2));
        assert_eq!(fill_rect(4, 4, 2, 2), (4, 4));
        assert_eq!(fill_rect(1, 1, 1, 1), (1, 1));
    }

    #[test]
    fn fill_rect_vertical_strip_override() {
        // 3x1 selection, 1x3 content: content row replicated down.
        assert_eq!(fill_rect(3, 1, 1, 3), (3, 3));
    }

    #[test]
    fn fill_rect_horizontal_strip_override() {
        // 1x3 selection, 3x1 content: content column replicated across.
        assert_eq!(fill_rect(1, 3, 3, 1), (3, 3));
    }

    #[test]
    fn paste_rows_inserts_after_cursor() {
        let mut doc = Document::from_rows(vec![
            vec!["r0".into(), "x".into()],
            vec!["r1".into(), "y".into()],
        ]);
        let mut cmd = PasteRowsCommand::new(
            0,
            false,
            content(ContentKind::Line, vec![vec!["a", "b"], vec!["c", "d"]]),
        );
        cmd.execute(&mut doc);
        assert_eq!(
            doc.snapshot_rows(),
            vec![
                vec!["r0".to_string(), "x".to_string()],
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
                vec!["r1".to_string(), "y".to_string()],
            ]
        );
        cmd.undo(&mut doc);
        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.get(Position::new(1, 0)), Some("r1"));
    }

    #[test]
    fn paste_rows_truncates_wide_content() {
        let mut doc = Document::new(1, 2);
        let mut cmd = PasteRowsCommand::new(
            0,
            true,
            content(ContentKind::Line, vec![vec!["a", "b", "c", "d"]]),
        );
        cmd.execute(&mut doc);
        assert_eq!(doc.col_count(), 2);
        assert_eq!(doc.get(Position::new(0, 1)), Some("b"));
    }

    #[test]
    fn paste_columns_fills_down_unwrapped() {
        let mut doc = Document::from_rows(vec![vec!["r0".into()], vec!["r1".into()]]);
        // Three content rows but only two document rows: the third is dropped.
        let mut cmd = PasteColumnsCommand::new(
            0,
            false,
            content(ContentKind::Block, vec![vec!["a"], vec!["b"], vec!["c"]]),
        );
        cmd.execute(&mut doc);
        assert_eq!(doc.col_count(), 2);
        assert_eq!(doc.get(Position::new(0, 1)), Some("a"));
        assert_eq!(doc.get(Position::new(1, 1)), Some("b"));
        cmd.undo(&mut doc);
        assert_eq!(doc.col_count(), 1);
    }

    #[test]
    fn paste_cells_grows_and_trims_on_undo() {
        let mut doc = Document::from_rows(vec![vec!["a".into()]]);
        let before = doc.snapshot_rows();
        let mut cmd = PasteCellsCommand::new(
            Position::new(0, 0),
            content(ContentKind::Character, vec![vec!["1", "2"], vec!["3", "4"]]),
        );
        cmd.execute(&mut doc);
        assert_eq!((doc.row_count(), doc.col_count()), (2, 2));
        assert_eq!(doc.get(Position::new(1, 1)), Some("4"));
        cmd.undo(&mut doc);
        assert_eq!((doc.row_count(), doc.col_count()), (1, 1));
        assert_eq!(doc.snapshot_rows(), before);
    }

    #[test]
    fn overwrite_tiles_small_content() {
        let mut doc = Document::new(3, 3);
        let mut cmd = PasteOverSelectionCommand::new(
            Position::new(0, 0),
            3,
            3,
            content(ContentKind::Character, vec![vec!["x"]]),
        );
        cmd.execute(&mut doc);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(doc.get(Position::new(r, c)), Some("x"));
            }
        }
        cmd.undo(&mut doc);
        assert_eq!(doc.snapshot_rows(), Document::new(3, 3).snapshot_rows());
    }

    #[test]
    fn overwrite_never_grows() {
        let mut doc = Document::new(2, 2);
        let mut cmd = PasteOverSelectionCommand::new(
            Position::new(1, 1),
            1,
            1,
            content(ContentKind::Character, vec![vec!["a", "b"], vec!["c", "d"]]),
        );
        cmd.execute(&mut doc);
        assert_eq!((doc.row_count(), doc.col_count()), (2, 2));
        assert_eq!(doc.get(Position::new(1, 1)), Some("a"));
    }
}
