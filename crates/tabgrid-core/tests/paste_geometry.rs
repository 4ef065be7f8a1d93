use tabgrid_core::{
    ContentKind, Document, GridCommand, PasteCellsCommand, PasteColumnsCommand,
    PasteOverSelectionCommand, PasteRowsCommand, Position, YankedContent, fill_rect,
};

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
fn one_by_one_content_fills_any_selection() {
    for (rows, cols) in [(1, 1), (2, 5), (4, 4), (7, 2)] {
        let mut doc = Document::new(rows, cols);
        let mut cmd = PasteOverSelectionCommand::new(
            Position::new(0, 0),
            rows,
            cols,
            content(ContentKind::Character, vec![vec!["v"]]),
        );
        cmd.execute(&mut doc);
        for r in 0..rows {
            for c in 0..cols {
                assert_eq!(doc.get(Position::new(r, c)), Some("v"), "at ({r}, {c})");
            }
        }
    }
}

#[test]
fn horizontal_content_over_vertical_strip_expands_to_grid() {
    // 1x3 content over a 3x1 selection: every selection row receives the same
    // three values.
    let mut doc = Document::new(3, 3);
    let mut cmd = PasteOverSelectionCommand::new(
        Position::new(0, 0),
        3,
        1,
        content(ContentKind::Character, vec![vec!["a", "b", "c"]]),
    );
    cmd.execute(&mut doc);
    for r in 0..3 {
        assert_eq!(doc.get(Position::new(r, 0)), Some("a"));
        assert_eq!(doc.get(Position::new(r, 1)), Some("b"));
        assert_eq!(doc.get(Position::new(r, 2)), Some("c"));
    }
}

#[test]
fn vertical_content_over_horizontal_strip_expands_to_grid() {
    let mut doc = Document::new(3, 3);
    let mut cmd = PasteOverSelectionCommand::new(
        Position::new(0, 0),
        1,
        3,
        content(ContentKind::Character, vec![vec!["a"], vec!["b"], vec!["c"]]),
    );
    cmd.execute(&mut doc);
    for c in 0..3 {
        assert_eq!(doc.get(Position::new(0, c)), Some("a"));
        assert_eq!(doc.get(Position::new(1, c)), Some("b"));
        assert_eq!(doc.get(Position::new(2, c)), Some("c"));
    }
}

#[test]
fn tiling_repeats_content_with_modulo() {
    let mut doc = Document::new(4, 4);
    let mut cmd = PasteOverSelectionCommand::new(
        Position::new(0, 0),
        4,
        4,
        content(ContentKind::Character, vec![vec!["1", "2"], vec!["3", "4"]]),
    );
    cmd.execute(&mut doc);
    assert_eq!(doc.get(Position::new(0, 0)), Some("1"));
    assert_eq!(doc.get(Position::new(0, 3)), Some("2"));
    assert_eq!(doc.get(Position::new(3, 3)), Some("4"));
    assert_eq!(doc.get(Position::new(2, 1)), Some("2"));
}

#[test]
fn fill_rect_rules() {
    // Base rule: max per axis.
    assert_eq!(fill_rect(2, 3, 4, 1), (4, 3));
    // Rule 2: vertical selection strip, horizontal content strip.
    assert_eq!(fill_rect(5, 1, 1, 4), (5, 4));
    // Rule 3: horizontal selection strip, vertical content strip.
    assert_eq!(fill_rect(1, 5, 4, 1), (4, 5));
    // Degenerate overrides require the strips; otherwise base rule.
    assert_eq!(fill_rect(5, 2, 1, 4), (5, 4));
    assert_eq!(fill_rect(5, 1, 2, 4), (5, 4));
}

#[test]
fn overwrite_is_bounded_by_document_extents() {
    let mut doc = Document::new(2, 2);
    let mut cmd = PasteOverSelectionCommand::new(
        Position::new(1, 1),
        1,
        1,
        content(
            ContentKind::Character,
            vec![vec!["a", "b", "c"], vec!["d", "e", "f"]],
        ),
    );
    cmd.execute(&mut doc);
    assert_eq!((doc.row_count(), doc.col_count()), (2, 2));
    assert_eq!(doc.get(Position::new(1, 1)), Some("a"));
    cmd.undo(&mut doc);
    assert_eq!(doc.get(Position::new(1, 1)), Some(""));
}

#[test]
fn line_paste_inserts_rows_and_undoes_structurally() {
    let mut doc = Document::from_rows(vec![vec!["top".into()], vec!["bottom".into()]]);
    let before = doc.snapshot_rows();

    let mut cmd = PasteRowsCommand::new(
        0,
        true,
        content(ContentKind::Line, vec![vec!["one"], vec!["two"]]),
    );
    cmd.execute(&mut doc);
    assert_eq!(
        doc.snapshot_rows(),
        vec![
            vec!["one".to_string()],
            vec!["two".to_string()],
            vec!["top".to_string()],
            vec!["bottom".to_string()],
        ]
    );
    let indices: Vec<usize> = doc.rows().iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);

    cmd.undo(&mut doc);
    assert_eq!(doc.snapshot_rows(), before);
}

#[test]
fn block_paste_inserts_columns() {
    let mut doc = Document::from_rows(vec![
        vec!["a".into(), "b".into()],
        vec!["c".into(), "d".into()],
    ]);
    let mut cmd = PasteColumnsCommand::new(
        0,
        false,
        content(ContentKind::Block, vec![vec!["x"], vec!["y"]]),
    );
    cmd.execute(&mut doc);
    assert_eq!(
        doc.snapshot_rows(),
        vec![
            vec!["a".to_string(), "x".to_string(), "b".to_string()],
            vec!["c".to_string(), "y".to_string(), "d".to_string()],
        ]
    );
    cmd.undo(&mut doc);
    assert_eq!(doc.col_count(), 2);
    assert_eq!(doc.get(Position::new(0, 1)), Some("b"));
}

#[test]
fn character_paste_grows_then_undo_trims_to_original_extents() {
    let mut doc = Document::new(2, 2);
    doc.set_cell(Position::new(0, 0), "keep");
    let before = doc.snapshot_rows();

    let mut cmd = PasteCellsCommand::new(
        Position::new(1, 1),
        content(
            ContentKind::Character,
            vec![vec!["1", "2", "3"], vec!["4", "5", "6"]],
        ),
    );
    cmd.execute(&mut doc);
    assert_eq!((doc.row_count(), doc.col_count()), (3, 4));
    assert_eq!(doc.get(Position::new(2, 3)), Some("6"));
    assert_eq!(doc.get(Position::new(0, 0)), Some("keep"));

    cmd.undo(&mut doc);
    assert_eq!((doc.row_count(), doc.col_count()), (2, 2));
    assert_eq!(doc.snapshot_rows(), before);
}
