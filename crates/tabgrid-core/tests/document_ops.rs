use tabgrid_core::{
    AlignColumnsCommand, Document, GridCommand, Position, SortRowsCommand, display_width,
};

#[test]
fn sort_is_stable_and_undo_restores_order() {
    let mut doc = Document::from_rows(vec![
        vec!["C".into(), "3".into()],
        vec!["A".into(), "1".into()],
        vec!["B".into(), "2".into()],
    ]);
    let before = doc.snapshot_rows();

    let mut cmd = SortRowsCommand::new(0, true);
    cmd.execute(&mut doc);
    assert_eq!(
        doc.snapshot_rows(),
        vec![
            vec!["A".to_string(), "1".to_string()],
            vec!["B".to_string(), "2".to_string()],
            vec!["C".to_string(), "3".to_string()],
        ]
    );

    cmd.undo(&mut doc);
    assert_eq!(doc.snapshot_rows(), before);
}

#[test]
fn sort_ties_keep_original_relative_order() {
    let mut doc = Document::from_rows(vec![
        vec!["k".into(), "first".into()],
        vec!["a".into(), "middle".into()],
        vec!["k".into(), "second".into()],
    ]);
    doc.sort_by_column(0, true);
    assert_eq!(
        doc.snapshot_rows(),
        vec![
            vec!["a".to_string(), "middle".to_string()],
            vec!["k".to_string(), "first".to_string()],
            vec!["k".to_string(), "second".to_string()],
        ]
    );
}

#[test]
fn structural_edits_keep_rectangularity() {
    let mut doc = Document::from_rows(vec![
        vec!["a".into(), "b".into()],
        vec!["c".into(), "d".into()],
    ]);
    doc.insert_column(1);
    doc.insert_row(0);
    doc.delete_column(0);
    doc.ensure_size(4, 4);
    for row in doc.rows() {
        assert_eq!(row.cells.len(), doc.col_count());
    }
    assert_eq!(doc.col_count(), 4);
    assert_eq!(doc.row_count(), 4);
}

#[test]
fn out_of_range_structural_edits_are_silent_noops() {
    let mut doc = Document::new(2, 2);
    let before = doc.snapshot_rows();
    doc.insert_row(5);
    doc.delete_row(2);
    doc.insert_column(7);
    doc.delete_column(2);
    assert_eq!(doc.snapshot_rows(), before);
    assert_eq!((doc.row_count(), doc.col_count()), (2, 2));
}

#[test]
fn align_columns_is_idempotent_and_uniform() {
    let mut doc = Document::from_rows(vec![
        vec!["漢字".into(), "a".into()],
        vec!["x".into(), "longer".into()],
        vec!["mid".into(), "".into()],
    ]);

    let mut first = AlignColumnsCommand::new();
    first.execute(&mut doc);
    let after_first = doc.snapshot_rows();

    // Every cell in a column ends with equal display width.
    for col in 0..doc.col_count() {
        let widths: Vec<usize> = doc
            .rows()
            .iter()
            .map(|r| display_width(&r.cells[col].value))
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "column {col}: {widths:?}");
    }

    let mut second = AlignColumnsCommand::new();
    second.execute(&mut doc);
    assert_eq!(doc.snapshot_rows(), after_first);
}

#[test]
fn align_undo_restores_unpadded_values() {
    let mut doc = Document::from_rows(vec![vec!["ab".into()], vec!["abcd".into()]]);
    let before = doc.snapshot_rows();
    let mut cmd = AlignColumnsCommand::new();
    cmd.execute(&mut doc);
    assert_eq!(doc.get(Position::new(0, 0)), Some("ab  "));
    cmd.undo(&mut doc);
    assert_eq!(doc.snapshot_rows(), before);
}

#[test]
fn search_match_flags_are_ephemeral_state() {
    let mut doc = Document::from_rows(vec![vec!["apple".into(), "banana".into()]]);
    let matches = doc.find_matches("an", false, true);
    assert_eq!(matches, vec![Position::new(0, 1)]);
    doc.set_match_flags(&matches);
    assert!(doc.is_match(Position::new(0, 1)));
    assert!(!doc.is_match(Position::new(0, 0)));
    doc.clear_match_flags();
    assert!(!doc.is_match(Position::new(0, 1)));
}

#[test]
fn regex_search_scans_row_major() {
    let doc = Document::from_rows(vec![
        vec!["x1".into(), "no".into()],
        vec!["x2".into(), "x3".into()],
    ]);
    let matches = doc.find_matches(r"x\d", true, true);
    assert_eq!(
        matches,
        vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]
    );
}
