//! Tests for BEM station table parsing

use super::super::table::parse_table;
use crate::error::GridError;

#[test]
fn test_table_reads_columns_and_rows() {
    let lines = vec![
        "Radius/R, Chord/R, Twist (deg)",
        "0.5, 0.8, 10.0",
        "1.0, 0.6, 5.0",
        "",
        "Section 0 X, Y",
    ];
    let (table, consumed) = parse_table(&lines, 1).unwrap();

    assert_eq!(table.columns, vec!["Radius/R", "Chord/R", "Twist (deg)"]);
    assert_eq!(table.rows, vec![vec![0.5, 0.8, 10.0], vec![1.0, 0.6, 5.0]]);
    assert_eq!(consumed, 4);
    assert_eq!(lines[consumed], "Section 0 X, Y");
}

#[test]
fn test_table_runs_to_end_of_input() {
    let lines = vec!["Radius/R, Chord/R", "0.5, 0.8"];
    let (table, consumed) = parse_table(&lines, 1).unwrap();

    assert_eq!(table.row_count(), 1);
    assert_eq!(consumed, 2);
}

#[test]
fn test_table_empty_input() {
    let (table, consumed) = parse_table(&[], 1).unwrap();
    assert!(table.is_empty());
    assert!(table.columns.is_empty());
    assert_eq!(consumed, 0);
}

#[test]
fn test_table_whitespace_only_line_ends_block() {
    let lines = vec!["Radius/R, Chord/R", "0.5, 0.8", "   ", "1.0, 0.6"];
    let (table, consumed) = parse_table(&lines, 1).unwrap();

    assert_eq!(table.row_count(), 1);
    assert_eq!(consumed, 3);
}

#[test]
fn test_table_bad_cell_reports_line_number() {
    let lines = vec!["Radius/R, Chord/R", "0.5, 0.8", "1.0, abc"];
    let err = parse_table(&lines, 10).unwrap_err();

    match err {
        GridError::MalformedRecord { context, reason } => {
            assert_eq!(context, "station table line 12");
            assert!(reason.contains("1.0, abc"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
