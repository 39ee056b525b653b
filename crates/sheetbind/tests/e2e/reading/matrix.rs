//! Tests for matrix reads.

use crate::workbook_from_rows;
use pretty_assertions::assert_eq;
use sheetbind::{map_fn, CellValue, DecodedValue, GridTemplate, ObjectCellMapper};

fn grid_3x3() -> sheetbind::Workbook {
    let row = || vec![Some(CellValue::from("x")); 3];
    workbook_from_rows("Grid", &[row(), row(), row()])
}

#[test]
fn test_matrix_positions() {
    let workbook = grid_3x3();
    let positions = GridTemplate::new(&workbook)
        .read_matrix("Grid", map_fn(|_cell, row, col| (row, col)))
        .unwrap();

    assert_eq!(
        positions,
        vec![
            vec![(0, 0), (0, 1), (0, 2)],
            vec![(1, 0), (1, 1), (1, 2)],
            vec![(2, 0), (2, 1), (2, 2)],
        ]
    );
}

#[test]
fn test_ragged_rows_follow_their_own_span() {
    let workbook = workbook_from_rows(
        "Grid",
        &[
            vec![Some(1.0.into())],
            vec![None, Some(2.0.into()), None, Some(true.into())],
            vec![],
            vec![Some("last".into())],
        ],
    );

    let values = GridTemplate::new(&workbook).read_strings("Grid").unwrap();
    assert_eq!(
        values,
        vec![
            vec!["1.0".to_string()],
            vec!["2.0".to_string(), String::new(), "VRAI".to_string()],
            vec!["last".to_string()],
        ]
    );
}

#[test]
fn test_object_matrix() {
    let workbook = workbook_from_rows(
        "Grid",
        &[vec![Some(0.5.into()), None, Some("text".into())]],
    );

    let values = GridTemplate::new(&workbook)
        .read_matrix("Grid", ObjectCellMapper)
        .unwrap();
    assert_eq!(
        values,
        vec![vec![
            DecodedValue::from("0.5"),
            DecodedValue::Null,
            DecodedValue::from("text"),
        ]]
    );
}
