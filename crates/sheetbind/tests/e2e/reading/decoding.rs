//! Tests for string-form decoding through whole-sheet reads.

use crate::{format_cell, workbook_from_rows};
use pretty_assertions::assert_eq;
use sheetbind::{CellError, CellValue, GridTemplate, NumberFormat};

#[test]
fn test_string_form_decision_table() {
    let mut workbook = workbook_from_rows(
        "Values",
        &[vec![
            None,
            Some(45366.0.into()),
            Some(42.0.into()),
            Some(3.5.into()),
            Some(true.into()),
            Some(false.into()),
            Some(CellError::Div0.into()),
            Some(CellValue::formula_with_result("=B1", CellValue::string("ok"))),
            None,
            Some("  spaced ".into()),
        ]],
    );
    // A formatted position with no value is stored as a blank cell
    format_cell(&mut workbook, 0, 0, NumberFormat::text());
    format_cell(&mut workbook, 0, 1, NumberFormat::openoffice_date());
    format_cell(&mut workbook, 0, 2, NumberFormat::text());
    format_cell(&mut workbook, 0, 7, NumberFormat::text());

    let sheet = workbook.worksheet(0).unwrap();
    assert_eq!(sheet.row_bounds(0), Some((0, 9)));
    assert_eq!(sheet.cell_at(0, 0).map(|c| c.value.clone()), Some(CellValue::Empty));
    assert!(sheet.cell_at(0, 8).is_none());

    let rows = GridTemplate::new(&workbook).read_strings("Values").unwrap();
    assert_eq!(
        rows,
        vec![vec![
            String::new(),
            "15/03/2024".to_string(),
            "42".to_string(),
            "3.5".to_string(),
            "VRAI".to_string(),
            "FAUX".to_string(),
            "Error<7>".to_string(),
            "ok".to_string(),
            String::new(),
            "  spaced ".to_string(),
        ]]
    );
}
