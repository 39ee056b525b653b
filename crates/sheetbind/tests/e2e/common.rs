//! Common utilities for E2E tests.

use std::io::Write;

use sheetbind::{impl_bean, CellValue, NumberFormat, Workbook};
use tempfile::NamedTempFile;

/// Record used by most bean-mode tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl_bean!(Person { id, name });

/// Build a single-sheet workbook from rows of cell values.
///
/// `None` leaves the position without a cell.
pub fn workbook_from_rows(sheet_name: &str, rows: &[Vec<Option<CellValue>>]) -> Workbook {
    let mut workbook = Workbook::empty();
    let index = workbook
        .add_worksheet_with_name(sheet_name)
        .expect("valid sheet name");
    let sheet = workbook.worksheet_mut(index).expect("sheet just added");

    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            if let Some(value) = value {
                sheet
                    .set_cell_value_at(row as u32, col as u16, value.clone())
                    .expect("position in range");
            }
        }
    }
    workbook
}

/// Set the number format of one cell of the first sheet.
pub fn format_cell(workbook: &mut Workbook, row: u32, col: u16, format: NumberFormat) {
    workbook
        .worksheet_mut(0)
        .expect("first sheet")
        .set_cell_format_at(row, col, format)
        .expect("position in range");
}

/// The `id`/`name` people sheet: header plus Alice and Bob.
pub fn people_workbook() -> Workbook {
    workbook_from_rows(
        "People",
        &[
            vec![Some("id".into()), Some("name".into())],
            vec![Some(1.0.into()), Some("Alice".into())],
            vec![Some(2.0.into()), Some("Bob".into())],
        ],
    )
}

/// Write `contents` to a temporary `.csv` file.
pub fn temp_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("people")
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file.flush().expect("flush csv");
    file
}
