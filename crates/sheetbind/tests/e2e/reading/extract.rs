//! Tests for whole-sheet extraction.

use crate::people_workbook;
use sheetbind::{GridTemplate, ReadError, SheetExtractor, SheetSource, Worksheet};

#[test]
fn test_row_span() {
    let workbook = people_workbook();
    let span = GridTemplate::new(&workbook)
        .read_with("People", |sheet| (sheet.first_row(), sheet.last_row()))
        .unwrap();

    assert_eq!(span, (Some(0), Some(2)));
}

struct NamedCells;

impl SheetExtractor<Worksheet> for NamedCells {
    type Output = (String, usize);

    fn extract(self, sheet: &Worksheet) -> Self::Output {
        (SheetSource::name(sheet).to_string(), sheet.cell_count())
    }
}

#[test]
fn test_named_extractor() {
    let workbook = people_workbook();
    let summary = GridTemplate::new(&workbook)
        .extract("People", NamedCells)
        .unwrap();

    assert_eq!(summary, ("People".to_string(), 6));
}

#[test]
fn test_extract_missing_sheet() {
    let workbook = people_workbook();
    let result = GridTemplate::new(&workbook).read_with("Nope", |sheet| sheet.cell_count());

    assert!(matches!(result, Err(ReadError::SheetNotFound { .. })));
}
