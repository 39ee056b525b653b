//! String-form cell decoding

use sheetbind_core::CellValue;

use super::CellMapper;
use crate::cell::Cell;

const TRUE_TOKEN: &str = "VRAI";
const FALSE_TOKEN: &str = "FAUX";
const DATE_PATTERN: &str = "%d/%m/%Y";

/// Maps every cell to text
///
/// | cell | text |
/// |---|---|
/// | none / blank | `""` |
/// | error | `Error<code>` |
/// | boolean | `VRAI` / `FAUX` |
/// | number | see below |
/// | formula | text when the format is text-forced, else the number rule |
/// | string | the literal text |
///
/// Numbers: NaN is `""`; the reserved OpenOffice date format renders
/// `dd/mm/yyyy`; integral values under a text-forced format render without
/// a fraction; everything else uses the shortest round-trip `f64` rendering
/// (`42.0`, `3.5`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCellMapper;

impl StringCellMapper {
    /// Create a new string mapper
    pub fn new() -> Self {
        Self
    }

    /// Decode a cell to text
    pub fn format(&self, cell: Option<Cell<'_>>) -> String {
        let Some(cell) = cell else {
            return String::new();
        };

        match cell.value() {
            CellValue::Empty => String::new(),
            CellValue::Error(e) => error_to_string(e.code()),
            CellValue::Boolean(b) => boolean_to_string(*b).to_string(),
            CellValue::Number(_) => numeric_to_string(cell),
            CellValue::Formula { .. } => formula_to_string(cell),
            CellValue::String(s) => s.to_string(),
        }
    }
}

impl CellMapper<String> for StringCellMapper {
    fn map_cell(&mut self, cell: Option<Cell<'_>>, _row: u32, _col: u16) -> String {
        self.format(cell)
    }
}

fn error_to_string(code: u8) -> String {
    format!("Error<{}>", code)
}

fn boolean_to_string(value: bool) -> &'static str {
    if value {
        TRUE_TOKEN
    } else {
        FALSE_TOKEN
    }
}

fn numeric_to_string(cell: Cell<'_>) -> String {
    let Some(value) = cell.value().numeric_payload() else {
        return text_to_string(cell.value().effective_value());
    };

    if value.is_nan() {
        return String::new();
    }

    if cell.format().is_reserved_date_format() {
        if let Some(date) = cell.date_system().to_datetime(value) {
            return date.format(DATE_PATTERN).to_string();
        }
    }

    // Spreadsheets store numeric-looking text typed into a text column as a
    // number; integral ones read back without a fraction.
    if cell.format().is_text_format() && is_integral(value) {
        return format!("{}", value as i64);
    }

    format!("{:?}", value)
}

fn formula_to_string(cell: Cell<'_>) -> String {
    if cell.format().is_text_format() {
        return text_to_string(cell.value().effective_value());
    }

    numeric_to_string(cell)
}

/// Plain text of a (cached) value that is not read as a number
fn text_to_string(value: &CellValue) -> String {
    match value {
        CellValue::String(s) => s.to_string(),
        CellValue::Boolean(b) => boolean_to_string(*b).to_string(),
        CellValue::Error(e) => error_to_string(e.code()),
        CellValue::Number(n) => format!("{:?}", n),
        CellValue::Empty | CellValue::Formula { .. } => String::new(),
    }
}

fn is_integral(value: f64) -> bool {
    value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64
}
