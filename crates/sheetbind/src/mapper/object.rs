//! Object-form cell decoding

use sheetbind_core::CellValue;
use thiserror::Error;

use super::CellMapper;
use crate::cell::Cell;
use crate::display::format_cell_value;
use crate::value::DecodedValue;

/// A date-formatted cell whose value cannot be read as a date
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeMismatch {
    /// The cell holds something other than a number
    #[error("date-formatted cell holds a {found} value, not a serial")]
    NotNumeric {
        /// Type name of the value found
        found: &'static str,
    },

    /// The serial is outside the representable date range
    #[error("serial {0} is not a valid date")]
    InvalidSerial(f64),
}

/// Maps cells to typed values
///
/// Blank cells become [`DecodedValue::Null`], date-formatted cells become
/// [`DecodedValue::Date`], everything else becomes its display text as the
/// spreadsheet would show it. A date-formatted cell that does not hold a
/// usable serial is read as plain text instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectCellMapper;

impl ObjectCellMapper {
    /// Create a new object mapper
    pub fn new() -> Self {
        Self
    }

    /// Decode a cell, falling back to plain text on a type mismatch
    pub fn decode(&self, cell: Option<Cell<'_>>) -> DecodedValue {
        let Some(cell) = cell else {
            return DecodedValue::Null;
        };

        match self.try_decode(cell) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("falling back to text: {}", e);
                DecodedValue::String(plain_text(cell.value().effective_value()))
            }
        }
    }

    /// Decode a present cell, reporting date-format mismatches
    pub fn try_decode(&self, cell: Cell<'_>) -> Result<DecodedValue, TypeMismatch> {
        if cell.is_blank() {
            return Ok(DecodedValue::Null);
        }

        if cell.format().is_date_format() {
            let effective = cell.value().effective_value();
            let serial = cell
                .value()
                .numeric_payload()
                .ok_or(TypeMismatch::NotNumeric {
                    found: effective.type_name(),
                })?;
            let date = cell
                .date_system()
                .to_datetime(serial)
                .ok_or(TypeMismatch::InvalidSerial(serial))?;
            return Ok(DecodedValue::Date(date));
        }

        Ok(DecodedValue::String(format_cell_value(
            cell.value(),
            cell.format(),
        )))
    }
}

impl CellMapper<DecodedValue> for ObjectCellMapper {
    fn map_cell(&mut self, cell: Option<Cell<'_>>, _row: u32, _col: u16) -> DecodedValue {
        self.decode(cell)
    }
}

fn plain_text(value: &CellValue) -> String {
    match value {
        CellValue::Formula { .. } => String::new(),
        other => other.to_string(),
    }
}
