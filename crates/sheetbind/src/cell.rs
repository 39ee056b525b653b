//! The cell view handed to mappers and callbacks

use sheetbind_core::{CellData, CellValue, DateSystem, NumberFormat};

/// Declared content category of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Blank,
    Boolean,
    Numeric,
    String,
    Formula,
    Error,
}

/// A stored cell as seen during a read
///
/// Carries the date system of the grid it was read from, so a serial number
/// can be turned into a date without going back to the workbook.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    data: &'a CellData,
    date_system: DateSystem,
}

impl<'a> Cell<'a> {
    /// Wrap stored cell data
    pub fn new(data: &'a CellData, date_system: DateSystem) -> Self {
        Self { data, date_system }
    }

    /// The stored cell
    pub fn data(&self) -> &'a CellData {
        self.data
    }

    /// The stored value
    pub fn value(&self) -> &'a CellValue {
        &self.data.value
    }

    /// The number format
    pub fn format(&self) -> &'a NumberFormat {
        &self.data.format
    }

    /// Date system of the grid this cell belongs to
    pub fn date_system(&self) -> DateSystem {
        self.date_system
    }

    /// Declared kind of the cell
    pub fn kind(&self) -> CellKind {
        match self.data.value {
            CellValue::Empty => CellKind::Blank,
            CellValue::Boolean(_) => CellKind::Boolean,
            CellValue::Number(_) => CellKind::Numeric,
            CellValue::String(_) => CellKind::String,
            CellValue::Formula { .. } => CellKind::Formula,
            CellValue::Error(_) => CellKind::Error,
        }
    }

    /// Check if the cell is blank
    pub fn is_blank(&self) -> bool {
        self.kind() == CellKind::Blank
    }
}
