//! Cell storage implementation
//!
//! Sparse storage for worksheet cells. Only cells carrying a value or a
//! non-default number format are stored, using a row-based BTreeMap structure.

use std::collections::BTreeMap;

use super::CellValue;
use crate::number_format::NumberFormat;

/// Complete data for a single cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// The number format the cell is displayed with
    pub format: NumberFormat,
}

impl CellData {
    /// Create a new cell with a value and the general format
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            format: NumberFormat::General,
        }
    }

    /// Create a new cell with a value and number format
    pub fn with_format(value: CellValue, format: NumberFormat) -> Self {
        Self { value, format }
    }

    /// Check if this cell is effectively empty (no value and general format)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.format == NumberFormat::General
    }
}

/// Sparse row-based storage for worksheet cells
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, CellData>>`. Ordered maps
/// give the first/last physical row and, per row, the first/last physical column
/// without scanning.
#[derive(Debug, Default)]
pub struct CellStorage {
    rows: BTreeMap<u32, BTreeMap<u16, CellData>>,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell
    pub fn get(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Store a cell, removing it when it is effectively empty
    pub fn set(&mut self, row: u32, col: u16, data: CellData) {
        if data.is_empty() {
            self.remove(row, col);
            return;
        }
        self.rows.entry(row).or_default().insert(col, data);
    }

    /// Set a cell value, keeping the cell's number format
    pub fn set_value(&mut self, row: u32, col: u16, value: CellValue) {
        let format = self
            .get(row, col)
            .map(|c| c.format.clone())
            .unwrap_or_default();
        self.set(row, col, CellData::with_format(value, format));
    }

    /// Set a cell number format, keeping the cell's value
    pub fn set_format(&mut self, row: u32, col: u16, format: NumberFormat) {
        let value = self
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or_default();
        self.set(row, col, CellData::with_format(value, format));
    }

    /// Remove a cell
    pub fn remove(&mut self, row: u32, col: u16) -> Option<CellData> {
        let cols = self.rows.get_mut(&row)?;
        let removed = cols.remove(&col);
        if cols.is_empty() {
            self.rows.remove(&row);
        }
        removed
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row holding at least one stored cell
    pub fn first_row(&self) -> Option<u32> {
        self.rows.keys().next().copied()
    }

    /// Last row holding at least one stored cell
    pub fn last_row(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    /// First and last stored column of a row
    pub fn row_bounds(&self, row: u32) -> Option<(u16, u16)> {
        let cols = self.rows.get(&row)?;
        let first = *cols.keys().next()?;
        let last = *cols.keys().next_back()?;
        Some((first, last))
    }
}
