//! # sheetbind-core
//!
//! Grid data model used by the sheetbind readers.
//!
//! This crate provides the types a grid source is made of:
//! - [`CellValue`] - Represents cell values (numbers, strings, booleans, errors, formulas)
//! - [`NumberFormat`] - The format code attached to a cell
//! - [`CellData`] and [`CellAddress`] - Stored cells and their location
//! - [`Workbook`], [`Worksheet`] - Named sheets of sparse cells
//! - [`GridSource`], [`SheetSource`] - The read-only traversal API readers consume
//!
//! ## Example
//!
//! ```rust
//! use sheetbind_core::{CellValue, NumberFormat, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "name").unwrap();
//! sheet.set_cell_value_at(1, 0, CellValue::Number(42.0)).unwrap();
//! sheet.set_cell_format_at(1, 0, NumberFormat::text()).unwrap();
//!
//! assert_eq!(sheet.first_row(), Some(0));
//! assert_eq!(sheet.last_row(), Some(1));
//! ```

pub mod cell;
pub mod date;
pub mod error;
pub mod number_format;
pub mod source;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellData, CellError, CellStorage, CellValue, SharedString};
pub use date::DateSystem;
pub use error::{Error, Result};
pub use number_format::NumberFormat;
pub use source::{GridSource, SheetSource};
pub use workbook::{Workbook, WorkbookSettings};
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
