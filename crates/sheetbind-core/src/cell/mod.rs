//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellData`] - A stored cell: value plus number format
//! - [`CellStorage`] - Sparse row-major storage backing a worksheet

mod address;
mod storage;
mod value;

pub use address::CellAddress;
pub use storage::{CellData, CellStorage};
pub use value::{CellError, CellValue, SharedString};
