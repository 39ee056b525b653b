//! # sheetbind-csv
//!
//! Loads CSV data into a sheetbind [`Worksheet`](sheetbind_core::Worksheet) so it
//! can be read like any other grid.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
