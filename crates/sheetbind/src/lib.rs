//! # sheetbind
//!
//! Reads spreadsheet grids cell by cell and binds them to Rust values.
//!
//! sheetbind walks one sheet of a grid source and hands every cell position
//! to a callback. On top of that it provides:
//!
//! - Two cell decoders: string form ([`StringCellMapper`]) and object form
//!   ([`ObjectCellMapper`])
//! - Header-driven record reads ([`GridTemplate::read_beans`]): the first row
//!   names the properties, every later row fills one record
//! - Matrix and whole-sheet reads ([`GridTemplate::read_matrix`],
//!   [`GridTemplate::read_with`])
//! - In-memory workbooks and CSV files as sources
//!
//! ## Example
//!
//! ```rust
//! use sheetbind::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Person {
//!     id: u32,
//!     first_name: String,
//! }
//!
//! impl_bean!(Person { id, first_name });
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Id").unwrap();
//! sheet.set_cell_value("B1", "First Name").unwrap();
//! sheet.set_cell_value("A2", 1.0).unwrap();
//! sheet.set_cell_value("B2", "Alice").unwrap();
//! sheet.set_cell_value("A3", 2.0).unwrap();
//! sheet.set_cell_value("B3", "Bob").unwrap();
//!
//! let template = GridTemplate::new(&workbook);
//! let people: Vec<Person> = template.read_beans("Sheet1").unwrap();
//! assert_eq!(people.len(), 2);
//! assert_eq!(people[1].first_name, "Bob");
//!
//! let text = template.read_strings("Sheet1").unwrap();
//! assert_eq!(text[1], vec!["1.0".to_string(), "Alice".to_string()]);
//! ```

pub mod bean;
pub mod cell;
pub mod display;
pub mod error;
pub mod handler;
pub mod header;
pub mod mapper;
pub mod prelude;
pub mod source;
pub mod template;
pub mod value;

pub use bean::{Bean, BeanSetter, FnSetter, PropertySetter};
pub use cell::{Cell, CellKind};
pub use display::{format_cell_value, format_number};
pub use error::{PropertyError, ReadError, ReadResult, RecordCreationError};
pub use handler::{
    BeanCellCallbackHandler, CellCallbackHandler, FnHandler, MatrixCallbackHandler,
};
pub use header::HeaderMap;
pub use mapper::{map_fn, AsDecoded, CellMapper, FnMapper, ObjectCellMapper, StringCellMapper};
pub use source::{CsvSource, WorkbookSource};
pub use template::{GridTemplate, SheetExtractor, SourceSheet};
pub use value::{DecodedValue, FromDecoded};

// Re-export the grid model and CSV options readers are built from
pub use sheetbind_core::{
    CellData, CellError, CellValue, DateSystem, GridSource, NumberFormat, SheetSource, Workbook,
    WorkbookSettings, Worksheet,
};
pub use sheetbind_csv::{CsvError, CsvReadOptions};
