//! Prelude module - common imports for sheetbind users
//!
//! ```rust
//! use sheetbind::prelude::*;
//! ```

// Reads
pub use crate::{GridTemplate, WorkbookSource};

// Sources
pub use crate::{CsvReadOptions, CsvSource, GridSource, SheetSource, Workbook, Worksheet};

// Cells
pub use crate::{Cell, CellMapper, CellValue, NumberFormat, ObjectCellMapper, StringCellMapper};

// Records
pub use crate::{
    impl_bean, Bean, BeanCellCallbackHandler, CellCallbackHandler, DecodedValue, FromDecoded,
    PropertySetter,
};

// Errors
pub use crate::{PropertyError, ReadError, ReadResult};
