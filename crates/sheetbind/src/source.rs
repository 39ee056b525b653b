//! Workbook sources a read opens
//!
//! A read opens its source, walks one sheet and drops the grid before
//! returning, whether the read succeeded or not.

use std::path::{Path, PathBuf};

use sheetbind_core::{GridSource, Workbook};
use sheetbind_csv::{CsvReadOptions, CsvReader};

use crate::error::ReadResult;

/// Something that can be opened as a grid for one read
pub trait WorkbookSource {
    /// Grid produced by [`open`](WorkbookSource::open)
    type Grid: GridSource;

    /// Open the grid
    fn open(&self) -> ReadResult<Self::Grid>;
}

impl<'a> WorkbookSource for &'a Workbook {
    type Grid = &'a Workbook;

    fn open(&self) -> ReadResult<&'a Workbook> {
        Ok(*self)
    }
}

/// A CSV file loaded as a single-sheet grid on every read
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    options: CsvReadOptions,
}

impl CsvSource {
    /// CSV file read with default options
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_options(path, CsvReadOptions::default())
    }

    /// CSV file read with explicit options
    pub fn with_options<P: AsRef<Path>>(path: P, options: CsvReadOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Options used to load the file
    pub fn options(&self) -> &CsvReadOptions {
        &self.options
    }
}

impl WorkbookSource for CsvSource {
    type Grid = Workbook;

    fn open(&self) -> ReadResult<Workbook> {
        log::debug!("opening CSV source {}", self.path.display());
        Ok(CsvReader::read_file(&self.path, &self.options)?)
    }
}
