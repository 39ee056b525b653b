//! Read-only grid traversal API
//!
//! Readers only ever see a grid through these two traits, so any storage that
//! can answer "which sheets, which rows, which columns of a row, which cell"
//! can be read.

use crate::cell::CellData;
use crate::date::DateSystem;
use crate::workbook::Workbook;
use crate::worksheet::Worksheet;

/// A single sheet of a grid
pub trait SheetSource {
    /// Sheet name
    fn name(&self) -> &str;

    /// First physical row, `None` when the sheet holds no cells
    fn first_row(&self) -> Option<u32>;

    /// Last physical row, `None` when the sheet holds no cells
    fn last_row(&self) -> Option<u32>;

    /// First and last physical column of a row, `None` for a row without cells
    fn row_bounds(&self, row: u32) -> Option<(u16, u16)>;

    /// The cell stored at a position, `None` when nothing is stored there
    fn cell(&self, row: u32, col: u16) -> Option<&CellData>;
}

/// A grid made of named sheets
pub trait GridSource {
    /// Sheet type handed out by this grid
    type Sheet: SheetSource;

    /// Look up a sheet by name
    fn sheet(&self, name: &str) -> Option<&Self::Sheet>;

    /// Names of all sheets, in grid order
    fn sheet_names(&self) -> Vec<String>;

    /// Date system used to interpret serial dates
    fn date_system(&self) -> DateSystem {
        DateSystem::V1900
    }
}

impl SheetSource for Worksheet {
    fn name(&self) -> &str {
        Worksheet::name(self)
    }

    fn first_row(&self) -> Option<u32> {
        Worksheet::first_row(self)
    }

    fn last_row(&self) -> Option<u32> {
        Worksheet::last_row(self)
    }

    fn row_bounds(&self, row: u32) -> Option<(u16, u16)> {
        Worksheet::row_bounds(self, row)
    }

    fn cell(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cell_at(row, col)
    }
}

impl GridSource for Workbook {
    type Sheet = Worksheet;

    fn sheet(&self, name: &str) -> Option<&Worksheet> {
        self.worksheet_by_name(name)
    }

    fn sheet_names(&self) -> Vec<String> {
        Workbook::sheet_names(self)
    }

    fn date_system(&self) -> DateSystem {
        Workbook::date_system(self)
    }
}

impl<G: GridSource + ?Sized> GridSource for &G {
    type Sheet = G::Sheet;

    fn sheet(&self, name: &str) -> Option<&Self::Sheet> {
        (**self).sheet(name)
    }

    fn sheet_names(&self) -> Vec<String> {
        (**self).sheet_names()
    }

    fn date_system(&self) -> DateSystem {
        (**self).date_system()
    }
}
