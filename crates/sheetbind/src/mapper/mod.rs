//! Cell mappers: turn one cell into one value
//!
//! - [`StringCellMapper`] - always produces display text
//! - [`ObjectCellMapper`] - produces a date when the format says so, text otherwise
//!
//! Both are interchangeable wherever a [`CellMapper`] is expected.

mod object;
mod string;

pub use object::ObjectCellMapper;
pub use string::StringCellMapper;

use crate::cell::Cell;
use crate::value::DecodedValue;

/// Maps one cell (or the absence of one) to a value
pub trait CellMapper<T> {
    /// Map the cell found at `(row, col)`; `cell` is `None` where nothing is stored
    fn map_cell(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16) -> T;
}

impl<T, M: CellMapper<T> + ?Sized> CellMapper<T> for &mut M {
    fn map_cell(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16) -> T {
        (**self).map_cell(cell, row, col)
    }
}

/// A closure used as a [`CellMapper`], see [`map_fn`]
#[derive(Debug, Clone)]
pub struct FnMapper<F>(F);

/// Use a closure as a cell mapper
///
/// ```
/// use sheetbind::mapper::{map_fn, CellMapper};
///
/// let mut positions = map_fn(|_cell, row, col| (row, col));
/// assert_eq!(positions.map_cell(None, 2, 1), (2, 1));
/// ```
pub fn map_fn<T, F>(f: F) -> FnMapper<F>
where
    F: FnMut(Option<Cell<'_>>, u32, u16) -> T,
{
    FnMapper(f)
}

impl<T, F> CellMapper<T> for FnMapper<F>
where
    F: FnMut(Option<Cell<'_>>, u32, u16) -> T,
{
    fn map_cell(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16) -> T {
        (self.0)(cell, row, col)
    }
}

/// Adapts a text mapper so it can stand in for [`ObjectCellMapper`]
///
/// Every cell becomes a [`DecodedValue::String`], blank ones included.
#[derive(Debug, Clone, Default)]
pub struct AsDecoded<M = StringCellMapper>(pub M);

impl<M: CellMapper<String>> CellMapper<DecodedValue> for AsDecoded<M> {
    fn map_cell(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16) -> DecodedValue {
        DecodedValue::String(self.0.map_cell(cell, row, col))
    }
}
