//! Per-cell callbacks driven by a sheet read

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use crate::bean::{BeanSetter, PropertySetter};
use crate::cell::Cell;
use crate::error::{ReadError, ReadResult, RecordCreationError};
use crate::header::HeaderMap;
use crate::mapper::{CellMapper, ObjectCellMapper, StringCellMapper};
use crate::value::DecodedValue;

/// Receives every visited cell position of a sheet, in row-major order
///
/// Returning an error aborts the read.
pub trait CellCallbackHandler {
    /// Handle the cell at `(row, col)`; `cell` is `None` inside a row's span
    /// where nothing is stored
    fn process_cell(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16) -> ReadResult<()>;
}

impl<H: CellCallbackHandler + ?Sized> CellCallbackHandler for &mut H {
    fn process_cell(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16) -> ReadResult<()> {
        (**self).process_cell(cell, row, col)
    }
}

/// A closure used as a [`CellCallbackHandler`]
#[derive(Debug, Clone)]
pub struct FnHandler<F>(F);

impl<F> FnHandler<F>
where
    F: FnMut(Option<Cell<'_>>, u32, u16) -> ReadResult<()>,
{
    /// Wrap a closure taking `(cell, row, col)`
    pub fn new(f: F) -> Self {
        FnHandler(f)
    }
}

impl<F> CellCallbackHandler for FnHandler<F>
where
    F: FnMut(Option<Cell<'_>>, u32, u16) -> ReadResult<()>,
{
    fn process_cell(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16) -> ReadResult<()> {
        (self.0)(cell, row, col)
    }
}

type Factory<R> = Box<dyn FnMut() -> Result<R, RecordCreationError>>;

/// Builds one record per data row, keyed by a header row
///
/// The header row (row 0 unless changed with [`with_header_row`]) is decoded
/// with the header mapper into a [`HeaderMap`]. Every later cell whose column
/// has a key is decoded with the value mapper and assigned to the record of
/// its row through the property setter. Records are created on the first
/// assigned cell of a row; rows before the header row are ignored.
///
/// Records come out in row order with no holes: a data row without any
/// assigned cell produces no record.
///
/// [`with_header_row`]: BeanCellCallbackHandler::with_header_row
pub struct BeanCellCallbackHandler<R, P = BeanSetter, V = ObjectCellMapper, H = StringCellMapper> {
    header_row: u32,
    header: HeaderMap,
    pending: BTreeMap<u32, R>,
    factory: Factory<R>,
    setter: P,
    value_mapper: V,
    header_mapper: H,
}

impl<R: Default + 'static> BeanCellCallbackHandler<R> {
    /// Handler creating records with `R::default()`
    pub fn new() -> Self {
        Self::with_factory(|| Ok(R::default()))
    }
}

impl<R: Default + 'static> Default for BeanCellCallbackHandler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> BeanCellCallbackHandler<R> {
    /// Handler creating records with a fallible factory
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: FnMut() -> Result<R, RecordCreationError> + 'static,
    {
        Self {
            header_row: 0,
            header: HeaderMap::new(),
            pending: BTreeMap::new(),
            factory: Box::new(factory),
            setter: BeanSetter,
            value_mapper: ObjectCellMapper,
            header_mapper: StringCellMapper,
        }
    }
}

impl<R, P, V, H> BeanCellCallbackHandler<R, P, V, H> {
    /// Use another property setter
    pub fn with_setter<P2>(self, setter: P2) -> BeanCellCallbackHandler<R, P2, V, H>
    where
        P2: PropertySetter<R>,
    {
        BeanCellCallbackHandler {
            header_row: self.header_row,
            header: self.header,
            pending: self.pending,
            factory: self.factory,
            setter,
            value_mapper: self.value_mapper,
            header_mapper: self.header_mapper,
        }
    }

    /// Use other mappers for data cells and header cells
    pub fn with_mappers<V2, H2>(
        self,
        value_mapper: V2,
        header_mapper: H2,
    ) -> BeanCellCallbackHandler<R, P, V2, H2>
    where
        V2: CellMapper<DecodedValue>,
        H2: CellMapper<String>,
    {
        BeanCellCallbackHandler {
            header_row: self.header_row,
            header: self.header,
            pending: self.pending,
            factory: self.factory,
            setter: self.setter,
            value_mapper,
            header_mapper,
        }
    }

    /// Read the header from another row
    pub fn with_header_row(mut self, row: u32) -> Self {
        self.header_row = row;
        self
    }

    /// Header keys indexed so far
    pub fn header(&self) -> &HeaderMap {
        &self.header
    }

    /// Records built so far, in row order
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.pending.values()
    }

    /// Number of records built so far
    pub fn record_count(&self) -> usize {
        self.pending.len()
    }

    /// Hand over the records, in row order
    pub fn into_records(self) -> Vec<R> {
        self.pending.into_values().collect()
    }
}

impl<R, P, V, H> CellCallbackHandler for BeanCellCallbackHandler<R, P, V, H>
where
    P: PropertySetter<R>,
    V: CellMapper<DecodedValue>,
    H: CellMapper<String>,
{
    fn process_cell(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16) -> ReadResult<()> {
        if row < self.header_row {
            return Ok(());
        }
        if row == self.header_row {
            self.header.index_cell(cell, row, col, &mut self.header_mapper);
            return Ok(());
        }

        let Some(key) = self.header.get(col) else {
            return Ok(());
        };
        let value = self.value_mapper.map_cell(cell, row, col);

        let record = match self.pending.entry(row) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert((self.factory)()?),
        };

        self.setter
            .set_property(record, key, value)
            .map_err(|source| ReadError::PropertyAssignment {
                row,
                column: col,
                key: key.to_string(),
                source,
            })
    }
}

impl<R: fmt::Debug, P: fmt::Debug, V: fmt::Debug, H: fmt::Debug> fmt::Debug
    for BeanCellCallbackHandler<R, P, V, H>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanCellCallbackHandler")
            .field("header_row", &self.header_row)
            .field("header", &self.header)
            .field("pending", &self.pending)
            .field("setter", &self.setter)
            .field("value_mapper", &self.value_mapper)
            .field("header_mapper", &self.header_mapper)
            .finish_non_exhaustive()
    }
}

/// Collects one mapped value per visited cell, one inner `Vec` per visited row
#[derive(Debug, Clone)]
pub struct MatrixCallbackHandler<T, M> {
    mapper: M,
    rows: Vec<Vec<T>>,
    current_row: Option<u32>,
}

impl<T, M: CellMapper<T>> MatrixCallbackHandler<T, M> {
    /// Collect values produced by `mapper`
    pub fn new(mapper: M) -> Self {
        Self {
            mapper,
            rows: Vec::new(),
            current_row: None,
        }
    }

    /// Rows collected so far
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Hand over the collected rows
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T, M: CellMapper<T>> CellCallbackHandler for MatrixCallbackHandler<T, M> {
    fn process_cell(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16) -> ReadResult<()> {
        if self.current_row != Some(row) {
            self.current_row = Some(row);
            self.rows.push(Vec::new());
        }
        let value = self.mapper.map_cell(cell, row, col);
        if let Some(current) = self.rows.last_mut() {
            current.push(value);
        }
        Ok(())
    }
}
