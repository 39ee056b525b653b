//! Sheet reads over a workbook source

use sheetbind_core::{DateSystem, GridSource, SheetSource};

use crate::bean::{Bean, PropertySetter};
use crate::cell::Cell;
use crate::error::{ReadError, ReadResult};
use crate::handler::{
    BeanCellCallbackHandler, CellCallbackHandler, FnHandler, MatrixCallbackHandler,
};
use crate::mapper::{CellMapper, StringCellMapper};
use crate::source::WorkbookSource;
use crate::value::DecodedValue;

/// Produces a result from a whole sheet
///
/// Closures taking the sheet implement this trait.
pub trait SheetExtractor<S: ?Sized> {
    /// Extracted result
    type Output;

    /// Extract the result from `sheet`
    fn extract(self, sheet: &S) -> Self::Output;
}

impl<S: ?Sized, R, F> SheetExtractor<S> for F
where
    F: FnOnce(&S) -> R,
{
    type Output = R;

    fn extract(self, sheet: &S) -> R {
        self(sheet)
    }
}

/// Sheet type of a source
pub type SourceSheet<S> = <<S as WorkbookSource>::Grid as GridSource>::Sheet;

/// Reads sheets of a workbook source
///
/// Every read opens the source, looks the sheet up by name and visits its
/// cells row by row: rows from the first to the last physical row, and in
/// each row the columns from its first to its last physical column. Rows
/// without any stored cell are not visited; positions without a cell inside
/// a row's span are visited with `None`.
///
/// ```
/// use sheetbind::{impl_bean, GridTemplate};
/// use sheetbind_core::Workbook;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Person {
///     id: u32,
///     name: String,
/// }
///
/// impl_bean!(Person { id, name });
///
/// let mut workbook = Workbook::new();
/// let sheet = workbook.worksheet_mut(0).unwrap();
/// sheet.set_cell_value("A1", "id").unwrap();
/// sheet.set_cell_value("B1", "name").unwrap();
/// sheet.set_cell_value("A2", 1.0).unwrap();
/// sheet.set_cell_value("B2", "Alice").unwrap();
///
/// let people: Vec<Person> = GridTemplate::new(&workbook).read_beans("Sheet1").unwrap();
/// assert_eq!(people, vec![Person { id: 1, name: "Alice".to_string() }]);
/// ```
#[derive(Debug, Clone)]
pub struct GridTemplate<S> {
    source: S,
}

impl<S: WorkbookSource> GridTemplate<S> {
    /// Create a template reading from `source`
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Names of the sheets in the source
    pub fn sheet_names(&self) -> ReadResult<Vec<String>> {
        let grid = self.source.open()?;
        Ok(grid.sheet_names())
    }

    /// Feed every visited cell of `sheet` to `handler`
    pub fn read_cells<H>(&self, sheet: &str, handler: &mut H) -> ReadResult<()>
    where
        H: CellCallbackHandler + ?Sized,
    {
        let grid = self.source.open()?;
        let date_system = grid.date_system();
        let found = lookup(&grid, sheet)?;

        log::debug!("reading sheet '{}'", sheet);
        let visited = walk_sheet(found, date_system, handler)?;
        log::debug!("read sheet '{}': {} cells visited", sheet, visited);
        Ok(())
    }

    /// Call `f` with every visited cell of `sheet`
    pub fn for_each_cell<F>(&self, sheet: &str, f: F) -> ReadResult<()>
    where
        F: FnMut(Option<Cell<'_>>, u32, u16) -> ReadResult<()>,
    {
        self.read_cells(sheet, &mut FnHandler::new(f))
    }

    /// Compute a result from the whole sheet
    pub fn extract<E>(&self, sheet: &str, extractor: E) -> ReadResult<E::Output>
    where
        E: SheetExtractor<SourceSheet<S>>,
    {
        let grid = self.source.open()?;
        let found = lookup(&grid, sheet)?;
        Ok(extractor.extract(found))
    }

    /// Compute a result from the whole sheet with a closure
    ///
    /// ```
    /// use sheetbind::GridTemplate;
    /// use sheetbind_core::{SheetSource, Workbook};
    ///
    /// let mut workbook = Workbook::new();
    /// workbook.worksheet_mut(0).unwrap().set_cell_value("C3", 1.0).unwrap();
    ///
    /// let rows = GridTemplate::new(&workbook)
    ///     .read_with("Sheet1", |sheet| (sheet.first_row(), sheet.last_row()))
    ///     .unwrap();
    /// assert_eq!(rows, (Some(2), Some(2)));
    /// ```
    pub fn read_with<R, F>(&self, sheet: &str, f: F) -> ReadResult<R>
    where
        F: FnOnce(&SourceSheet<S>) -> R,
    {
        let grid = self.source.open()?;
        let found = lookup(&grid, sheet)?;
        Ok(f(found))
    }

    /// Map every visited cell, one inner `Vec` per visited row
    pub fn read_matrix<T, M>(&self, sheet: &str, mapper: M) -> ReadResult<Vec<Vec<T>>>
    where
        M: CellMapper<T>,
    {
        let mut handler = MatrixCallbackHandler::new(mapper);
        self.read_cells(sheet, &mut handler)?;
        Ok(handler.into_rows())
    }

    /// Read every visited cell in string form
    pub fn read_strings(&self, sheet: &str) -> ReadResult<Vec<Vec<String>>> {
        self.read_matrix(sheet, StringCellMapper)
    }

    /// Read one record per data row, keyed by the first row
    pub fn read_beans<R>(&self, sheet: &str) -> ReadResult<Vec<R>>
    where
        R: Bean + Default + 'static,
    {
        self.read_beans_with(sheet, BeanCellCallbackHandler::<R>::new())
    }

    /// Read records with a configured handler
    pub fn read_beans_with<R, P, V, H>(
        &self,
        sheet: &str,
        mut handler: BeanCellCallbackHandler<R, P, V, H>,
    ) -> ReadResult<Vec<R>>
    where
        P: PropertySetter<R>,
        V: CellMapper<DecodedValue>,
        H: CellMapper<String>,
    {
        self.read_cells(sheet, &mut handler)?;
        log::debug!("read {} records from sheet '{}'", handler.record_count(), sheet);
        Ok(handler.into_records())
    }
}

fn lookup<'g, G: GridSource>(grid: &'g G, name: &str) -> ReadResult<&'g G::Sheet> {
    grid.sheet(name).ok_or_else(|| ReadError::SheetNotFound {
        name: name.to_string(),
    })
}

/// Visit the cells of a sheet, returning the number of positions visited
fn walk_sheet<S, H>(sheet: &S, date_system: DateSystem, handler: &mut H) -> ReadResult<usize>
where
    S: SheetSource + ?Sized,
    H: CellCallbackHandler + ?Sized,
{
    let (Some(first_row), Some(last_row)) = (sheet.first_row(), sheet.last_row()) else {
        return Ok(0);
    };

    let mut visited = 0;
    for row in first_row..=last_row {
        let Some((first_col, last_col)) = sheet.row_bounds(row) else {
            continue;
        };
        for col in first_col..=last_col {
            let cell = sheet.cell(row, col).map(|data| Cell::new(data, date_system));
            handler.process_cell(cell, row, col)?;
            visited += 1;
        }
    }
    Ok(visited)
}
