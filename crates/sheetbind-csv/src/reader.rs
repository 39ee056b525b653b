//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use sheetbind_core::{CellError, CellValue, Workbook, Worksheet};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a single-sheet workbook
    ///
    /// The sheet is named after [`CsvReadOptions::sheet_name`], falling back to
    /// the file stem.
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let path = path.as_ref();
        let name = options
            .sheet_name
            .clone()
            .or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Sheet1".to_string());

        let file = File::open(path)?;
        let mut worksheet = Self::read(file, options)?;
        worksheet.set_name(name);

        let mut workbook = Workbook::empty();
        workbook.add_existing_worksheet(worksheet)?;
        Ok(workbook)
    }

    /// Read CSV from a reader into a worksheet
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let name = options.sheet_name.as_deref().unwrap_or("Sheet1");
        let mut worksheet = Worksheet::new(name);
        let mut row_idx = 0u32;

        for result in csv_reader.records() {
            let record = result?;
            let is_header = options.has_header && row_idx == 0;

            for (col, field) in record.iter().enumerate() {
                let value = if options.auto_detect_types && !is_header {
                    Self::detect_type(field)
                } else {
                    CellValue::string(field)
                };

                worksheet.set_cell_value_at(row_idx, col as u16, value)?;
            }

            row_idx += 1;
        }

        log::debug!(
            "loaded {} CSV rows into sheet '{}' ({} cells)",
            row_idx,
            worksheet.name(),
            worksheet.cell_count()
        );

        Ok(worksheet)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        match trimmed.to_lowercase().as_str() {
            "true" => return CellValue::Boolean(true),
            "false" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Some(error) = CellError::parse(trimmed) {
            return CellValue::Error(error);
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }

        CellValue::string(field)
    }
}
