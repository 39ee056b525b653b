//! CSV options

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether the first record is a header row.
    ///
    /// The header is kept as row 0 of the sheet either way; this only tells
    /// the reader not to type-detect it.
    pub has_header: bool,
    /// Automatic type detection (booleans and numbers)
    pub auto_detect_types: bool,
    /// Sheet name; defaults to the file stem, or `Sheet1` for readers
    pub sheet_name: Option<String>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: true,
            auto_detect_types: true,
            sheet_name: None,
        }
    }
}

impl CsvReadOptions {
    /// Set the field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the sheet name
    #[must_use]
    pub fn with_sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.sheet_name = Some(name.into());
        self
    }
}
