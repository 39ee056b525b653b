//! Workbook: named worksheets sharing one date system

use crate::date::DateSystem;
use crate::error::{Error, Result};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// Characters a sheet name may not contain
const FORBIDDEN_NAME_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// An in-memory grid of named worksheets
///
/// Sheet names are unique, compared case-insensitively.
#[derive(Debug)]
pub struct Workbook {
    sheets: Vec<Worksheet>,
    settings: WorkbookSettings,
}

/// Workbook-level settings
#[derive(Debug, Clone, Default)]
pub struct WorkbookSettings {
    /// Serial dates count from 1904-01-01 instead of 1899-12-31
    pub date_1904: bool,
}

impl Workbook {
    /// Create a workbook holding one empty sheet named `Sheet1`
    pub fn new() -> Self {
        let mut workbook = Self::empty();
        workbook.sheets.push(Worksheet::new("Sheet1"));
        workbook
    }

    /// Create a workbook without sheets
    pub fn empty() -> Self {
        Self {
            sheets: Vec::new(),
            settings: WorkbookSettings::default(),
        }
    }

    /// Sheet at a position
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.sheets.get(index)
    }

    /// Mutable sheet at a position
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.sheets.get_mut(index)
    }

    /// Sheet with exactly this name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.sheets.iter().find(|sheet| sheet.name() == name)
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name().to_string()).collect()
    }

    /// Append an empty sheet, returning its position
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.push_sheet(Worksheet::new(name))
    }

    /// Append a filled sheet, returning its position
    pub fn add_existing_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        self.push_sheet(worksheet)
    }

    /// Mutable workbook settings
    pub fn settings_mut(&mut self) -> &mut WorkbookSettings {
        &mut self.settings
    }

    /// Date system used to interpret serial dates
    pub fn date_system(&self) -> DateSystem {
        DateSystem::from_date_1904(self.settings.date_1904)
    }

    fn push_sheet(&mut self, sheet: Worksheet) -> Result<usize> {
        check_sheet_name(sheet.name())?;

        let folded = sheet.name().to_lowercase();
        if self.sheets.iter().any(|s| s.name().to_lowercase() == folded) {
            return Err(Error::DuplicateSheetName(sheet.name().to_string()));
        }

        self.sheets.push(sheet);
        Ok(self.sheets.len() - 1)
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

fn check_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("empty name".to_string()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "'{}' is longer than {} characters",
            name, MAX_SHEET_NAME_LEN
        )));
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!("'{}' contains '{}'", name, c)));
    }
    Ok(())
}
