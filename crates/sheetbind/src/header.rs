//! Header row indexing

use std::collections::BTreeMap;

use sheetbind_core::{DateSystem, SheetSource};

use crate::cell::Cell;
use crate::mapper::CellMapper;

/// Column index to property key, built from a header row
///
/// Keys are the string-form decoding of each header cell, lowercased, with
/// every space replaced by `_`. Every visited header cell is indexed, so a
/// blank header cell maps its column to the key `""`; columns outside the
/// header row's span have no key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    keys: BTreeMap<u16, String>,
}

impl HeaderMap {
    /// Create an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn header text into a property key
    ///
    /// ```
    /// use sheetbind::HeaderMap;
    ///
    /// assert_eq!(HeaderMap::normalize_key("First Name"), "first_name");
    /// assert_eq!(HeaderMap::normalize_key("first_name"), "first_name");
    /// ```
    pub fn normalize_key(text: &str) -> String {
        text.replace(' ', "_").to_lowercase()
    }

    /// Index raw header text for a column
    ///
    /// Returns the stored key.
    pub fn insert(&mut self, col: u16, text: &str) -> &str {
        let key = Self::normalize_key(text);
        if let Some((other, _)) = self.keys.iter().find(|(c, k)| **c != col && **k == key) {
            log::warn!(
                "header key '{}' in column {} duplicates column {}; later columns win",
                key,
                col,
                other
            );
        }
        log::trace!("header column {} -> '{}'", col, key);

        let slot = self.keys.entry(col).or_default();
        *slot = key;
        slot
    }

    /// Index one header cell, decoding it with `mapper`
    pub fn index_cell<M>(&mut self, cell: Option<Cell<'_>>, row: u32, col: u16, mapper: &mut M)
    where
        M: CellMapper<String> + ?Sized,
    {
        let text = mapper.map_cell(cell, row, col);
        self.insert(col, &text);
    }

    /// Build a header map from a whole sheet row
    pub fn from_row<S, M>(sheet: &S, row: u32, date_system: DateSystem, mapper: &mut M) -> Self
    where
        S: SheetSource + ?Sized,
        M: CellMapper<String> + ?Sized,
    {
        let mut header = Self::new();
        if let Some((first, last)) = sheet.row_bounds(row) {
            for col in first..=last {
                let cell = sheet.cell(row, col).map(|data| Cell::new(data, date_system));
                header.index_cell(cell, row, col, mapper);
            }
        }
        header
    }

    /// Key of a column, if indexed
    pub fn get(&self, col: u16) -> Option<&str> {
        self.keys.get(&col).map(String::as_str)
    }

    /// Number of indexed columns
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if no column is indexed
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over `(column, key)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.keys.iter().map(|(col, key)| (*col, key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::StringCellMapper;
    use sheetbind_core::{CellValue, NumberFormat, Worksheet};

    #[test]
    fn test_normalized_keys() {
        let mut header = HeaderMap::new();
        assert_eq!(header.insert(0, "First Name"), "first_name");
        assert_eq!(header.insert(1, "LAST NAME"), "last_name");
        assert_eq!(header.insert(2, ""), "");
        assert_eq!(header.len(), 3);
        assert_eq!(header.get(2), Some(""));
        assert_eq!(header.get(3), None);
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let mut header = HeaderMap::new();
        header.insert(0, "Name");
        header.insert(3, "name");
        header.insert(3, "Name");
        assert_eq!(header.get(0), Some("name"));
        assert_eq!(header.get(3), Some("name"));
    }

    #[test]
    fn test_from_row_uses_string_form() {
        let mut ws = Worksheet::new("People");
        ws.set_cell_value_at(0, 0, "Id").unwrap();
        ws.set_cell_value_at(0, 2, "Date Of Birth").unwrap();
        ws.set_cell_value_at(0, 3, CellValue::Number(2024.0)).unwrap();
        ws.set_cell_format_at(0, 3, NumberFormat::text()).unwrap();
        ws.set_cell_value_at(0, 4, CellValue::Boolean(true)).unwrap();

        let header = HeaderMap::from_row(&ws, 0, DateSystem::V1900, &mut StringCellMapper);
        let keys: Vec<(u16, &str)> = header.iter().collect();
        assert_eq!(
            keys,
            vec![(0, "id"), (1, ""), (2, "date_of_birth"), (3, "2024"), (4, "vrai")]
        );
    }

    #[test]
    fn test_from_missing_row() {
        let ws = Worksheet::new("Empty");
        let header = HeaderMap::from_row(&ws, 0, DateSystem::V1900, &mut StringCellMapper);
        assert!(header.is_empty());
    }
}
