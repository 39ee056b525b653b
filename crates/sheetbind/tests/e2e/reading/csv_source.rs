//! Tests for reading CSV sources.

use crate::{temp_csv, Person};
use pretty_assertions::assert_eq;
use sheetbind::{CsvReadOptions, CsvSource, GridTemplate, ReadError};

#[test]
fn test_beans_from_csv() {
    let file = temp_csv("id,name\n1,Alice\n2,Bob\n");
    let options = CsvReadOptions::default().with_sheet_name("People");
    let template = GridTemplate::new(CsvSource::with_options(file.path(), options));

    assert_eq!(template.sheet_names().unwrap(), vec!["People".to_string()]);

    let people: Vec<Person> = template.read_beans("People").unwrap();
    assert_eq!(
        people,
        vec![
            Person { id: 1, name: "Alice".to_string() },
            Person { id: 2, name: "Bob".to_string() },
        ]
    );
}

#[test]
fn test_sheet_named_after_file_stem() {
    let file = temp_csv("a;b\n1;2\n");
    let stem = file
        .path()
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap()
        .to_string();
    let options = CsvReadOptions::default().with_delimiter(b';');
    let template = GridTemplate::new(CsvSource::with_options(file.path(), options));

    let rows = template.read_strings(&stem).unwrap();
    assert_eq!(
        rows,
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["1.0".to_string(), "2.0".to_string()],
        ]
    );
}

#[test]
fn test_missing_file_is_a_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let template = GridTemplate::new(CsvSource::new(dir.path().join("absent.csv")));

    let err = template.read_strings("absent").unwrap_err();
    assert!(matches!(err, ReadError::Csv(_)), "got {err:?}");
}
