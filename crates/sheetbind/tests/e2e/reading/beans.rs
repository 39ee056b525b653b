//! Tests for header-driven record reads.

use std::collections::BTreeMap;

use crate::{format_cell, people_workbook, workbook_from_rows, Person};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sheetbind::{
    impl_bean, BeanCellCallbackHandler, DecodedValue, FnSetter, GridTemplate, NumberFormat,
    PropertyError, ReadError, RecordCreationError, StringCellMapper,
};

#[test]
fn test_people_in_row_order() {
    let workbook = people_workbook();
    let people: Vec<Person> = GridTemplate::new(&workbook).read_beans("People").unwrap();

    assert_eq!(
        people,
        vec![
            Person { id: 1, name: "Alice".to_string() },
            Person { id: 2, name: "Bob".to_string() },
        ]
    );
}

#[test]
fn test_missing_sheet_produces_nothing() {
    let workbook = people_workbook();
    let result = GridTemplate::new(&workbook).read_beans::<Person>("Staff");

    match result {
        Err(ReadError::SheetNotFound { name }) => assert_eq!(name, "Staff"),
        other => panic!("Expected SheetNotFound, got {other:?}"),
    }
}

#[test]
fn test_header_keys_are_normalized() {
    #[derive(Debug, Default, PartialEq)]
    struct Contact {
        first_name: String,
        last_name: String,
    }
    impl_bean!(Contact { first_name, last_name });

    let workbook = workbook_from_rows(
        "Contacts",
        &[
            vec![Some("First Name".into()), Some("last_name".into())],
            vec![Some("Ada".into()), Some("Lovelace".into())],
        ],
    );

    let contacts: Vec<Contact> = GridTemplate::new(&workbook).read_beans("Contacts").unwrap();
    assert_eq!(
        contacts,
        vec![Contact {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }]
    );
}

#[test]
fn test_maps_take_every_column() {
    let workbook = workbook_from_rows(
        "Data",
        &[
            vec![Some("Code".into()), None, Some("Amount".into())],
            vec![Some("A-1".into()), Some("ignored".into()), Some(1234.5.into())],
        ],
    );

    let rows: Vec<BTreeMap<String, DecodedValue>> =
        GridTemplate::new(&workbook).read_beans("Data").unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["", "amount", "code"]);
    assert_eq!(rows[0]["code"], DecodedValue::from("A-1"));
    assert_eq!(rows[0][""], DecodedValue::from("ignored"));
    assert_eq!(rows[0]["amount"], DecodedValue::from("1234.5"));
}

#[test]
fn test_row_under_blank_header_still_makes_a_record() {
    let workbook = workbook_from_rows(
        "Data",
        &[
            vec![Some("id".into()), None, Some("name".into())],
            vec![Some(1.0.into()), Some("orphan".into()), Some("Alice".into())],
            vec![None, Some("only-blank-col".into())],
            vec![Some(3.0.into()), None, Some("Carol".into())],
        ],
    );

    let rows: Vec<BTreeMap<String, DecodedValue>> =
        GridTemplate::new(&workbook).read_beans("Data").unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][""], DecodedValue::from("orphan"));
    assert_eq!(rows[1].len(), 1);
    assert_eq!(rows[1][""], DecodedValue::from("only-blank-col"));
    assert_eq!(rows[2]["name"], DecodedValue::from("Carol"));
    assert_eq!(rows[2][""], DecodedValue::Null);
}

#[test]
fn test_blank_header_rejected_by_typed_record() {
    let workbook = workbook_from_rows(
        "People",
        &[
            vec![Some("id".into()), None, Some("name".into())],
            vec![Some(1.0.into()), Some("x".into()), Some("Alice".into())],
        ],
    );

    match GridTemplate::new(&workbook).read_beans::<Person>("People") {
        Err(ReadError::PropertyAssignment { row, column, key, source }) => {
            assert_eq!((row, column, key.as_str()), (1, 1, ""));
            assert_eq!(source, PropertyError::UnknownProperty(String::new()));
        }
        other => panic!("Expected PropertyAssignment, got {other:?}"),
    }
}

#[test]
fn test_date_columns_become_dates() {
    #[derive(Debug, Default)]
    struct Event {
        title: String,
        day: Option<NaiveDate>,
    }
    impl_bean!(Event { title, day });

    let mut workbook = workbook_from_rows(
        "Events",
        &[
            vec![Some("title".into()), Some("day".into())],
            vec![Some("Launch".into()), Some(45366.0.into())],
            vec![Some("TBD".into()), Some("not scheduled".into())],
        ],
    );
    format_cell(&mut workbook, 1, 1, NumberFormat::date_short());
    format_cell(&mut workbook, 2, 1, NumberFormat::date_short());
    let template = GridTemplate::new(&workbook);

    let rows: Vec<BTreeMap<String, DecodedValue>> = template.read_beans("Events").unwrap();
    let launch = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    assert_eq!(rows[0]["day"], DecodedValue::Date(launch.and_hms_opt(0, 0, 0).unwrap()));
    assert_eq!(rows[1]["day"], DecodedValue::from("not scheduled"));

    // The text fallback still cannot fill a date field
    match template.read_beans::<Event>("Events") {
        Err(ReadError::PropertyAssignment { row, key, .. }) => {
            assert_eq!((row, key.as_str()), (2, "day"));
        }
        other => panic!("Expected PropertyAssignment, got {other:?}"),
    }
}

#[test]
fn test_duplicate_header_keeps_last_column() {
    let workbook = workbook_from_rows(
        "People",
        &[
            vec![Some("id".into()), Some("Name".into()), Some("name".into())],
            vec![Some(1.0.into()), Some("Alice".into()), Some("Alicia".into())],
        ],
    );

    let people: Vec<Person> = GridTemplate::new(&workbook).read_beans("People").unwrap();
    assert_eq!(people[0].name, "Alicia");
}

#[test]
fn test_property_error_aborts_read() {
    let workbook = workbook_from_rows(
        "People",
        &[
            vec![Some("id".into()), Some("name".into())],
            vec![Some(1.0.into()), Some("Alice".into())],
            vec![Some("two".into()), Some("Bob".into())],
        ],
    );

    let err = GridTemplate::new(&workbook)
        .read_beans::<Person>("People")
        .unwrap_err();

    match err {
        ReadError::PropertyAssignment { row, column, key, source } => {
            assert_eq!((row, column), (2, 0));
            assert_eq!(key, "id");
            assert!(matches!(source, PropertyError::IncompatibleValue { .. }));
        }
        other => panic!("Expected PropertyAssignment, got {other:?}"),
    }
}

#[test]
fn test_factory_failure_aborts_read() {
    let workbook = people_workbook();
    let handler = BeanCellCallbackHandler::<Person>::with_factory(|| {
        Err(RecordCreationError::new("pool exhausted"))
    });

    let err = GridTemplate::new(&workbook)
        .read_beans_with("People", handler)
        .unwrap_err();
    assert!(matches!(err, ReadError::RecordCreation(ref e) if e.message() == "pool exhausted"));
}

#[test]
fn test_custom_setter_and_string_values() {
    let workbook = people_workbook();
    let setter = FnSetter::new(
        |record: &mut Vec<(String, String)>, key: &str, value: DecodedValue| {
            record.push((key.to_string(), value.to_string()));
            Ok(())
        },
    );
    let handler = BeanCellCallbackHandler::<Vec<(String, String)>>::new()
        .with_setter(setter)
        .with_mappers(sheetbind::AsDecoded(StringCellMapper), StringCellMapper);

    let rows = GridTemplate::new(&workbook)
        .read_beans_with("People", handler)
        .unwrap();

    assert_eq!(
        rows,
        vec![
            vec![
                ("id".to_string(), "1.0".to_string()),
                ("name".to_string(), "Alice".to_string()),
            ],
            vec![
                ("id".to_string(), "2.0".to_string()),
                ("name".to_string(), "Bob".to_string()),
            ],
        ]
    );
}
