use datastory::table::{Column, ColumnKind, Table};
use datastory::Error;

#[test]
fn test_table_creation() {
    let table = Table::new();
    assert_eq!(table.column_count(), 0);
    assert_eq!(table.row_count(), 0);
    assert!(table.column_names().is_empty());
    assert_eq!(table.memory_estimate(), 0);
}

#[test]
fn test_table_add_columns() {
    let mut table = Table::new();
    table
        .add_column(Column::numeric("age", vec![Some(25.0), Some(30.0), Some(35.0)]))
        .unwrap();
    table
        .add_column(Column::categorical(
            "city",
            vec![Some("Tokyo".into()), None, Some("Osaka".into())],
        ))
        .unwrap();

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column_names(), vec!["age", "city"]);
    assert!(table.contains_column("age"));
    assert!(!table.contains_column("salary"));
    assert_eq!(table.column("city").unwrap().missing_count(), 1);
}

#[test]
fn test_table_column_length_mismatch() {
    let mut table = Table::new();
    table
        .add_column(Column::numeric("a", vec![Some(1.0), Some(2.0), Some(3.0)]))
        .unwrap();

    let result = table.add_column(Column::numeric("b", vec![Some(1.0)]));
    match result {
        Err(Error::InconsistentRowCount { expected, found }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 1);
        }
        _ => panic!("expected an InconsistentRowCount error"),
    }
}

#[test]
fn test_table_duplicate_column_name() {
    let mut table = Table::new();
    table
        .add_column(Column::numeric("x", vec![Some(1.0)]))
        .unwrap();

    let result = table.add_column(Column::numeric("x", vec![Some(2.0)]));
    assert!(matches!(result, Err(Error::DuplicateColumnName(_))));
}

#[test]
fn test_column_kind_partition() {
    let mut table = Table::new();
    table
        .add_column(Column::numeric("a", vec![Some(1.0)]))
        .unwrap();
    table
        .add_column(Column::categorical("b", vec![Some("x".into())]))
        .unwrap();
    table
        .add_column(Column::numeric("c", vec![None]))
        .unwrap();

    let numeric = table.numeric_columns();
    assert_eq!(numeric.len(), 2);
    assert_eq!(numeric[0].name(), "a");
    assert_eq!(numeric[1].name(), "c");
    assert_eq!(numeric[1].kind(), ColumnKind::Numeric);

    let categorical = table.categorical_columns();
    assert_eq!(categorical.len(), 1);
    assert_eq!(categorical[0].name(), "b");
}

#[test]
fn test_column_not_found() {
    let table = Table::new();
    assert!(matches!(
        table.column("missing"),
        Err(Error::ColumnNotFound(_))
    ));
}

#[test]
fn test_memory_estimate_grows_with_data() {
    let mut table = Table::new();
    table
        .add_column(Column::categorical(
            "text",
            vec![Some("hello".into()), Some("world".into())],
        ))
        .unwrap();
    let small = table.memory_estimate();
    assert!(small > 0);

    let mut bigger = Table::new();
    bigger
        .add_column(Column::categorical(
            "text",
            vec![Some("a much longer string value".into()); 100],
        ))
        .unwrap();
    assert!(bigger.memory_estimate() > small);
}
