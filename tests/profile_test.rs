use datastory::profile::TableProfiler;
use datastory::table::{Column, ColumnKind, Table};

fn mixed_table() -> Table {
    let mut table = Table::new();
    table
        .add_column(Column::numeric(
            "value",
            vec![Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)],
        ))
        .unwrap();
    table
        .add_column(Column::categorical(
            "label",
            vec![
                Some("a".into()),
                Some("b".into()),
                Some("a".into()),
                None,
                Some("a".into()),
            ],
        ))
        .unwrap();
    table
}

#[test]
fn test_basic_info_shape_and_missing() {
    let table = mixed_table();
    let info = TableProfiler::new(&table).basic_info();

    assert_eq!(info.rows, 5);
    assert_eq!(info.columns, 2);
    assert_eq!(info.column_names, vec!["value", "label"]);
    assert_eq!(info.dtypes["value"], ColumnKind::Numeric);
    assert_eq!(info.dtypes["label"], ColumnKind::Categorical);
    assert!(info.memory_usage > 0);

    // Missing totals equal the count of missing cells.
    let total_missing: usize = info.missing_values.values().sum();
    assert_eq!(total_missing, 2);
    assert_eq!(info.missing_values["value"], 1);
    assert_eq!(info.missing_values["label"], 1);
    assert_eq!(info.duplicate_rows, 0);
}

#[test]
fn test_basic_info_empty_table() {
    let table = Table::new();
    let info = TableProfiler::new(&table).basic_info();

    assert_eq!(info.rows, 0);
    assert_eq!(info.columns, 0);
    assert!(info.column_names.is_empty());
    assert!(info.dtypes.is_empty());
    assert!(info.missing_values.is_empty());
    assert_eq!(info.duplicate_rows, 0);
    assert_eq!(info.memory_usage, 0);
}

#[test]
fn test_duplicate_rows() {
    let mut table = Table::new();
    table
        .add_column(Column::numeric(
            "x",
            vec![Some(1.0), Some(2.0), Some(1.0), Some(1.0), None, None],
        ))
        .unwrap();
    table
        .add_column(Column::categorical(
            "y",
            vec![
                Some("a".into()),
                Some("b".into()),
                Some("a".into()),
                Some("b".into()),
                None,
                None,
            ],
        ))
        .unwrap();

    // Row 2 repeats row 0; row 5 repeats row 4 (missing cells included).
    // Row 3 shares x with rows 0/2 but differs in y.
    let info = TableProfiler::new(&table).basic_info();
    assert_eq!(info.duplicate_rows, 2);
}

#[test]
fn test_numeric_summary_basic() {
    let table = mixed_table();
    let summary = TableProfiler::new(&table).statistical_summary();

    let value = &summary.numerical["value"];
    assert!((value.mean.unwrap() - 3.0).abs() < 1e-10);
    assert!((value.median.unwrap() - 3.0).abs() < 1e-10);
    assert_eq!(value.min.unwrap(), 1.0);
    assert_eq!(value.max.unwrap(), 5.0);
    assert!(value.std.unwrap() > 0.0);
    assert_eq!(value.outliers_count, 0);
}

#[test]
fn test_numeric_summary_constant_column() {
    let mut table = Table::new();
    table
        .add_column(Column::numeric("flat", vec![Some(7.0); 10]))
        .unwrap();

    let summary = TableProfiler::new(&table).statistical_summary();
    let flat = &summary.numerical["flat"];
    assert_eq!(flat.std.unwrap(), 0.0);
    assert_eq!(flat.outliers_count, 0);
    assert_eq!(flat.skewness.unwrap(), 0.0);
    assert_eq!(flat.kurtosis.unwrap(), 0.0);
}

#[test]
fn test_numeric_summary_all_missing() {
    let mut table = Table::new();
    table
        .add_column(Column::numeric("empty", vec![None; 4]))
        .unwrap();

    let summary = TableProfiler::new(&table).statistical_summary();
    let empty = &summary.numerical["empty"];
    assert!(empty.mean.is_none());
    assert!(empty.median.is_none());
    assert!(empty.std.is_none());
    assert!(empty.min.is_none());
    assert!(empty.max.is_none());
    assert!(empty.skewness.is_none());
    assert!(empty.kurtosis.is_none());
    assert_eq!(empty.outliers_count, 0);
}

#[test]
fn test_numeric_summary_single_value() {
    let mut table = Table::new();
    table
        .add_column(Column::numeric("one", vec![Some(42.0), None]))
        .unwrap();

    let summary = TableProfiler::new(&table).statistical_summary();
    let one = &summary.numerical["one"];
    assert_eq!(one.mean.unwrap(), 42.0);
    assert_eq!(one.std.unwrap(), 0.0);
    assert_eq!(one.skewness.unwrap(), 0.0);
    assert_eq!(one.outliers_count, 0);
}

#[test]
fn test_iqr_outlier_worked_example() {
    // Q1=2.25, Q3=4.75, IQR=2.5, fences [-1.5, 8.5]: 100 is the only
    // outlier.
    let mut table = Table::new();
    table
        .add_column(Column::numeric(
            "x",
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(100.0)],
        ))
        .unwrap();

    let summary = TableProfiler::new(&table).statistical_summary();
    let x = &summary.numerical["x"];
    assert_eq!(x.outliers_count, 1);
    // A single large value also skews the distribution right.
    assert!(x.skewness.unwrap() > 1.0);
}

#[test]
fn test_categorical_summary() {
    let table = mixed_table();
    let summary = TableProfiler::new(&table).statistical_summary();

    let label = &summary.categorical["label"];
    assert_eq!(label.unique_count, 2);
    assert_eq!(label.most_frequent.as_deref(), Some("a"));
    assert_eq!(label.value_counts.len(), 2);
    assert_eq!(label.value_counts[0].value, "a");
    assert_eq!(label.value_counts[0].count, 3);
    assert_eq!(label.value_counts[1].value, "b");
    assert_eq!(label.value_counts[1].count, 1);
}

#[test]
fn test_categorical_tie_break_first_encountered() {
    let mut table = Table::new();
    table
        .add_column(Column::categorical(
            "c",
            vec![
                Some("b".into()),
                Some("a".into()),
                Some("b".into()),
                Some("a".into()),
                Some("z".into()),
            ],
        ))
        .unwrap();

    let summary = TableProfiler::new(&table).statistical_summary();
    let c = &summary.categorical["c"];
    // "a" and "b" tie at 2; "b" appeared first.
    assert_eq!(c.most_frequent.as_deref(), Some("b"));
    assert_eq!(c.value_counts[0].value, "b");
    assert_eq!(c.value_counts[1].value, "a");
    assert_eq!(c.value_counts[2].value, "z");
}

#[test]
fn test_categorical_top_10_limit() {
    let values: Vec<Option<String>> = (0..15).map(|i| Some(format!("v{}", i))).collect();
    let mut table = Table::new();
    table.add_column(Column::categorical("many", values)).unwrap();

    let summary = TableProfiler::new(&table).statistical_summary();
    let many = &summary.categorical["many"];
    assert_eq!(many.unique_count, 15);
    assert_eq!(many.value_counts.len(), 10);
    // All counts tie at 1, so the listing follows encounter order.
    assert_eq!(many.value_counts[0].value, "v0");
    assert_eq!(many.value_counts[9].value, "v9");
}

#[test]
fn test_categorical_all_missing() {
    let mut table = Table::new();
    table
        .add_column(Column::categorical("gone", vec![None, None, None]))
        .unwrap();

    let summary = TableProfiler::new(&table).statistical_summary();
    let gone = &summary.categorical["gone"];
    assert_eq!(gone.unique_count, 0);
    assert!(gone.most_frequent.is_none());
    assert!(gone.value_counts.is_empty());
}

#[test]
fn test_summary_partition_matches_kinds() {
    let table = mixed_table();
    let summary = TableProfiler::new(&table).statistical_summary();
    assert_eq!(summary.numerical.len(), 1);
    assert_eq!(summary.categorical.len(), 1);
    assert!(summary.numerical.contains_key("value"));
    assert!(summary.categorical.contains_key("label"));
}
