//! Column-major tabular data model.
//!
//! A [`Table`] is an ordered collection of named, typed columns of equal
//! length. Missing cells are represented with `Option::None`. A column's
//! kind ([`ColumnKind`]) is fixed by its storage variant when the column is
//! built, so one analysis pass always sees a stable classification.
//! Downstream code branches on the tag, never on ad hoc value inspection.

use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// Classification of a column for analysis dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Floating-point values (integers are widened on ingest).
    Numeric,
    /// Textual values; anything that is not numeric.
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// Typed cell storage for one column.
#[derive(Debug, Clone)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

/// A named column of homogeneously typed cells.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Create a numeric column.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    /// Create a categorical (textual) column.
    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Categorical(values),
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the typed cell storage.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Kind tag derived from the storage variant.
    pub fn kind(&self) -> ColumnKind {
        match self.data {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// Number of cells (including missing ones).
    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
        }
    }

    /// Whether the column has zero cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count of missing cells.
    pub fn missing_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Categorical(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Raw numeric cells, if this is a numeric column.
    pub fn numeric_cells(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Categorical(_) => None,
        }
    }

    /// Raw categorical cells, if this is a categorical column.
    pub fn categorical_cells(&self) -> Option<&[Option<String>]> {
        match &self.data {
            ColumnData::Categorical(v) => Some(v),
            ColumnData::Numeric(_) => None,
        }
    }

    /// Non-missing numeric values in row order. Empty for categorical
    /// columns.
    pub fn valid_numeric(&self) -> Vec<f64> {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter_map(|c| *c).collect(),
            ColumnData::Categorical(_) => Vec::new(),
        }
    }

    /// Estimated heap footprint in bytes. Informational only.
    pub fn memory_estimate(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len() * std::mem::size_of::<Option<f64>>(),
            ColumnData::Categorical(v) => {
                v.len() * std::mem::size_of::<Option<String>>()
                    + v.iter()
                        .filter_map(|c| c.as_ref().map(|s| s.len()))
                        .sum::<usize>()
            }
        }
    }
}

/// An ordered sequence of named columns with equal row counts.
///
/// Invariants: all columns share the same length and column names are
/// unique. Both are enforced by [`Table::add_column`]. Analysis never
/// mutates a table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Table { columns: Vec::new() }
    }

    /// Append a column, enforcing the unique-name and equal-length
    /// invariants.
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.columns.iter().any(|c| c.name == column.name) {
            return Err(Error::DuplicateColumnName(column.name.clone()));
        }
        if let Some(first) = self.columns.first() {
            if column.len() != first.len() {
                return Err(Error::InconsistentRowCount {
                    expected: first.len(),
                    found: column.len(),
                });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows (0 for a table with no columns).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Whether a column with this name exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// All columns in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Numeric columns in table order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.kind() == ColumnKind::Numeric)
            .collect()
    }

    /// Categorical columns in table order.
    pub fn categorical_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.kind() == ColumnKind::Categorical)
            .collect()
    }

    /// Estimated total heap footprint in bytes. Informational only.
    pub fn memory_estimate(&self) -> usize {
        self.columns.iter().map(|c| c.memory_estimate()).sum()
    }
}
