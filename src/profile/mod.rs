//! Structural and statistical profiling of a [`Table`].
//!
//! [`TableProfiler`] tolerates dirty data: missing values are expected
//! input, and degenerate shapes (zero rows, all-missing or constant
//! columns) resolve to defined fallback values instead of errors.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::table::{Column, ColumnData, ColumnKind, Table};

/// Structural metadata for a table.
#[derive(Debug, Clone, Serialize)]
pub struct StructuralSummary {
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub columns: usize,
    /// Column names in table order.
    pub column_names: Vec<String>,
    /// Column name to kind name.
    pub dtypes: BTreeMap<String, ColumnKind>,
    /// Estimated heap footprint in bytes. Informational only.
    pub memory_usage: usize,
    /// Column name to missing-cell count.
    pub missing_values: BTreeMap<String, usize>,
    /// Rows identical to an earlier row in every column.
    pub duplicate_rows: usize,
}

/// Descriptive statistics for a numeric column, computed over non-missing
/// values only. All statistics are absent when the column has zero
/// non-missing values.
#[derive(Debug, Clone, Serialize)]
pub struct NumericSummary {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation (denominator n-1; 0.0 when n == 1).
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Fisher moment-based skewness (g1); 0.0 when n < 2 or variance is 0.
    pub skewness: Option<f64>,
    /// Fisher excess kurtosis (g2); 0.0 when n < 2 or variance is 0.
    pub kurtosis: Option<f64>,
    /// IQR-rule outlier count (zero for flat distributions).
    pub outliers_count: usize,
}

/// One value with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Summary for a categorical column. Missing values are excluded
/// throughout. Ties for most frequent are broken by first encounter in
/// row order, and the top-10 listing uses the same rule.
#[derive(Debug, Clone, Serialize)]
pub struct CategoricalSummary {
    pub unique_count: usize,
    pub most_frequent: Option<String>,
    /// Top 10 values in descending frequency.
    pub value_counts: Vec<ValueCount>,
}

/// Per-column summaries split by column kind.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticalSummary {
    pub numerical: BTreeMap<String, NumericSummary>,
    pub categorical: BTreeMap<String, CategoricalSummary>,
}

/// Profiler over one borrowed table. Stateless between calls; every
/// invocation recomputes from the source columns.
pub struct TableProfiler<'a> {
    table: &'a Table,
}

impl<'a> TableProfiler<'a> {
    pub fn new(table: &'a Table) -> Self {
        TableProfiler { table }
    }

    /// Structural metadata: shape, kinds, missing counts, duplicate rows.
    /// Never fails; empty tables yield zero-valued fields.
    pub fn basic_info(&self) -> StructuralSummary {
        let mut dtypes = BTreeMap::new();
        let mut missing_values = BTreeMap::new();
        for col in self.table.columns() {
            dtypes.insert(col.name().to_string(), col.kind());
            missing_values.insert(col.name().to_string(), col.missing_count());
        }

        StructuralSummary {
            rows: self.table.row_count(),
            columns: self.table.column_count(),
            column_names: self
                .table
                .column_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            dtypes,
            memory_usage: self.table.memory_estimate(),
            missing_values,
            duplicate_rows: count_duplicate_rows(self.table),
        }
    }

    /// Per-column statistical summaries, keyed by column name.
    pub fn statistical_summary(&self) -> StatisticalSummary {
        let mut numerical = BTreeMap::new();
        let mut categorical = BTreeMap::new();

        for col in self.table.columns() {
            match col.kind() {
                ColumnKind::Numeric => {
                    numerical.insert(col.name().to_string(), numeric_summary(col));
                }
                ColumnKind::Categorical => {
                    categorical.insert(col.name().to_string(), categorical_summary(col));
                }
            }
        }

        StatisticalSummary {
            numerical,
            categorical,
        }
    }
}

// ── Numeric statistics ────────────────────────────────────────────────

fn numeric_summary(col: &Column) -> NumericSummary {
    let values = col.valid_numeric();
    if values.is_empty() {
        return NumericSummary {
            mean: None,
            median: None,
            std: None,
            min: None,
            max: None,
            skewness: None,
            kurtosis: None,
            outliers_count: 0,
        };
    }

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std = sample_std(&values, mean);

    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let min = sorted[0];
    let max = sorted[n - 1];
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    let (skewness, kurtosis) = skew_kurtosis(&values, mean);

    NumericSummary {
        mean: Some(mean),
        median: Some(median),
        std: Some(std),
        min: Some(min),
        max: Some(max),
        skewness: Some(skewness),
        kurtosis: Some(kurtosis),
        outliers_count: iqr_outlier_count(&sorted),
    }
}

/// Sample standard deviation (denominator n-1); 0.0 for a single value.
pub(crate) fn sample_std(values: &[f64], mean: f64) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 0.0;
    }
    let sum_squared_diff = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
    (sum_squared_diff / (n - 1) as f64).sqrt()
}

/// Fisher moment-based skewness (g1) and excess kurtosis (g2). Both
/// report 0.0 when fewer than 2 values exist or the variance is zero.
fn skew_kurtosis(values: &[f64], mean: f64) -> (f64, f64) {
    let n = values.len() as f64;
    if values.len() < 2 {
        return (0.0, 0.0);
    }
    let m2 = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    if m2 == 0.0 {
        return (0.0, 0.0);
    }
    let m3 = values.iter().map(|&x| (x - mean).powi(3)).sum::<f64>() / n;
    let m4 = values.iter().map(|&x| (x - mean).powi(4)).sum::<f64>() / n;
    let skewness = m3 / m2.powf(1.5);
    let kurtosis = m4 / (m2 * m2) - 3.0;
    (skewness, kurtosis)
}

/// Percentile of sorted data with linear interpolation between closest
/// ranks.
pub(crate) fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let n = sorted.len();
    let idx = p * (n - 1) as f64;
    let idx_floor = idx.floor() as usize;
    let idx_ceil = idx.ceil() as usize;

    if idx_floor == idx_ceil {
        return sorted[idx_floor];
    }

    let weight_ceil = idx - idx_floor as f64;
    let weight_floor = 1.0 - weight_ceil;
    sorted[idx_floor] * weight_floor + sorted[idx_ceil] * weight_ceil
}

/// IQR-rule outlier count over sorted data. A zero IQR (flat or
/// constant-dominated distribution) always reports zero outliers.
fn iqr_outlier_count(sorted: &[f64]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    let q1 = percentile(sorted, 0.25);
    let q3 = percentile(sorted, 0.75);
    let iqr = q3 - q1;
    if iqr == 0.0 {
        return 0;
    }
    let lower = q1 - 1.5 * iqr;
    let upper = q3 + 1.5 * iqr;
    sorted.iter().filter(|&&x| x < lower || x > upper).count()
}

// ── Categorical statistics ────────────────────────────────────────────

pub(crate) fn categorical_summary(col: &Column) -> CategoricalSummary {
    let cells = match col.categorical_cells() {
        Some(cells) => cells,
        None => {
            return CategoricalSummary {
                unique_count: 0,
                most_frequent: None,
                value_counts: Vec::new(),
            }
        }
    };

    // (count, first-encountered index) per distinct value.
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, value) in cells.iter().flatten().enumerate() {
        let entry = counts.entry(value.as_str()).or_insert((0, idx));
        entry.0 += 1;
    }

    let unique_count = counts.len();
    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    // Descending count, ties by first encounter in row order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    CategoricalSummary {
        unique_count,
        most_frequent: ranked.first().map(|(value, _, _)| value.to_string()),
        value_counts: ranked
            .into_iter()
            .take(10)
            .map(|(value, count, _)| ValueCount {
                value: value.to_string(),
                count,
            })
            .collect(),
    }
}

// ── Duplicate rows ────────────────────────────────────────────────────

/// Hashable key for one cell. Numeric cells compare by bit pattern, so
/// NaN equals NaN for duplicate detection.
#[derive(Hash, PartialEq, Eq)]
enum CellKey {
    Num(u64),
    Text(String),
    Missing,
}

fn count_duplicate_rows(table: &Table) -> usize {
    let rows = table.row_count();
    if rows == 0 || table.column_count() == 0 {
        return 0;
    }

    let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(rows);
    let mut duplicates = 0;
    for row in 0..rows {
        let key: Vec<CellKey> = table
            .columns()
            .iter()
            .map(|col| cell_key(col, row))
            .collect();
        if !seen.insert(key) {
            duplicates += 1;
        }
    }
    duplicates
}

fn cell_key(col: &Column, row: usize) -> CellKey {
    match col.data() {
        ColumnData::Numeric(v) => match v[row] {
            Some(x) => CellKey::Num(x.to_bits()),
            None => CellKey::Missing,
        },
        ColumnData::Categorical(v) => match &v[row] {
            Some(s) => CellKey::Text(s.clone()),
            None => CellKey::Missing,
        },
    }
}
