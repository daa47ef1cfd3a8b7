//! Chart-specification builder.
//!
//! Produces declarative [`ChartSpec`] values for a display layer to
//! render; nothing here draws anything, and nothing here alters the
//! statistics it visualizes.

use serde::Serialize;

use crate::patterns::pearson;
use crate::profile::categorical_summary;
use crate::table::{Column, ColumnKind, Table};

/// At most this many per-column histograms are produced.
pub const MAX_HISTOGRAM_COLUMNS: usize = 5;
/// At most this many categorical top-value bar charts are produced.
pub const MAX_CATEGORICAL_CHARTS: usize = 3;
/// Bin count for histogram specs.
pub const HISTOGRAM_BINS: usize = 30;

/// Kind of plot a spec describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    Pie,
    Bar,
    Histogram,
    Heatmap,
    Scatter,
}

/// Fitted line for a scatter plot, y = slope * x + intercept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

/// Data payload for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartData {
    Pie {
        labels: Vec<String>,
        values: Vec<usize>,
    },
    Bar {
        labels: Vec<String>,
        values: Vec<usize>,
        x_label: String,
        y_label: String,
    },
    Histogram {
        column: String,
        values: Vec<f64>,
        bins: usize,
    },
    Heatmap {
        columns: Vec<String>,
        /// Pairwise Pearson coefficients; `None` where undefined.
        matrix: Vec<Vec<Option<f64>>>,
    },
    Scatter {
        x_column: String,
        y_column: String,
        points: Vec<(f64, f64)>,
        trend: Option<TrendLine>,
    },
}

/// A renderable chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: PlotKind,
    pub title: String,
    pub data: ChartData,
}

/// Builds chart specs from one borrowed table.
pub struct ChartBuilder<'a> {
    table: &'a Table,
}

impl<'a> ChartBuilder<'a> {
    pub fn new(table: &'a Table) -> Self {
        ChartBuilder { table }
    }

    /// Dataset overview: kind distribution pie, and a missing-value bar
    /// chart when anything is missing.
    pub fn overview_charts(&self) -> Vec<ChartSpec> {
        let mut charts = Vec::new();

        let numeric = self.table.numeric_columns().len();
        let categorical = self.table.categorical_columns().len();
        let (mut labels, mut values) = (Vec::new(), Vec::new());
        if numeric > 0 {
            labels.push(ColumnKind::Numeric.to_string());
            values.push(numeric);
        }
        if categorical > 0 {
            labels.push(ColumnKind::Categorical.to_string());
            values.push(categorical);
        }
        charts.push(ChartSpec {
            kind: PlotKind::Pie,
            title: "Data Types Distribution".to_string(),
            data: ChartData::Pie { labels, values },
        });

        // Only columns with missing cells, most affected first.
        let mut missing: Vec<(&str, usize)> = self
            .table
            .columns()
            .iter()
            .map(|c| (c.name(), c.missing_count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        if !missing.is_empty() {
            missing.sort_by(|a, b| b.1.cmp(&a.1));
            charts.push(ChartSpec {
                kind: PlotKind::Bar,
                title: "Missing Values by Column".to_string(),
                data: ChartData::Bar {
                    labels: missing.iter().map(|(name, _)| name.to_string()).collect(),
                    values: missing.iter().map(|(_, count)| *count).collect(),
                    x_label: "Column".to_string(),
                    y_label: "Missing Count".to_string(),
                },
            });
        }

        charts
    }

    /// Per-column histograms (first five numeric columns) and a
    /// correlation heatmap when at least two numeric columns exist.
    pub fn numerical_charts(&self) -> Vec<ChartSpec> {
        let numeric = self.table.numeric_columns();
        let mut charts = Vec::new();

        for col in numeric.iter().take(MAX_HISTOGRAM_COLUMNS) {
            charts.push(ChartSpec {
                kind: PlotKind::Histogram,
                title: format!("Distribution of {}", col.name()),
                data: ChartData::Histogram {
                    column: col.name().to_string(),
                    values: col.valid_numeric(),
                    bins: HISTOGRAM_BINS,
                },
            });
        }

        if numeric.len() >= 2 {
            charts.push(ChartSpec {
                kind: PlotKind::Heatmap,
                title: "Correlation Matrix".to_string(),
                data: ChartData::Heatmap {
                    columns: numeric.iter().map(|c| c.name().to_string()).collect(),
                    matrix: correlation_matrix(&numeric),
                },
            });
        }

        charts
    }

    /// Top-10 value bar charts for the first three categorical columns.
    pub fn categorical_charts(&self) -> Vec<ChartSpec> {
        self.table
            .categorical_columns()
            .into_iter()
            .take(MAX_CATEGORICAL_CHARTS)
            .map(|col| {
                let summary = categorical_summary(col);
                ChartSpec {
                    kind: PlotKind::Bar,
                    title: format!("Top Values in {}", col.name()),
                    data: ChartData::Bar {
                        labels: summary
                            .value_counts
                            .iter()
                            .map(|vc| vc.value.clone())
                            .collect(),
                        values: summary.value_counts.iter().map(|vc| vc.count).collect(),
                        x_label: col.name().to_string(),
                        y_label: "Count".to_string(),
                    },
                }
            })
            .collect()
    }

    /// Scatter of the first two numeric columns with a fitted trend line,
    /// when two numeric columns exist.
    pub fn relationship_charts(&self) -> Vec<ChartSpec> {
        let numeric = self.table.numeric_columns();
        if numeric.len() < 2 {
            return Vec::new();
        }
        let (x_col, y_col) = (numeric[0], numeric[1]);
        let points = complete_pairs(x_col, y_col);
        let trend = fit_trend_line(&points);

        vec![ChartSpec {
            kind: PlotKind::Scatter,
            title: format!("{} vs {}", x_col.name(), y_col.name()),
            data: ChartData::Scatter {
                x_column: x_col.name().to_string(),
                y_column: y_col.name().to_string(),
                points,
                trend,
            },
        }]
    }

    /// All chart groups in display order.
    pub fn all_charts(&self) -> Vec<ChartSpec> {
        let mut charts = self.overview_charts();
        charts.extend(self.numerical_charts());
        charts.extend(self.categorical_charts());
        charts.extend(self.relationship_charts());
        charts
    }
}

fn complete_pairs(a: &Column, b: &Column) -> Vec<(f64, f64)> {
    let a_cells = a.numeric_cells().unwrap_or(&[]);
    let b_cells = b.numeric_cells().unwrap_or(&[]);
    a_cells
        .iter()
        .zip(b_cells.iter())
        .filter_map(|(av, bv)| av.zip(*bv))
        .collect()
}

fn correlation_matrix(numeric: &[&Column]) -> Vec<Vec<Option<f64>>> {
    numeric
        .iter()
        .map(|row| {
            numeric
                .iter()
                .map(|col| {
                    let (x, y): (Vec<f64>, Vec<f64>) =
                        complete_pairs(row, col).into_iter().unzip();
                    pearson(&x, &y)
                })
                .collect()
        })
        .collect()
}

/// Ordinary least squares for one regressor; `None` when fewer than two
/// points remain or x has zero variance.
fn fit_trend_line(points: &[(f64, f64)]) -> Option<TrendLine> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n as f64;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n as f64;
    let ss_x = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum::<f64>();
    if ss_x == 0.0 {
        return None;
    }
    let cov = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum::<f64>();
    let slope = cov / ss_x;
    Some(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}
