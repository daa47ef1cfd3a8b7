//! Cross-column pattern detection: correlations, monotonic trends, and
//! z-score anomalies.
//!
//! Every numerically undefined case (constant columns, insufficient
//! sample size, zero variance) degrades to an empty or absent result.
//! Running detection twice on the same table yields identical output;
//! there is no hidden state.

use serde::Serialize;

use crate::profile::sample_std;
use crate::table::{Column, Table};

/// Absolute Pearson coefficient above which a pair is reported.
pub const CORRELATION_THRESHOLD: f64 = 0.7;
/// Absolute z-score above which a value counts as an anomaly.
pub const ANOMALY_Z_THRESHOLD: f64 = 3.0;
/// Minimum non-missing values for trend classification.
pub const TREND_MIN_VALUES: usize = 3;
/// Anomaly detection requires strictly more non-missing values than this.
pub const ANOMALY_MIN_VALUES: usize = 5;

/// A strongly correlated pair of numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationFinding {
    pub column_a: String,
    pub column_b: String,
    pub coefficient: f64,
}

/// Direction of a strictly monotonic column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

/// A numeric column that is strictly monotonic across every consecutive
/// pair of non-missing values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendFinding {
    pub column: String,
    pub direction: TrendDirection,
}

/// Count of values in a column whose absolute z-score exceeds the
/// threshold. Only emitted when the count is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyFinding {
    pub column: String,
    pub anomalies_count: usize,
}

/// All pattern signals found in one detection pass.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PatternReport {
    pub correlations: Vec<CorrelationFinding>,
    pub trends: Vec<TrendFinding>,
    pub anomalies: Vec<AnomalyFinding>,
}

/// Detector over one borrowed table. Works from the raw columns; it does
/// not require profiler output.
pub struct PatternDetector<'a> {
    table: &'a Table,
}

impl<'a> PatternDetector<'a> {
    pub fn new(table: &'a Table) -> Self {
        PatternDetector { table }
    }

    /// Run all three detectors. Findings follow table column order, so
    /// output is deterministic for a given table.
    pub fn detect_patterns(&self) -> PatternReport {
        let numeric = self.table.numeric_columns();
        let report = PatternReport {
            correlations: detect_correlations(&numeric),
            trends: detect_trends(&numeric),
            anomalies: detect_anomalies(&numeric),
        };
        log::debug!(
            "pattern detection: {} correlations, {} trends, {} anomalies",
            report.correlations.len(),
            report.trends.len(),
            report.anomalies.len()
        );
        report
    }
}

fn detect_correlations(numeric: &[&Column]) -> Vec<CorrelationFinding> {
    let mut findings = Vec::new();
    if numeric.len() < 2 {
        return findings;
    }

    for i in 0..numeric.len() {
        for j in (i + 1)..numeric.len() {
            // Rows where either side is missing are dropped pairwise.
            let a = numeric[i].numeric_cells().unwrap_or(&[]);
            let b = numeric[j].numeric_cells().unwrap_or(&[]);
            let (x, y): (Vec<f64>, Vec<f64>) = a
                .iter()
                .zip(b.iter())
                .filter_map(|(av, bv)| av.zip(*bv))
                .unzip();

            if let Some(r) = pearson(&x, &y) {
                if r.abs() > CORRELATION_THRESHOLD {
                    findings.push(CorrelationFinding {
                        column_a: numeric[i].name().to_string(),
                        column_b: numeric[j].name().to_string(),
                        coefficient: r,
                    });
                }
            }
        }
    }
    findings
}

/// Pearson correlation, or `None` when it is undefined (fewer than two
/// pairs, or zero variance on either side).
pub(crate) fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n < 2 {
        return None;
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let numerator = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum::<f64>();
    let ss_x = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum::<f64>();
    let ss_y = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum::<f64>();
    let denominator = (ss_x * ss_y).sqrt();

    if denominator == 0.0 {
        return None;
    }
    let r = numerator / denominator;
    r.is_finite().then_some(r)
}

fn detect_trends(numeric: &[&Column]) -> Vec<TrendFinding> {
    let mut findings = Vec::new();
    for col in numeric {
        let values = col.valid_numeric();
        if values.len() < TREND_MIN_VALUES {
            continue;
        }
        // Strict test: one non-monotonic step anywhere disqualifies.
        let increasing = values.windows(2).all(|w| w[1] > w[0]);
        let decreasing = values.windows(2).all(|w| w[1] < w[0]);
        let direction = if increasing {
            TrendDirection::Increasing
        } else if decreasing {
            TrendDirection::Decreasing
        } else {
            continue;
        };
        findings.push(TrendFinding {
            column: col.name().to_string(),
            direction,
        });
    }
    findings
}

fn detect_anomalies(numeric: &[&Column]) -> Vec<AnomalyFinding> {
    let mut findings = Vec::new();
    for col in numeric {
        let values = col.valid_numeric();
        if values.len() <= ANOMALY_MIN_VALUES {
            continue;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let std = sample_std(&values, mean);
        if std == 0.0 {
            // Constant column: z-scores are undefined, no finding.
            continue;
        }
        let count = values
            .iter()
            .filter(|&&x| ((x - mean) / std).abs() > ANOMALY_Z_THRESHOLD)
            .count();
        if count > 0 {
            findings.push(AnomalyFinding {
                column: col.name().to_string(),
                anomalies_count: count,
            });
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_perfect() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-10);

        let y_neg: Vec<f64> = y.iter().map(|v| -v).collect();
        let r = pearson(&x, &y_neg).unwrap();
        assert!((r + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_pearson_undefined_for_constant() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![5.0, 5.0, 5.0];
        assert!(pearson(&x, &y).is_none());
        assert!(pearson(&[1.0], &[2.0]).is_none());
        assert!(pearson(&[], &[]).is_none());
    }
}
