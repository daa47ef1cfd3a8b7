//! Combined analysis report and the one-shot `analyze` entry point.

use serde::Serialize;

use crate::patterns::{PatternDetector, PatternReport};
use crate::profile::{StatisticalSummary, StructuralSummary, TableProfiler};
use crate::table::Table;

/// The full result of one analysis pass: structural metadata, per-column
/// statistics, and pattern signals. Serializes to the nested JSON the
/// narrative prompts embed and the chart layer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub basic_info: StructuralSummary,
    pub statistical_summary: StatisticalSummary,
    pub patterns: PatternReport,
}

/// Run profiler and pattern detector over one table. The table is never
/// mutated; calling this twice yields identical reports.
pub fn analyze(table: &Table) -> AnalysisReport {
    log::info!(
        "analyzing table: {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );
    let profiler = TableProfiler::new(table);
    let detector = PatternDetector::new(table);
    AnalysisReport {
        basic_info: profiler.basic_info(),
        statistical_summary: profiler.statistical_summary(),
        patterns: detector.detect_patterns(),
    }
}
