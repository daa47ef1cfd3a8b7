//! # datastory
//!
//! CSV profiling and pattern detection with LLM-assisted data
//! storytelling. One analysis pass over an in-memory table produces
//! structural metadata, per-column statistics, and pattern signals
//! (strong correlations, monotonic trends, z-score anomalies); the result
//! feeds a chart-specification builder and an Ollama-backed narrative
//! generator.
//!
//! ## Quick Start
//!
//! ```no_run
//! use datastory::io::read_csv;
//! use datastory::report::analyze;
//!
//! let table = read_csv("sales.csv").unwrap();
//! let report = analyze(&table);
//! println!("{} duplicate rows", report.basic_info.duplicate_rows);
//! ```

pub mod config;
pub mod error;
pub mod insights;
pub mod io;
pub mod patterns;
pub mod profile;
pub mod report;
pub mod table;
pub mod vis;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use insights::{InsightSet, InsightsGenerator};
pub use patterns::{PatternDetector, PatternReport};
pub use profile::{StatisticalSummary, StructuralSummary, TableProfiler};
pub use report::{analyze, AnalysisReport};
pub use table::{Column, ColumnKind, Table};
pub use vis::{ChartBuilder, ChartSpec};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
