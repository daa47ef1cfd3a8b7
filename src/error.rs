use thiserror::Error;

/// Error type covering ingestion, table construction, and the
/// insight-service boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("unsupported file format: '{filename}' (allowed: {allowed})")]
    UnsupportedFormat { filename: String, allowed: String },

    #[error("file size {size_mb:.1} MB exceeds the maximum allowed {limit_mb} MB")]
    FileTooLarge { size_mb: f64, limit_mb: u64 },

    #[error("error generating insights: {0}")]
    Insight(String),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
