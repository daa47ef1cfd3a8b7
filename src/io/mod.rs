//! Data ingestion: CSV parsing and the upload validation boundary.

pub mod csv;
pub mod upload;

pub use self::csv::{read_csv, read_csv_from_reader};
pub use self::upload::{allowed_file, check_file_size, validate_upload};
