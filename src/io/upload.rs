//! Upload validation boundary.
//!
//! Both checks run before any table is constructed; rejections carry the
//! causing condition (measured size vs. limit, offending extension vs.
//! allow-list) so they can be shown to the user verbatim.

use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};

/// Whether the filename's extension is in the configured allow-list.
pub fn allowed_file(filename: &str, config: &Config) -> bool {
    let ext = match Path::new(filename).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => return false,
    };
    config.supported_formats.iter().any(|f| *f == ext)
}

/// Check an upload's size in bytes against the configured cap (MB).
pub fn check_file_size(file_size_bytes: u64, config: &Config) -> Result<()> {
    let size_mb = file_size_bytes as f64 / (1024.0 * 1024.0);
    if size_mb > config.max_file_size_mb as f64 {
        return Err(Error::FileTooLarge {
            size_mb,
            limit_mb: config.max_file_size_mb,
        });
    }
    Ok(())
}

/// Validate filename and size together; the first failing check wins.
pub fn validate_upload(filename: &str, file_size_bytes: u64, config: &Config) -> Result<()> {
    if !allowed_file(filename, config) {
        return Err(Error::UnsupportedFormat {
            filename: filename.to_string(),
            allowed: config.supported_formats.join(", "),
        });
    }
    check_file_size(file_size_bytes, config)
}
