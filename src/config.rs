//! Runtime configuration for the analysis pipeline.
//!
//! Configuration is an explicit value handed to components at construction;
//! the profiling core itself never reads the environment. Defaults match a
//! local Ollama installation and can be overridden with `OLLAMA_BASE_URL`,
//! `GEMMA_MODEL`, `MAX_FILE_SIZE` (MB), and `SUPPORTED_FORMATS`
//! (comma-separated extensions).

use std::env;

/// Default generation-service endpoint (local Ollama).
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemma3:1b";
/// Default maximum upload size in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 200;

/// Configuration for upload limits and the insight-generation service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Ollama-compatible generation service.
    pub ollama_base_url: String,
    /// Model name passed to the generation endpoint.
    pub model: String,
    /// Maximum accepted upload size in megabytes.
    pub max_file_size_mb: u64,
    /// Allowed upload extensions, lowercased, including the leading dot.
    pub supported_formats: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            supported_formats: vec![".csv".to_string()],
        }
    }
}

impl Config {
    /// Build a configuration from the environment, falling back to the
    /// defaults for unset or unparseable variables.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(url) = env::var("OLLAMA_BASE_URL") {
            if !url.is_empty() {
                config.ollama_base_url = url;
            }
        }
        if let Ok(model) = env::var("GEMMA_MODEL") {
            if !model.is_empty() {
                config.model = model;
            }
        }
        if let Ok(raw) = env::var("MAX_FILE_SIZE") {
            // Invalid values keep the default rather than failing startup.
            if let Ok(mb) = raw.trim().parse::<u64>() {
                config.max_file_size_mb = mb;
            }
        }
        if let Ok(raw) = env::var("SUPPORTED_FORMATS") {
            let formats: Vec<String> = raw
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            if !formats.is_empty() {
                config.supported_formats = formats;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ollama_base_url, "http://localhost:11434");
        assert_eq!(config.model, "gemma3:1b");
        assert_eq!(config.max_file_size_mb, 200);
        assert_eq!(config.supported_formats, vec![".csv".to_string()]);
    }
}
