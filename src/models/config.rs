//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and fetching behavior settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Output directory and log file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Batch failure policy settings
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::config("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::config("fetcher.timeout_secs must be > 0"));
        }
        if self.fetcher.base_url.trim().is_empty() {
            return Err(AppError::config("fetcher.base_url is empty"));
        }
        if self.output.dir.trim().is_empty() {
            return Err(AppError::config("output.dir is empty"));
        }
        if self.output.log_file.trim().is_empty() {
            return Err(AppError::config("output.log_file is empty"));
        }
        Ok(())
    }
}

/// HTTP client and fetching behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Base URL for changelog pages; a version's page is `{base_url}/v1_{version}`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Output location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving archives and the version log
    #[serde(default = "defaults::output_dir")]
    pub dir: String,

    /// Version log filename inside the output directory
    #[serde(default = "defaults::log_file")]
    pub log_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            log_file: defaults::log_file(),
        }
    }
}

/// Batch behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchConfig {
    /// What to do when an existing page has no usable distribution link
    #[serde(default)]
    pub on_extract_failure: FailurePolicy,
}

/// Policy for pages that exist but yield no usable distribution link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole batch (reference behavior)
    #[default]
    Fatal,
    /// Warn and continue with the next version
    Skip,
}

mod defaults {
    pub fn base_url() -> String {
        "https://code.visualstudio.com/updates".to_string()
    }

    pub fn user_agent() -> String {
        format!("vsarch/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn output_dir() -> String {
        ".arch".to_string()
    }

    pub fn log_file() -> String {
        "versions.csv".to_string()
    }
}
