//! Local filesystem store for archives and the version log.
//!
//! ## Layout
//!
//! ```text
//! {root}/
//! ├── versions.csv          # Append-only version log
//! ├── v1_45.tar.gz          # One archive per downloaded version
//! └── v1_46.tar.gz
//! ```
//!
//! The version log is opened in append mode and closed on every write, so
//! progress made before a crash stays on disk.

use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::OutputConfig;

/// Placeholder written when a page has no heading.
const MISSING_HEADING: &str = "None";

/// Store rooted at the output directory.
#[derive(Debug, Clone)]
pub struct ArchiveStore {
    root_dir: PathBuf,
    log_file: String,
}

impl ArchiveStore {
    /// Create a store from the output configuration.
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            root_dir: PathBuf::from(&config.dir),
            log_file: config.log_file.clone(),
        }
    }

    /// Create the output directory if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root_dir).await?;
        Ok(())
    }

    /// Destination path for a version's archive.
    pub fn archive_path(&self, version: u32) -> PathBuf {
        self.root_dir.join(format!("v1_{version}.tar.gz"))
    }

    /// Path of the version log file.
    pub fn log_path(&self) -> PathBuf {
        self.root_dir.join(&self.log_file)
    }

    /// Append one `<url>|<heading>` line to the version log.
    pub async fn append_record(&self, url: &str, heading: Option<&str>) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())
            .await?;

        let line = format!("{}|{}\n", url, heading.unwrap_or(MISSING_HEADING));
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
