// src/services/fetcher.rs

//! Page fetcher service.
//!
//! Issues the two HTTP requests of the per-version cycle: the changelog page
//! fetch and the streamed archive download.

use std::path::Path;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{FetcherConfig, PageFetch};
use crate::utils::http;

/// Service wrapping the HTTP client and the changelog URL template.
pub struct PageFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl PageFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_async_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Changelog page URL for a version number.
    pub fn changelog_url(&self, version: u32) -> String {
        format!("{}/v1_{}", self.base_url, version)
    }

    /// Fetch a changelog page.
    ///
    /// 200 yields the body, 404 yields `Absent`. Any other status and any
    /// transport failure is an error.
    pub async fn fetch_page(&self, url: &str) -> Result<PageFetch> {
        let response = self.client.get(url).send().await?;
        match response.status().as_u16() {
            200 => Ok(PageFetch::Content(response.text().await?)),
            404 => Ok(PageFetch::Absent),
            status => Err(AppError::status(url, status)),
        }
    }

    /// Stream a download URL into a local file, returning the byte count.
    ///
    /// Writes chunks as they arrive; no integrity check beyond the HTTP
    /// status. A stream that ends early leaves a truncated file.
    pub async fn download_to(&self, url: &str, dest: &Path) -> Result<u64> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::status(url, response.status().as_u16()));
        }

        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if chunk.is_empty() {
                continue;
            }
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher_for(base_url: &str) -> PageFetcher {
        let config = FetcherConfig {
            base_url: base_url.to_string(),
            ..FetcherConfig::default()
        };
        PageFetcher::new(&config).unwrap()
    }

    #[test]
    fn test_changelog_url_template() {
        let fetcher = fetcher_for("https://code.visualstudio.com/updates");
        assert_eq!(
            fetcher.changelog_url(45),
            "https://code.visualstudio.com/updates/v1_45"
        );
    }

    #[test]
    fn test_changelog_url_trims_trailing_slash() {
        let fetcher = fetcher_for("https://code.visualstudio.com/updates/");
        assert_eq!(
            fetcher.changelog_url(7),
            "https://code.visualstudio.com/updates/v1_7"
        );
    }
}
