// src/pipeline/batch.rs

//! Sequential batch over a version range.
//!
//! Each version runs the full fetch → parse → select → download → log cycle
//! before the next one starts. A missing page (404) is a skip; everything
//! else follows the configured failure policy or aborts outright.

use crate::error::{AppError, Result};
use crate::models::{ChangelogPage, Config, FailurePolicy, PageFetch};
use crate::services::{PageFetcher, parse_page, select_dist_link};
use crate::storage::ArchiveStore;

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub processed: usize,
    pub downloaded: usize,
    pub skipped: usize,
}

/// Run the batch over the inclusive range `from..=to`.
///
/// An empty range (`from > to`) processes zero versions.
pub async fn run_batch(config: &Config, from: u32, to: u32) -> Result<BatchOutcome> {
    let fetcher = PageFetcher::new(&config.fetcher)?;
    let store = ArchiveStore::new(&config.output);
    let policy = config.batch.on_extract_failure;

    let mut outcome = BatchOutcome::default();
    for version in from..=to {
        outcome.processed += 1;
        if process_version(&fetcher, &store, policy, version).await? {
            outcome.downloaded += 1;
        } else {
            outcome.skipped += 1;
        }
    }

    log::info!(
        "Batch complete: {} processed, {} downloaded, {} skipped",
        outcome.processed,
        outcome.downloaded,
        outcome.skipped
    );
    Ok(outcome)
}

/// Process one version. Returns `true` if an archive was downloaded and
/// logged, `false` if the version was skipped.
async fn process_version(
    fetcher: &PageFetcher,
    store: &ArchiveStore,
    policy: FailurePolicy,
    version: u32,
) -> Result<bool> {
    let url = fetcher.changelog_url(version);
    println!("process: {url}");

    let html = match fetcher.fetch_page(&url).await? {
        PageFetch::Content(html) => html,
        PageFetch::Absent => {
            println!("version 1.{version} doesn't exist.");
            return Ok(false);
        }
    };

    let page = parse_page(&html, &url)?;
    let Some(dist_url) = find_dist_link(&page, &url, policy)? else {
        return Ok(false);
    };

    store.ensure_root().await?;
    let dest = store.archive_path(version);
    let bytes = fetcher.download_to(&dist_url, &dest).await?;
    log::debug!("wrote {} bytes to {}", bytes, dest.display());

    store.append_record(&url, page.heading.as_deref()).await?;
    Ok(true)
}

/// Apply the platform filter, honoring the failure policy.
///
/// `Ok(None)` means "skip this version" and is only produced under
/// `FailurePolicy::Skip`.
fn find_dist_link(
    page: &ChangelogPage,
    url: &str,
    policy: FailurePolicy,
) -> Result<Option<String>> {
    let failure = if page.dist_links.is_empty() {
        "distro links not found"
    } else {
        match select_dist_link(&page.dist_links) {
            Some(link) => return Ok(Some(link.to_string())),
            None => "main linux-x64 distro link not found",
        }
    };

    match policy {
        FailurePolicy::Fatal => Err(AppError::extract(url, failure)),
        FailurePolicy::Skip => {
            log::warn!("url: {url}, {failure}; skipping");
            Ok(None)
        }
    }
}
