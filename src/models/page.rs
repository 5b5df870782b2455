// src/models/page.rs

//! Transient per-version page data.

/// Outcome of fetching a changelog page.
///
/// Transport failures and unexpected statuses travel in `Result`; this enum
/// only distinguishes the two non-error outcomes.
#[derive(Debug)]
pub enum PageFetch {
    /// HTTP 200: the page body
    Content(String),
    /// HTTP 404: the version does not exist (yet)
    Absent,
}

/// Data extracted from one changelog page.
///
/// Built fresh for each version and discarded after use.
#[derive(Debug, Default)]
pub struct ChangelogPage {
    /// Text of the first top-level heading, if any
    pub heading: Option<String>,

    /// Candidate distribution link URLs in document order
    pub dist_links: Vec<String>,
}
