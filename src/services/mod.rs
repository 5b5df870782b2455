// src/services/mod.rs

//! Services for fetching and dissecting changelog pages.

pub mod changelog;
pub mod fetcher;

pub use changelog::{parse_page, select_dist_link};
pub use fetcher::PageFetcher;
