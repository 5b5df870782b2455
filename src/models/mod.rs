// src/models/mod.rs

//! Domain models for the archiver application.

mod config;
mod page;

// Re-export all public types
pub use config::{BatchConfig, Config, FailurePolicy, FetcherConfig, OutputConfig};
pub use page::{ChangelogPage, PageFetch};
