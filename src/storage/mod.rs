// src/storage/mod.rs

//! Filesystem outputs: downloaded archives and the version log.

mod local;

pub use local::ArchiveStore;
