//! Pipeline entry point for batch runs.
//!
//! - `run_batch`: Process an inclusive version range sequentially

pub mod batch;

pub use batch::{BatchOutcome, run_batch};
