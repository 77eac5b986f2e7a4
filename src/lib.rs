//! Ranked Progress - typed views over ranked competition progress
//!
//! This crate turns the raw records of a ranked progress API response into
//! per-category views, either as a chronological history or as the latest
//! known record per category.

pub mod config;
pub mod error;
pub mod metrics;
pub mod progress;
pub mod timestamp;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{ProgressError, Result};
pub use types::*;

// Re-export key components
pub use progress::{
    LatestRankedProgress, ProgressOptions, ProgressView, RankedProgress, SingleRankedProgress,
};
pub use timestamp::{Iso8601Parser, SharedTimestampParser, TimestampParser};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
