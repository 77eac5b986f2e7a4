//! Metrics for ranked progress view construction

pub mod collector;

pub use collector::{DiscardReason, MetricsTimer, ProgressMetrics};
