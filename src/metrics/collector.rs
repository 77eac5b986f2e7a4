//! Metrics collection using Prometheus
//!
//! Counts how many raw records each progress view saw, kept and discarded,
//! and how long building the view took.

use crate::types::{AggregationPolicy, RankingType};
use anyhow::Result;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a raw record did not make it into a progress view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Wrong game or untracked category
    Filtered,
    /// Timestamp is the epoch sentinel
    NeverUpdated,
}

impl DiscardReason {
    fn label(&self) -> &'static str {
        match self {
            DiscardReason::Filtered => "filtered",
            DiscardReason::NeverUpdated => "never_updated",
        }
    }
}

/// Metrics collector for progress view construction
#[derive(Clone)]
pub struct ProgressMetrics {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Raw records handed to a view
    pub records_seen_total: IntCounter,

    /// Records kept, by category
    pub records_retained_total: IntCounterVec,

    /// Records dropped, by reason
    pub records_discarded_total: IntCounterVec,

    /// Time spent building a view, by aggregation policy
    pub build_duration_seconds: HistogramVec,
}

impl ProgressMetrics {
    /// Create a new metrics collector with default registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let records_seen_total = IntCounter::new(
            "ranked_progress_records_seen_total",
            "Raw ranked progress records processed",
        )?;
        registry.register(Box::new(records_seen_total.clone()))?;

        let records_retained_total = IntCounterVec::new(
            Opts::new(
                "ranked_progress_records_retained_total",
                "Ranked progress records kept in a view",
            ),
            &["category"],
        )?;
        registry.register(Box::new(records_retained_total.clone()))?;

        let records_discarded_total = IntCounterVec::new(
            Opts::new(
                "ranked_progress_records_discarded_total",
                "Ranked progress records dropped from a view",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(records_discarded_total.clone()))?;

        let build_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "ranked_progress_build_duration_seconds",
                "Time spent building a ranked progress view",
            )
            .buckets(vec![0.00001, 0.0001, 0.001, 0.01, 0.1, 1.0]),
            &["policy"],
        )?;
        registry.register(Box::new(build_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            records_seen_total,
            records_retained_total,
            records_discarded_total,
            build_duration_seconds,
        })
    }

    pub fn record_seen(&self, count: usize) {
        self.records_seen_total.inc_by(count as u64);
    }

    pub fn record_retained(&self, category: RankingType) {
        self.records_retained_total
            .with_label_values(&[category.code()])
            .inc();
    }

    pub fn record_discarded(&self, reason: DiscardReason) {
        self.records_discarded_total
            .with_label_values(&[reason.label()])
            .inc();
    }

    pub fn record_build(&self, policy: AggregationPolicy, duration: Duration) {
        let policy = policy.to_string();
        self.build_duration_seconds
            .with_label_values(&[policy.as_str()])
            .observe(duration.as_secs_f64());
    }

    /// Create a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }

    /// Render every registered metric in the Prometheus text format
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl std::fmt::Debug for ProgressMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressMetrics")
            .field("records_seen_total", &self.records_seen_total.get())
            .finish_non_exhaustive()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}
