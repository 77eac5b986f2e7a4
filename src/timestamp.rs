//! Timestamp parsing service used by progress records
//!
//! The client that fetches ranked progress owns how ISO-8601 strings are
//! turned into timestamps. Views only depend on the [`TimestampParser`] trait,
//! and [`Iso8601Parser`] is the implementation used when nothing else is
//! supplied.

use crate::error::{ProgressError, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared handle to a timestamp parser
pub type SharedTimestampParser = Arc<dyn TimestampParser>;

/// Trait for converting API timestamp strings into UTC instants
#[cfg_attr(test, mockall::automock)]
pub trait TimestampParser: Send + Sync {
    /// Parse an ISO-8601 timestamp carrying a UTC offset
    fn parse(&self, value: &str) -> Result<DateTime<Utc>>;
}

/// RFC 3339 / ISO-8601 parser normalizing every offset to UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601Parser;

impl Iso8601Parser {
    pub fn new() -> Self {
        Self
    }

    /// Create a shared handle suitable for the progress views
    pub fn shared() -> SharedTimestampParser {
        Arc::new(Self)
    }
}

impl TimestampParser for Iso8601Parser {
    fn parse(&self, value: &str) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(|e| ProgressError::MalformedTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }
}
