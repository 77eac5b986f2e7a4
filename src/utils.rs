//! Utility functions for reading raw progress records

use crate::error::{ProgressError, Result};
use crate::types::RawRecord;
use chrono::{DateTime, Utc};

/// Timestamp the API reports for categories that were never played
pub fn epoch_sentinel() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Check whether a parsed timestamp is the "never updated" sentinel
pub fn is_epoch_sentinel(timestamp: &DateTime<Utc>) -> bool {
    *timestamp == epoch_sentinel()
}

/// Read a string field, treating absent and non-string values alike
pub fn str_field<'a>(raw: &'a RawRecord, field: &str) -> Option<&'a str> {
    raw.get(field).and_then(|value| value.as_str())
}

/// Read a required string field
pub fn required_str<'a>(raw: &'a RawRecord, field: &str) -> Result<&'a str> {
    str_field(raw, field).ok_or_else(|| ProgressError::missing(field))
}

/// Read a required integer field
pub fn required_i64(raw: &RawRecord, field: &str) -> Result<i64> {
    raw.get(field)
        .and_then(|value| value.as_i64())
        .ok_or_else(|| ProgressError::missing(field))
}

/// Read a required numeric field as a float
pub fn required_f64(raw: &RawRecord, field: &str) -> Result<f64> {
    raw.get(field)
        .and_then(|value| value.as_f64())
        .ok_or_else(|| ProgressError::missing(field))
}
