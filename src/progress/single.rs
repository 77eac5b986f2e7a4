//! View over a single ranked progress record
//!
//! Every accessor decodes its field from the raw record on each call; nothing
//! is cached and nothing is mutated after construction.

use crate::error::{ProgressError, Result};
use crate::timestamp::SharedTimestampParser;
use crate::types::{ProgressEntry, RankingType, RawRecord};
use crate::utils::{required_f64, required_i64, required_str, str_field};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;

pub(crate) const RANKING_TYPE_FIELD: &str = "rankingType";
pub(crate) const GAME_ID_FIELD: &str = "gameId";
const LAST_UPDATED_FIELD: &str = "lastUpdated";
const CURRENT_DIVISION_FIELD: &str = "currentDivision";
const HIGHEST_DIVISION_FIELD: &str = "highestDivision";
const PROMOTION_PROGRESS_FIELD: &str = "promotionProgress";
const TRACK_GUID_FIELD: &str = "trackguid";

/// Typed accessors over one raw ranked progress record
#[derive(Clone)]
pub struct SingleRankedProgress {
    parser: SharedTimestampParser,
    raw: RawRecord,
}

impl SingleRankedProgress {
    pub fn new(parser: SharedTimestampParser, raw: RawRecord) -> Self {
        Self { parser, raw }
    }

    /// The record this view was built from
    pub fn raw(&self) -> &RawRecord {
        &self.raw
    }

    /// Ranking category
    ///
    /// Fails with `InvalidCategory` for unknown or non-string codes and with
    /// `MissingField` only when the key is absent.
    pub fn ranking_type(&self) -> Result<RankingType> {
        match self.raw.get(RANKING_TYPE_FIELD) {
            None => Err(ProgressError::missing(RANKING_TYPE_FIELD)),
            Some(Value::String(code)) => code.parse(),
            Some(other) => Err(ProgressError::InvalidCategory {
                code: other.to_string(),
            }),
        }
    }

    pub fn game_id(&self) -> Result<&str> {
        required_str(&self.raw, GAME_ID_FIELD)
    }

    /// When the record was last updated, as parsed by the timestamp service
    pub fn last_updated(&self) -> Result<DateTime<Utc>> {
        let value = required_str(&self.raw, LAST_UPDATED_FIELD)?;
        self.parser.parse(value)
    }

    pub fn current_division(&self) -> Result<i64> {
        required_i64(&self.raw, CURRENT_DIVISION_FIELD)
    }

    pub fn highest_division(&self) -> Result<i64> {
        required_i64(&self.raw, HIGHEST_DIVISION_FIELD)
    }

    /// Fractional progress toward the next division
    pub fn promotion_progress(&self) -> Result<f64> {
        required_f64(&self.raw, PROMOTION_PROGRESS_FIELD)
    }

    /// Ranking track identifier; older API versions omit it
    pub fn track_guid(&self) -> Option<&str> {
        str_field(&self.raw, TRACK_GUID_FIELD)
    }

    /// Decode every field into an owned entry
    pub fn to_entry(&self) -> Result<ProgressEntry> {
        Ok(ProgressEntry {
            ranking_type: self.ranking_type()?,
            game_id: self.game_id()?.to_string(),
            last_updated: self.last_updated()?,
            current_division: self.current_division()?,
            highest_division: self.highest_division()?,
            promotion_progress: self.promotion_progress()?,
            track_guid: self.track_guid().map(str::to_string),
        })
    }
}

/// Writes the decoded value, or `?` when the field cannot be read
fn write_field<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: Result<T>) -> fmt::Result {
    match value {
        Ok(value) => write!(f, "{}", value),
        Err(_) => write!(f, "?"),
    }
}

impl fmt::Display for SingleRankedProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<SingleRankedProgress ranking_type=")?;
        write_field(f, self.ranking_type())?;
        write!(f, " current_division=")?;
        write_field(f, self.current_division())?;
        write!(f, " highest_division=")?;
        write_field(f, self.highest_division())?;
        write!(f, " promotion_progress=")?;
        write_field(f, self.promotion_progress())?;
        write!(f, " last_updated=")?;
        write_field(f, self.last_updated().map(|t| t.to_rfc3339()))?;
        write!(f, " track_guid={}>", self.track_guid().unwrap_or("None"))
    }
}

impl fmt::Debug for SingleRankedProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
