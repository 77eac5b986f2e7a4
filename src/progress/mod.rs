//! Ranked progress views
//!
//! Raw records from one ranked progress response are filtered down to the
//! tracked categories of one game, wrapped as [`SingleRankedProgress`] and
//! grouped by category. Two aggregation policies are offered:
//!
//! - [`RankedProgress`]: the full history per category, oldest first, with
//!   never-updated records left out
//! - [`LatestRankedProgress`]: one record per category, the last one seen

pub mod history;
pub mod latest;
pub mod single;
pub mod view;

pub use history::RankedProgress;
pub use latest::LatestRankedProgress;
pub use single::SingleRankedProgress;
pub use view::ProgressView;

use crate::error::{ProgressError, Result};
use crate::metrics::{DiscardReason, MetricsTimer, ProgressMetrics};
use crate::types::{AggregationPolicy, RankingType, RawRecord, DEFAULT_GAME_ID};
use crate::utils::{required_str, str_field};
use single::{GAME_ID_FIELD, RANKING_TYPE_FIELD};
use std::sync::Arc;
use tracing::debug;

/// Options shared by both aggregation policies
#[derive(Debug, Clone)]
pub struct ProgressOptions {
    /// Only records for this game are kept
    pub game_id: String,
    metrics: Option<Arc<ProgressMetrics>>,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            game_id: DEFAULT_GAME_ID.to_string(),
            metrics: None,
        }
    }
}

impl ProgressOptions {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            metrics: None,
        }
    }

    /// Record construction counters into the given collector
    pub fn with_metrics(mut self, metrics: Arc<ProgressMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn metrics(&self) -> Option<&ProgressMetrics> {
        self.metrics.as_deref()
    }

    /// Category of a record that passes the game and category filter
    ///
    /// `rankingType` must be present. Codes that are unknown, untracked or
    /// not strings are filtered out. `gameId` is only read once the category
    /// is tracked, and must then be present.
    pub(crate) fn tracked_category(&self, raw: &RawRecord) -> Result<Option<RankingType>> {
        let code = raw
            .get(RANKING_TYPE_FIELD)
            .ok_or_else(|| ProgressError::missing(RANKING_TYPE_FIELD))?;

        let Some(ranking_type) = code
            .as_str()
            .and_then(|code| code.parse::<RankingType>().ok())
            .filter(RankingType::is_tracked)
        else {
            return Ok(None);
        };

        if required_str(raw, GAME_ID_FIELD)? != self.game_id {
            return Ok(None);
        }

        Ok(Some(ranking_type))
    }

    /// Start counting one view build
    pub(crate) fn start_build(&self) -> BuildTally {
        BuildTally {
            timer: self.metrics().map(ProgressMetrics::start_timer),
            retained: Vec::new(),
            discarded: Vec::new(),
        }
    }

    /// Commit the counts of a build that completed
    pub(crate) fn finish_build(&self, tally: BuildTally, policy: AggregationPolicy, seen: usize) {
        let (Some(metrics), Some(timer)) = (self.metrics(), tally.timer) else {
            return;
        };

        metrics.record_seen(seen);
        for ranking_type in tally.retained {
            metrics.record_retained(ranking_type);
        }
        for reason in tally.discarded {
            metrics.record_discarded(reason);
        }
        metrics.record_build(policy, timer.stop());
    }
}

/// Per-record outcomes of a build, held back until the build succeeds
pub(crate) struct BuildTally {
    timer: Option<MetricsTimer>,
    retained: Vec<RankingType>,
    discarded: Vec<DiscardReason>,
}

impl BuildTally {
    pub(crate) fn retain(&mut self, ranking_type: RankingType) {
        self.retained.push(ranking_type);
    }

    pub(crate) fn discard(&mut self, raw: &RawRecord, reason: DiscardReason) {
        debug!(
            "Discarding ranked progress record ({:?}): rankingType={:?} gameId={:?}",
            reason,
            raw.get(RANKING_TYPE_FIELD),
            str_field(raw, GAME_ID_FIELD)
        );
        self.discarded.push(reason);
    }
}
