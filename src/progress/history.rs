//! Full ranked progress history per category

use super::{ProgressOptions, SingleRankedProgress};
use crate::error::Result;
use crate::metrics::DiscardReason;
use crate::timestamp::SharedTimestampParser;
use crate::types::{AggregationPolicy, RankingType, RawRecord};
use crate::utils::is_epoch_sentinel;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Ranked progress grouped by category, each group ordered oldest first
///
/// Records still carrying the epoch sentinel as `lastUpdated` belong to
/// categories the account never played and are left out.
#[derive(Clone)]
pub struct RankedProgress {
    raw: Vec<RawRecord>,
    type_to_ranked_progress: BTreeMap<RankingType, Vec<SingleRankedProgress>>,
}

impl RankedProgress {
    /// Build the history for the default game
    pub fn new(parser: SharedTimestampParser, data: Vec<RawRecord>) -> Result<Self> {
        Self::with_options(parser, data, &ProgressOptions::default())
    }

    /// Build the history
    ///
    /// Fails if a record lacks `rankingType`, if a tracked record lacks
    /// `gameId`, or if a record that passes the filter has no parseable
    /// `lastUpdated`.
    pub fn with_options(
        parser: SharedTimestampParser,
        data: Vec<RawRecord>,
        options: &ProgressOptions,
    ) -> Result<Self> {
        let mut tally = options.start_build();
        let mut grouped: BTreeMap<RankingType, Vec<(DateTime<Utc>, SingleRankedProgress)>> =
            BTreeMap::new();

        for record in &data {
            let Some(ranking_type) = options.tracked_category(record)? else {
                tally.discard(record, DiscardReason::Filtered);
                continue;
            };

            let progress = SingleRankedProgress::new(parser.clone(), record.clone());
            let last_updated = progress.last_updated()?;
            if is_epoch_sentinel(&last_updated) {
                tally.discard(record, DiscardReason::NeverUpdated);
                continue;
            }

            tally.retain(ranking_type);
            grouped
                .entry(ranking_type)
                .or_default()
                .push((last_updated, progress));
        }

        // sort_by_key is stable, equal timestamps keep input order
        let type_to_ranked_progress: BTreeMap<_, _> = grouped
            .into_iter()
            .map(|(ranking_type, mut entries)| {
                entries.sort_by_key(|(last_updated, _)| *last_updated);
                let history = entries.into_iter().map(|(_, progress)| progress).collect();
                (ranking_type, history)
            })
            .collect();

        options.finish_build(tally, AggregationPolicy::History, data.len());
        debug!(
            "Built ranked progress history: {} records in, {} categories",
            data.len(),
            type_to_ranked_progress.len()
        );

        Ok(Self {
            raw: data,
            type_to_ranked_progress,
        })
    }

    /// Records this history was built from, unfiltered
    pub fn raw(&self) -> &[RawRecord] {
        &self.raw
    }

    /// History for a category, empty if it has no entries
    pub fn for_category(&self, ranking_type: RankingType) -> &[SingleRankedProgress] {
        self.type_to_ranked_progress
            .get(&ranking_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn battle_royale(&self) -> &[SingleRankedProgress] {
        self.for_category(RankingType::BattleRoyale)
    }

    pub fn zero_build(&self) -> &[SingleRankedProgress] {
        self.for_category(RankingType::ZeroBuild)
    }

    /// Categories with at least one entry
    pub fn categories(&self) -> impl Iterator<Item = RankingType> + '_ {
        self.type_to_ranked_progress.keys().copied()
    }

    /// Iterate categories together with their history
    pub fn iter(&self) -> impl Iterator<Item = (RankingType, &[SingleRankedProgress])> + '_ {
        self.type_to_ranked_progress
            .iter()
            .map(|(ranking_type, history)| (*ranking_type, history.as_slice()))
    }

    /// Number of retained records across all categories
    pub fn len(&self) -> usize {
        self.type_to_ranked_progress.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.type_to_ranked_progress.is_empty()
    }
}

impl fmt::Display for RankedProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<RankedProgress type_to_ranked_progress={{")?;
        for (index, (ranking_type, history)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: [", ranking_type)?;
            for (position, progress) in history.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", progress)?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}>")
    }
}

impl fmt::Debug for RankedProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankedProgress")
            .field("type_to_ranked_progress", &self.type_to_ranked_progress)
            .finish()
    }
}
