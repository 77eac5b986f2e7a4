//! Latest known ranked progress per category

use super::{ProgressOptions, SingleRankedProgress};
use crate::error::{ProgressError, Result};
use crate::metrics::DiscardReason;
use crate::timestamp::SharedTimestampParser;
use crate::types::{AggregationPolicy, RankingType, RawRecord};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// One ranked progress record per category
///
/// The record appearing last in the input wins; timestamps are not compared
/// and never-updated records are kept.
#[derive(Clone)]
pub struct LatestRankedProgress {
    raw: Vec<RawRecord>,
    type_to_ranked_progress: BTreeMap<RankingType, SingleRankedProgress>,
}

impl LatestRankedProgress {
    /// Keep the last record per category for the default game
    pub fn new(parser: SharedTimestampParser, data: Vec<RawRecord>) -> Result<Self> {
        Self::with_options(parser, data, &ProgressOptions::default())
    }

    /// Keep the last record per category
    ///
    /// Fails if a record lacks `rankingType`, or if a tracked record lacks
    /// `gameId`. Timestamps are not read here.
    pub fn with_options(
        parser: SharedTimestampParser,
        data: Vec<RawRecord>,
        options: &ProgressOptions,
    ) -> Result<Self> {
        let mut tally = options.start_build();
        let mut type_to_ranked_progress = BTreeMap::new();

        for record in &data {
            let Some(ranking_type) = options.tracked_category(record)? else {
                tally.discard(record, DiscardReason::Filtered);
                continue;
            };

            tally.retain(ranking_type);
            let progress = SingleRankedProgress::new(parser.clone(), record.clone());
            if type_to_ranked_progress
                .insert(ranking_type, progress)
                .is_some()
            {
                debug!("Replacing earlier {} ranked progress record", ranking_type);
            }
        }

        options.finish_build(tally, AggregationPolicy::Latest, data.len());
        debug!(
            "Built latest ranked progress: {} records in, {} categories",
            data.len(),
            type_to_ranked_progress.len()
        );

        Ok(Self {
            raw: data,
            type_to_ranked_progress,
        })
    }

    /// Records this view was built from, unfiltered
    pub fn raw(&self) -> &[RawRecord] {
        &self.raw
    }

    /// Progress for a category, failing with `CategoryNotFound` if the
    /// response had no record for it
    pub fn for_category(&self, ranking_type: RankingType) -> Result<&SingleRankedProgress> {
        self.type_to_ranked_progress
            .get(&ranking_type)
            .ok_or(ProgressError::CategoryNotFound {
                category: ranking_type,
            })
    }

    pub fn battle_royale(&self) -> Result<&SingleRankedProgress> {
        self.for_category(RankingType::BattleRoyale)
    }

    pub fn zero_build(&self) -> Result<&SingleRankedProgress> {
        self.for_category(RankingType::ZeroBuild)
    }

    pub fn categories(&self) -> impl Iterator<Item = RankingType> + '_ {
        self.type_to_ranked_progress.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RankingType, &SingleRankedProgress)> + '_ {
        self.type_to_ranked_progress
            .iter()
            .map(|(ranking_type, progress)| (*ranking_type, progress))
    }

    pub fn len(&self) -> usize {
        self.type_to_ranked_progress.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_to_ranked_progress.is_empty()
    }
}

impl fmt::Display for LatestRankedProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<LatestRankedProgress type_to_ranked_progress={{")?;
        for (index, (ranking_type, progress)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", ranking_type, progress)?;
        }
        write!(f, "}}>")
    }
}

impl fmt::Debug for LatestRankedProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatestRankedProgress")
            .field("type_to_ranked_progress", &self.type_to_ranked_progress)
            .finish()
    }
}
