//! Runtime selection between the aggregation policies

use super::{LatestRankedProgress, ProgressOptions, RankedProgress};
use crate::error::Result;
use crate::timestamp::SharedTimestampParser;
use crate::types::{AggregationPolicy, ProgressEntry, RankingType, RawRecord};
use std::collections::BTreeMap;
use std::fmt;

/// A progress view built with whichever policy was configured
#[derive(Debug, Clone)]
pub enum ProgressView {
    History(RankedProgress),
    Latest(LatestRankedProgress),
}

impl ProgressView {
    pub fn build(
        policy: AggregationPolicy,
        parser: SharedTimestampParser,
        data: Vec<RawRecord>,
        options: &ProgressOptions,
    ) -> Result<Self> {
        match policy {
            AggregationPolicy::History => Ok(ProgressView::History(
                RankedProgress::with_options(parser, data, options)?,
            )),
            AggregationPolicy::Latest => Ok(ProgressView::Latest(
                LatestRankedProgress::with_options(parser, data, options)?,
            )),
        }
    }

    pub fn policy(&self) -> AggregationPolicy {
        match self {
            ProgressView::History(_) => AggregationPolicy::History,
            ProgressView::Latest(_) => AggregationPolicy::Latest,
        }
    }

    /// Decode every retained record, grouped by category
    ///
    /// A latest-only view yields at most one entry per category.
    pub fn entries(&self) -> Result<BTreeMap<RankingType, Vec<ProgressEntry>>> {
        let mut entries = BTreeMap::new();
        match self {
            ProgressView::History(progress) => {
                for (ranking_type, history) in progress.iter() {
                    let decoded = history
                        .iter()
                        .map(|progress| progress.to_entry())
                        .collect::<Result<Vec<_>>>()?;
                    entries.insert(ranking_type, decoded);
                }
            }
            ProgressView::Latest(progress) => {
                for (ranking_type, latest) in progress.iter() {
                    entries.insert(ranking_type, vec![latest.to_entry()?]);
                }
            }
        }
        Ok(entries)
    }
}

impl fmt::Display for ProgressView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressView::History(progress) => write!(f, "{}", progress),
            ProgressView::Latest(progress) => write!(f, "{}", progress),
        }
    }
}
