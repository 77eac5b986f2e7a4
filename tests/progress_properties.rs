//! Property tests for filtering, ordering and last-write-wins

mod fixtures;

use chrono::{DateTime, Utc};
use fixtures::RecordBuilder;
use proptest::prelude::*;
use ranked_progress::utils::is_epoch_sentinel;
use ranked_progress::{
    Iso8601Parser, LatestRankedProgress, ProgressError, RankedProgress, RankingType, RawRecord,
};

const CODES: [&str; 5] = [
    "ranked-br",
    "ranked-zb",
    "delmar-competitive",
    "ranked-figment-build",
    "ranked-mystery",
];
const GAMES: [&str; 3] = ["fortnite", "other", "lego"];

#[derive(Debug, Clone)]
struct GeneratedRecord {
    code: &'static str,
    game: &'static str,
    /// `None` is the never-updated sentinel
    seconds: Option<i64>,
}

impl GeneratedRecord {
    fn is_kept(&self) -> bool {
        matches!(self.code, "ranked-br" | "ranked-zb") && self.game == "fortnite"
    }

    fn category(&self) -> Option<RankingType> {
        self.code.parse().ok()
    }
}

fn generated_record() -> impl Strategy<Value = GeneratedRecord> {
    (
        prop::sample::select(CODES.to_vec()),
        prop::sample::select(GAMES.to_vec()),
        // A narrow range forces timestamp ties
        prop::option::weighted(0.8, 1_600_000_000i64..1_600_000_050),
    )
        .prop_map(|(code, game, seconds)| GeneratedRecord {
            code,
            game,
            seconds,
        })
}

/// Builds raw records, tagging each with its input position as currentDivision
fn build_response(records: &[GeneratedRecord]) -> Vec<RawRecord> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let timestamp = record
                .seconds
                .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0))
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
            RecordBuilder::new(record.code)
                .game(record.game)
                .updated(&timestamp.to_rfc3339())
                .division(index as i64, index as i64)
                .build()
        })
        .collect()
}

proptest! {
    #[test]
    fn history_keeps_only_tracked_fortnite_records(
        records in prop::collection::vec(generated_record(), 0..40)
    ) {
        let response = build_response(&records);
        let progress = RankedProgress::new(Iso8601Parser::shared(), response).unwrap();

        for ranking_type in RankingType::TRACKED {
            for entry in progress.for_category(ranking_type) {
                let index = entry.current_division().unwrap() as usize;
                prop_assert!(records[index].is_kept());
                prop_assert_eq!(entry.ranking_type().unwrap(), ranking_type);
                prop_assert_eq!(entry.game_id().unwrap(), "fortnite");
                prop_assert!(!is_epoch_sentinel(&entry.last_updated().unwrap()));
            }
        }

        let expected = records
            .iter()
            .filter(|record| record.is_kept() && record.seconds.is_some())
            .count();
        prop_assert_eq!(progress.len(), expected);
    }

    #[test]
    fn history_is_ordered_and_stable(
        records in prop::collection::vec(generated_record(), 0..40)
    ) {
        let response = build_response(&records);
        let progress = RankedProgress::new(Iso8601Parser::shared(), response).unwrap();

        for ranking_type in RankingType::TRACKED {
            let history = progress.for_category(ranking_type);
            for pair in history.windows(2) {
                let earlier = pair[0].last_updated().unwrap();
                let later = pair[1].last_updated().unwrap();
                prop_assert!(earlier <= later);
                if earlier == later {
                    // Ties keep input order
                    prop_assert!(
                        pair[0].current_division().unwrap() < pair[1].current_division().unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn latest_returns_last_matching_record(
        records in prop::collection::vec(generated_record(), 0..40)
    ) {
        let response = build_response(&records);
        let progress = LatestRankedProgress::new(Iso8601Parser::shared(), response).unwrap();

        for ranking_type in RankingType::TRACKED {
            let last_index = records
                .iter()
                .rposition(|record| record.is_kept() && record.category() == Some(ranking_type));

            match (last_index, progress.for_category(ranking_type)) {
                (Some(index), Ok(entry)) => {
                    prop_assert_eq!(entry.current_division().unwrap(), index as i64);
                }
                (None, Err(ProgressError::CategoryNotFound { category })) => {
                    prop_assert_eq!(category, ranking_type);
                }
                (expected, actual) => {
                    prop_assert!(false, "expected {:?}, got {:?}", expected, actual);
                }
            }
        }
    }
}
