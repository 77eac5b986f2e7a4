//! Test fixtures for building ranked progress responses

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use mockall::mock;
use ranked_progress::{RawRecord, Result, TimestampParser};
use serde_json::json;

// Timestamp service double for checking how views call the parser
mock! {
    pub Parser {}

    impl TimestampParser for Parser {
        fn parse(&self, value: &str) -> Result<DateTime<Utc>>;
    }
}

/// Builder for one raw ranked progress record
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    ranking_type: String,
    game_id: String,
    last_updated: String,
    current_division: i64,
    highest_division: i64,
    promotion_progress: f64,
    track_guid: Option<String>,
}

impl RecordBuilder {
    pub fn new(ranking_type: &str) -> Self {
        Self {
            ranking_type: ranking_type.to_string(),
            game_id: "fortnite".to_string(),
            last_updated: "2024-01-01T00:00:00Z".to_string(),
            current_division: 0,
            highest_division: 0,
            promotion_progress: 0.0,
            track_guid: None,
        }
    }

    pub fn battle_royale() -> Self {
        Self::new("ranked-br")
    }

    pub fn zero_build() -> Self {
        Self::new("ranked-zb")
    }

    pub fn game(mut self, game_id: &str) -> Self {
        self.game_id = game_id.to_string();
        self
    }

    pub fn updated(mut self, last_updated: &str) -> Self {
        self.last_updated = last_updated.to_string();
        self
    }

    pub fn division(mut self, current: i64, highest: i64) -> Self {
        self.current_division = current;
        self.highest_division = highest;
        self
    }

    pub fn progress(mut self, promotion_progress: f64) -> Self {
        self.promotion_progress = promotion_progress;
        self
    }

    pub fn track(mut self, track_guid: &str) -> Self {
        self.track_guid = Some(track_guid.to_string());
        self
    }

    pub fn build(self) -> RawRecord {
        let mut value = json!({
            "gameId": self.game_id,
            "accountId": "4735ce9132924caf8a5b17789b40f79c",
            "rankingType": self.ranking_type,
            "lastUpdated": self.last_updated,
            "currentDivision": self.current_division,
            "highestDivision": self.highest_division,
            "promotionProgress": self.promotion_progress,
            "currentPlayerRanking": null,
        });
        if let Some(track_guid) = self.track_guid {
            value["trackguid"] = json!(track_guid);
        }
        value.as_object().cloned().unwrap_or_default()
    }
}

/// The three-record response used throughout the scenario tests
pub fn scenario_response() -> Vec<RawRecord> {
    vec![
        RecordBuilder::battle_royale()
            .updated("2024-01-01T00:00:00Z")
            .division(3, 5)
            .progress(0.4)
            .build(),
        RecordBuilder::battle_royale()
            .updated("2023-01-01T00:00:00Z")
            .division(2, 5)
            .progress(0.1)
            .build(),
        RecordBuilder::zero_build()
            .game("other")
            .updated("2024-06-01T00:00:00Z")
            .division(7, 7)
            .build(),
    ]
}
