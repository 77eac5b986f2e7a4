//! Common types used throughout the ranked progress views

use crate::error::ProgressError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One raw record as returned by the ranked progress endpoint
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Game whose records are kept unless configured otherwise
pub const DEFAULT_GAME_ID: &str = "fortnite";

/// Ranking category a record belongs to
///
/// Serialized with the API's own codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RankingType {
    #[serde(rename = "ranked-br")]
    BattleRoyale,
    #[serde(rename = "ranked-zb")]
    ZeroBuild,
    #[serde(rename = "delmar-competitive")]
    RocketRacing,
    #[serde(rename = "ranked_blastberry_build")]
    ReloadBuild,
    #[serde(rename = "ranked_blastberry_nobuild")]
    ReloadZeroBuild,
    #[serde(rename = "ranked-figment-build")]
    OgBuild,
    #[serde(rename = "ranked-figment-nobuild")]
    OgZeroBuild,
}

impl RankingType {
    /// Categories the progress views group by
    pub const TRACKED: [RankingType; 2] = [RankingType::BattleRoyale, RankingType::ZeroBuild];

    /// API code for this category
    pub fn code(&self) -> &'static str {
        match self {
            RankingType::BattleRoyale => "ranked-br",
            RankingType::ZeroBuild => "ranked-zb",
            RankingType::RocketRacing => "delmar-competitive",
            RankingType::ReloadBuild => "ranked_blastberry_build",
            RankingType::ReloadZeroBuild => "ranked_blastberry_nobuild",
            RankingType::OgBuild => "ranked-figment-build",
            RankingType::OgZeroBuild => "ranked-figment-nobuild",
        }
    }

    /// Whether records of this category are kept by the progress views
    pub fn is_tracked(&self) -> bool {
        Self::TRACKED.contains(self)
    }
}

impl FromStr for RankingType {
    type Err = ProgressError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "ranked-br" => Ok(RankingType::BattleRoyale),
            "ranked-zb" => Ok(RankingType::ZeroBuild),
            "delmar-competitive" => Ok(RankingType::RocketRacing),
            "ranked_blastberry_build" => Ok(RankingType::ReloadBuild),
            "ranked_blastberry_nobuild" => Ok(RankingType::ReloadZeroBuild),
            "ranked-figment-build" => Ok(RankingType::OgBuild),
            "ranked-figment-nobuild" => Ok(RankingType::OgZeroBuild),
            other => Err(ProgressError::InvalidCategory {
                code: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RankingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How records of the same category are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationPolicy {
    /// Every update per category, oldest first
    #[default]
    History,
    /// Only the last record seen per category
    Latest,
}

impl FromStr for AggregationPolicy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value.to_lowercase().as_str() {
            "history" => Ok(AggregationPolicy::History),
            "latest" => Ok(AggregationPolicy::Latest),
            _ => Err(anyhow::anyhow!("Invalid aggregation policy: {}", value)),
        }
    }
}

impl std::fmt::Display for AggregationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationPolicy::History => write!(f, "history"),
            AggregationPolicy::Latest => write!(f, "latest"),
        }
    }
}

/// Fully decoded copy of one progress record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub ranking_type: RankingType,
    pub game_id: String,
    pub last_updated: DateTime<Utc>,
    pub current_division: i64,
    pub highest_division: i64,
    pub promotion_progress: f64,
    pub track_guid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_type_codes() {
        for code in [
            "ranked-br",
            "ranked-zb",
            "delmar-competitive",
            "ranked_blastberry_build",
            "ranked_blastberry_nobuild",
            "ranked-figment-build",
            "ranked-figment-nobuild",
        ] {
            let ranking_type: RankingType = code.parse().unwrap();
            assert_eq!(ranking_type.code(), code);
        }

        assert!(matches!(
            "ranked-unknown".parse::<RankingType>(),
            Err(ProgressError::InvalidCategory { code }) if code == "ranked-unknown"
        ));
    }

    #[test]
    fn test_tracked_categories() {
        assert!(RankingType::BattleRoyale.is_tracked());
        assert!(RankingType::ZeroBuild.is_tracked());
        assert!(!RankingType::RocketRacing.is_tracked());
        assert!(!RankingType::OgBuild.is_tracked());
    }

    #[test]
    fn test_ranking_type_serializes_as_code() {
        let json = serde_json::to_string(&RankingType::ZeroBuild).unwrap();
        assert_eq!(json, "\"ranked-zb\"");

        let parsed: RankingType = serde_json::from_str("\"delmar-competitive\"").unwrap();
        assert_eq!(parsed, RankingType::RocketRacing);
    }

    #[test]
    fn test_aggregation_policy_parsing() {
        assert_eq!(
            "history".parse::<AggregationPolicy>().unwrap(),
            AggregationPolicy::History
        );
        assert_eq!(
            "LATEST".parse::<AggregationPolicy>().unwrap(),
            AggregationPolicy::Latest
        );
        assert!("newest".parse::<AggregationPolicy>().is_err());
        assert_eq!(AggregationPolicy::default(), AggregationPolicy::History);
    }
}
