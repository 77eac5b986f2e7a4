//! Progress view configuration

use crate::types::{AggregationPolicy, DEFAULT_GAME_ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the CLI prints a built view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid output format: {}", value)),
        }
    }
}

/// Settings for building progress views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// Aggregation policy (history or latest)
    pub policy: AggregationPolicy,
    /// Game whose records are kept
    pub game_id: String,
    /// Output format for the CLI
    pub output_format: OutputFormat,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            policy: AggregationPolicy::History,
            game_id: DEFAULT_GAME_ID.to_string(),
            output_format: OutputFormat::Text,
        }
    }
}
