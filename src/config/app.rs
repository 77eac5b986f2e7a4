//! Main application configuration
//!
//! This module defines the configuration for the ranked-progress tool,
//! including environment variable and TOML file loading and validation.

use super::progress::ProgressSettings;
use crate::progress::ProgressOptions;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub progress: ProgressSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "ranked-progress".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still
    /// override file values
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| anyhow!("Invalid configuration: {}", e))
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Progress settings
        if let Ok(policy) = env::var("PROGRESS_POLICY") {
            self.progress.policy = policy
                .parse()
                .map_err(|_| anyhow!("Invalid PROGRESS_POLICY value: {}", policy))?;
        }
        if let Ok(game_id) = env::var("PROGRESS_GAME_ID") {
            self.progress.game_id = game_id;
        }
        if let Ok(format) = env::var("PROGRESS_OUTPUT_FORMAT") {
            self.progress.output_format = format
                .parse()
                .map_err(|_| anyhow!("Invalid PROGRESS_OUTPUT_FORMAT value: {}", format))?;
        }

        Ok(())
    }

    /// Options for building progress views from this configuration
    pub fn progress_options(&self) -> ProgressOptions {
        ProgressOptions::new(self.progress.game_id.clone())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }
    if config.progress.game_id.trim().is_empty() {
        return Err(anyhow!("Game id cannot be empty"));
    }

    Ok(())
}
