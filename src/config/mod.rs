//! Configuration management for the ranked-progress tool
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values.

pub mod app;
pub mod progress;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use progress::{OutputFormat, ProgressSettings};
