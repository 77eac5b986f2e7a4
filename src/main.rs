//! Command line entry point for ranked-progress
//!
//! Reads a saved ranked progress API response, builds the configured view
//! and prints it.

use anyhow::{Context, Result};
use clap::Parser;
use ranked_progress::config::{AppConfig, OutputFormat};
use ranked_progress::metrics::ProgressMetrics;
use ranked_progress::{Iso8601Parser, ProgressView, RawRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Ranked Progress - per-category views over ranked progress records
#[derive(Parser)]
#[command(
    name = "ranked-progress",
    version,
    about = "Group ranked progress records by ranking category",
    long_about = "Reads the JSON array returned by a ranked progress endpoint, keeps the \
                 battle royale and zero build records of the configured game, and prints \
                 either the full history or the latest record per category."
)]
struct Args {
    /// Ranked progress response (JSON array)
    #[arg(value_name = "INPUT", required_unless_present = "dry_run")]
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Aggregation policy override
    #[arg(short, long, value_name = "POLICY", help = "history or latest")]
    policy: Option<String>,

    /// Game id override
    #[arg(long, value_name = "GAME", help = "Only keep records for this game")]
    game_id: Option<String>,

    /// Output format override
    #[arg(short, long, value_name = "FORMAT", help = "text or json")]
    format: Option<String>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Print construction metrics
    #[arg(long, help = "Print Prometheus metrics after the view")]
    metrics: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without reading input")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(policy) = &args.policy {
        config.progress.policy = policy.parse()?;
    }

    if let Some(game_id) = &args.game_id {
        config.progress.game_id = game_id.clone();
    }

    if let Some(format) = &args.format {
        config.progress.output_format = format.parse()?;
    }

    ranked_progress::config::validate_config(&config)?;
    Ok(config)
}

/// Read a response saved as a top-level JSON array of records
fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of records", path.display()))
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let input = args
        .input
        .as_deref()
        .context("An INPUT response file is required")?;
    let records = read_records(input)?;
    info!(
        "Loaded {} ranked progress records from {}",
        records.len(),
        input.display()
    );

    let mut options = config.progress_options();
    let metrics = if args.metrics {
        let metrics = Arc::new(ProgressMetrics::new()?);
        options = options.with_metrics(metrics.clone());
        Some(metrics)
    } else {
        None
    };

    let view = ProgressView::build(
        config.progress.policy,
        Iso8601Parser::shared(),
        records,
        &options,
    )?;

    match config.progress.output_format {
        OutputFormat::Text => println!("{}", view),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view.entries()?)?),
    }

    if let Some(metrics) = metrics {
        print!("{}", metrics.render()?);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        info!("   Service: {}", config.service.name);
        info!("   Policy: {}", config.progress.policy);
        info!("   Game: {}", config.progress.game_id);
        return Ok(());
    }

    if let Err(e) = run(&args, &config) {
        error!("Failed to build ranked progress: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
