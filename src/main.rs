//! bearing-life - Oscillating Bearing Fatigue Life Estimator
//!
//! Estimates the L10 life of tidal turbine pitch/yaw bearings from
//! per-scenario load series and a tidal duty-cycle profile.
//!
//! # Usage
//!
//! ```bash
//! # Run with ./life_config.toml
//! cargo run --release
//!
//! # Explicit config, series read from another directory, JSON report
//! ./bearing-life --config turbine_a.toml --data-dir ./sim_output --json
//!
//! # Validate the config only
//! ./bearing-life --config turbine_a.toml --check
//! ```
//!
//! # Environment Variables
//!
//! - `BEARING_LIFE_CONFIG`: Path to the life config TOML
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use bearing_life::acquisition::{discover_series_files, CsvSeriesSource};
use bearing_life::config::{self, LifeConfig};
use bearing_life::pipeline::LifePipeline;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "bearing-life")]
#[command(about = "Fatigue life of oscillating pitch/yaw bearings (ISO 281 / NREL DG03)")]
#[command(version)]
struct CliArgs {
    /// Path to the life config TOML (default: ./life_config.toml)
    #[arg(short, long, env = config::defaults::CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Override `ingestion.data_dir` from the config
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Use this catalogue dynamic axial load rating Ca (N) for the run
    #[arg(long, value_name = "NEWTONS")]
    rating: Option<f64>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Validate the config and exit
    #[arg(long)]
    check: bool,

    /// List the series files found in the data directory and exit
    #[arg(long)]
    list: bool,
}

// ============================================================================
// Logging
// ============================================================================

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so the report on stdout stays machine-readable
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_json);

    let (mut life_config, config_path) =
        LifeConfig::load(args.config.as_deref()).context("Failed to load life config")?;
    if let Some(dir) = args.data_dir {
        life_config.ingestion.data_dir = dir;
    }

    info!(
        config = %config_path.display(),
        kind = %life_config.bearing.params.kind,
        scenarios = life_config.scenarios.len(),
        duty_sum = life_config.duty_cycle_sum(),
        "Config loaded"
    );

    if args.check {
        println!("Config OK: {}", config_path.display());
        return Ok(());
    }

    let data_dir = &life_config.ingestion.data_dir;
    if args.list {
        let files = discover_series_files(data_dir)
            .with_context(|| format!("Failed to scan {}", data_dir.display()))?;
        for file in files {
            println!("{}", file.display());
        }
        return Ok(());
    }

    let source = CsvSeriesSource::new(
        data_dir.clone(),
        life_config.ingestion.header_row,
        life_config.ingestion.columns.clone(),
    );

    let mut pipeline = LifePipeline::new(&life_config, &source);
    if let Some(rating) = args.rating {
        pipeline = pipeline.with_rating_override(rating);
    }
    let report = pipeline.run().context("Life calculation failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }

    Ok(())
}
