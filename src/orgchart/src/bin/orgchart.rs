//! # Org Chart CLI
//!
//! Prints every user holding a role below the given user's role.
//!
//! ## Usage
//!
//! ```text
//! orgchart 4
//! orgchart --data company.toml --format json 4
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `ORGCHART_DATA` - TOML dataset path (default: built-in hierarchy)
//! - `RUST_LOG` - Log filter (default: warn, debug with `--verbose`)

use anyhow::{Context, Result};
use clap::Parser;
use cretoai_orgchart::{DatasetConfig, OrgChart, OutputFormat, UserId};
use std::path::PathBuf;
use tracing::info;

/// Org chart subordinate lookup
#[derive(Parser)]
#[command(name = "orgchart")]
#[command(about = "List the subordinates of a user in a role hierarchy")]
#[command(version)]
struct Cli {
    /// User id to query
    user_id: UserId,

    /// Path to a TOML dataset
    #[arg(short, long, env = "ORGCHART_DATA")]
    data: Option<PathBuf>,

    /// Output format: text or json (overrides the dataset)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the result
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = match &cli.data {
        Some(path) => {
            let config = DatasetConfig::load(path)?;
            info!("Loaded dataset from {:?}", path);
            config
        }
        None => DatasetConfig::builtin(),
    };
    config.validate()?;

    let chart = OrgChart::from_config(&config).context("Failed to build org chart")?;
    let subordinates = chart
        .subordinates(cli.user_id)
        .with_context(|| format!("Failed to resolve subordinates of user {}", cli.user_id))?;

    let format = cli.format.unwrap_or(config.output.format);
    println!("{}", subordinates.render(format)?);

    Ok(())
}
