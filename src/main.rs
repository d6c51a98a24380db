use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pass_planner::domain::plan::write_plan_csv;
use pass_planner::domain::strategy::StrategyType;
use pass_planner::{load_config, logger, plan_from_files};

/// Selects which predicted passes a single receiver records and prints the resulting plan as CSV.
#[derive(Debug, Parser)]
#[command(name = "pass-planner", version)]
struct Cli {
    /// JSON file with the predicted passes.
    #[arg(short, long)]
    passes: PathBuf,

    /// JSON planner configuration. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured strategy ("aos" or "max-elevation").
    #[arg(short, long)]
    strategy: Option<StrategyType>,

    /// Overrides the configured minimum recording duration in seconds.
    #[arg(long = "min-duration")]
    min_duration: Option<f64>,

    /// Writes the plan to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init();

    let mut config = load_config(cli.config.as_deref()).context("Failed to load planner configuration")?;
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(min_duration) = cli.min_duration {
        config.set_min_duration_seconds(min_duration)?;
    }

    log::info!("Planning '{}' with strategy '{}'.", cli.passes.display(), config.strategy);

    let outcome = plan_from_files(&cli.passes, &config).with_context(|| format!("Failed to plan passes from '{}'", cli.passes.display()))?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create '{}'", path.display()))?;
            write_plan_csv(&outcome.jobs, file)?;
            log::info!("Wrote {} jobs to '{}'.", outcome.jobs.len(), path.display());
        }
        None => write_plan_csv(&outcome.jobs, io::stdout().lock())?,
    }

    Ok(())
}
