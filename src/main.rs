//! Zendo rule demo
//!
//! Run with: `zendo [--seed N] [--positive N] [--negative N] [--grid "<9 tokens>"]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_zendo::{Grid, ZendoConfig, ZendoEngine};

#[derive(Parser)]
#[command(name = "zendo")]
#[command(about = "Generate a random Zendo rule and example boards")]
#[command(version)]
struct Cli {
    /// Seed for a reproducible rule (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Boards that follow the rule
    #[arg(short, long, default_value_t = 2)]
    positive: usize,

    /// Boards that break the rule
    #[arg(short, long, default_value_t = 2)]
    negative: usize,

    /// Board to test, as nine tokens such as "rC __ __ __ yT __ __ __ bS"
    #[arg(short, long)]
    grid: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            ZendoConfig::from_toml(&source).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => ZendoConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let grid = cli
        .grid
        .as_deref()
        .map(str::parse::<Grid>)
        .transpose()
        .context("invalid --grid")?;

    let mut engine = ZendoEngine::new(config).context("failed to start engine")?;
    let rule = engine.new_rule().context("rule generation failed")?;
    info!("The rule is: {}", engine.describe(&rule));
    println!("Rule: {}", engine.describe(&rule));

    if let Some(grid) = grid {
        let verdict = if engine.evaluate(&rule, &grid) { "follows" } else { "breaks" };
        println!("\n{grid}\n\nThis board {verdict} the rule.");
    }

    let examples = engine.generate_examples(&rule, cli.positive, cli.negative);
    for (label, grids) in [("Follows", &examples.positives), ("Breaks", &examples.negatives)] {
        for (i, grid) in grids.iter().enumerate() {
            println!("\n{label} #{}:\n{grid}", i + 1);
        }
    }

    Ok(())
}
