//! Runs the ε-greedy comparison on the 10-armed testbed and writes the
//! two-panel figure.
//!
//! Usage: `bandit_testbed [run-config.json]`

use anyhow::{Context, Result};
use banditplot::config::RunConfig;
use banditplot::experiment::run_testbed;
use banditplot::figure::Figure;
use banditplot::render::render_to_file;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("info"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::load(&path)
            .with_context(|| format!("failed to load run config from {path}"))?,
        None => RunConfig::default(),
    };

    info!(
        arms = config.testbed.arms,
        steps = config.testbed.steps,
        runs = config.testbed.runs,
        "running testbed"
    );
    let results = run_testbed(&config.testbed).context("testbed run failed")?;

    if let Some(path) = &config.results {
        results
            .save(path)
            .with_context(|| format!("failed to save results to {}", path.display()))?;
    }

    let figure = Figure::bandit_comparison(&results);
    render_to_file(&figure, &config.figure, &config.output)
        .with_context(|| format!("failed to write figure to {}", config.output.display()))?;
    Ok(())
}
