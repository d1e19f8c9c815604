// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use refactoring_sampler::cli::Args;
use refactoring_sampler::config::RunConfig;
use refactoring_sampler::report::ReportWriter;
use refactoring_sampler::runner;
use refactoring_sampler::sampler::Sampler;
use refactoring_sampler::store;
use std::time::Instant;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let start_time = Instant::now();
    tracing::info!("Sampling started at {}", chrono::Utc::now().to_rfc2822());

    let config = RunConfig::load(args.config.as_deref(), args.overrides())
        .context("Failed to load run configuration")?;
    tracing::debug!(?config, "Resolved configuration");

    let mut store = store::open_store(&config).context("Failed to open refactoring store")?;
    let sampler = Sampler::new(config.sample, config.seed);
    let writer = ReportWriter::new(&config.output_dir, config.fresh);

    let summary = runner::run(store.as_mut(), &sampler, &writer, &config.projects);

    tracing::info!(
        projects = summary.outcomes.len(),
        failed = summary.failed(),
        sampled = summary.sampled(),
        "Sampling finished at {} in {:.2?}",
        chrono::Utc::now().to_rfc2822(),
        start_time.elapsed()
    );

    if summary.failed() > 0 {
        anyhow::bail!("{} of {} projects failed", summary.failed(), summary.outcomes.len());
    }
    Ok(())
}
