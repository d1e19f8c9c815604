// src/cli.rs

use crate::config::Overrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw reproducible samples of mined refactorings for manual review", long_about = None)]
pub struct Args {
    /// TOML run file (projects, sample size, seed, output directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Properties file with the database credentials
    #[arg(long)]
    pub properties: Option<PathBuf>,

    /// Directory to write the per-project sample files into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the sample draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Project to sample; repeat for several
    #[arg(short, long = "project")]
    pub projects: Vec<String>,

    /// Share of each project's refactorings to sample, in (0, 1]
    #[arg(long, conflicts_with = "count")]
    pub fraction: Option<f64>,

    /// Fixed number of refactorings to sample per project
    #[arg(long)]
    pub count: Option<usize>,

    /// Read from a local SQLite export instead of MySQL
    #[arg(long)]
    pub sqlite: Option<PathBuf>,

    /// Replace existing sample files instead of appending to them
    #[arg(long)]
    pub fresh: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            properties: self.properties.clone(),
            output_dir: self.output.clone(),
            seed: self.seed,
            projects: self.projects.clone(),
            fraction: self.fraction,
            count: self.count,
            sqlite: self.sqlite.clone(),
            fresh: self.fresh,
        }
    }
}
