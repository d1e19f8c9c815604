// src/report.rs

use crate::error::Result;
use crate::model::{Refactoring, RefactoringRegion};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Line written before every refactoring block
pub const BLOCK_DELIMITER: &str = "--------------------";

/// Suffix of every per-project output file
pub const FILE_SUFFIX: &str = "_sample_refactorings.csv";

/// Writes sampled refactorings into one file per project
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
    fresh: bool,
}

impl ReportWriter {
    /// `fresh` removes an existing project file instead of appending to it
    pub fn new(output_dir: impl Into<PathBuf>, fresh: bool) -> Self {
        Self { output_dir: output_dir.into(), fresh }
    }

    pub fn path_for(&self, project: &str) -> PathBuf {
        let name: String = project
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.output_dir.join(format!("{name}{FILE_SUFFIX}"))
    }

    /// Open the project's file for appending, writing the summary line
    /// `project: sampled/total` if the file does not exist yet.
    pub fn open(&self, project: &str, sampled: usize, total: usize) -> Result<ProjectReport> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(project);

        if self.fresh && path.exists() {
            tracing::debug!(path = %path.display(), "Removing previous report");
            fs::remove_file(&path)?;
        }

        let is_new = !path.exists();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut out = BufWriter::new(file);
        if is_new {
            writeln!(out, "{project}: {sampled}/{total}")?;
        }
        Ok(ProjectReport { path, out, blocks: 0 })
    }
}

/// An open per-project output file
pub struct ProjectReport {
    path: PathBuf,
    out: BufWriter<File>,
    blocks: usize,
}

impl ProjectReport {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of blocks appended through this handle
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    pub fn append(&mut self, refactoring: &Refactoring, regions: &[RefactoringRegion]) -> Result<()> {
        writeln!(self.out, "{BLOCK_DELIMITER}")?;
        self.out.write_all(format_block(refactoring, regions).as_bytes())?;
        self.blocks += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<PathBuf> {
        self.out.flush()?;
        Ok(self.path)
    }
}

/// One refactoring line followed by one line per region, each newline-terminated.
pub fn format_block(refactoring: &Refactoring, regions: &[RefactoringRegion]) -> String {
    let mut block = format!(
        "{};{};{}\n",
        field(&refactoring.commit_hash),
        field(&refactoring.refactoring_type),
        field(&refactoring.refactoring_detail),
    );
    for region in regions {
        block.push_str(&format!(
            "{};{};{};{}\n",
            field(&region.region_type),
            field(&region.path),
            region.start_line,
            region.length,
        ));
    }
    block
}

// Keeps every record on its own line.
fn field(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}
