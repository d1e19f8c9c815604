// src/runner.rs

use crate::error::Result;
use crate::report::ReportWriter;
use crate::sampler::Sampler;
use crate::store::RefactoringStore;
use indicatif::ProgressBar;
use std::path::PathBuf;

/// What happened to one project
#[derive(Debug)]
pub enum ProjectOutcome {
    /// Sample written to `path`
    Written { path: PathBuf, sampled: usize, total: usize },
    /// The project has no refactorings; nothing was written
    Empty,
}

/// Per-project results of a run, in project-list order
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(String, Result<ProjectOutcome>)>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_err()).count()
    }

    pub fn sampled(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|(_, r)| match r {
                Ok(ProjectOutcome::Written { sampled, .. }) => Some(*sampled),
                _ => None,
            })
            .sum()
    }
}

/// Sample every project in turn. A failing project is logged and skipped;
/// it never stops the projects after it.
pub fn run(
    store: &mut dyn RefactoringStore,
    sampler: &Sampler,
    writer: &ReportWriter,
    projects: &[String],
) -> RunSummary {
    let bar = ProgressBar::new(projects.len() as u64);
    let mut summary = RunSummary::default();

    for name in projects {
        bar.set_message(name.clone());
        let outcome = sample_project(store, sampler, writer, name);
        match &outcome {
            Ok(ProjectOutcome::Written { path, sampled, total }) => {
                tracing::info!(project = %name, sampled, total, path = %path.display(), "Project sampled");
            }
            Ok(ProjectOutcome::Empty) => {
                tracing::warn!(project = %name, "Project has no refactorings, skipping");
            }
            Err(e) => {
                tracing::error!(project = %name, error = %e, "Sampling failed");
            }
        }
        summary.outcomes.push((name.clone(), outcome));
        bar.inc(1);
    }
    bar.finish_and_clear();

    summary
}

/// Look up, draw, fetch regions and write the report for one project
pub fn sample_project(
    store: &mut dyn RefactoringStore,
    sampler: &Sampler,
    writer: &ReportWriter,
    name: &str,
) -> Result<ProjectOutcome> {
    let project = store.project(name)?;
    let refactorings = store.refactorings(project.id)?;
    tracing::debug!(project = %name, id = project.id, rows = refactorings.len(), "Fetched refactorings");

    if refactorings.is_empty() {
        return Ok(ProjectOutcome::Empty);
    }

    // One generator stream per project
    let sample = sampler.draw(refactorings.len(), project.id as u64);
    let mut report = writer.open(&project.name, sample.len(), sample.total)?;
    for refactoring in sample.resolve(&refactorings) {
        let regions = store.refactoring_regions(project.id, refactoring.id)?;
        report.append(refactoring, &regions)?;
    }
    tracing::debug!(project = %name, blocks = report.blocks(), "Appended sample blocks");
    let path = report.finish()?;

    Ok(ProjectOutcome::Written { path, sampled: sample.len(), total: sample.total })
}
