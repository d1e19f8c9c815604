// src/store/mod.rs

//! Read access to the refactoring dataset.
//!
//! All three queries bind their parameters; nothing is interpolated into
//! query text. Rows come back ordered by id so that a seeded draw picks the
//! same rows on every run.

mod mysql;
mod sqlite;

pub use self::mysql::MySqlStore;
pub use self::sqlite::{SqliteStore, SCHEMA_SQL};

use crate::config::{read_properties, RunConfig};
use crate::error::Result;
use crate::model::{Project, ProjectId, Refactoring, RefactoringId, RefactoringRegion};

pub(crate) const PROJECT_ID_SQL: &str = "SELECT id FROM project WHERE name = ? ORDER BY id LIMIT 1";

pub(crate) const REFACTORINGS_SQL: &str = "SELECT id, commit_hash, refactoring_type, refactoring_detail \
     FROM refactoring WHERE project_id = ? ORDER BY id";

pub(crate) const REGIONS_SQL: &str = "SELECT type, path, start_line, length \
     FROM refactoring_region WHERE project_id = ? AND refactoring_id = ? ORDER BY id";

/// The three fixed queries the sampler needs
pub trait RefactoringStore {
    /// Id of the project with exactly this name
    fn project_id(&mut self, name: &str) -> Result<ProjectId>;

    /// All refactorings of a project, by ascending id
    fn refactorings(&mut self, project_id: ProjectId) -> Result<Vec<Refactoring>>;

    /// All regions of one refactoring
    fn refactoring_regions(
        &mut self,
        project_id: ProjectId,
        refactoring_id: RefactoringId,
    ) -> Result<Vec<RefactoringRegion>>;

    fn project(&mut self, name: &str) -> Result<Project> {
        let id = self.project_id(name)?;
        Ok(Project { id, name: name.to_string() })
    }
}

/// Open the store a run is configured for: a SQLite export if one is given,
/// otherwise MySQL with the credentials from the properties file.
pub fn open_store(config: &RunConfig) -> Result<Box<dyn RefactoringStore>> {
    match &config.sqlite {
        Some(path) => Ok(Box::new(SqliteStore::open(path)?)),
        None => {
            let descriptor = read_properties(&config.properties)?;
            Ok(Box::new(MySqlStore::connect(&descriptor)?))
        }
    }
}
