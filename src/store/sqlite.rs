// src/store/sqlite.rs

use super::{RefactoringStore, PROJECT_ID_SQL, REFACTORINGS_SQL, REGIONS_SQL};
use crate::error::{Result, SamplerError};
use crate::model::{ProjectId, Refactoring, RefactoringId, RefactoringRegion};
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;

/// Tables the sampler reads, in SQLite dialect
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS project (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS refactoring (
    id INTEGER PRIMARY KEY,
    project_id INTEGER NOT NULL REFERENCES project(id),
    commit_hash TEXT NOT NULL,
    refactoring_type TEXT NOT NULL,
    refactoring_detail TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS refactoring_region (
    id INTEGER PRIMARY KEY,
    project_id INTEGER NOT NULL REFERENCES project(id),
    refactoring_id INTEGER NOT NULL REFERENCES refactoring(id),
    type TEXT NOT NULL,
    path TEXT NOT NULL,
    start_line INTEGER NOT NULL,
    length INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_refactoring_project ON refactoring(project_id);
CREATE INDEX IF NOT EXISTS idx_region_refactoring ON refactoring_region(project_id, refactoring_id);
"#;

/// Store backed by a local SQLite export of the dataset
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open an existing export read-only
    pub fn open(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "Opening SQLite export");
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| SamplerError::Connection {
                target: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create the dataset tables if they do not exist yet
    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl RefactoringStore for SqliteStore {
    fn project_id(&mut self, name: &str) -> Result<ProjectId> {
        self.conn
            .query_row(PROJECT_ID_SQL, [name], |row| row.get(0))
            .optional()?
            .ok_or_else(|| SamplerError::ProjectNotFound(name.to_string()))
    }

    fn refactorings(&mut self, project_id: ProjectId) -> Result<Vec<Refactoring>> {
        let mut stmt = self.conn.prepare(REFACTORINGS_SQL)?;
        let rows = stmt.query_map([project_id], |row| {
            Ok(Refactoring {
                id: row.get(0)?,
                commit_hash: row.get(1)?,
                refactoring_type: row.get(2)?,
                refactoring_detail: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn refactoring_regions(
        &mut self,
        project_id: ProjectId,
        refactoring_id: RefactoringId,
    ) -> Result<Vec<RefactoringRegion>> {
        let mut stmt = self.conn.prepare(REGIONS_SQL)?;
        let rows = stmt.query_map([project_id, refactoring_id], |row| {
            Ok(RefactoringRegion {
                region_type: row.get(0)?,
                path: row.get(1)?,
                start_line: row.get(2)?,
                length: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
