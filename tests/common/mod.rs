//! Shared test utilities for sampling integration tests

use refactoring_sampler::store::{SqliteStore, SCHEMA_SQL};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Projects in the fixture: (id, name, refactoring count)
pub const PROJECTS: [(i64, &str, usize); 3] = [(1, "junit", 100), (2, "javaparser", 37), (3, "empty", 0)];

/// Creates a SQLite export with the fixture projects.
///
/// Refactoring `n` of a project touches `n % 3` regions.
pub fn create_fixture_db() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("refactorings.db");
    let conn = Connection::open(&path).expect("Failed to create fixture db");
    conn.execute_batch(SCHEMA_SQL).expect("Failed to create schema");

    let mut next_id = 1i64;
    for (project_id, name, count) in PROJECTS {
        conn.execute("INSERT INTO project (id, name) VALUES (?1, ?2)", params![project_id, name])
            .expect("Failed to insert project");
        for n in 0..count as i64 {
            let refactoring_id = next_id;
            next_id += 1;
            conn.execute(
                "INSERT INTO refactoring (id, project_id, commit_hash, refactoring_type, refactoring_detail)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    refactoring_id,
                    project_id,
                    format!("{name}-{n:040}"),
                    if n % 2 == 0 { "Rename Method" } else { "Extract Method" },
                    format!("refactoring {n} of {name}"),
                ],
            )
            .expect("Failed to insert refactoring");
            for r in 0..n % 3 {
                conn.execute(
                    "INSERT INTO refactoring_region (project_id, refactoring_id, type, path, start_line, length)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        project_id,
                        refactoring_id,
                        if r == 0 { "o" } else { "n" },
                        format!("src/main/java/{name}/File{n}.java"),
                        10 * (r + 1),
                        r + 2,
                    ],
                )
                .expect("Failed to insert region");
            }
        }
    }

    (temp_dir, path)
}

/// Opens the fixture read-only, the way a run does
pub fn open_fixture(path: &Path) -> SqliteStore {
    SqliteStore::open(path).expect("Failed to open fixture db")
}
