// src/error.rs

use std::path::PathBuf;

/// Everything that can go wrong while sampling a project
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unable to connect to {target}: {reason}")]
    Connection { target: String, reason: String },

    #[error("No such project: {0}")]
    ProjectNotFound(String),

    #[error("Unexpected column value in {0}")]
    Decode(String),

    #[error("MySQL query failed: {0}")]
    Mysql(#[from] mysql::Error),

    #[error("SQLite query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SamplerError> = std::result::Result<T, E>;
