// src/store/mysql.rs

use super::{RefactoringStore, PROJECT_ID_SQL, REFACTORINGS_SQL, REGIONS_SQL};
use crate::config::ConnectionDescriptor;
use crate::error::{Result, SamplerError};
use crate::model::{ProjectId, Refactoring, RefactoringId, RefactoringRegion};
use mysql::prelude::{FromValue, Queryable};
use mysql::{from_value_opt, Conn, FromValueError, OptsBuilder, Value};

/// A single MySQL connection, held for the whole run and closed on drop
pub struct MySqlStore {
    conn: Conn,
}

impl MySqlStore {
    pub fn connect(descriptor: &ConnectionDescriptor) -> Result<Self> {
        let target = descriptor.redacted_url();
        tracing::info!(%target, "Connecting to refactoring database");

        let conn = Conn::new(opts(descriptor)).map_err(|e| SamplerError::Connection {
            target,
            reason: e.to_string(),
        })?;
        Ok(Self { conn })
    }
}

fn opts(descriptor: &ConnectionDescriptor) -> OptsBuilder {
    let (host, port) = descriptor.host_and_port();
    let builder = OptsBuilder::new()
        .ip_or_hostname(Some(host))
        .user(Some(descriptor.username.as_str()))
        .pass(Some(descriptor.password.as_str()))
        .db_name(Some(descriptor.database.as_str()));
    match port {
        Some(port) => builder.tcp_port(port),
        None => builder,
    }
}

// Rows are fetched as raw values and decoded here, so a NULL or mistyped
// column becomes an error for the current project instead of a panic.
type RefactoringColumns = (Value, Value, Value, Value);
type RegionColumns = (Value, Value, Value, Value);

fn column<T: FromValue>(value: Value, name: &str) -> Result<T> {
    from_value_opt(value)
        .map_err(|FromValueError(value)| SamplerError::Decode(format!("{name}: {value:?}")))
}

// Nullable text reads as empty
fn text(value: Value, name: &str) -> Result<String> {
    Ok(column::<Option<String>>(value, name)?.unwrap_or_default())
}

fn refactoring_from_columns(
    (id, commit_hash, refactoring_type, refactoring_detail): RefactoringColumns,
) -> Result<Refactoring> {
    Ok(Refactoring {
        id: column(id, "refactoring.id")?,
        commit_hash: text(commit_hash, "refactoring.commit_hash")?,
        refactoring_type: text(refactoring_type, "refactoring.refactoring_type")?,
        refactoring_detail: text(refactoring_detail, "refactoring.refactoring_detail")?,
    })
}

fn region_from_columns(
    (region_type, path, start_line, length): RegionColumns,
) -> Result<RefactoringRegion> {
    Ok(RefactoringRegion {
        region_type: text(region_type, "refactoring_region.type")?,
        path: text(path, "refactoring_region.path")?,
        start_line: column(start_line, "refactoring_region.start_line")?,
        length: column(length, "refactoring_region.length")?,
    })
}

impl RefactoringStore for MySqlStore {
    fn project_id(&mut self, name: &str) -> Result<ProjectId> {
        match self.conn.exec_first::<Value, _, _>(PROJECT_ID_SQL, (name,))? {
            Some(id) => column(id, "project.id"),
            None => Err(SamplerError::ProjectNotFound(name.to_string())),
        }
    }

    fn refactorings(&mut self, project_id: ProjectId) -> Result<Vec<Refactoring>> {
        let rows: Vec<RefactoringColumns> = self.conn.exec(REFACTORINGS_SQL, (project_id,))?;
        rows.into_iter().map(refactoring_from_columns).collect()
    }

    fn refactoring_regions(
        &mut self,
        project_id: ProjectId,
        refactoring_id: RefactoringId,
    ) -> Result<Vec<RefactoringRegion>> {
        let rows: Vec<RegionColumns> =
            self.conn.exec(REGIONS_SQL, (project_id, refactoring_id))?;
        rows.into_iter().map(region_from_columns).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mysql::Opts;

    #[test]
    fn opts_carry_descriptor_fields() {
        let descriptor = ConnectionDescriptor {
            username: "miner".to_string(),
            password: "pw".to_string(),
            host: "db.internal:3307".to_string(),
            database: "refactorings".to_string(),
        };
        let opts = Opts::from(opts(&descriptor));
        assert_eq!(opts.get_ip_or_hostname(), "db.internal");
        assert_eq!(opts.get_tcp_port(), 3307);
        assert_eq!(opts.get_user(), Some("miner"));
        assert_eq!(opts.get_pass(), Some("pw"));
        assert_eq!(opts.get_db_name(), Some("refactorings"));
    }

    #[test]
    fn default_port_without_suffix() {
        let opts = Opts::from(opts(&ConnectionDescriptor::default()));
        assert_eq!(opts.get_ip_or_hostname(), "127.0.0.1");
        assert_eq!(opts.get_tcp_port(), 3306);
    }

    #[test]
    fn null_text_columns_decode_as_empty() {
        let refactoring = refactoring_from_columns((
            Value::Int(7),
            Value::Bytes(b"3f2a9c".to_vec()),
            Value::NULL,
            Value::NULL,
        ))
        .unwrap();
        assert_eq!(refactoring.id, 7);
        assert_eq!(refactoring.commit_hash, "3f2a9c");
        assert_eq!(refactoring.refactoring_type, "");
        assert_eq!(refactoring.refactoring_detail, "");

        let region = region_from_columns((
            Value::NULL,
            Value::NULL,
            Value::Int(12),
            Value::Int(5),
        ))
        .unwrap();
        assert_eq!(region.region_type, "");
        assert_eq!(region.path, "");
        assert_eq!((region.start_line, region.length), (12, 5));
    }

    #[test]
    fn null_numeric_column_is_an_error() {
        let err = region_from_columns((
            Value::Bytes(b"o".to_vec()),
            Value::Bytes(b"src/A.java".to_vec()),
            Value::NULL,
            Value::Int(5),
        ))
        .unwrap_err();
        assert!(matches!(err, SamplerError::Decode(msg) if msg.contains("start_line")));

        let err = refactoring_from_columns((Value::NULL, Value::NULL, Value::NULL, Value::NULL))
            .unwrap_err();
        assert!(matches!(err, SamplerError::Decode(_)));
    }
}
