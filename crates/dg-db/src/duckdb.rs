//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use ::duckdb::{params, Connection, ToSql};
use dg_core::sql_utils::split_qualified_name;
use std::path::Path;

/// Connection target that selects an in-memory database
pub const MEMORY_TARGET: &str = ":memory:";

/// DuckDB database backend
///
/// Owns a single connection; a migration pass uses it from one thread.
pub struct DuckDbBackend {
    conn: Connection,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Open a connection target (handles the `:memory:` special case)
    pub fn new(target: &str) -> DbResult<Self> {
        if target == MEMORY_TARGET {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(target))
        }
    }
}

impl Database for DuckDbBackend {
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize> {
        self.conn
            .execute(sql, params)
            .map_err(|e| DbError::ExecutionError(format!("{e}: {sql}")))
    }

    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.conn.execute_batch(sql).map_err(DbError::from)
    }

    fn query_one(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<Option<String>> {
        match self
            .conn
            .query_row(sql, params, |row| row.get::<_, Option<String>>(0))
        {
            Ok(value) => Ok(value),
            Err(::duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DbError::from(e)),
        }
    }

    fn query_rows(
        &self,
        sql: &str,
        params: &[&dyn ToSql],
        columns: usize,
    ) -> DbResult<Vec<Vec<Option<String>>>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| {
            (0..columns)
                .map(|i| row.get::<_, Option<String>>(i))
                .collect::<Result<Vec<_>, _>>()
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn relation_exists(&self, name: &str) -> DbResult<bool> {
        let (schema, table) = split_qualified_name(name);
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_schema = ? AND table_name = ?",
                params![schema, table],
                |row| row.get(0),
            )
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;

        Ok(count > 0)
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
