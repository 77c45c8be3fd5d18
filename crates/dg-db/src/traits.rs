//! Database trait definition

use crate::error::DbResult;
use ::duckdb::ToSql;

/// Connection handle used by the ledger store and the batch executor.
///
/// Calls block until the database answers. There is one caller at a time,
/// so implementations need no internal locking. Values go in as bound
/// parameters (`?`), built with [`params!`](crate::params).
pub trait Database {
    /// Execute a single statement, returning affected rows
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize>;

    /// Execute SQL text that may hold several statements
    fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// First column of the first row as text, `None` if there are no rows.
    ///
    /// A SQL NULL also yields `None`. Non-text columns must be cast to
    /// VARCHAR in the query.
    fn query_one(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<Option<String>>;

    /// All rows, reading the first `columns` columns of each as text.
    fn query_rows(
        &self,
        sql: &str,
        params: &[&dyn ToSql],
        columns: usize,
    ) -> DbResult<Vec<Vec<Option<String>>>>;

    /// Check if a table or view exists (`schema.name` or `name` in `main`)
    fn relation_exists(&self, name: &str) -> DbResult<bool>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;

    /// Open a transaction
    fn begin(&self) -> DbResult<()> {
        self.execute_batch("BEGIN TRANSACTION")
    }

    /// Commit the open transaction
    fn commit(&self) -> DbResult<()> {
        self.execute_batch("COMMIT")
    }

    /// Roll back the open transaction
    fn rollback(&self) -> DbResult<()> {
        self.execute_batch("ROLLBACK")
    }
}
