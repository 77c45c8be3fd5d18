//! Ledger table DDL.

use dg_core::sql_utils::quote_qualified;

/// `CREATE TABLE` statement for a ledger stored at `table`.
///
/// `id` is assigned by the store on insert; DuckDB has no identity columns.
pub fn create_ledger_table(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (
             id          INTEGER   NOT NULL PRIMARY KEY,
             file_name   VARCHAR   NOT NULL UNIQUE,
             last_run    TIMESTAMP NOT NULL,
             fingerprint VARCHAR   NOT NULL,
             outcome     TINYINT   NOT NULL
         )",
        quote_qualified(table)
    )
}
