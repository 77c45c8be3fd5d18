//! Data access over the ledger table.

use crate::ddl::create_ledger_table;
use crate::entry::{LedgerEntry, Outcome};
use crate::error::{LedgerError, LedgerResult};
use chrono::{NaiveDateTime, Utc};
use dg_core::sql_utils::{quote_qualified, split_qualified_name};
use dg_core::{Fingerprint, MigrationName};
use dg_db::{params, Database};

/// Timestamp format written into and read back from `last_run`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Reads and writes ledger entries through a borrowed connection.
pub struct LedgerStore<'a> {
    db: &'a dyn Database,
    table: String,
}

impl<'a> LedgerStore<'a> {
    /// Create a store for the ledger table `table` (optionally schema-qualified).
    pub fn new(db: &'a dyn Database, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
        }
    }

    /// Name of the ledger table as configured.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Whether the ledger table is installed.
    ///
    /// A failing check is an error, never "absent".
    pub fn exists(&self) -> LedgerResult<bool> {
        self.db
            .relation_exists(&self.table)
            .map_err(|source| LedgerError::Check {
                table: self.table.clone(),
                source,
            })
    }

    /// Create the ledger table if it is missing.
    ///
    /// Returns `true` when the table was created by this call.
    pub fn ensure_table(&self) -> LedgerResult<bool> {
        if self.exists()? {
            return Ok(false);
        }

        let create_err = |source| LedgerError::Create {
            table: self.table.clone(),
            source,
        };

        if self.table.contains('.') {
            let (schema, _) = split_qualified_name(&self.table);
            self.db
                .execute_batch(&format!(
                    "CREATE SCHEMA IF NOT EXISTS {}",
                    quote_qualified(schema)
                ))
                .map_err(create_err)?;
        }

        self.db
            .execute_batch(&create_ledger_table(&self.table))
            .map_err(create_err)?;
        log::info!("Created ledger table {}", self.table);
        Ok(true)
    }

    /// Stored fingerprint for `name`, or `None` if the file never ran.
    pub fn get_fingerprint(&self, name: &MigrationName) -> LedgerResult<Option<Fingerprint>> {
        let sql = format!(
            "SELECT fingerprint FROM {} WHERE file_name = ?",
            quote_qualified(&self.table)
        );
        let stored = self
            .db
            .query_one(&sql, params![name.as_str()])
            .map_err(|source| LedgerError::Query {
                name: name.to_string(),
                source,
            })?;
        Ok(stored.map(Fingerprint::from_stored))
    }

    /// Full ledger row for `name`, or `None` if the file never ran.
    pub fn get_entry(&self, name: &MigrationName) -> LedgerResult<Option<LedgerEntry>> {
        let sql = format!(
            "SELECT CAST(id AS VARCHAR), CAST(last_run AS VARCHAR), fingerprint, CAST(outcome AS VARCHAR) \
             FROM {} WHERE file_name = ?",
            quote_qualified(&self.table)
        );
        let rows = self
            .db
            .query_rows(&sql, params![name.as_str()], 4)
            .map_err(|source| LedgerError::Query {
                name: name.to_string(),
                source,
            })?;

        match rows.into_iter().next() {
            Some(row) => decode_entry(name, row).map(Some),
            None => Ok(None),
        }
    }

    /// Insert the first entry for `name`, stamped with the current time.
    pub fn record_new(
        &self,
        name: &MigrationName,
        fingerprint: &Fingerprint,
        outcome: Outcome,
    ) -> LedgerResult<()> {
        let write_err = |source| LedgerError::Write {
            name: name.to_string(),
            source,
        };
        let table = quote_qualified(&self.table);

        let id = self
            .db
            .query_one(
                &format!("SELECT CAST(COALESCE(MAX(id), 0) + 1 AS VARCHAR) FROM {table}"),
                params![],
            )
            .map_err(write_err)?
            .and_then(|text| text.parse::<i64>().ok())
            .ok_or_else(|| LedgerError::CorruptEntry {
                name: name.to_string(),
                message: format!("cannot derive next id from {}", self.table),
            })?;

        let sql = format!(
            "INSERT INTO {table} (id, file_name, last_run, fingerprint, outcome) \
             VALUES (?, ?, CAST(? AS TIMESTAMP), ?, ?)"
        );
        self.db
            .execute(
                &sql,
                params![
                    id,
                    name.as_str(),
                    now_timestamp(),
                    fingerprint.as_str(),
                    outcome.code()
                ],
            )
            .map_err(write_err)?;
        Ok(())
    }

    /// Overwrite last-run, fingerprint and outcome of the entry for `name`.
    pub fn record_update(
        &self,
        name: &MigrationName,
        fingerprint: &Fingerprint,
        outcome: Outcome,
    ) -> LedgerResult<()> {
        let sql = format!(
            "UPDATE {} SET last_run = CAST(? AS TIMESTAMP), fingerprint = ?, outcome = ? \
             WHERE file_name = ?",
            quote_qualified(&self.table)
        );
        let updated = self
            .db
            .execute(
                &sql,
                params![
                    now_timestamp(),
                    fingerprint.as_str(),
                    outcome.code(),
                    name.as_str()
                ],
            )
            .map_err(|source| LedgerError::Write {
                name: name.to_string(),
                source,
            })?;

        if updated == 0 {
            return Err(LedgerError::EntryMissing {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

fn now_timestamp() -> String {
    Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

fn decode_entry(name: &MigrationName, row: Vec<Option<String>>) -> LedgerResult<LedgerEntry> {
    let corrupt = |message: String| LedgerError::CorruptEntry {
        name: name.to_string(),
        message,
    };

    let mut cells = row.into_iter();
    let mut next = |column: &str| {
        cells
            .next()
            .flatten()
            .ok_or_else(|| corrupt(format!("{column} is NULL")))
    };

    let id_text = next("id")?;
    let last_run_text = next("last_run")?;
    let fingerprint = next("fingerprint")?;
    let outcome_text = next("outcome")?;

    let id = id_text
        .parse::<i64>()
        .map_err(|e| corrupt(format!("bad id '{id_text}': {e}")))?;
    let last_run = NaiveDateTime::parse_from_str(&last_run_text, TIMESTAMP_FORMAT)
        .map_err(|e| corrupt(format!("bad last_run '{last_run_text}': {e}")))?;
    let outcome = outcome_text
        .parse::<i16>()
        .ok()
        .and_then(Outcome::from_code)
        .ok_or_else(|| corrupt(format!("unknown outcome '{outcome_text}'")))?;

    Ok(LedgerEntry {
        id,
        file_name: name.clone(),
        last_run,
        fingerprint: Fingerprint::from_stored(fingerprint),
        outcome,
    })
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
