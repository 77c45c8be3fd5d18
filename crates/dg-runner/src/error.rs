//! Error types for dg-runner

use dg_core::CoreError;
use dg_db::DbError;
use dg_ledger::LedgerError;
use thiserror::Error;

/// Errors that abort a migration pass
#[derive(Error, Debug)]
pub enum RunError {
    /// A migration changed after it was recorded and modified runs are off (R001)
    #[error(
        "[R001] Migration '{name}' has changed since it ran (recorded {stored}, found {computed}); \
         allow modified runs to apply it again"
    )]
    Drift {
        name: String,
        stored: String,
        computed: String,
    },

    /// A batch failed against the database (R002)
    #[error("[R002] Error running migration '{name}' (batch {batch} of {total}): {source}")]
    Execution {
        name: String,
        batch: usize,
        total: usize,
        source: DbError,
    },

    /// Reading or decoding migration files failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing the ledger failed
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Result type alias for RunError
pub type RunResult<T> = Result<T, RunError>;
