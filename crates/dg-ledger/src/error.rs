//! Error types for the run ledger.

use dg_db::DbError;
use thiserror::Error;

/// Run ledger errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The existence of the ledger table could not be determined (L001).
    #[error("[L001] Cannot determine whether ledger table '{table}' exists: {source}")]
    Check { table: String, source: DbError },

    /// Creating the ledger table failed (L002).
    #[error("[L002] Failed to create ledger table '{table}': {source}")]
    Create { table: String, source: DbError },

    /// Reading a ledger entry failed (L003).
    #[error("[L003] Failed to read ledger entry for '{name}': {source}")]
    Query { name: String, source: DbError },

    /// Writing a ledger entry failed (L004).
    #[error("[L004] Failed to record ledger entry for '{name}': {source}")]
    Write { name: String, source: DbError },

    /// An update targeted a file name with no entry (L005).
    #[error("[L005] No ledger entry to update for '{name}'")]
    EntryMissing { name: String },

    /// A stored row could not be decoded (L006).
    #[error("[L006] Corrupt ledger entry for '{name}': {message}")]
    CorruptEntry { name: String, message: String },
}

/// Result type alias for [`LedgerError`].
pub type LedgerResult<T> = Result<T, LedgerError>;
