//! Ledger row types.

use chrono::NaiveDateTime;
use dg_core::{Fingerprint, MigrationName};
use std::fmt;

/// How a recorded migration run went.
///
/// Stored as a small integer. `Failed` is never written: a failing batch
/// aborts the pass before anything is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// First successful run of this file name
    Success,
    /// Reserved
    Failed,
    /// Successful re-run of changed content
    Modified,
}

impl Outcome {
    /// Integer code stored in the `outcome` column.
    pub fn code(self) -> i16 {
        match self {
            Outcome::Success => 0,
            Outcome::Failed => 1,
            Outcome::Modified => 2,
        }
    }

    /// Decode a stored code.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Outcome::Success),
            1 => Some(Outcome::Failed),
            2 => Some(Outcome::Modified),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::Failed => write!(f, "failed"),
            Outcome::Modified => write!(f, "modified"),
        }
    }
}

/// One ledger row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub id: i64,
    pub file_name: MigrationName,
    /// UTC time of the last successful run
    pub last_run: NaiveDateTime,
    pub fingerprint: Fingerprint,
    pub outcome: Outcome,
}
