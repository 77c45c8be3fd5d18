//! Per-file reports and the pass summary.

use dg_core::{Fingerprint, MigrationFile, MigrationName};
use std::fmt;
use std::time::Duration;

/// What happened to a migration file during the pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// Executed for the first time
    Run,
    /// Already applied with identical content
    Skipped,
    /// Executed again after its content changed
    Modified,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Run => write!(f, "Run"),
            FileAction::Skipped => write!(f, "Skipped"),
            FileAction::Modified => write!(f, "Modified"),
        }
    }
}

/// Outcome of one migration file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Migration file name
    pub name: MigrationName,

    /// Action taken
    pub action: FileAction,

    /// Fingerprint of the content on disk
    pub fingerprint: Fingerprint,

    /// Number of batches executed (0 when skipped)
    pub batches: usize,

    /// Time spent on this file
    pub duration: Duration,
}

impl FileReport {
    pub(crate) fn new(
        file: &MigrationFile,
        action: FileAction,
        batches: usize,
        duration: Duration,
    ) -> Self {
        Self {
            name: file.name.clone(),
            action,
            fingerprint: file.fingerprint.clone(),
            batches,
            duration,
        }
    }
}

/// Console form: `Run - 0001_init.sql`
impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.action, self.name)
    }
}

/// Summary of a completed pass
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// One report per migration file, in execution order
    pub reports: Vec<FileReport>,

    /// Whether the ledger table was present during the pass
    pub tracked: bool,

    /// Total time for the pass
    pub duration: Duration,
}

impl RunSummary {
    /// Number of files with the given action
    pub fn count(&self, action: FileAction) -> usize {
        self.reports.iter().filter(|r| r.action == action).count()
    }
}
