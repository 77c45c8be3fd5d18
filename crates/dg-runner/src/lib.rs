//! dg-runner - Migration runner for driftguard
//!
//! This crate applies a directory of migration scripts against a database:
//! each file is fingerprinted, compared with the ledger, and then skipped,
//! run, re-run as modified, or refused as drift.

pub mod decision;
pub mod error;
pub mod report;
pub mod runner;

pub use decision::{decide, Decision};
pub use error::{RunError, RunResult};
pub use report::{FileAction, FileReport, RunSummary};
pub use runner::MigrationRunner;
