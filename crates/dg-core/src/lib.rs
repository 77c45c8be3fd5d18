//! dg-core - Core library for driftguard
//!
//! This crate provides the pieces of a migration pass that do not touch the
//! database: runner configuration, content fingerprints, `GO` batch
//! splitting, and discovery of migration files on disk.

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod migration;
pub mod migration_name;
pub mod splitter;
pub mod sql_utils;

pub use config::RunnerConfig;
pub use error::{CoreError, CoreResult};
pub use fingerprint::{compute_fingerprint, decode_script, strip_bom, Fingerprint};
pub use migration::{discover_migrations, MigrationFile};
pub use migration_name::MigrationName;
pub use splitter::StatementSplitter;
