//! dg-db - Database layer for driftguard
//!
//! This crate provides the `Database` trait the migration runner talks to,
//! the `with_transaction` helper, and the DuckDB implementation.

pub mod duckdb;
pub mod error;
pub mod traits;
pub mod transaction;

pub use crate::duckdb::DuckDbBackend;
pub use ::duckdb::{params, ToSql};
pub use error::{DbError, DbResult};
pub use traits::Database;
pub use transaction::with_transaction;
