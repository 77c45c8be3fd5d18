//! Run ledger for driftguard.
//!
//! The ledger is a single table in the target database holding one row per
//! migration file name ever applied: when it last ran, the fingerprint of
//! the content that ran, and how it went. [`LedgerStore`] is the only code
//! that reads or writes it.

pub mod ddl;
pub mod entry;
pub mod error;
pub mod store;

pub use entry::{LedgerEntry, Outcome};
pub use error::{LedgerError, LedgerResult};
pub use store::LedgerStore;
