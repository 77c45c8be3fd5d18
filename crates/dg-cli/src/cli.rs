//! CLI argument definitions using clap derive API

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// driftguard - apply SQL migrations once, in order, and refuse drifted scripts
#[derive(Parser, Debug)]
#[command(name = "dg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database target (DuckDB file path or :memory:)
    #[arg(short, long, env = "DG_CONNECTION")]
    pub connection: Option<String>,

    /// Directory holding the migration scripts [default: ./]
    #[arg(short, long, env = "DG_PATH")]
    pub path: Option<PathBuf>,

    /// Re-run migrations whose content changed since they were recorded
    #[arg(short = 'f', long)]
    pub allow_modified: bool,

    /// Create the ledger table if it does not exist
    #[arg(short, long)]
    pub install_ledger: bool,

    /// Execute batches without wrapping each one in a transaction
    #[arg(short, long)]
    pub no_transaction: bool,

    /// Ledger table name, optionally schema-qualified [default: migration_ledger]
    #[arg(long)]
    pub ledger_table: Option<String>,

    /// YAML file with default settings; flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per migration file
    Text,
    /// A single JSON summary once the pass completes
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
