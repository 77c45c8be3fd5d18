//! Apply command implementation

use anyhow::{Context, Result};
use clap::CommandFactory;
use dg_core::RunnerConfig;
use dg_db::{Database, DuckDbBackend};
use dg_runner::{FileAction, MigrationRunner, RunSummary};
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::common::ExitCode;

/// JSON form of one file report
#[derive(Debug, Serialize)]
struct FileResult<'a> {
    name: &'a str,
    action: String,
    fingerprint: &'a str,
    batches: usize,
    duration_ms: u64,
}

/// JSON form of a completed pass
#[derive(Debug, Serialize)]
struct PassResult<'a> {
    files: Vec<FileResult<'a>>,
    run: usize,
    modified: usize,
    skipped: usize,
}

impl<'a> PassResult<'a> {
    fn from_summary(summary: &'a RunSummary) -> Self {
        let files = summary
            .reports
            .iter()
            .map(|r| FileResult {
                name: r.name.as_str(),
                action: r.action.to_string(),
                fingerprint: r.fingerprint.as_str(),
                batches: r.batches,
                duration_ms: u64::try_from(r.duration.as_millis()).unwrap_or(u64::MAX),
            })
            .collect();

        Self {
            files,
            run: summary.count(FileAction::Run),
            modified: summary.count(FileAction::Modified),
            skipped: summary.count(FileAction::Skipped),
        }
    }
}

/// Merge the optional config file with command-line flags.
///
/// Flags win over file values. Boolean flags can only switch a setting on.
pub(crate) fn resolve_config(cli: &Cli) -> Result<RunnerConfig> {
    let mut config = match &cli.config {
        Some(path) => RunnerConfig::load(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => RunnerConfig::default(),
    };

    if let Some(connection) = &cli.connection {
        config.connection = connection.clone();
    }
    if let Some(path) = &cli.path {
        config.migration_dir = path.clone();
    }
    if let Some(table) = &cli.ledger_table {
        config.ledger_table = table.clone();
    }
    config.allow_modified |= cli.allow_modified;
    config.install_ledger |= cli.install_ledger;
    config.skip_transactions |= cli.no_transaction;

    log::debug!("Resolved configuration: {config:?}");
    Ok(config)
}

/// Execute one migration pass
pub fn execute(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    // Usage goes out before any database contact.
    if let Err(err) = config.validate() {
        eprintln!("Error: {err}\n");
        Cli::command()
            .print_help()
            .context("Failed to print usage")?;
        return Err(ExitCode(1).into());
    }

    if cli.verbose {
        eprintln!("[verbose] Connecting to {}", config.connection);
        eprintln!(
            "[verbose] Applying migrations from {}",
            config.migration_dir.display()
        );
    }

    let db = DuckDbBackend::new(&config.connection).context("Failed to connect to database")?;
    if cli.verbose {
        eprintln!("[verbose] Connected to {} target", db.db_type());
    }

    let text = cli.output == OutputFormat::Text;
    let runner = MigrationRunner::new(&db, &config);
    let summary = runner
        .run(|report| {
            if text {
                println!("{report}");
            }
            if cli.verbose {
                eprintln!(
                    "[verbose] {}: {} batch(es) in {}ms",
                    report.name,
                    report.batches,
                    report.duration.as_millis()
                );
            }
        })
        .context("Migration pass aborted")?;

    if !summary.tracked {
        eprintln!(
            "Warning: ledger table {} is not installed; no migrations were recorded",
            config.ledger_table
        );
    }

    match cli.output {
        OutputFormat::Text => {
            println!(
                "\n{} run, {} modified, {} skipped in {}ms",
                summary.count(FileAction::Run),
                summary.count(FileAction::Modified),
                summary.count(FileAction::Skipped),
                summary.duration.as_millis()
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&PassResult::from_summary(&summary))
                .context("Failed to serialize summary")?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "apply_test.rs"]
mod tests;
