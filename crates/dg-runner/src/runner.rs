//! Migration pass orchestration

use crate::decision::{decide, Decision};
use crate::error::{RunError, RunResult};
use crate::report::{FileAction, FileReport, RunSummary};
use dg_core::{discover_migrations, MigrationFile, MigrationName, RunnerConfig, StatementSplitter};
use dg_db::{with_transaction, Database};
use dg_ledger::{LedgerStore, Outcome};
use std::time::Instant;

/// Applies the migrations in a directory, one file and one batch at a time.
///
/// Any error stops the pass immediately. The file that failed gets no
/// ledger write, so the next pass starts it again from its first batch.
pub struct MigrationRunner<'a> {
    db: &'a dyn Database,
    config: &'a RunnerConfig,
    ledger: LedgerStore<'a>,
    splitter: StatementSplitter,
}

impl<'a> MigrationRunner<'a> {
    /// Create a runner over `db` configured by `config`
    pub fn new(db: &'a dyn Database, config: &'a RunnerConfig) -> Self {
        Self {
            db,
            config,
            ledger: LedgerStore::new(db, config.ledger_table.clone()),
            splitter: StatementSplitter::new(),
        }
    }

    /// Run every migration in the configured directory.
    ///
    /// An invalid configuration is rejected before the database is touched.
    ///
    /// `on_file` sees each report as soon as its file is done, so progress
    /// is visible even when a later file aborts the pass.
    pub fn run<F>(&self, mut on_file: F) -> RunResult<RunSummary>
    where
        F: FnMut(&FileReport),
    {
        let start = Instant::now();
        self.config.validate()?;
        let tracked = self.prepare_ledger()?;
        let paths = discover_migrations(&self.config.migration_dir)?;

        let mut reports = Vec::with_capacity(paths.len());
        for path in &paths {
            let file = MigrationFile::load(path)?;
            let report = self.apply(&file, tracked)?;
            on_file(&report);
            reports.push(report);
        }

        Ok(RunSummary {
            reports,
            tracked,
            duration: start.elapsed(),
        })
    }

    /// Install the ledger if configured to, then report whether it exists.
    pub fn prepare_ledger(&self) -> RunResult<bool> {
        if self.config.install_ledger && self.ledger.ensure_table()? {
            log::debug!("Installed ledger table {}", self.ledger.table());
        }

        let tracked = self.ledger.exists()?;
        if !tracked {
            log::warn!(
                "Ledger table {} is not installed; every migration will run and nothing is recorded",
                self.ledger.table()
            );
        }
        Ok(tracked)
    }

    /// Decide, execute and record a single migration file.
    ///
    /// With `tracked == false` the ledger is neither read nor written and
    /// the file always runs.
    pub fn apply(&self, file: &MigrationFile, tracked: bool) -> RunResult<FileReport> {
        let start = Instant::now();

        let stored = if tracked {
            self.ledger.get_fingerprint(&file.name)?
        } else {
            None
        };

        let action = match decide(stored.as_ref(), &file.fingerprint, self.config.allow_modified)
        {
            Decision::Skip => {
                return Ok(FileReport::new(file, FileAction::Skipped, 0, start.elapsed()));
            }
            Decision::Abort => {
                return Err(RunError::Drift {
                    name: file.name.to_string(),
                    stored: stored.map(|s| s.to_string()).unwrap_or_default(),
                    computed: file.fingerprint.to_string(),
                });
            }
            Decision::RunNew => FileAction::Run,
            Decision::RunModified => FileAction::Modified,
        };

        let script = file.script()?;
        let batches = self.splitter.split(&script);
        self.execute_batches(&file.name, &batches)?;

        if tracked {
            match action {
                FileAction::Modified => {
                    self.ledger
                        .record_update(&file.name, &file.fingerprint, Outcome::Modified)?;
                }
                _ => {
                    self.ledger
                        .record_new(&file.name, &file.fingerprint, Outcome::Success)?;
                }
            }
        }

        Ok(FileReport::new(file, action, batches.len(), start.elapsed()))
    }

    /// Execute batches in order, each in its own transaction unless
    /// transactions are switched off.
    fn execute_batches(&self, name: &MigrationName, batches: &[&str]) -> RunResult<()> {
        let total = batches.len();

        for (index, batch) in batches.iter().enumerate() {
            log::debug!("{name}: executing batch {}/{total}", index + 1);

            let result = if self.config.skip_transactions {
                self.db.execute_batch(batch)
            } else {
                with_transaction(self.db, |conn| conn.execute_batch(batch))
            };

            result.map_err(|source| RunError::Execution {
                name: name.to_string(),
                batch: index + 1,
                total,
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
