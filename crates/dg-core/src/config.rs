//! Runner configuration and optional YAML config file parsing.

use crate::error::{CoreError, CoreResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for one migration pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Database target (a DuckDB file path or `:memory:`)
    #[serde(default)]
    pub connection: String,

    /// Directory holding the migration scripts
    #[serde(default = "default_migration_dir")]
    pub migration_dir: PathBuf,

    /// Re-run migrations whose content no longer matches the ledger
    #[serde(default)]
    pub allow_modified: bool,

    /// Create the ledger table when it does not exist yet
    #[serde(default)]
    pub install_ledger: bool,

    /// Execute batches directly instead of one transaction per batch
    #[serde(default)]
    pub skip_transactions: bool,

    /// Ledger table name, optionally schema-qualified
    #[serde(default = "default_ledger_table")]
    pub ledger_table: String,
}

fn default_migration_dir() -> PathBuf {
    PathBuf::from("./")
}

fn default_ledger_table() -> String {
    "migration_ledger".to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            connection: String::new(),
            migration_dir: default_migration_dir(),
            allow_modified: false,
            install_ledger: false,
            skip_transactions: false,
            ledger_table: default_ledger_table(),
        }
    }
}

impl RunnerConfig {
    /// Create a configuration with defaults for everything but the target.
    pub fn new(connection: impl Into<String>, migration_dir: impl Into<PathBuf>) -> Self {
        Self {
            connection: connection.into(),
            migration_dir: migration_dir.into(),
            ..Self::default()
        }
    }

    /// Load settings from a YAML file.
    ///
    /// The file is not validated here; values may still be filled in from
    /// the command line before [`validate`](Self::validate) runs.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: RunnerConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.connection.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "a connection target is required".to_string(),
            });
        }

        if self.ledger_table.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "ledger table name cannot be empty".to_string(),
            });
        }

        // `table` or `schema.table`; the existence check has no catalog part.
        let parts: Vec<&str> = self.ledger_table.split('.').collect();
        if parts.len() > 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "invalid ledger table name '{}' (expected table or schema.table)",
                    self.ledger_table
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
