//! Migration file discovery and loading.

use crate::error::{CoreError, CoreResult};
use crate::fingerprint::{compute_fingerprint, decode_script, Fingerprint};
use crate::migration_name::MigrationName;
use std::path::{Path, PathBuf};

/// Name suffix (case-insensitive) that marks a file as a migration script.
const MIGRATION_SUFFIX: &str = ".sql";

/// A migration script read from disk.
#[derive(Debug, Clone)]
pub struct MigrationFile {
    /// Base file name, the ledger key
    pub name: MigrationName,

    /// Path the content was read from
    pub path: PathBuf,

    /// Raw bytes as stored on disk
    pub content: Vec<u8>,

    /// Fingerprint of `content`
    pub fingerprint: Fingerprint,
}

impl MigrationFile {
    /// Read a migration file and fingerprint its content.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let name = migration_name(path)?;
        let content = std::fs::read(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::from_bytes(name, path.to_path_buf(), content))
    }

    /// Build a migration from bytes already in memory.
    pub fn from_bytes(name: MigrationName, path: PathBuf, content: Vec<u8>) -> Self {
        let fingerprint = compute_fingerprint(&content);
        Self {
            name,
            path,
            content,
            fingerprint,
        }
    }

    /// Decode the content into executable script text.
    pub fn script(&self) -> CoreResult<String> {
        decode_script(self.name.as_str(), &self.content)
    }
}

/// List the migration scripts directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. Ordering is the byte order of the
/// file names, which is the only execution order there is.
pub fn discover_migrations(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let unreadable = |e| CoreError::MigrationDirUnreadable {
        path: dir.display().to_string(),
        source: e,
    };

    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();

        if !path.is_file() || !has_migration_suffix(&path) {
            continue;
        }

        let name = migration_name(&path)?;
        found.push((name, path));
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    log::debug!("Discovered {} migrations in {}", found.len(), dir.display());
    Ok(found.into_iter().map(|(_, path)| path).collect())
}

/// Matches on the name suffix, so a bare `.sql` counts too
/// (`Path::extension` treats it as a stem with no extension).
fn has_migration_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.len().checked_sub(MIGRATION_SUFFIX.len()).and_then(|at| n.get(at..)))
        .is_some_and(|suffix| suffix.eq_ignore_ascii_case(MIGRATION_SUFFIX))
}

fn migration_name(path: &Path) -> CoreResult<MigrationName> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(MigrationName::try_new)
        .ok_or_else(|| CoreError::InvalidFileName {
            path: path.display().to_string(),
        })
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
