//! Strongly-typed migration file name.

use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Base file name of a migration (e.g. `0001_create_users.sql`).
///
/// This is the ledger key: case-sensitive, never empty, never carrying a
/// directory. Ordering is the byte order of the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MigrationName(String);

impl MigrationName {
    /// Wrap a base file name, returning `None` if it is empty or has a path
    /// separator in it.
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() || name.contains(['/', '\\']) {
            return None;
        }
        Some(Self(name))
    }

    /// Return the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MigrationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MigrationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for MigrationName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for MigrationName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MigrationName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "migration_name_test.rs"]
mod tests;
