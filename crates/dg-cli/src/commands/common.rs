//! Shared utilities for CLI commands

use std::fmt;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that the database connection is closed properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl ExitCode {
    /// Status byte handed to the OS; out-of-range codes become 1
    pub(crate) fn as_u8(&self) -> u8 {
        u8::try_from(self.0).unwrap_or(1)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Empty: this is control flow, and the reason was already printed.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}
