//! Per-file decision: skip, run, re-run, or refuse.

use dg_core::Fingerprint;

/// What to do with one migration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No ledger fingerprint: execute and record a new entry
    RunNew,
    /// Ledger fingerprint matches: nothing to do
    Skip,
    /// Content changed and modified runs are allowed: execute and update
    RunModified,
    /// Content changed and modified runs are not allowed: stop the pass
    Abort,
}

/// Decide the action for a file from its stored and current fingerprints.
pub fn decide(
    stored: Option<&Fingerprint>,
    computed: &Fingerprint,
    allow_modified: bool,
) -> Decision {
    match stored {
        None => Decision::RunNew,
        Some(stored) if stored == computed => Decision::Skip,
        Some(_) if allow_modified => Decision::RunModified,
        Some(_) => Decision::Abort,
    }
}
