//! Transaction scope helper.

use crate::error::{DbError, DbResult};
use crate::traits::Database;

/// Run `body` inside `BEGIN` / `COMMIT`, rolling back if it fails.
///
/// A failed `COMMIT` is rolled back too and reported as a transaction
/// error. The body's own error is returned unchanged after the rollback.
pub fn with_transaction<D, F, T>(db: &D, body: F) -> DbResult<T>
where
    D: Database + ?Sized,
    F: FnOnce(&D) -> DbResult<T>,
{
    db.begin()
        .map_err(|e| DbError::TransactionError(format!("BEGIN failed: {e}")))?;

    let result = body(db);

    match &result {
        Ok(_) => {
            if let Err(commit_err) = db.commit() {
                let _ = db.rollback();
                return Err(DbError::TransactionError(format!(
                    "COMMIT failed: {commit_err}"
                )));
            }
        }
        Err(_) => {
            if let Err(rollback_err) = db.rollback() {
                log::warn!("ROLLBACK failed after error: {rollback_err}");
            }
        }
    }
    result
}

#[cfg(test)]
#[path = "transaction_test.rs"]
mod tests;
