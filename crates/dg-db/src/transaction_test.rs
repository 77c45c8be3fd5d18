use super::*;
use crate::{params, DuckDbBackend};

fn count(db: &DuckDbBackend) -> usize {
    db.query_one("SELECT CAST(COUNT(*) AS VARCHAR) FROM t", params![])
        .unwrap()
        .and_then(|n| n.parse().ok())
        .unwrap()
}

#[test]
fn test_transaction_commits_on_success() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t (id INT)").unwrap();

    let affected = with_transaction(&db, |conn| {
        conn.execute("INSERT INTO t VALUES (?)", params![1_i64])
    })
    .unwrap();

    assert_eq!(affected, 1);
    assert_eq!(count(&db), 1);
}

#[test]
fn test_transaction_rolls_back_on_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t (id INT)").unwrap();

    let result: DbResult<()> = with_transaction(&db, |conn| {
        conn.execute("INSERT INTO t VALUES (?)", params![1_i64])?;
        conn.execute_batch("INSERT INTO missing VALUES (1)")
    });

    assert!(matches!(result, Err(DbError::ExecutionError(_))));
    assert_eq!(count(&db), 0, "Row should have been rolled back");
}

#[test]
fn test_transaction_leaves_connection_usable() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t (id INT)").unwrap();

    let _ = with_transaction(&db, |conn| conn.execute_batch("SELEC broken"));
    with_transaction(&db, |conn| {
        conn.execute("INSERT INTO t VALUES (?)", params![2_i64])
    })
    .unwrap();

    assert_eq!(count(&db), 1);
}

#[test]
fn test_transaction_through_trait_object() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t (id INT)").unwrap();
    let dynamic: &dyn Database = &db;

    with_transaction(dynamic, |conn| conn.execute_batch("INSERT INTO t VALUES (3)")).unwrap();

    assert_eq!(count(&db), 1);
}
