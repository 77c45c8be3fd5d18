use super::*;

fn row_count(db: &DuckDbBackend, table: &str) -> usize {
    db.query_one(&format!("SELECT CAST(COUNT(*) AS VARCHAR) FROM {table}"), params![])
        .unwrap()
        .and_then(|n| n.parse().ok())
        .unwrap()
}

#[test]
fn test_in_memory() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert_eq!(db.db_type(), "duckdb");
}

#[test]
fn test_new_memory_target() {
    let db = DuckDbBackend::new(MEMORY_TARGET).unwrap();
    db.execute_batch("CREATE TABLE t (id INT)").unwrap();
    assert!(db.relation_exists("t").unwrap());
}

#[test]
fn test_from_path_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("target.duckdb");
    {
        let db = DuckDbBackend::new(path.to_str().unwrap()).unwrap();
        db.execute_batch("CREATE TABLE kept (id INT); INSERT INTO kept VALUES (7);")
            .unwrap();
    }

    let db = DuckDbBackend::from_path(&path).unwrap();
    assert_eq!(
        db.query_one("SELECT CAST(id AS VARCHAR) FROM kept", params![]).unwrap(),
        Some("7".to_string())
    );
}

#[test]
fn test_execute_batch_multiple_statements() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE t1 (id INT); CREATE TABLE t2 (id INT); INSERT INTO t1 VALUES (1);",
    )
    .unwrap();

    assert!(db.relation_exists("t1").unwrap());
    assert!(db.relation_exists("t2").unwrap());
}

#[test]
fn test_execute_returns_affected_rows() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t (id INT)").unwrap();
    let affected = db
        .execute("INSERT INTO t VALUES (1), (2), (3)", params![])
        .unwrap();
    assert_eq!(affected, 3);
}

#[test]
fn test_execute_error_includes_sql() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.execute("SELEC 1", params![]).unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
    assert!(err.to_string().contains("SELEC 1"));
}

#[test]
fn test_missing_table_is_execution_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.execute_batch("SELECT * FROM nowhere").unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn test_execute_binds_parameters() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE files (id INTEGER, name VARCHAR)")
        .unwrap();

    let name = "o'neil; DROP TABLE files; --.sql";
    let affected = db
        .execute("INSERT INTO files VALUES (?, ?)", params![1_i64, name])
        .unwrap();

    assert_eq!(affected, 1);
    assert_eq!(
        db.query_one("SELECT name FROM files WHERE id = ?", params![1_i64])
            .unwrap(),
        Some(name.to_string())
    );
    assert_eq!(row_count(&db, "files"), 1);
}

#[test]
fn test_query_one() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE users (id INT, name VARCHAR);
         INSERT INTO users VALUES (1, 'Alice'), (2, NULL);",
    )
    .unwrap();

    assert_eq!(
        db.query_one("SELECT name FROM users WHERE id = ?", params![1_i64]).unwrap(),
        Some("Alice".to_string())
    );
    assert_eq!(db.query_one("SELECT name FROM users WHERE id = ?", params![2_i64]).unwrap(), None);
    assert_eq!(db.query_one("SELECT name FROM users WHERE id = ?", params![3_i64]).unwrap(), None);
}

#[test]
fn test_query_rows() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE users (id INT, name VARCHAR);
         INSERT INTO users VALUES (1, 'Alice'), (2, NULL);",
    )
    .unwrap();

    let rows = db
        .query_rows(
            "SELECT CAST(id AS VARCHAR), name FROM users WHERE id <= ? ORDER BY id",
            params![2_i64],
            2,
        )
        .unwrap();
    assert_eq!(
        rows,
        vec![
            vec![Some("1".to_string()), Some("Alice".to_string())],
            vec![Some("2".to_string()), None],
        ]
    );
}

#[test]
fn test_relation_not_exists() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert!(!db.relation_exists("nonexistent").unwrap());
}

#[test]
fn test_relation_exists_in_schema() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE SCHEMA ops; CREATE TABLE ops.runs (id INT);")
        .unwrap();

    assert!(db.relation_exists("ops.runs").unwrap());
    assert!(!db.relation_exists("runs").unwrap());
}

#[test]
fn test_relation_name_with_quote() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(r#"CREATE TABLE "it's" (id INT)"#).unwrap();

    assert!(db.relation_exists("it's").unwrap());
}

#[test]
fn test_transaction_methods() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t (id INT)").unwrap();

    db.begin().unwrap();
    db.execute("INSERT INTO t VALUES (1)", params![]).unwrap();
    db.rollback().unwrap();
    assert_eq!(row_count(&db, "t"), 0);

    db.begin().unwrap();
    db.execute("INSERT INTO t VALUES (1)", params![]).unwrap();
    db.commit().unwrap();
    assert_eq!(row_count(&db, "t"), 1);
}
