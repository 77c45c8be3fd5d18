use super::*;

#[test]
fn test_split_two_batches() {
    let splitter = StatementSplitter::new();
    assert_eq!(
        splitter.split("SELECT 1\nGO\nSELECT 2"),
        vec!["SELECT 1", "SELECT 2"]
    );
}

#[test]
fn test_split_without_separator_is_one_batch() {
    let splitter = StatementSplitter::new();
    let script = "CREATE TABLE t (id INT);\nINSERT INTO t VALUES (1);";
    assert_eq!(splitter.split(script), vec![script]);
}

#[test]
fn test_split_trailing_separator_discarded() {
    let splitter = StatementSplitter::new();
    assert_eq!(splitter.split("SELECT 1\nGO\n"), vec!["SELECT 1"]);
    assert_eq!(splitter.split("SELECT 1\nGO"), vec!["SELECT 1"]);
}

#[test]
fn test_split_leading_separator_discarded() {
    let splitter = StatementSplitter::new();
    assert_eq!(splitter.split("GO\nSELECT 1"), vec!["SELECT 1"]);
}

#[test]
fn test_split_is_case_insensitive() {
    let splitter = StatementSplitter::new();
    assert_eq!(
        splitter.split("SELECT 1\ngo\nSELECT 2\nGo\nSELECT 3"),
        vec!["SELECT 1", "SELECT 2", "SELECT 3"]
    );
}

#[test]
fn test_split_crlf_and_padding() {
    let splitter = StatementSplitter::new();
    assert_eq!(
        splitter.split("SELECT 1\r\n  GO \t\r\nSELECT 2\r\n"),
        vec!["SELECT 1", "SELECT 2"]
    );
}

#[test]
fn test_split_ignores_go_inside_lines() {
    let splitter = StatementSplitter::new();
    let script = "SELECT 'GO' AS word;\nSELECT 1 AS gopher;\n-- GOTO end";
    assert_eq!(splitter.split(script), vec![script]);
}

#[test]
fn test_split_drops_empty_batches_between_separators() {
    let splitter = StatementSplitter::new();
    assert_eq!(
        splitter.split("SELECT 1\nGO\n\n   \nGO\nSELECT 2"),
        vec!["SELECT 1", "SELECT 2"]
    );
}

#[test]
fn test_split_blank_script_has_no_batches() {
    let splitter = StatementSplitter::new();
    assert!(splitter.split("").is_empty());
    assert!(splitter.split(" \n\t\n").is_empty());
    assert!(splitter.split("GO\nGO\n").is_empty());
}

#[test]
fn test_split_preserves_order() {
    let splitter = StatementSplitter::default();
    let script = "ALTER TABLE t ADD COLUMN c INT\nGO\nCREATE VIEW v AS SELECT c FROM t";
    let batches = splitter.split(script);
    assert_eq!(batches.len(), 2);
    assert!(batches[0].starts_with("ALTER"));
    assert!(batches[1].starts_with("CREATE VIEW"));
}
