//! SQL identifier helpers for statements that name the ledger table.

/// Quote a SQL identifier, doubling embedded double quotes.
///
/// # Examples
/// ```
/// use dg_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("migration_ledger"), r#""migration_ledger""#);
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote a possibly schema-qualified name part by part.
///
/// # Examples
/// ```
/// use dg_core::sql_utils::quote_qualified;
/// assert_eq!(quote_qualified("ops.ledger"), r#""ops"."ledger""#);
/// ```
pub fn quote_qualified(name: &str) -> String {
    name.split('.')
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(".")
}

/// Split a possibly schema-qualified name into (schema, table).
///
/// Uses the last `.`; an unqualified name lives in `main`.
pub fn split_qualified_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) => (&name[..pos], &name[pos + 1..]),
        None => ("main", name),
    }
}

#[cfg(test)]
#[path = "sql_utils_test.rs"]
mod tests;
