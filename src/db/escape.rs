//! Identifier sanitization for dynamic table and column names.
//!
//! Placeholders only bind values, so table and column names that come from
//! user input have to be quoted here before they are spliced into SQL.

use log::warn;

use super::DbError;

/// Quote an identifier for MySQL, doubling any embedded backtick.
///
/// `table_1` becomes `` `table_1` `` and `` a`b `` becomes `` `a``b` ``.
pub fn sanitize_table_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 2);
    result.push('`');
    for c in name.chars() {
        if c == '`' {
            result.push('`');
        }
        result.push(c);
    }
    result.push('`');
    result
}

/// Check a dynamic identifier against a whitelist.
///
/// With a non-empty whitelist the name must be one of its entries and is
/// returned as-is. An empty whitelist falls back to [`sanitize_table_name`].
pub fn sanitize_with_whitelist(name: &str, whitelist: &[&str]) -> Result<String, DbError> {
    if whitelist.is_empty() {
        return Ok(sanitize_table_name(name));
    }

    if whitelist.contains(&name) {
        Ok(name.to_string())
    } else {
        warn!("Rejected identifier '{}' not present in whitelist", name);
        Err(DbError::NotWhitelisted {
            name: name.to_string(),
        })
    }
}
