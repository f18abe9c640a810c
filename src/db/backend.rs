//! Database backend trait for abstracting the MySQL and SQLite drivers.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::value::Value;
use super::DbError;

/// Positional parameters bound to `?` placeholders, in order.
pub type Params = Vec<Value>;

/// One result row: column names paired with their values, in select order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new(fields: Vec<(String, Value)>) -> Self {
        Self { fields }
    }

    /// Look up a column by name. The first match wins for duplicate names.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Look up a column by position.
    pub fn get_index(&self, idx: usize) -> Option<&Value> {
        self.fields.get(idx).map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Outcome of an INSERT/UPDATE/DELETE statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    /// ID of the last inserted row, `None` if the statement inserted nothing.
    pub last_insert_id: Option<u64>,
    /// Number of rows affected by the statement.
    pub row_count: u64,
}

/// Trait for database backends that can execute statements.
///
/// Implementations hold exactly one connection. Statements are dispatched in
/// one of two ways: with no parameters they are sent as plain text queries,
/// otherwise they are prepared and executed with `params` bound in order.
/// Choosing between the two is the caller's job (see `crud`).
pub trait Database {
    /// Run a plain text statement and collect its rows.
    fn query(&self, statement: &str) -> Result<Vec<Row>, DbError>;

    /// Prepare `statement`, bind `params` and collect the rows.
    fn query_prepared(&self, statement: &str, params: &[Value]) -> Result<Vec<Row>, DbError>;

    /// Run a plain text statement that changes data.
    fn execute(&self, statement: &str) -> Result<ChangeSummary, DbError>;

    /// Prepare `statement`, bind `params` and execute it.
    fn execute_prepared(&self, statement: &str, params: &[Value])
        -> Result<ChangeSummary, DbError>;

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
