//! SQLite backend implementation (file-backed or in-memory).

use std::path::Path;

use rusqlite::types::{Value as SqliteValue, ValueRef};
use rusqlite::{params_from_iter, Connection, Statement};

use super::backend::{ChangeSummary, Database, Row};
use super::value::Value;
use super::DbError;

/// SQLite backend holding a single connection.
pub struct SqliteDatabase {
    conn: Connection,
    in_memory: bool,
}

impl SqliteDatabase {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectFailed {
            target: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            conn,
            in_memory: false,
        })
    }

    /// Create an in-memory database instance.
    ///
    /// Used for tests to avoid disk I/O and temp file management.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory().map_err(|e| DbError::ConnectFailed {
            target: ":memory:".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            conn,
            in_memory: true,
        })
    }

    fn collect_rows(
        &self,
        statement: &str,
        params: &[Value],
    ) -> Result<Vec<Row>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(statement)?;
        let columns = column_names(&stmt);
        let mut rows = stmt.query(params_from_iter(params.iter().map(to_sqlite_value)))?;

        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let mut fields = Vec::with_capacity(columns.len());
            for (idx, name) in columns.iter().enumerate() {
                fields.push((name.clone(), from_value_ref(row.get_ref(idx)?)));
            }
            result.push(Row::new(fields));
        }
        Ok(result)
    }

    fn apply_change(&self, statement: &str, params: &[Value]) -> Result<ChangeSummary, rusqlite::Error> {
        let mut stmt = self.conn.prepare(statement)?;
        let row_count = stmt.execute(params_from_iter(params.iter().map(to_sqlite_value)))?;

        // last_insert_rowid is left over from earlier statements, so only
        // trust it after an insert that actually wrote rows.
        let inserted = row_count > 0 && is_insert(statement);
        Ok(ChangeSummary {
            last_insert_id: inserted.then(|| self.conn.last_insert_rowid() as u64),
            row_count: row_count as u64,
        })
    }
}

impl Database for SqliteDatabase {
    fn query(&self, statement: &str) -> Result<Vec<Row>, DbError> {
        self.collect_rows(statement, &[]).map_err(DbError::query)
    }

    fn query_prepared(&self, statement: &str, params: &[Value]) -> Result<Vec<Row>, DbError> {
        self.collect_rows(statement, params).map_err(DbError::query)
    }

    fn execute(&self, statement: &str) -> Result<ChangeSummary, DbError> {
        self.apply_change(statement, &[]).map_err(DbError::query)
    }

    fn execute_prepared(
        &self,
        statement: &str,
        params: &[Value],
    ) -> Result<ChangeSummary, DbError> {
        self.apply_change(statement, params).map_err(DbError::query)
    }

    fn backend_name(&self) -> &'static str {
        if self.in_memory {
            "SqliteMem"
        } else {
            "Sqlite"
        }
    }
}

/// `INSERT ...`, `INSERT OR REPLACE ...` and `REPLACE ...` statements.
fn is_insert(statement: &str) -> bool {
    let keyword = statement
        .trim_start_matches(|c: char| c.is_whitespace() || c == '(')
        .split(|c: char| !c.is_ascii_alphabetic())
        .next()
        .unwrap_or_default();
    keyword.eq_ignore_ascii_case("insert") || keyword.eq_ignore_ascii_case("replace")
}

fn column_names(stmt: &Statement<'_>) -> Vec<String> {
    stmt.column_names().into_iter().map(String::from).collect()
}

fn to_sqlite_value(value: &Value) -> SqliteValue {
    match value {
        Value::Null => SqliteValue::Null,
        Value::Int(i) => SqliteValue::Integer(*i),
        Value::UInt(u) => match i64::try_from(*u) {
            Ok(i) => SqliteValue::Integer(i),
            Err(_) => SqliteValue::Text(u.to_string()),
        },
        Value::Float(f) => SqliteValue::Real(*f),
        Value::Text(s) => SqliteValue::Text(s.clone()),
        Value::Bytes(b) => SqliteValue::Blob(b.clone()),
    }
}

fn from_value_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Int(i),
        ValueRef::Real(f) => Value::Float(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Bytes(b.to_vec()),
    }
}
