//! One-shot CRUD helpers.
//!
//! `Crud` owns a single connection for its lifetime and runs each statement in
//! one call:
//!
//! ```no_run
//! use shine::db::{Crud, Value};
//!
//! let crud = Crud::from_env()?;
//! let users = crud.read("SELECT * FROM users WHERE id = ?", &[Value::Int(1)])?;
//! let user = &users[0];
//! # Ok::<(), shine::db::DbError>(())
//! ```

use log::debug;

use super::backend::{ChangeSummary, Database, Row};
use super::config::{DatabaseConfig, MySqlConfig};
use super::value::Value;
use super::DbError;

/// Whether a statement contains a `?` placeholder.
pub fn has_placeholder(statement: &str) -> bool {
    statement.contains('?')
}

/// Run a SELECT-style statement and return every row.
///
/// With no parameters and no placeholder the statement is sent as a plain
/// query; otherwise it is prepared and executed with `params`. An empty
/// result is an empty `Vec`.
pub fn run_query(db: &dyn Database, statement: &str, params: &[Value]) -> Result<Vec<Row>, DbError> {
    if params.is_empty() && !has_placeholder(statement) {
        debug!("[{}] query: {}", db.backend_name(), statement);
        db.query(statement)
    } else {
        debug!(
            "[{}] prepared query ({} params): {}",
            db.backend_name(),
            params.len(),
            statement
        );
        db.query_prepared(statement, params)
    }
}

/// Run an INSERT/UPDATE/DELETE statement.
///
/// Uses the same dispatch rule as [`run_query`] and reports the last insert
/// id and the affected row count.
pub fn run_change(
    db: &dyn Database,
    statement: &str,
    params: &[Value],
) -> Result<ChangeSummary, DbError> {
    let summary = if params.is_empty() && !has_placeholder(statement) {
        debug!("[{}] execute: {}", db.backend_name(), statement);
        db.execute(statement)?
    } else {
        debug!(
            "[{}] prepared execute ({} params): {}",
            db.backend_name(),
            params.len(),
            statement
        );
        db.execute_prepared(statement, params)?
    };
    debug!(
        "[{}] {} rows affected, last insert id {:?}",
        db.backend_name(),
        summary.row_count,
        summary.last_insert_id
    );
    Ok(summary)
}

/// A database handle for one-shot statements.
///
/// Open it once and reuse it; every `Crud` holds its own connection.
pub struct Crud {
    db: Box<dyn Database>,
}

impl Crud {
    /// Open the connection described by `config`.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        Ok(Self {
            db: config.connect()?,
        })
    }

    /// Connect to MySQL using the `DB_SERVER`, `DB_NAME`, `DB_USERNAME` and
    /// `DB_PASSWORD` environment variables.
    ///
    /// # Errors
    /// `DbError::Config` when credentials are missing, `DbError::ConnectFailed`
    /// when the server rejects them.
    pub fn from_env() -> Result<Self, DbError> {
        let config = MySqlConfig::from_env()?;
        Self::connect(&DatabaseConfig::MySql(config))
    }

    /// Wrap an already opened backend.
    pub fn with_backend(db: Box<dyn Database>) -> Self {
        Self { db }
    }

    /// Run a SELECT-style statement. See [`run_query`].
    pub fn read(&self, statement: &str, params: &[Value]) -> Result<Vec<Row>, DbError> {
        run_query(self.db.as_ref(), statement, params)
    }

    /// Run an INSERT/UPDATE/DELETE statement. See [`run_change`].
    pub fn change(&self, statement: &str, params: &[Value]) -> Result<ChangeSummary, DbError> {
        run_change(self.db.as_ref(), statement, params)
    }

    pub fn backend(&self) -> &dyn Database {
        self.db.as_ref()
    }
}
