//! Database access for one-shot CRUD statements.
//!
//! This module provides the database layer:
//! - Connection configuration (environment variables, `.ini` files, URLs)
//! - A `Database` trait with MySQL/MariaDB and SQLite implementations
//! - `Crud`, which picks between a plain query and a prepared statement
//! - Identifier sanitization for dynamic table and column names
//!
//! # Dispatch rule
//!
//! A statement with no parameters and no `?` placeholder is sent as a plain
//! text query. Anything else is prepared and executed with the parameters
//! bound in order, so a statement with placeholders and no parameters is
//! rejected by the driver rather than silently run.
//!
//! # Type Decisions
//!
//! **Why a `Value` enum instead of driver types in rows?**
//! MySQL's text protocol returns most cells as bytes while SQLite returns
//! typed cells. Converting both into `Value` at the backend boundary keeps
//! `Row` identical whichever backend produced it.

mod backend;
mod config;
mod crud;
mod escape;
mod mysql;
mod sqlite;
mod value;

pub use backend::{ChangeSummary, Database, Params, Row};
pub use config::{ConfigError, DatabaseConfig, MySqlConfig, DEFAULT_PORT, DEFAULT_SERVER};
pub use crud::{has_placeholder, run_change, run_query, Crud};
pub use escape::{sanitize_table_name, sanitize_with_whitelist};
pub use mysql::MySqlDatabase;
pub use sqlite::SqliteDatabase;
pub use value::Value;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database '{target}': {message}")]
    ConnectFailed { target: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Value '{name}' does not exist in the whitelist")]
    NotWhitelisted { name: String },
}

impl DbError {
    pub(crate) fn query(err: impl std::fmt::Display) -> Self {
        DbError::QueryFailed {
            message: err.to_string(),
        }
    }
}
