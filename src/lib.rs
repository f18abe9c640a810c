//! shine - CRUD, HTTP and input-validation helpers.
//!
//! - [`db`]: a thin CRUD wrapper over MySQL/MariaDB (and SQLite) with
//!   prepared statements and configuration from the environment, an ini
//!   file or a URL
//! - [`http`]: blocking GET/POST requests, incoming request inspection and
//!   CORS response headers
//! - [`data`]: sanitizers and validators for emails, phone numbers, URLs,
//!   numbers and IP addresses
//!
//! The `shine` binary exposes the same operations on the command line.

pub mod cli;
pub mod commands;
pub mod data;
pub mod db;
pub mod error;
pub mod http;
pub mod output;

#[macro_use]
pub mod test_macros;

pub use error::{Error, Result};
