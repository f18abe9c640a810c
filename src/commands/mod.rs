//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` implementation producing a serializable result
//! - An `Outputable` implementation for table output

mod change;
mod get;
mod post;
mod read;
mod setup;
mod validate;

pub use change::{ChangeCmd, ChangeResult};
pub use get::{GetCmd, ResponseResult};
pub use post::PostCmd;
pub use read::{ReadCmd, RowsResult};
pub use setup::{prompt_credentials, SetupCmd, SetupResult};
pub use validate::{IpScopeArg, ValidateCmd, ValidateKind, ValidationReport};

use clap::Subcommand;
use std::path::PathBuf;

use crate::db::{ConfigError, Crud, DatabaseConfig, Value};
use crate::error::{Error, Result};
use crate::output::{OutputFormat, Outputable};

/// Settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub ini: Option<PathBuf>,
    pub database_url: Option<String>,
}

impl Context {
    /// Resolve database configuration.
    ///
    /// Priority: `--database-url` > `--ini` > `DATABASE_URL` > `DB_*` variables.
    pub fn database_config(&self) -> std::result::Result<DatabaseConfig, ConfigError> {
        match &self.database_url {
            Some(url) => DatabaseConfig::from_url(url),
            None => DatabaseConfig::resolve(self.ini.as_deref()),
        }
    }

    pub fn crud(&self) -> Result<Crud> {
        Ok(Crud::connect(&self.database_config()?)?)
    }
}

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, ctx: &Context) -> Result<Self::Output>;
}

/// Execute a command and format its result.
pub trait CommandRunner {
    fn run(self, ctx: &Context, format: OutputFormat) -> Result<String>;
}

impl<T: Execute> CommandRunner for T {
    fn run(self, ctx: &Context, format: OutputFormat) -> Result<String> {
        let result = self.execute(ctx)?;
        Ok(result.format(format))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively write a MySQL credentials .ini file
    Setup(SetupCmd),

    /// Run a SELECT statement and print the rows
    Read(ReadCmd),

    /// Run an INSERT/UPDATE/DELETE statement and print the change summary
    Change(ChangeCmd),

    /// Send a GET request and print the response body
    Get(GetCmd),

    /// Send a POST request and print the response body
    Post(PostCmd),

    /// Validate and sanitize a single value
    Validate(ValidateCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, ctx: &Context, format: OutputFormat) -> Result<String> {
        match self {
            Command::Setup(cmd) => cmd.run(ctx, format),
            Command::Read(cmd) => cmd.run(ctx, format),
            Command::Change(cmd) => cmd.run(ctx, format),
            Command::Get(cmd) => cmd.run(ctx, format),
            Command::Post(cmd) => cmd.run(ctx, format),
            Command::Validate(cmd) => cmd.run(ctx, format),
            Command::Unknown(args) => Err(Error::UnknownCommand(
                args.first().cloned().unwrap_or_default(),
            )),
        }
    }
}

/// Turn a `--param` argument into a statement parameter.
///
/// Integers and floats are bound as numbers when they print back exactly as
/// given (so `007` stays text), `NULL` binds SQL NULL, anything else is text.
pub fn parse_param(raw: &str) -> Value {
    if raw == "NULL" {
        return Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        if i.to_string() == raw {
            return Value::Int(i);
        }
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() && f.to_string() == raw {
            return Value::Float(f);
        }
    }
    Value::Text(raw.to_string())
}

/// Parse `Name: value` into a header pair.
pub fn parse_header(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected 'Name: value', got '{}'", raw)),
    }
}

/// Parse `key=value` into a query parameter pair.
pub fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected 'key=value', got '{}'", raw)),
    }
}
