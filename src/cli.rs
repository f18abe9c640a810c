//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "shine", author, version, about, long_about = None)]
pub struct Args {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Credentials .ini file (takes precedence over DATABASE_URL and DB_* variables)
    #[arg(long, global = true)]
    pub ini: Option<PathBuf>,

    /// Database URL or SQLite path (takes precedence over --ini)
    #[arg(long = "database-url", global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}
