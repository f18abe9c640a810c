mod execute;
mod output;

use clap::Args;
use std::path::PathBuf;

pub use execute::{prompt_credentials, SetupResult};

/// Interactively write a MySQL credentials .ini file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  shine setup                            # Prompt and write ./shine.ini
  shine setup --output config/db.ini     # Write somewhere else
  shine setup --force                    # Overwrite an existing file")]
pub struct SetupCmd {
    /// Where to write the credentials file
    #[arg(long, default_value = "./shine.ini")]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long, default_value_t = false)]
    pub force: bool,
}
