mod execute;
mod output;

use clap::Args;

pub use execute::ChangeResult;

/// Run an INSERT/UPDATE/DELETE statement and print the change summary
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  shine change 'DELETE FROM sessions'                            # Plain statement
  shine change 'INSERT INTO users (name) VALUES (?)' -p 'Adam'   # Prepared statement
  shine change 'UPDATE users SET name = ? WHERE id = ?' -p Bo -p 2")]
pub struct ChangeCmd {
    /// SQL statement, with `?` placeholders for parameters
    pub statement: String,

    /// Parameter bound to the next `?` placeholder (repeatable)
    #[arg(short, long = "param")]
    pub params: Vec<String>,
}
