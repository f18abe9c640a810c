mod execute;
mod output;

use clap::Args;

pub use execute::RowsResult;

/// Run a SELECT statement and print the rows
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  shine read 'SELECT * FROM users'                       # Plain query
  shine read 'SELECT * FROM users WHERE id = ?' -p 1     # Prepared statement
  shine --database-url ./app.sqlite read 'SELECT 1'      # Against a SQLite file")]
pub struct ReadCmd {
    /// SQL statement, with `?` placeholders for parameters
    pub statement: String,

    /// Parameter bound to the next `?` placeholder (repeatable)
    #[arg(short, long = "param")]
    pub params: Vec<String>,
}
