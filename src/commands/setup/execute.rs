use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::info;
use serde::Serialize;

use super::SetupCmd;
use crate::commands::{Context, Execute};
use crate::db::{MySqlConfig, DEFAULT_PORT, DEFAULT_SERVER};
use crate::error::{Error, Result};

/// Result of the setup command execution. The password is never included.
#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub path: PathBuf,
    pub server: String,
    pub port: u16,
    pub database: String,
    pub username: String,
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before setup finished",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask for a value until the operator confirms it.
///
/// Blank answers fall back to `default`, or are asked again without one.
/// `echo` controls whether the value is repeated in the confirmation prompt.
fn ask_confirmed<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    default: Option<&str>,
    echo: bool,
) -> io::Result<String> {
    loop {
        write!(out, "{}: ", question)?;
        out.flush()?;
        let mut value = read_answer(input)?;
        if value.trim().is_empty() {
            match default {
                Some(default) => value = default.to_string(),
                None => {
                    writeln!(out, "A value is required.")?;
                    continue;
                }
            }
        }

        if echo {
            write!(out, "Is \"{}\" correct? (yes or no): ", value)?;
        } else {
            write!(out, "Is that correct? (yes or no): ")?;
        }
        out.flush()?;
        if is_yes(&read_answer(input)?) {
            return Ok(value);
        }
    }
}

/// Prompt for server, database name, username and password.
///
/// Each answer is re-asked until it is confirmed with `y` or `yes`. A blank
/// server answer means the default server; the other three cannot be blank.
pub fn prompt_credentials<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<MySqlConfig> {
    let server_question = format!(
        "Please enter your MySQL server domain name or IP address (leave blank to accept {} as your MySQL server)",
        DEFAULT_SERVER
    );
    let server = ask_confirmed(input, out, &server_question, Some(DEFAULT_SERVER), true)?;
    let database = ask_confirmed(input, out, "Please enter your MySQL database name", None, true)?;
    let username = ask_confirmed(input, out, "Please enter your MySQL user name", None, true)?;
    let password = ask_confirmed(input, out, "Please enter your MySQL user password", None, false)?;

    Ok(MySqlConfig {
        server,
        port: DEFAULT_PORT,
        database,
        username,
        password,
    })
}

impl SetupCmd {
    /// Run setup reading answers from `input` and writing prompts to `out`.
    pub fn execute_with<R: BufRead, W: Write>(self, input: &mut R, out: &mut W) -> Result<SetupResult> {
        if self.output.exists() && !self.force {
            return Err(Error::AlreadyExists { path: self.output });
        }

        let config = prompt_credentials(input, out).map_err(Error::Prompt)?;

        fs::write(&self.output, config.to_ini()).map_err(|source| Error::Write {
            path: self.output.clone(),
            source,
        })?;
        info!("Wrote credentials to {}", self.output.display());

        Ok(SetupResult {
            path: self.output,
            server: config.server,
            port: config.port,
            database: config.database,
            username: config.username,
        })
    }
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(self, _ctx: &Context) -> Result<Self::Output> {
        let stdin = io::stdin();
        let mut stderr = io::stderr();
        self.execute_with(&mut stdin.lock(), &mut stderr)
    }
}
