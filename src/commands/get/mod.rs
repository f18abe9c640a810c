mod cli_tests;
mod execute;
mod output;

use clap::Args;

use crate::commands::{parse_header, parse_key_value};

pub use execute::ResponseResult;
pub(crate) use execute::borrow_pairs;

/// Send a GET request and print the response body
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  shine get https://jsonplaceholder.typicode.com/posts/1
  shine get https://api.example.com/search -q name=adam -q page=2
  shine get https://api.example.com/me -H 'Authorization: Bearer abc'")]
pub struct GetCmd {
    /// Request URL
    pub url: String,

    /// Request header as 'Name: value' (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Query parameter as key=value (repeatable)
    #[arg(short, long = "query", value_parser = parse_key_value)]
    pub query: Vec<(String, String)>,
}
