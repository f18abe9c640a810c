mod execute;

use clap::Args;

use crate::commands::{parse_header, parse_key_value};

/// Send a POST request and print the response body
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  shine post https://jsonplaceholder.typicode.com/posts -d '{\"title\":\"lorem ipsum\"}' -H 'Content-Type: application/json'
  shine post https://api.example.com/import --data-from payload.json
  curl -s https://api.example.com/export | shine post https://api.example.com/import --data-from -")]
pub struct PostCmd {
    /// Request URL
    pub url: String,

    /// Request body
    #[arg(short, long, conflicts_with = "data_from")]
    pub data: Option<String>,

    /// Read a JSON body from a file, an http(s) URL, or '-' for stdin
    #[arg(long)]
    pub data_from: Option<String>,

    /// Request header as 'Name: value' (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Query parameter as key=value (repeatable)
    #[arg(short, long = "query", value_parser = parse_key_value)]
    pub query: Vec<(String, String)>,
}
