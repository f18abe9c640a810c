//! HTTP helpers: outgoing requests, incoming request inspection and response
//! headers.
//!
//! Outgoing requests are single blocking calls through `reqwest`. Incoming
//! requests are described by an explicit [`RequestContext`] value that the
//! caller builds from whatever server it runs in.

mod cors;
mod incoming;
mod request;

pub use cors::ResponseHeaders;
pub use incoming::{read_json_from, RequestContext};
pub use request::{build_url, HttpRequest, Method};

use std::path::PathBuf;

use thiserror::Error;

/// HTTP error types
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("The HTTP request method must be one of POST or GET, got '{0}'")]
    UnsupportedMethod(String),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("No JSON data retrieved from {source_name}")]
    NoJsonData { source_name: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
