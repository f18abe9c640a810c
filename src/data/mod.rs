//! Input sanitization and validation.
//!
//! Every validator returns `Result<T, ValidationError>`: a value that passes
//! comes back sanitized, anything else is an error the caller has to handle.
//! Numeric validators take an [`Input`] so the call site states whether it
//! is handing over text or an already-typed number.

mod email;
mod ip;
mod number;
mod phone;
mod text;
mod uri;

pub use email::{sanitize_email, validate_email};
pub use ip::{
    validate_ip, validate_ipv4, validate_ipv6, validate_private_ipv4, validate_private_ipv6,
    validate_public_ipv4, validate_public_ipv6, validate_subnet_mask, IpScope,
};
pub use number::{to_boolean, validate_float, validate_integer};
pub use phone::validate_us_phone;
pub use text::sanitize_string;
pub use uri::{sanitize_url, validate_url};

use std::fmt;

use thiserror::Error;

/// Validation error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Value is empty")]
    Empty,

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Email domain '{found}' does not match required domain '{expected}'")]
    DomainMismatch { expected: String, found: String },

    #[error("'{0}' is not a valid US phone number")]
    InvalidPhone(String),

    #[error("'{0}' is not a valid absolute URL")]
    InvalidUrl(String),

    #[error("'{0}' is not a valid float")]
    InvalidFloat(String),

    #[error("'{0}' is not a valid integer")]
    InvalidInteger(String),

    #[error("Zero is not allowed")]
    ZeroNotAllowed,

    #[error("'{address}' is not a valid {kind} address")]
    InvalidIp { address: String, kind: &'static str },

    #[error("'{address}' is not in the {scope} range")]
    OutOfRange { address: String, scope: IpScope },

    #[error("'{0}' is not a valid subnet mask")]
    InvalidSubnetMask(String),
}

/// Raw input for validators that accept either text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(s) => write!(f, "{}", s),
            Input::Int(i) => write!(f, "{}", i),
            Input::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Input {
    fn from(v: &str) -> Self {
        Input::Text(v.to_string())
    }
}

impl From<String> for Input {
    fn from(v: String) -> Self {
        Input::Text(v)
    }
}

impl From<i32> for Input {
    fn from(v: i32) -> Self {
        Input::Int(i64::from(v))
    }
}

impl From<i64> for Input {
    fn from(v: i64) -> Self {
        Input::Int(v)
    }
}

impl From<f64> for Input {
    fn from(v: f64) -> Self {
        Input::Float(v)
    }
}

impl From<bool> for Input {
    fn from(v: bool) -> Self {
        Input::Int(i64::from(v))
    }
}
