mod execute;
mod output;

use clap::{Args, ValueEnum};
use serde::Serialize;

pub use execute::ValidationReport;

/// Kind of value to validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateKind {
    /// Email address (see --domain)
    Email,
    /// US phone number (see --country-code)
    Phone,
    /// Absolute URL
    Url,
    /// IPv4 or IPv6 address (see --scope)
    Ip,
    /// IPv4 address (see --scope)
    Ipv4,
    /// IPv6 address (see --scope)
    Ipv6,
    /// IPv4 subnet mask
    Subnet,
    /// Float (see --allow-zero)
    Float,
    /// Integer (see --allow-zero)
    Integer,
    /// Free-form string (see --allow-empty)
    String,
    /// Boolean coercion; never invalid
    Boolean,
}

/// Address range required for ip kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IpScopeArg {
    #[default]
    Any,
    Public,
    Private,
}

/// Validate and sanitize a single value
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  shine validate email adam@shinesolar.com --domain shinesolar.com
  shine validate phone 1-801-555-0100 --country-code
  shine validate ipv4 192.168.0.1 --scope private
  shine validate integer 0 --allow-zero")]
pub struct ValidateCmd {
    /// What kind of value this is
    #[arg(value_enum)]
    pub kind: ValidateKind,

    /// The value to validate
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Required email domain
    #[arg(long)]
    pub domain: Option<String>,

    /// Keep the leading 1 country code in normalized phone numbers
    #[arg(long, default_value_t = false)]
    pub country_code: bool,

    /// Accept zero for float and integer
    #[arg(long, default_value_t = false)]
    pub allow_zero: bool,

    /// Accept an empty string
    #[arg(long, default_value_t = false)]
    pub allow_empty: bool,

    /// Required address range for ip kinds
    #[arg(long, value_enum, default_value_t = IpScopeArg::Any)]
    pub scope: IpScopeArg,
}
