use serde::Serialize;

use super::{IpScopeArg, ValidateCmd, ValidateKind};
use crate::commands::{Context, Execute};
use crate::data::{self, ValidationError};
use crate::error::Result;

/// Outcome of validating one value
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub kind: ValidateKind,
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn ipv4(value: &str, scope: IpScopeArg) -> std::result::Result<String, ValidationError> {
    match scope {
        IpScopeArg::Any => data::validate_ipv4(value),
        IpScopeArg::Public => data::validate_public_ipv4(value),
        IpScopeArg::Private => data::validate_private_ipv4(value),
    }
}

fn ipv6(value: &str, scope: IpScopeArg) -> std::result::Result<String, ValidationError> {
    match scope {
        IpScopeArg::Any => data::validate_ipv6(value),
        IpScopeArg::Public => data::validate_public_ipv6(value),
        IpScopeArg::Private => data::validate_private_ipv6(value),
    }
}

impl ValidateCmd {
    /// Run the validator for this kind and return the sanitized value.
    pub fn check(&self) -> std::result::Result<String, ValidationError> {
        let value = self.value.as_str();
        match self.kind {
            ValidateKind::Email => data::validate_email(value, self.domain.as_deref()),
            ValidateKind::Phone => data::validate_us_phone(value, self.country_code),
            ValidateKind::Url => data::validate_url(value),
            ValidateKind::Ip => match self.scope {
                IpScopeArg::Any => data::validate_ip(value),
                scope if value.contains(':') => ipv6(value, scope),
                scope => ipv4(value, scope),
            },
            ValidateKind::Ipv4 => ipv4(value, self.scope),
            ValidateKind::Ipv6 => ipv6(value, self.scope),
            ValidateKind::Subnet => data::validate_subnet_mask(value),
            ValidateKind::Float => data::validate_float(value, self.allow_zero).map(|f| f.to_string()),
            ValidateKind::Integer => {
                data::validate_integer(value, self.allow_zero).map(|i| i.to_string())
            }
            ValidateKind::String => data::sanitize_string(value, self.allow_empty),
            ValidateKind::Boolean => Ok(data::to_boolean(value).to_string()),
        }
    }
}

impl Execute for ValidateCmd {
    type Output = ValidationReport;

    fn execute(self, _ctx: &Context) -> Result<Self::Output> {
        let outcome = self.check();
        Ok(ValidationReport {
            kind: self.kind,
            input: self.value,
            valid: outcome.is_ok(),
            value: outcome.as_ref().ok().cloned(),
            error: outcome.err().map(|e| e.to_string()),
        })
    }
}
