//! Email address sanitization and validation.

use std::sync::LazyLock;

use regex::Regex;

use super::ValidationError;

const MAX_LOCAL_LEN: usize = 64;
const MAX_ADDRESS_LEN: usize = 254;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+=?^_`{|}~-]+)*",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+",
        r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    ))
    .expect("email regex is valid")
});

fn is_email_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-=?^_`{|}~@.[]".contains(c)
}

/// Remove every character that cannot appear in an email address.
pub fn sanitize_email(email: &str) -> String {
    email.chars().filter(|c| is_email_char(*c)).collect()
}

/// Sanitize and validate an email address, optionally pinning its domain.
///
/// When `domain` is given, the part after the first `@` must equal it
/// (ignoring ASCII case). Returns the sanitized address.
pub fn validate_email(email: &str, domain: Option<&str>) -> Result<String, ValidationError> {
    let sanitized = sanitize_email(email);

    let valid = EMAIL_RE.is_match(&sanitized)
        && sanitized.len() <= MAX_ADDRESS_LEN
        && sanitized
            .split_once('@')
            .is_some_and(|(local, _)| local.len() <= MAX_LOCAL_LEN);
    if !valid {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    if let Some(expected) = domain.filter(|d| !d.is_empty()) {
        let found = sanitized
            .split_once('@')
            .map(|(_, d)| d)
            .unwrap_or_default();
        if !found.eq_ignore_ascii_case(expected) {
            return Err(ValidationError::DomainMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }

    Ok(sanitized)
}
