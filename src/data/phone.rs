//! United States phone number normalization.

use std::sync::LazyLock;

use regex::Regex;

use super::text::sanitize_string;
use super::ValidationError;

static US_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1?[2-9][0-9]{9}$").expect("phone regex is valid"));

/// Normalize a US phone number to bare digits.
///
/// All non-digits are stripped, then the number must be ten digits with an
/// area code starting 2-9, optionally preceded by the `1` country code.
/// With `include_country_code` the result always carries the leading `1`
/// (11 digits); without it the `1` is removed (10 digits).
pub fn validate_us_phone(phone: &str, include_country_code: bool) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidPhone(phone.to_string());

    let sanitized = sanitize_string(phone, false).map_err(|_| invalid())?;
    let digits: String = sanitized.chars().filter(char::is_ascii_digit).collect();

    if !US_PHONE_RE.is_match(&digits) {
        return Err(invalid());
    }

    let national = digits.strip_prefix('1').unwrap_or(&digits);
    if include_country_code {
        Ok(format!("1{}", national))
    } else {
        Ok(national.to_string())
    }
}
