//! Numeric and boolean coercion.
//!
//! Text input is sanitized before it is parsed: floats keep only digits,
//! signs and the decimal point, integers keep only digits and signs. That
//! means a text integer like `7.50` comes back as `750`, and thousand
//! separators are dropped rather than rejected.

use std::sync::LazyLock;

use regex::Regex;

use super::{Input, ValidationError};

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:0|[1-9][0-9]*)$").expect("integer regex is valid"));

fn keep_chars(raw: &str, allowed: impl Fn(char) -> bool) -> String {
    raw.chars().filter(|c| allowed(*c)).collect()
}

/// Validate a float, rejecting zero unless `allow_zero` is set.
pub fn validate_float(input: impl Into<Input>, allow_zero: bool) -> Result<f64, ValidationError> {
    let input = input.into();
    let value = match &input {
        Input::Float(f) => *f,
        Input::Int(i) => *i as f64,
        Input::Text(raw) => {
            let sanitized = keep_chars(raw, |c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'));
            if !sanitized.chars().any(|c| c.is_ascii_digit()) {
                return Err(ValidationError::InvalidFloat(raw.clone()));
            }
            sanitized
                .parse::<f64>()
                .map_err(|_| ValidationError::InvalidFloat(raw.clone()))?
        }
    };

    if !value.is_finite() {
        return Err(ValidationError::InvalidFloat(input.to_string()));
    }
    if value == 0.0 && !allow_zero {
        return Err(ValidationError::ZeroNotAllowed);
    }
    Ok(value)
}

/// Validate an integer, rejecting zero unless `allow_zero` is set.
///
/// Text and float input are reduced to digits and signs first, so `7.50`
/// becomes `750`. Leading zeros (other than `0` itself) are rejected.
pub fn validate_integer(input: impl Into<Input>, allow_zero: bool) -> Result<i64, ValidationError> {
    let input = input.into();
    let value = match &input {
        Input::Int(i) => *i,
        other => {
            let raw = other.to_string();
            let sanitized = keep_chars(&raw, |c| c.is_ascii_digit() || matches!(c, '+' | '-'));
            if !INTEGER_RE.is_match(&sanitized) {
                return Err(ValidationError::InvalidInteger(raw));
            }
            sanitized
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidInteger(raw))?
        }
    };

    if value == 0 && !allow_zero {
        return Err(ValidationError::ZeroNotAllowed);
    }
    Ok(value)
}

/// Interpret any input as a boolean.
///
/// `1`, `true`, `on` and `yes` (trimmed, any case) are true; everything else
/// is false.
pub fn to_boolean(input: impl Into<Input>) -> bool {
    let raw = input.into().to_string();
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.292716", 1.292716)]
    #[case("0.292716", 0.292716)]
    #[case("-1.292716", -1.292716)]
    #[case("1", 1.0)]
    #[case("$1,000.50", 1000.5)]
    fn test_valid_float(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(validate_float(input, false).unwrap(), expected);
    }

    #[rstest]
    fn test_float_zero() {
        assert_eq!(validate_float("0", false), Err(ValidationError::ZeroNotAllowed));
        assert_eq!(validate_float("0", true).unwrap(), 0.0);
        assert_eq!(validate_float(0, false), Err(ValidationError::ZeroNotAllowed));
    }

    #[rstest]
    #[case("not a valid float")]
    #[case("1.2.3")]
    #[case("+-1")]
    #[case("")]
    fn test_invalid_float(#[case] input: &str) {
        assert!(matches!(
            validate_float(input, true),
            Err(ValidationError::InvalidFloat(_))
        ));
    }

    #[rstest]
    fn test_float_rejects_non_finite() {
        assert!(validate_float(f64::NAN, true).is_err());
        assert!(validate_float(f64::INFINITY, true).is_err());
    }

    #[rstest]
    fn test_float_overflowing_text() {
        let digits = "1".repeat(400);
        assert_eq!(
            validate_float(digits.as_str(), true),
            Err(ValidationError::InvalidFloat(digits.clone()))
        );
        assert!(validate_float(format!("-{}", digits), true).is_err());
    }

    #[rstest]
    #[case(Input::from("2"), 2)]
    #[case(Input::from(-2), -2)]
    #[case(Input::from("7.50"), 750)]
    #[case(Input::from(7.5), 75)]
    #[case(Input::from("+15"), 15)]
    fn test_valid_integer(#[case] input: Input, #[case] expected: i64) {
        assert_eq!(validate_integer(input, false).unwrap(), expected);
    }

    #[rstest]
    fn test_integer_zero() {
        assert_eq!(validate_integer(0, false), Err(ValidationError::ZeroNotAllowed));
        assert_eq!(validate_integer(0, true).unwrap(), 0);
    }

    #[rstest]
    #[case("not a valid integer")]
    #[case("012")]
    #[case("1-2")]
    #[case("99999999999999999999")]
    fn test_invalid_integer(#[case] input: &str) {
        assert!(matches!(
            validate_integer(input, true),
            Err(ValidationError::InvalidInteger(_))
        ));
    }

    #[rstest]
    #[case(Input::from("1"), true)]
    #[case(Input::from(" TRUE "), true)]
    #[case(Input::from("on"), true)]
    #[case(Input::from("yes"), true)]
    #[case(Input::from(1), true)]
    #[case(Input::from("0"), false)]
    #[case(Input::from("off"), false)]
    #[case(Input::from("anything"), false)]
    #[case(Input::from(false), false)]
    fn test_to_boolean(#[case] input: Input, #[case] expected: bool) {
        assert_eq!(to_boolean(input), expected);
    }
}
