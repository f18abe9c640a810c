//! URL sanitization and validation.

use url::Url;

use super::text::sanitize_string;
use super::ValidationError;

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=".contains(c)
}

/// Remove every character that cannot appear in a URL.
pub fn sanitize_url(url: &str) -> String {
    url.chars().filter(|c| is_url_char(*c)).collect()
}

/// Sanitize and validate an absolute URL.
///
/// The input is string-sanitized (and must not be empty), stripped of
/// characters that cannot appear in a URL, and must then parse as an
/// absolute URL with a scheme. `http`, `https`, `ftp`, `ws` and `wss` URLs
/// also need a host. Returns the sanitized text, not a re-serialized URL.
pub fn validate_url(url: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidUrl(url.to_string());

    let sanitized = sanitize_url(&sanitize_string(url, false).map_err(|_| invalid())?);

    let parsed = Url::parse(&sanitized).map_err(|_| invalid())?;
    let needs_host = matches!(parsed.scheme(), "http" | "https" | "ftp" | "ws" | "wss");
    if needs_host && parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid());
    }

    Ok(sanitized)
}
