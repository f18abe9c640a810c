//! Free-form string sanitization.

use super::{Input, ValidationError};

/// Strip markup from a string and encode quotes.
///
/// Anything from `<` up to the next `>` is removed (an unterminated tag
/// removes the rest of the input), NUL bytes are dropped, and `'`/`"` are
/// encoded as `&#39;`/`&#34;`. Numbers are sanitized in their decimal form.
///
/// # Errors
/// `ValidationError::Empty` when the result is empty and `can_be_empty` is
/// false.
pub fn sanitize_string(input: impl Into<Input>, can_be_empty: bool) -> Result<String, ValidationError> {
    let raw = input.into().to_string();
    let mut sanitized = String::with_capacity(raw.len());
    let mut in_tag = false;

    for c in raw.chars() {
        match (in_tag, c) {
            (false, '<') => in_tag = true,
            (true, '>') => in_tag = false,
            (true, _) => {}
            (false, '\0') => {}
            (false, '\'') => sanitized.push_str("&#39;"),
            (false, '"') => sanitized.push_str("&#34;"),
            (false, c) => sanitized.push(c),
        }
    }

    if !can_be_empty && sanitized.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(sanitized)
}
