//! Response header collection with CORS helpers.

use std::fmt;

use serde::Serialize;

/// Headers to send back with a response, in insertion order.
///
/// Inserting a header that already exists (compared case-insensitively)
/// replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseHeaders {
    headers: Vec<(String, String)>,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any existing value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(existing) => existing.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Allow cross-origin requests from `domain` with the given methods.
    ///
    /// `None` falls back to `*` and `GET, POST, OPTIONS`.
    pub fn basic_cors(&mut self, domain: Option<&str>, methods: Option<&str>) -> &mut Self {
        self.insert("Access-Control-Allow-Origin", domain.unwrap_or("*"))
            .insert(
                "Access-Control-Allow-Methods",
                methods.unwrap_or("GET, POST, OPTIONS"),
            )
    }

    pub fn allowed_headers(&mut self, headers: &str) -> &mut Self {
        self.insert("Access-Control-Allow-Headers", headers)
    }

    pub fn allow_credentials(&mut self) -> &mut Self {
        self.insert("Access-Control-Allow-Credentials", "true")
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl fmt::Display for ResponseHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.headers {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_basic_cors_defaults() {
        let mut headers = ResponseHeaders::new();
        headers.basic_cors(None, None);

        assert_eq!(headers.get("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(
            headers.get("Access-Control-Allow-Methods"),
            Some("GET, POST, OPTIONS")
        );
    }

    #[rstest]
    fn test_basic_cors_custom() {
        let mut headers = ResponseHeaders::new();
        headers
            .basic_cors(Some("https://shinesolar.com"), Some("GET"))
            .allowed_headers("Content-Type, X-Api-Key")
            .allow_credentials();

        assert_eq!(headers.len(), 4);
        assert_eq!(
            headers.get("access-control-allow-origin"),
            Some("https://shinesolar.com")
        );
        assert_eq!(headers.get("Access-Control-Allow-Credentials"), Some("true"));
    }

    #[rstest]
    fn test_insert_replaces_existing() {
        let mut headers = ResponseHeaders::new();
        headers.insert("Content-Type", "text/html");
        headers.insert("content-type", "application/json");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
    }

    #[rstest]
    fn test_display_lines() {
        let mut headers = ResponseHeaders::new();
        headers.basic_cors(None, Some("GET"));
        assert_eq!(
            headers.to_string(),
            "Access-Control-Allow-Origin: *\nAccess-Control-Allow-Methods: GET\n"
        );
    }
}
