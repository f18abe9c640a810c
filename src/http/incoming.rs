//! Inspection of an incoming request.

use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use super::request::{HttpRequest, Method};
use super::HttpError;

fn normalize_header(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

/// Request data handed over by whatever server received the request.
///
/// Build one with [`RequestContext::new`] and the `with_*` setters, or from
/// CGI-style variables with [`RequestContext::from_cgi_vars`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    pub scheme: String,
    pub host: String,
    pub method: String,
    pub content_type: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RequestContext {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Build a context from CGI-style variables such as `REQUEST_SCHEME`,
    /// `HTTP_HOST`, `REQUEST_METHOD`, `CONTENT_TYPE` and `HTTP_*` headers.
    ///
    /// `HTTPS=on` implies the `https` scheme when `REQUEST_SCHEME` is absent.
    pub fn from_cgi_vars<I, K, V>(vars: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut ctx = Self {
            body: body.into(),
            ..Self::default()
        };
        let mut https = false;

        for (key, value) in vars {
            let key = key.as_ref();
            let value = value.into();
            match key {
                "REQUEST_SCHEME" => ctx.scheme = value,
                "HTTPS" => https = !value.is_empty() && !value.eq_ignore_ascii_case("off"),
                "REQUEST_METHOD" => ctx.method = value,
                "CONTENT_TYPE" => ctx.content_type = Some(value),
                "HTTP_HOST" => {
                    ctx.host = value.clone();
                    ctx.headers.push(("host".to_string(), value));
                }
                _ => {
                    if let Some(header) = key.strip_prefix("HTTP_") {
                        ctx.headers.push((normalize_header(header), value));
                    }
                }
            }
        }

        if ctx.scheme.is_empty() {
            ctx.scheme = if https { "https" } else { "http" }.to_string();
        }
        ctx
    }

    /// True when the scheme is `https` or the host is `localhost`.
    pub fn is_https(&self) -> bool {
        self.scheme.eq_ignore_ascii_case("https") || self.host == "localhost"
    }

    /// Exact comparison against the request content type.
    pub fn is_content_type(&self, content_type: &str) -> bool {
        self.content_type.as_deref() == Some(content_type)
    }

    /// Case-insensitive comparison against the request method.
    pub fn is_request_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }

    /// Look up a header value.
    ///
    /// Names match case-insensitively and `_` is treated as `-`, so
    /// `X_Api_Key` finds `x-api-key`.
    pub fn header(&self, name: &str) -> Option<&str> {
        let wanted = normalize_header(name);
        self.headers
            .iter()
            .find(|(k, _)| normalize_header(k) == wanted)
            .map(|(_, v)| v.as_str())
    }

    /// Decode the body as JSON, falling back to an empty object when the
    /// body is missing, malformed or not a JSON object/array.
    pub fn json_input(&self) -> JsonValue {
        decode_json(&self.body).unwrap_or_else(|| JsonValue::Object(Map::new()))
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    /// `HttpError::NoJsonData` when the body does not hold a JSON object or
    /// array.
    pub fn require_json_input(&self) -> Result<JsonValue, HttpError> {
        decode_json(&self.body).ok_or_else(|| HttpError::NoJsonData {
            source_name: "request body".to_string(),
        })
    }
}

fn decode_json(raw: &str) -> Option<JsonValue> {
    match serde_json::from_str::<JsonValue>(raw) {
        Ok(value @ (JsonValue::Object(_) | JsonValue::Array(_))) => Some(value),
        _ => None,
    }
}

/// Read and decode JSON from a source.
///
/// `source` is fetched with GET when it is an `http://` or `https://` URL,
/// read from stdin when it is `-`, and read as a file path otherwise.
///
/// # Errors
/// - `HttpError::Request` when a URL cannot be fetched
/// - `HttpError::Io` when stdin or the file cannot be read
/// - `HttpError::NoJsonData` when the content is not a JSON object or array
pub fn read_json_from(source: &str) -> Result<JsonValue, HttpError> {
    let raw = if source.starts_with("http://") || source.starts_with("https://") {
        HttpRequest::new(source, Method::Get).get(&[])?
    } else if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| HttpError::Io {
                path: "-".into(),
                source,
            })?;
        buf
    } else {
        let path = Path::new(source);
        std::fs::read_to_string(path).map_err(|e| HttpError::Io {
            path: path.to_path_buf(),
            source: e,
        })?
    };

    decode_json(&raw).ok_or_else(|| HttpError::NoJsonData {
        source_name: source.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[fixture]
    fn json_request() -> RequestContext {
        RequestContext::new("https", "api.example.com", "POST")
            .with_content_type("application/json")
            .with_header("X-Api-Key", "secret")
            .with_body(r#"{"name":"Adam","id":1}"#)
    }

    #[rstest]
    #[case("https", "example.com", true)]
    #[case("HTTPS", "example.com", true)]
    #[case("http", "localhost", true)]
    #[case("http", "example.com", false)]
    fn test_is_https(#[case] scheme: &str, #[case] host: &str, #[case] expected: bool) {
        assert_eq!(RequestContext::new(scheme, host, "GET").is_https(), expected);
    }

    #[rstest]
    fn test_is_content_type(json_request: RequestContext) {
        assert!(json_request.is_content_type("application/json"));
        assert!(!json_request.is_content_type("text/html"));
        assert!(!RequestContext::default().is_content_type("application/json"));
    }

    #[rstest]
    fn test_is_request_method(json_request: RequestContext) {
        assert!(json_request.is_request_method("post"));
        assert!(json_request.is_request_method("POST"));
        assert!(!json_request.is_request_method("GET"));
    }

    #[rstest]
    #[case("X-Api-Key")]
    #[case("x-api-key")]
    #[case("X_API_KEY")]
    fn test_header_lookup(json_request: RequestContext, #[case] name: &str) {
        assert_eq!(json_request.header(name), Some("secret"));
    }

    #[rstest]
    fn test_missing_header(json_request: RequestContext) {
        assert_eq!(json_request.header("Authorization"), None);
    }

    #[rstest]
    fn test_json_input(json_request: RequestContext) {
        assert_eq!(json_request.json_input(), json!({"name": "Adam", "id": 1}));
        assert!(json_request.require_json_input().is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("not json")]
    #[case("null")]
    #[case("42")]
    fn test_json_input_fallback(#[case] body: &str) {
        let ctx = RequestContext::default().with_body(body);
        assert_eq!(ctx.json_input(), json!({}));
        assert!(matches!(
            ctx.require_json_input(),
            Err(HttpError::NoJsonData { .. })
        ));
    }

    #[rstest]
    fn test_from_cgi_vars() {
        let vars = [
            ("HTTPS", "on"),
            ("HTTP_HOST", "shinesolar.com"),
            ("REQUEST_METHOD", "GET"),
            ("CONTENT_TYPE", "application/json"),
            ("HTTP_X_REQUESTED_WITH", "XMLHttpRequest"),
            ("PATH", "/usr/bin"),
        ];
        let ctx = RequestContext::from_cgi_vars(vars, "{}");

        assert_eq!(ctx.scheme, "https");
        assert_eq!(ctx.host, "shinesolar.com");
        assert!(ctx.is_https());
        assert!(ctx.is_request_method("get"));
        assert_eq!(ctx.header("X-Requested-With"), Some("XMLHttpRequest"));
        assert_eq!(ctx.header("Host"), Some("shinesolar.com"));
        assert_eq!(ctx.header("PATH"), None);
    }

    #[rstest]
    fn test_from_cgi_vars_defaults_to_http() {
        let ctx = RequestContext::from_cgi_vars([("HTTPS", "off")], "");
        assert_eq!(ctx.scheme, "http");
    }

    #[rstest]
    fn test_read_json_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1}}]"#).unwrap();

        let value = read_json_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(value, json!([{"id": 1}]));
    }

    #[rstest]
    fn test_read_json_from_file_without_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "plain text").unwrap();

        assert!(matches!(
            read_json_from(file.path().to_str().unwrap()),
            Err(HttpError::NoJsonData { .. })
        ));
    }

    #[rstest]
    fn test_read_json_from_missing_file() {
        assert!(matches!(
            read_json_from("/nonexistent/shine/input.json"),
            Err(HttpError::Io { .. })
        ));
    }
}
