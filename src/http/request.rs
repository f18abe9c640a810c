//! Outgoing GET/POST requests.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use reqwest::blocking::Client;
use url::form_urlencoded;
use url::Url;

use super::HttpError;

/// Request methods supported by [`HttpRequest`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl FromStr for Method {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(HttpError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// Append form-encoded query parameters to a URL.
///
/// With no parameters the URL is returned unchanged. A URL that already has
/// a query string gets `&` + params, anything else gets `?` + params.
pub fn build_url(url: &str, query_params: &[(&str, &str)]) -> String {
    if query_params.is_empty() {
        return url.to_string();
    }

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query_params)
        .finish();

    let has_query = match Url::parse(url) {
        Ok(parsed) => parsed.query().is_some(),
        Err(_) => url.contains('?'),
    };

    let separator = if has_query { '&' } else { '?' };
    format!("{}{}{}", url, separator, encoded)
}

/// A reusable request to one base URL with a fixed header set.
///
/// # Example
///
/// ```no_run
/// use shine::http::{HttpRequest, Method};
///
/// let request = HttpRequest::new("https://jsonplaceholder.typicode.com/posts", Method::Post)
///     .with_header("Content-Type", "application/json");
/// let body = request.send(r#"{"title":"lorem ipsum"}"#, &[("name", "adam")])?;
/// # Ok::<(), shine::http::HttpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpRequest {
    url: String,
    method: Method,
    headers: Vec<(String, String)>,
    client: Client,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>, method: Method) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            client: Client::new(),
        }
    }

    /// Use a preconfigured client, e.g. one with timeouts or proxy settings.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add several headers sent with every request.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Perform the request with this instance's method and return the body.
    ///
    /// `body` is only sent for POST requests.
    pub fn send(&self, body: &str, query_params: &[(&str, &str)]) -> Result<String, HttpError> {
        self.dispatch(self.method, body, query_params)
    }

    /// Perform a GET request regardless of the configured method.
    pub fn get(&self, query_params: &[(&str, &str)]) -> Result<String, HttpError> {
        self.dispatch(Method::Get, "", query_params)
    }

    /// Perform a POST request regardless of the configured method.
    pub fn post(&self, body: &str, query_params: &[(&str, &str)]) -> Result<String, HttpError> {
        self.dispatch(Method::Post, body, query_params)
    }

    fn dispatch(
        &self,
        method: Method,
        body: &str,
        query_params: &[(&str, &str)],
    ) -> Result<String, HttpError> {
        let url = build_url(&self.url, query_params);
        debug!("{} {}", method, url);

        let request_error = |source: reqwest::Error| HttpError::Request {
            url: url.clone(),
            source,
        };

        let mut builder = self.client.request(method.into(), &url);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if method == Method::Post {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} {} returned {}", method, url, status);
        }
        response.text().map_err(request_error)
    }
}
