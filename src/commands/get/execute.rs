use serde::Serialize;

use super::GetCmd;
use crate::commands::{Context, Execute};
use crate::error::Result;
use crate::http::{build_url, HttpRequest, Method};

/// Response body of a GET or POST request
#[derive(Debug, Serialize)]
pub struct ResponseResult {
    pub method: String,
    pub url: String,
    pub body: String,
}

/// Borrow owned key/value pairs for the request API.
pub(crate) fn borrow_pairs(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
    pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

impl Execute for GetCmd {
    type Output = ResponseResult;

    fn execute(self, _ctx: &Context) -> Result<Self::Output> {
        let query = borrow_pairs(&self.query);
        let request = HttpRequest::new(&self.url, Method::Get).with_headers(self.headers.clone());
        let body = request.get(&query)?;

        Ok(ResponseResult {
            method: Method::Get.to_string(),
            url: build_url(&self.url, &query),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::http::HttpError;
    use rstest::rstest;

    #[rstest]
    fn test_borrow_pairs() {
        let owned = vec![("name".to_string(), "adam".to_string())];
        assert_eq!(borrow_pairs(&owned), vec![("name", "adam")]);
    }

    #[rstest]
    fn test_get_unreachable_host() {
        let cmd = GetCmd {
            url: "http://127.0.0.1:1/".to_string(),
            headers: vec![],
            query: vec![],
        };
        assert!(matches!(
            cmd.execute(&Context::default()),
            Err(Error::Http(HttpError::Request { .. }))
        ));
    }

    #[cfg(feature = "network-tests")]
    #[rstest]
    fn test_get_live() {
        let cmd = GetCmd {
            url: "https://jsonplaceholder.typicode.com/posts/1".to_string(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            query: vec![],
        };
        let result = cmd.execute(&Context::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result.body).unwrap();
        assert_eq!(parsed["id"], 1);
    }
}
