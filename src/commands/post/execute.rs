use super::PostCmd;
use crate::commands::get::borrow_pairs;
use crate::commands::{Context, Execute, ResponseResult};
use crate::error::Result;
use crate::http::{build_url, read_json_from, HttpRequest, Method};

impl PostCmd {
    /// Request body from `--data-from`, `--data`, or empty.
    fn body(&self) -> Result<String> {
        match (&self.data_from, &self.data) {
            (Some(source), _) => Ok(read_json_from(source)?.to_string()),
            (None, Some(data)) => Ok(data.clone()),
            (None, None) => Ok(String::new()),
        }
    }
}

impl Execute for PostCmd {
    type Output = ResponseResult;

    fn execute(self, _ctx: &Context) -> Result<Self::Output> {
        let body = self.body()?;
        let query = borrow_pairs(&self.query);
        let request = HttpRequest::new(&self.url, Method::Post).with_headers(self.headers.clone());
        let response = request.post(&body, &query)?;

        Ok(ResponseResult {
            method: Method::Post.to_string(),
            url: build_url(&self.url, &query),
            body: response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::http::HttpError;
    use rstest::{fixture, rstest};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[fixture]
    fn cmd() -> PostCmd {
        PostCmd {
            url: "http://127.0.0.1:1/".to_string(),
            data: None,
            data_from: None,
            headers: vec![],
            query: vec![],
        }
    }

    #[rstest]
    fn test_body_defaults_to_empty(cmd: PostCmd) {
        assert_eq!(cmd.body().unwrap(), "");
    }

    #[rstest]
    fn test_body_from_data(mut cmd: PostCmd) {
        cmd.data = Some("name=adam".to_string());
        assert_eq!(cmd.body().unwrap(), "name=adam");
    }

    #[rstest]
    fn test_body_from_json_file(mut cmd: PostCmd) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ \"title\": \"lorem ipsum\" }}").unwrap();
        cmd.data_from = Some(file.path().display().to_string());

        assert_eq!(cmd.body().unwrap(), r#"{"title":"lorem ipsum"}"#);
    }

    #[rstest]
    fn test_body_from_invalid_json_file(mut cmd: PostCmd) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        cmd.data_from = Some(file.path().display().to_string());

        assert!(matches!(
            cmd.body(),
            Err(Error::Http(HttpError::NoJsonData { .. }))
        ));
    }

    #[rstest]
    fn test_post_unreachable_host(cmd: PostCmd) {
        assert!(matches!(
            cmd.execute(&Context::default()),
            Err(Error::Http(HttpError::Request { .. }))
        ));
    }

    #[cfg(feature = "network-tests")]
    #[rstest]
    fn test_post_live(mut cmd: PostCmd) {
        cmd.url = "https://jsonplaceholder.typicode.com/posts".to_string();
        cmd.data = Some(r#"{"title":"lorem ipsum"}"#.to_string());
        cmd.headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        let result = cmd.execute(&Context::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result.body).unwrap();
        assert_eq!(parsed["title"], "lorem ipsum");
    }
}
