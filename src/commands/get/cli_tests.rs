//! CLI parsing tests for get command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "get",
        test_name: test_get_requires_url,
        required_arg: "<URL>",
    }

    crate::cli_option_test! {
        command: "get",
        variant: Get,
        test_name: test_get_with_headers,
        args: ["https://a.com", "-H", "Accept: application/json", "--header", "X-Key:1"],
        field: headers,
        expected: vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("X-Key".to_string(), "1".to_string()),
        ],
    }

    crate::cli_option_test! {
        command: "get",
        variant: Get,
        test_name: test_get_with_query,
        args: ["https://a.com", "-q", "name=adam"],
        field: query,
        expected: vec![("name".to_string(), "adam".to_string())],
    }

    crate::cli_error_test! {
        command: "get",
        test_name: test_get_rejects_malformed_header,
        args: ["https://a.com", "-H", "no-separator"],
    }

    crate::cli_error_test! {
        command: "get",
        test_name: test_get_rejects_malformed_query,
        args: ["https://a.com", "-q", "novalue"],
    }
}
