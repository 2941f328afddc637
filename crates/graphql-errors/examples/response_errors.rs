//! Building the `errors` list of a GraphQL response.
//!
//! Formats one error of each kind and prints the JSON a client would see.

use graphql_errors::{
    Cause, ErrorValue, Extensions, FormattedError, GraphQLError, HasExtensions, PathSegment,
    Source, format_errors,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("user {0} not found")]
struct UserNotFound(u64);

impl HasExtensions for UserNotFound {
    fn extensions(&self) -> Extensions {
        let mut ext = Extensions::new();
        ext.insert("code".to_string(), json!("NOT_FOUND"));
        ext.insert("userId".to_string(), json!(self.0));
        ext
    }
}

fn main() {
    let query = Arc::new(Source::with_name(
        "query {\r\n  user(id: 7) {\r\n    name\r\n  }\r\n}",
        "example.graphql",
    ));

    let errors: Vec<ErrorValue> = vec![
        // A resolver failure with extension data from its cause
        GraphQLError::new("User not found")
            .with_source(query.clone())
            .with_positions([10])
            .with_path([PathSegment::from("user")])
            .with_cause(Cause::with_extensions(UserNotFound(7)))
            .into(),
        // Something produced upstream that is already in response form
        FormattedError::new("Request timed out").into(),
        // An arbitrary failure
        ErrorValue::opaque(std::io::Error::other("connection reset by peer")),
    ];

    let formatted = format_errors(errors);
    match serde_json::to_string_pretty(&json!({ "errors": formatted })) {
        Ok(body) => println!("{}", body),
        Err(e) => eprintln!("failed to serialize errors: {}", e),
    }
}
