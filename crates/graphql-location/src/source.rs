//! Request documents

use crate::location::{SourceLocation, get_location};
use serde::{Deserialize, Serialize};

/// Name given to a [`Source`] constructed without one.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL request";

/// The text of a GraphQL document together with a display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    /// Full document text
    pub body: String,
    /// Name shown to users, e.g. a file path or "GraphQL request"
    pub name: String,
}

impl Source {
    /// Create a source with the default name
    pub fn new(body: impl Into<String>) -> Self {
        Source {
            body: body.into(),
            name: DEFAULT_SOURCE_NAME.to_string(),
        }
    }

    /// Create a source with an explicit name
    ///
    /// An empty name falls back to [`DEFAULT_SOURCE_NAME`].
    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Source {
            body: body.into(),
            name: if name.is_empty() {
                DEFAULT_SOURCE_NAME.to_string()
            } else {
                name
            },
        }
    }

    /// Resolve a byte offset in this document to a line and column
    pub fn location_at(&self, offset: usize) -> SourceLocation {
        get_location(self, offset)
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        let source = Source::new("{ a }");
        assert_eq!(source.body, "{ a }");
        assert_eq!(source.name, "GraphQL request");
    }

    #[test]
    fn test_explicit_name() {
        let source = Source::with_name("{ a }", "schema.graphql");
        assert_eq!(source.name, "schema.graphql");

        let unnamed = Source::with_name("{ a }", "");
        assert_eq!(unnamed.name, DEFAULT_SOURCE_NAME);
    }

    #[test]
    fn test_location_at() {
        let source: Source = "abc\ndef".into();
        assert_eq!(source.location_at(4), SourceLocation { line: 2, column: 1 });
    }

    #[test]
    fn test_serialization_source() {
        let source = Source::with_name("{ a }", "query.graphql");
        let json = serde_json::to_string(&source).unwrap();
        let deserialized: Source = serde_json::from_str(&json).unwrap();
        assert_eq!(source, deserialized);
    }
}
