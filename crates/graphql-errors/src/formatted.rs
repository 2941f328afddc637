//! The canonical error record sent to clients.

use crate::error::{Extensions, PathSegment};
use graphql_location::SourceLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value, json};
use thiserror::Error;

/// A GraphQL error in response form.
///
/// Serialization does not follow the field layout: see [`FormattedError::to_json`].
#[derive(Debug, Clone, PartialEq, Default, Error, Deserialize)]
#[error("{message}")]
pub struct FormattedError {
    pub message: String,

    /// Resolved positions; empty when none apply, never absent
    #[serde(default)]
    pub locations: Vec<SourceLocation>,

    /// A top-level `path` that is not a response path is a hoisted
    /// extension and reads back as `None`
    #[serde(default, deserialize_with = "response_path")]
    pub path: Option<Vec<PathSegment>>,

    #[serde(default)]
    pub extensions: Option<Extensions>,
}

impl FormattedError {
    /// A record carrying only a message
    pub fn new(message: impl Into<String>) -> Self {
        FormattedError {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Render the wire representation.
    ///
    /// ```json
    /// {
    ///   "code": "NOT_FOUND",
    ///   "extensions": { "code": "NOT_FOUND" },
    ///   "locations": [{ "line": 1, "column": 3 }],
    ///   "message": "User not found",
    ///   "path": ["user"]
    /// }
    /// ```
    ///
    /// Every extension entry is copied to the top level and the full
    /// mapping is repeated under `extensions`. An extension named
    /// `message`, `locations` or `extensions` never replaces the record's
    /// own field. An extension named `path` is hoisted like any other key
    /// unless the record has a path of its own, which takes precedence.
    ///
    /// # Example
    ///
    /// ```
    /// use graphql_errors::FormattedError;
    ///
    /// let json = FormattedError::new("Something went wrong").to_json();
    /// assert_eq!(json["message"], "Something went wrong");
    /// assert_eq!(json["locations"], serde_json::json!([]));
    /// assert!(json.get("path").is_none());
    /// assert!(json.get("extensions").is_none());
    /// ```
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();

        if let Some(extensions) = &self.extensions {
            for (key, value) in extensions {
                obj.insert(key.clone(), value.clone());
            }
            obj.insert("extensions".to_string(), Value::Object(extensions.clone()));
        }

        obj.insert("message".to_string(), json!(self.message));

        let locations: Vec<Value> = self
            .locations
            .iter()
            .map(|loc| json!({ "line": loc.line, "column": loc.column }))
            .collect();
        obj.insert("locations".to_string(), Value::Array(locations));

        if let Some(path) = &self.path {
            let path: Vec<Value> = path
                .iter()
                .map(|segment| match segment {
                    PathSegment::Key(key) => json!(key),
                    PathSegment::Index(index) => json!(index),
                })
                .collect();
            obj.insert("path".to_string(), Value::Array(path));
        }

        Value::Object(obj)
    }
}

fn response_path<'de, D>(deserializer: D) -> Result<Option<Vec<PathSegment>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

impl Serialize for FormattedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
