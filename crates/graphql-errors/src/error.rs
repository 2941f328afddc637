//! Structured errors raised while parsing or executing a request.

use graphql_location::{Source, SourceLocation, get_location};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Extra diagnostic data attached to an error (`code`, `http`, ...).
pub type Extensions = serde_json::Map<String, serde_json::Value>;

/// Capability of an error to contribute extension data.
///
/// Implement this on the error types your resolvers return, then wrap them
/// with [`Cause::with_extensions`] so the formatter can find the data.
///
/// # Example
///
/// ```
/// use graphql_errors::{Cause, Extensions, HasExtensions};
/// use serde_json::json;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("no such user")]
/// struct NotFound;
///
/// impl HasExtensions for NotFound {
///     fn extensions(&self) -> Extensions {
///         let mut ext = Extensions::new();
///         ext.insert("code".to_string(), json!("NOT_FOUND"));
///         ext
///     }
/// }
///
/// let cause = Cause::with_extensions(NotFound);
/// assert_eq!(cause.extensions().unwrap()["code"], "NOT_FOUND");
/// ```
pub trait HasExtensions {
    fn extensions(&self) -> Extensions;
}

/// One step of a response path: a field name or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// The underlying error wrapped by a [`GraphQLError`].
///
/// Whether the error can supply [`Extensions`] is decided when it is
/// wrapped: [`Cause::with_extensions`] keeps a handle to its
/// [`HasExtensions`] implementation, [`Cause::new`] does not.
#[derive(Clone)]
pub struct Cause {
    error: Arc<dyn StdError + Send + Sync>,
    extended: Option<Arc<dyn HasExtensions + Send + Sync>>,
}

impl Cause {
    /// Wrap an error that carries no extension data
    ///
    /// The error's [`HasExtensions`] implementation, if it has one, is not
    /// recorded: use [`Cause::with_extensions`] for such errors.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Cause {
            error: Arc::new(error),
            extended: None,
        }
    }

    /// Wrap an error and remember its extensions capability
    pub fn with_extensions<E>(error: E) -> Self
    where
        E: StdError + HasExtensions + Send + Sync + 'static,
    {
        let error = Arc::new(error);
        let extended: Arc<dyn HasExtensions + Send + Sync> = error.clone();
        Cause {
            error,
            extended: Some(extended),
        }
    }

    /// The wrapped error
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Extension data, or `None` if the wrapped error has none to offer
    pub fn extensions(&self) -> Option<Extensions> {
        self.extended.as_ref().map(|extended| extended.extensions())
    }

    pub fn has_extensions(&self) -> bool {
        self.extended.is_some()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Cause {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        Cause {
            error: Arc::from(error),
            extended: None,
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("error", &self.error)
            .field("has_extensions", &self.has_extensions())
            .finish()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl StdError for Cause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error.source()
    }
}

/// An error raised by the parser, validator or executor.
///
/// `positions` are byte offsets into `document`. They are resolved to
/// line/column pairs only when the error is formatted.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct GraphQLError {
    /// Human readable description
    pub message: String,

    /// Document the positions point into
    pub document: Option<Arc<Source>>,

    /// Byte offsets of the offending tokens, in report order
    pub positions: Vec<usize>,

    /// Response path of the field that failed
    pub path: Option<Vec<PathSegment>>,

    /// The error this one was raised for
    #[source]
    pub cause: Option<Cause>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        GraphQLError {
            message: message.into(),
            document: None,
            positions: Vec::new(),
            path: None,
            cause: None,
        }
    }

    /// Attach the document that `positions` refer to
    pub fn with_source(mut self, source: Arc<Source>) -> Self {
        self.document = Some(source);
        self
    }

    pub fn with_positions(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.positions = positions.into_iter().collect();
        self
    }

    pub fn with_path(mut self, path: impl IntoIterator<Item = PathSegment>) -> Self {
        self.path = Some(path.into_iter().collect());
        self
    }

    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Resolve `positions` against `document`, preserving order
    ///
    /// Without a document there is nothing to resolve against and the
    /// result is empty.
    pub fn locations(&self) -> Vec<SourceLocation> {
        match &self.document {
            Some(source) => self
                .positions
                .iter()
                .map(|&offset| get_location(source, offset))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Extensions supplied by the cause, if it has the capability
    pub fn extensions(&self) -> Option<Extensions> {
        self.cause.as_ref().and_then(Cause::extensions)
    }
}
