//! Converting arbitrary error values into [`FormattedError`]s.

use crate::error::GraphQLError;
use crate::formatted::FormattedError;
use std::borrow::Cow;
use std::error::Error as StdError;

/// Any value [`format_error`] accepts.
///
/// Variants are checked in declaration order: a value that is already
/// formatted is never reformatted, and a [`GraphQLError`] is formatted the
/// same way whether it is owned or borrowed.
#[derive(Debug)]
pub enum ErrorValue<'a> {
    /// Already in response form
    Formatted(FormattedError),
    /// A structured error with positions, path and cause
    Domain(Cow<'a, GraphQLError>),
    /// Anything else; only its message survives
    ///
    /// A boxed [`FormattedError`] or [`GraphQLError`] placed here is still
    /// recognized by downcast when formatted.
    Opaque(Box<dyn StdError + Send + Sync>),
}

impl ErrorValue<'_> {
    /// Wrap an error of unknown shape
    ///
    /// The error is downcast like any boxed error, so wrapping a
    /// [`FormattedError`] or [`GraphQLError`] keeps its structure.
    pub fn opaque(error: impl StdError + Send + Sync + 'static) -> Self {
        let error: Box<dyn StdError + Send + Sync> = Box::new(error);
        classify(error)
    }

    fn branch(&self) -> &'static str {
        match self {
            ErrorValue::Formatted(_) => "formatted",
            ErrorValue::Domain(_) => "domain",
            ErrorValue::Opaque(_) => "opaque",
        }
    }
}

impl From<FormattedError> for ErrorValue<'_> {
    fn from(error: FormattedError) -> Self {
        ErrorValue::Formatted(error)
    }
}

impl From<&FormattedError> for ErrorValue<'_> {
    fn from(error: &FormattedError) -> Self {
        ErrorValue::Formatted(error.clone())
    }
}

impl From<GraphQLError> for ErrorValue<'_> {
    fn from(error: GraphQLError) -> Self {
        ErrorValue::Domain(Cow::Owned(error))
    }
}

impl<'a> From<&'a GraphQLError> for ErrorValue<'a> {
    fn from(error: &'a GraphQLError) -> Self {
        ErrorValue::Domain(Cow::Borrowed(error))
    }
}

/// Boxed errors are downcast so that formatted and structured errors keep
/// their shape after travelling through `Box<dyn Error>`.
impl From<Box<dyn StdError + Send + Sync>> for ErrorValue<'_> {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        classify(error)
    }
}

fn classify<'a>(error: Box<dyn StdError + Send + Sync>) -> ErrorValue<'a> {
    let error = match error.downcast::<FormattedError>() {
        Ok(formatted) => return ErrorValue::Formatted(*formatted),
        Err(error) => error,
    };
    match error.downcast::<GraphQLError>() {
        Ok(domain) => ErrorValue::Domain(Cow::Owned(*domain)),
        Err(error) => ErrorValue::Opaque(error),
    }
}

impl From<anyhow::Error> for ErrorValue<'_> {
    fn from(error: anyhow::Error) -> Self {
        let error = match error.downcast::<FormattedError>() {
            Ok(formatted) => return ErrorValue::Formatted(formatted),
            Err(error) => error,
        };
        match error.downcast::<GraphQLError>() {
            Ok(domain) => ErrorValue::Domain(Cow::Owned(domain)),
            Err(error) => {
                let error: Box<dyn StdError + Send + Sync> = error.into();
                ErrorValue::Opaque(error)
            }
        }
    }
}

/// Convert one error into its response form.
///
/// This never fails: a value the formatter knows nothing about still
/// produces a record with its message and no locations.
///
/// # Example
///
/// ```
/// use graphql_errors::{FormattedError, format_error};
///
/// let formatted = FormattedError::new("Already done");
/// assert_eq!(format_error(formatted.clone()), formatted);
/// ```
pub fn format_error<'a>(error: impl Into<ErrorValue<'a>>) -> FormattedError {
    let error = error.into();
    tracing::trace!(branch = error.branch(), "Formatting error");

    match error {
        ErrorValue::Formatted(formatted) => formatted,
        ErrorValue::Domain(domain) => {
            if let Some(cause) = &domain.cause {
                if !cause.has_extensions() {
                    tracing::debug!(cause = %cause, "Cause does not provide extensions");
                }
            }
            FormattedError {
                message: domain.message.clone(),
                locations: domain.locations(),
                path: domain.path.clone(),
                extensions: domain.extensions(),
            }
        }
        ErrorValue::Opaque(opaque) => match classify(opaque) {
            ErrorValue::Opaque(opaque) => FormattedError::new(opaque.to_string()),
            structured => format_error(structured),
        },
    }
}

/// Convert a batch of errors, one record per input, in input order.
pub fn format_errors<'a, I>(errors: I) -> Vec<FormattedError>
where
    I: IntoIterator,
    I::Item: Into<ErrorValue<'a>>,
{
    errors.into_iter().map(format_error).collect()
}

/// Build a record from a bare message.
pub fn new_formatted_error(message: impl Into<String>) -> FormattedError {
    let message: String = message.into();
    let error: Box<dyn StdError + Send + Sync> = message.into();
    format_error(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Cause, Extensions, HasExtensions, PathSegment};
    use graphql_location::{Source, SourceLocation};
    use serde_json::json;
    use std::sync::Arc;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("connection reset")]
    struct Io;

    #[derive(Debug, Error)]
    #[error("forbidden")]
    struct Forbidden;

    impl HasExtensions for Forbidden {
        fn extensions(&self) -> Extensions {
            let mut ext = Extensions::new();
            ext.insert("code".to_string(), json!("FORBIDDEN"));
            ext
        }
    }

    fn domain_error() -> GraphQLError {
        GraphQLError::new("Cannot query field")
            .with_source(Arc::new(Source::new("{\n  user {\n    nme\n  }\n}")))
            .with_positions([15])
            .with_path([
                PathSegment::from("user"),
                PathSegment::Index(0),
                PathSegment::from("name"),
            ])
    }

    #[test]
    fn test_formatted_is_unchanged() {
        let formatted = FormattedError {
            locations: vec![SourceLocation { line: 9, column: 9 }],
            path: Some(vec![PathSegment::Index(1)]),
            ..FormattedError::new("Done")
        };
        assert_eq!(format_error(formatted.clone()), formatted);
        assert_eq!(format_error(&formatted), formatted);
        assert_eq!(format_error(format_error(&formatted)), formatted);
    }

    #[test]
    fn test_domain_error() {
        let formatted = format_error(domain_error());
        assert_eq!(formatted.message, "Cannot query field");
        assert_eq!(formatted.locations, vec![SourceLocation { line: 3, column: 5 }]);
        assert_eq!(
            formatted.path,
            Some(vec![
                PathSegment::from("user"),
                PathSegment::Index(0),
                PathSegment::from("name"),
            ])
        );
        assert!(formatted.extensions.is_none());
    }

    #[test]
    fn test_borrowed_and_owned_agree() {
        let error = domain_error();
        assert_eq!(format_error(&error), format_error(error.clone()));
    }

    #[test]
    fn test_domain_error_without_path_or_positions() {
        let formatted = format_error(GraphQLError::new("Bare"));
        assert_eq!(formatted, FormattedError::new("Bare"));
    }

    #[test]
    fn test_cause_extensions() {
        let error = domain_error().with_cause(Cause::with_extensions(Forbidden));
        let formatted = format_error(&error);
        assert_eq!(formatted.extensions.unwrap()["code"], "FORBIDDEN");
    }

    #[test]
    fn test_cause_without_extensions() {
        let error = domain_error().with_cause(Cause::new(Io));
        assert!(format_error(error).extensions.is_none());
    }

    #[test]
    fn test_opaque() {
        let formatted = format_error(ErrorValue::opaque(Io));
        assert_eq!(formatted.message, "connection reset");
        assert!(formatted.locations.is_empty());
        assert!(formatted.path.is_none());
        assert!(formatted.extensions.is_none());
    }

    #[test]
    fn test_opaque_keeps_structured_errors() {
        let formatted = FormattedError {
            locations: vec![SourceLocation { line: 4, column: 2 }],
            path: Some(vec![PathSegment::from("a")]),
            ..FormattedError::new("kept")
        };
        let value = ErrorValue::opaque(formatted.clone());
        assert!(matches!(value, ErrorValue::Formatted(_)));
        assert_eq!(format_error(value), formatted);

        let error = domain_error().with_cause(Cause::with_extensions(Forbidden));
        let value = ErrorValue::opaque(error.clone());
        assert!(matches!(value, ErrorValue::Domain(_)));
        assert_eq!(format_error(value), format_error(&error));
    }

    #[test]
    fn test_opaque_variant_built_directly() {
        let formatted = FormattedError {
            locations: vec![SourceLocation { line: 1, column: 3 }],
            ..FormattedError::new("direct")
        };
        let value = ErrorValue::Opaque(Box::new(formatted.clone()));
        assert_eq!(format_error(value), formatted);

        let value = ErrorValue::Opaque(Box::new(domain_error()));
        assert_eq!(
            format_error(value).locations,
            vec![SourceLocation { line: 3, column: 5 }]
        );
    }

    #[test]
    fn test_boxed_downcast() {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(FormattedError::new("Kept"));
        assert!(matches!(ErrorValue::from(boxed), ErrorValue::Formatted(_)));

        let boxed: Box<dyn StdError + Send + Sync> = Box::new(domain_error());
        let formatted = format_error(boxed);
        assert_eq!(formatted.locations, vec![SourceLocation { line: 3, column: 5 }]);

        let boxed: Box<dyn StdError + Send + Sync> = Box::new(Io);
        assert!(matches!(ErrorValue::from(boxed), ErrorValue::Opaque(_)));
    }

    #[test]
    fn test_anyhow_downcast() {
        let formatted = format_error(anyhow::Error::new(domain_error()));
        assert_eq!(formatted.locations, vec![SourceLocation { line: 3, column: 5 }]);

        let formatted = format_error(anyhow::anyhow!("plain failure"));
        assert_eq!(formatted, FormattedError::new("plain failure"));
    }

    #[test]
    fn test_format_errors_preserves_order() {
        let errors: Vec<ErrorValue> = vec![
            ErrorValue::opaque(Io),
            FormattedError::new("second").into(),
            GraphQLError::new("third").into(),
        ];
        let formatted = format_errors(errors);
        let messages: Vec<_> = formatted.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["connection reset", "second", "third"]);
    }

    #[test]
    fn test_format_errors_empty() {
        assert!(format_errors(Vec::<GraphQLError>::new()).is_empty());
    }

    #[test]
    fn test_new_formatted_error() {
        let formatted = new_formatted_error("Must provide query string.");
        assert_eq!(formatted, FormattedError::new("Must provide query string."));
    }
}
