//! GraphQL error formatting.
//!
//! Parsers and executors fail with many kinds of values. This crate turns
//! all of them into the one shape clients see in the `errors` list of a
//! GraphQL response:
//!
//! ```json
//! {
//!   "message": "User not found",
//!   "locations": [{ "line": 2, "column": 3 }],
//!   "path": ["user", 0, "name"],
//!   "code": "NOT_FOUND",
//!   "extensions": { "code": "NOT_FOUND" }
//! }
//! ```
//!
//! # Architecture
//!
//! - [`GraphQLError`]: A structured error with positions into a [`Source`],
//!   a response path, and an optional wrapped [`Cause`]
//! - [`HasExtensions`]: Capability of a cause to contribute extension data.
//!   Wrap such causes with [`Cause::with_extensions`]; [`Cause::new`] does
//!   not look for the capability
//! - [`FormattedError`]: The canonical, serializable record
//! - [`ErrorValue`]: Everything [`format_error`] accepts
//!
//! # Wire format
//!
//! `message` and `locations` are always written, `locations` as `[]` when
//! nothing was resolved. `path` is written only when present. Extension
//! entries are written twice: once at the top level of the object and once
//! nested under `extensions`. Older clients read the top-level keys, so the
//! duplication is part of the contract.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use graphql_errors::{GraphQLError, PathSegment, Source, format_error};
//!
//! let source = Arc::new(Source::new("{\n  user\n}"));
//! let error = GraphQLError::new("User not found")
//!     .with_source(source)
//!     .with_positions([4])
//!     .with_path([PathSegment::from("user")]);
//!
//! let formatted = format_error(&error);
//! assert_eq!(formatted.locations[0].line, 2);
//! assert_eq!(formatted.locations[0].column, 3);
//! ```

pub mod error;
pub mod format;
pub mod formatted;

pub use error::{Cause, Extensions, GraphQLError, HasExtensions, PathSegment};
pub use format::{ErrorValue, format_error, format_errors, new_formatted_error};
pub use formatted::FormattedError;

// Re-export for convenience
pub use graphql_location::{Source, SourceLocation};
