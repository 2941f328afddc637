//! Source locations for GraphQL documents
//!
//! This crate turns byte offsets reported by a lexer or executor into the
//! 1-based `line`/`column` pairs that appear in GraphQL error responses.
//!
//! # Overview
//!
//! The core types are:
//! - [`Source`]: A request document body with an optional name
//! - [`SourceLocation`]: A 1-based line and column
//! - [`LineBreaks`]: Iterator over the line terminators of a body
//!
//! Every GraphQL line terminator is recognized: `\r\n`, `\n`, `\r`,
//! U+2028 and U+2029. A `\r\n` pair counts as a single break.
//!
//! # Example
//!
//! ```rust
//! use graphql_location::*;
//!
//! let source = Source::new("query {\r\n  user\n}");
//! let loc = get_location(&source, 11);
//!
//! assert_eq!(loc, SourceLocation { line: 2, column: 3 });
//! ```

pub mod line_breaks;
pub mod location;
pub mod source;

// Re-export main types
pub use line_breaks::{LineBreak, LineBreaks};
pub use location::{SourceLocation, get_location, location_in};
pub use source::{DEFAULT_SOURCE_NAME, Source};
