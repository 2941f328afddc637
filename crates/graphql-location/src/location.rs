//! Offset to line/column resolution

use crate::line_breaks::LineBreaks;
use crate::source::Source;
use serde::{Deserialize, Serialize};

/// A position in a document as shown to clients (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in bytes from the start of the line)
    pub column: usize,
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation { line: 1, column: 1 }
    }
}

/// Convert a byte offset in `source` to a [`SourceLocation`]
///
/// Each line terminator that starts before `offset` advances the line and
/// moves the line start to just past the terminator. Offsets beyond the end
/// of the body are resolved against the last line rather than rejected.
///
/// # Example
///
/// ```
/// use graphql_location::{Source, SourceLocation, get_location};
///
/// let source = Source::new("abc\ndef");
/// assert_eq!(get_location(&source, 0), SourceLocation { line: 1, column: 1 });
/// assert_eq!(get_location(&source, 4), SourceLocation { line: 2, column: 1 });
/// ```
pub fn get_location(source: &Source, offset: usize) -> SourceLocation {
    location_in(&source.body, offset)
}

/// Same as [`get_location`], for a bare body string
pub fn location_in(body: &str, offset: usize) -> SourceLocation {
    let mut line = 1;
    let mut line_start = 0;

    for line_break in LineBreaks::new(body) {
        if line_break.start >= offset {
            break;
        }
        line += 1;
        line_start = line_break.end;
    }

    // An offset on the '\n' of a "\r\n" lies before line_start
    let column = offset.saturating_add(1).saturating_sub(line_start).max(1);

    SourceLocation { line, column }
}
