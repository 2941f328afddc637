//! Scanning for GraphQL line terminators

use std::iter::Peekable;
use std::str::CharIndices;

/// A single line terminator in a document body
///
/// `start` and `end` are byte offsets; `end` is exclusive, so a `\r\n`
/// pair spans two bytes and U+2028 / U+2029 span three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreak {
    pub start: usize,
    pub end: usize,
}

impl LineBreak {
    /// Byte width of the terminator
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false` for breaks produced by [`LineBreaks`]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Iterator over the line terminators of a body, in document order
///
/// # Example
///
/// ```
/// use graphql_location::{LineBreak, LineBreaks};
///
/// let breaks: Vec<_> = LineBreaks::new("a\r\nb\nc").collect();
/// assert_eq!(
///     breaks,
///     vec![LineBreak { start: 1, end: 3 }, LineBreak { start: 4, end: 5 }]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LineBreaks<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> LineBreaks<'a> {
    pub fn new(body: &'a str) -> Self {
        LineBreaks {
            chars: body.char_indices().peekable(),
        }
    }
}

impl Iterator for LineBreaks<'_> {
    type Item = LineBreak;

    fn next(&mut self) -> Option<LineBreak> {
        while let Some((start, ch)) = self.chars.next() {
            match ch {
                '\r' => {
                    // \r\n is one terminator
                    let end = match self.chars.next_if(|&(_, next)| next == '\n') {
                        Some((lf, _)) => lf + 1,
                        None => start + 1,
                    };
                    return Some(LineBreak { start, end });
                }
                '\n' | '\u{2028}' | '\u{2029}' => {
                    return Some(LineBreak {
                        start,
                        end: start + ch.len_utf8(),
                    });
                }
                _ => {}
            }
        }
        None
    }
}
