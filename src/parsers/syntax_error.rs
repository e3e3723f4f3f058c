//! Located syntax errors for all textual inputs (mazes, positions, plans).

use crate::parsers::{ParseError, Span};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// What the parser ran into where it expected something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    EndOfInput,
}

impl Display for Found {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "character {c:?}"),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected {found} at line {line}, column {column}")]
pub struct SyntaxError {
    pub line: u32,
    pub column: usize,
    pub found: Found,
}

impl SyntaxError {
    /// An error pointing at the first character of `span`.
    pub fn at(span: Span) -> Self {
        let found = span
            .fragment()
            .chars()
            .next()
            .map_or(Found::EndOfInput, Found::Char);
        Self {
            line: span.location_line(),
            column: span.get_utf8_column(),
            found,
        }
    }

    /// Locate a failed parse at the farthest point any of its branches
    /// reached.
    pub fn from_parse_error(error: &ParseError) -> Option<Self> {
        error
            .errors
            .iter()
            .map(|(span, _)| *span)
            .max_by_key(|span| span.location_offset())
            .map(Self::at)
    }

    /// Locate a failed parse, falling back to `input` if the failure carries
    /// no position.
    pub fn from_failure(failure: nom::Err<ParseError>, input: Span) -> Self {
        match failure {
            nom::Err::Error(error) | nom::Err::Failure(error) => Self::from_parse_error(&error),
            nom::Err::Incomplete(_) => None,
        }
        .unwrap_or_else(|| Self::at(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_position;
    use nom::bytes::complete::take;

    #[test]
    fn points_at_start_of_span() {
        let error = SyntaxError::at(Span::new("c d"));
        assert_eq!(
            error,
            SyntaxError {
                line: 1,
                column: 1,
                found: Found::Char('c')
            }
        );
    }

    #[test]
    fn honours_span_offset() {
        let input = Span::new("xy\nzq");
        let (rest, _) = take::<_, _, nom::error::Error<Span>>(3usize)(input).unwrap();
        let error = SyntaxError::at(rest);
        assert_eq!(error.line, 2);
        assert_eq!(error.column, 1);
        assert_eq!(error.found, Found::Char('z'));
    }

    #[test]
    fn reports_end_of_input() {
        let input = Span::new("ab");
        let (rest, _) = take::<_, _, nom::error::Error<Span>>(2usize)(input).unwrap();
        let error = SyntaxError::at(rest);
        assert_eq!(error.found, Found::EndOfInput);
        assert_eq!(error.to_string(), "unexpected end of input at line 1, column 3");
    }

    #[test]
    fn failure_is_located_at_farthest_branch() {
        let input = Span::new("3, x");
        let failure = parse_position(input).unwrap_err();
        let error = SyntaxError::from_failure(failure, input);
        assert_eq!(
            error,
            SyntaxError {
                line: 1,
                column: 4,
                found: Found::Char('x')
            }
        );
    }
}
