mod cell;
mod comments;
mod maze;
mod plan;
mod position;
mod syntax_error;
mod test_helpers;

pub use syntax_error::{Found, SyntaxError};
pub use test_helpers::UnwrapValue;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    fn parse_span(input: Span) -> ParseResult<Self::Item> {
        Self::parse(input)
    }

    /// Parse a whole string slice into the desired type. Trailing whitespace
    /// and comments are allowed, anything else is a [`SyntaxError`] pointing
    /// at the first character that could not be parsed.
    fn parse_str(input: &str) -> Result<Self::Item, SyntaxError> {
        let span = Span::new(input);
        match Self::parse(span) {
            Ok((remainder, value)) => {
                let remainder = skip_trivia(remainder).map_or(remainder, |(rest, _)| rest);
                if remainder.fragment().is_empty() {
                    Ok(value)
                } else {
                    Err(SyntaxError::at(remainder))
                }
            }
            Err(failure) => Err(SyntaxError::from_failure(failure, span)),
        }
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

// Parsers
pub use cell::parse_cell;
pub use comments::{parse_comment, skip_trivia};
pub use maze::{parse_maze_rows, parse_row};
pub use plan::{parse_action, parse_plan};
pub use position::parse_position;
