//! Provides parsers for grid positions.

use crate::parsers::{ParseResult, Span};
use crate::search::Position;
use nom::branch::alt;
use nom::character::complete::{char, space0, u32};
use nom::combinator::map;
use nom::sequence::{delimited, separated_pair};

fn coordinate(input: Span) -> ParseResult<usize> {
    map(delimited(space0, u32, space0), |c| c as usize)(input)
}

fn bare_position(input: Span) -> ParseResult<Position> {
    map(
        separated_pair(coordinate, char(','), coordinate),
        |(x, y)| Position::new(x, y),
    )(input)
}

/// Parses a position written as `x,y`, optionally parenthesised. `x` is the
/// column and `y` the row.
///
/// ## Example
/// ```
/// # use waypoint::search::Position;
/// # use waypoint::parsers::{parse_position, preamble::*};
/// assert!(parse_position(Span::new("1,3")).is_value(Position::new(1, 3)));
/// assert!(parse_position(Span::new("(5, 3)")).is_value(Position::new(5, 3)));
///
/// assert!(parse_position(Span::new("5")).is_err());
/// assert!(parse_position(Span::new("-1,2")).is_err());
///```
pub fn parse_position<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Position> {
    alt((
        delimited(char('('), bare_position, char(')')),
        bare_position,
    ))(input.into())
}

impl crate::parsers::Parser for Position {
    type Item = Position;

    /// Parses a position.
    ///
    /// ## See also
    /// See [`parse_position`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_position(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{preamble::*, Found};

    #[test]
    fn parse_str_accepts_surrounding_whitespace() {
        assert_eq!(Position::parse_str(" 2 , 7 \n"), Ok(Position::new(2, 7)));
    }

    #[test]
    fn parse_str_rejects_trailing_garbage() {
        let error = Position::parse_str("2,7x").unwrap_err();
        assert_eq!(error.found, Found::Char('x'));
        assert_eq!(error.column, 4);
    }

    #[test]
    fn parse_str_rejects_missing_coordinate() {
        assert!(Position::parse_str("2,").is_err());
    }
}
