//! Provides parsers for whole mazes.
//!
//! A maze is a sequence of rows, one per line, each a run of cells. Rows may
//! be indented and may carry a trailing `;` comment. Blank lines and comment
//! lines are skipped. Whether the rows form a rectangle is not a syntactic
//! question and is checked when building a [`crate::search::Maze`].

use crate::parsed_types::Cell;
use crate::parsers::{parse_cell, parse_comment, ParseResult, Span};
use nom::branch::alt;
use nom::character::complete::{line_ending, space0};
use nom::combinator::{eof, map, opt, recognize, value, verify};
use nom::error::ErrorKind;
use nom::error_position;
use nom::multi::{many0, many1};
use nom::sequence::{preceded, tuple};

fn line_end(input: Span) -> ParseResult<()> {
    value(
        (),
        tuple((space0, opt(parse_comment), alt((line_ending, eof)))),
    )(input)
}

fn blank_line(input: Span) -> ParseResult<()> {
    value(
        (),
        verify(recognize(line_end), |line: &Span| !line.fragment().is_empty()),
    )(input)
}

/// Parses one row of cells together with its line ending. If anything but
/// trailing spaces or a comment follows the cells, the error points at the
/// first character after them.
pub fn parse_row<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Cell>> {
    let (rest, cells) = preceded(space0, many1(parse_cell))(input.into())?;
    match line_end(rest) {
        Ok((rest, ())) => Ok((rest, cells)),
        Err(_) => Err(nom::Err::Error(error_position!(rest, ErrorKind::Eof))),
    }
}

/// Parses as many rows as possible. Never fails; parsing stops at the first
/// line that is neither a row nor blank, which is left in the remainder.
///
/// ## Example
/// ```
/// # use waypoint::parsed_types::Cell;
/// # use waypoint::parsers::{parse_maze_rows, preamble::*};
/// let input = "; tiny\nXXX\nX.M ; mud on the right\n\nXXX\n";
/// let rows = parse_maze_rows(Span::new(input));
/// assert!(rows.is_exhaustive());
/// assert!(rows.is_value(vec![
///     vec![Cell::Wall, Cell::Wall, Cell::Wall],
///     vec![Cell::Wall, Cell::Floor, Cell::Mud],
///     vec![Cell::Wall, Cell::Wall, Cell::Wall],
/// ]));
/// ```
pub fn parse_maze_rows<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Vec<Cell>>> {
    map(
        many0(alt((map(blank_line, |_| None), map(parse_row, Some)))),
        |rows| rows.into_iter().flatten().collect(),
    )(input.into())
}
