//! Provides parsers for maze cells.

use crate::parsed_types::Cell;
use crate::parsers::{ParseResult, Span};
use nom::character::complete::anychar;
use nom::combinator::map_opt;

/// Parses a single maze cell, i.e. one of `X`, `.` or `M`.
///
/// ## Example
/// ```
/// # use waypoint::parsed_types::Cell;
/// # use waypoint::parsers::{parse_cell, preamble::*};
/// assert!(parse_cell(Span::new("X")).is_value(Cell::Wall));
/// assert!(parse_cell(Span::new(".")).is_value(Cell::Floor));
/// assert!(parse_cell(Span::new("M")).is_value(Cell::Mud));
///
/// assert!(parse_cell(Span::new("")).is_err());
/// assert!(parse_cell(Span::new("#")).is_err());
/// assert!(parse_cell(Span::new("x")).is_err());
///```
pub fn parse_cell<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Cell> {
    map_opt(anychar, Cell::from_char)(input.into())
}

impl crate::parsers::Parser for Cell {
    type Item = Cell;

    /// Parses a maze cell.
    ///
    /// ## See also
    /// See [`parse_cell`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_cell(input)
    }
}
