//! Provides parsers for plans, i.e. sequences of moves.

use crate::parsers::{skip_trivia, ParseResult, Span};
use crate::search::{Action, Plan};
use nom::character::complete::anychar;
use nom::combinator::{map, map_opt};
use nom::multi::many0;
use nom::sequence::{preceded, terminated};

/// Parses a single move letter: `U`, `D`, `L` or `R`.
pub fn parse_action<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Action> {
    map_opt(anychar, Action::from_char)(input.into())
}

/// Parses a plan. Moves may be separated by whitespace or written back to
/// back, and `;` comments are allowed anywhere between them.
///
/// ## Example
/// ```
/// # use waypoint::search::{Action, Plan};
/// # use waypoint::parsers::{parse_plan, preamble::*};
/// let input = r#"U U ; up the west corridor
/// RRRR
/// ; cost = 6
/// "#;
/// let plan = parse_plan(Span::new(input));
/// assert!(plan.is_exhaustive());
/// assert!(plan.is_value(Plan::new(vec![
///     Action::Up,
///     Action::Up,
///     Action::Right,
///     Action::Right,
///     Action::Right,
///     Action::Right,
/// ])));
/// ```
pub fn parse_plan<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Plan> {
    map(
        preceded(skip_trivia, many0(terminated(parse_action, skip_trivia))),
        Plan::new,
    )(input.into())
}

impl crate::parsers::Parser for Plan {
    type Item = Plan;

    /// Parses a plan.
    ///
    /// ## See also
    /// See [`parse_plan`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan(input)
    }
}
