use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::bytes::complete::is_not;
use nom::character::complete::{char, multispace1};
use nom::combinator::{opt, value};
use nom::multi::many0_count;
use nom::sequence::pair;

/// Parses a `;` comment up to, but not including, the end of the line.
pub fn parse_comment<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value((), pair(char(';'), opt(is_not("\r\n"))))(input.into())
}

/// Skips any run of whitespace (including newlines) and comments. Never fails.
pub fn skip_trivia<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value((), many0_count(alt((value((), multispace1), parse_comment))))(input.into())
}
