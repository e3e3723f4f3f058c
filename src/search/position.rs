use crate::parsers::{Parser, SyntaxError};
use crate::search::Action;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A grid cell, addressed as `(x, y)` where `x` is the column and `y` the row
/// of the textual maze (row 0 is the first line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline(always)]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The neighbouring position in the direction of `action`, or `None` if
    /// that would leave the non-negative quadrant.
    pub fn step(&self, action: Action) -> Option<Position> {
        let (dx, dy) = action.delta();
        Some(Position::new(
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
        ))
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Position::new(x, y)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Position as Parser>::parse_str(s)
    }
}
