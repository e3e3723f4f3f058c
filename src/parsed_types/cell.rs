//! Contains the grid cell kinds via the [`Cell`] type.

use std::fmt::{self, Display, Formatter};

/// A single cell of a textual maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `X`, impassable.
    Wall,
    /// `.`, open ground.
    Floor,
    /// `M`, passable but more expensive to enter than floor.
    Mud,
}

impl Cell {
    #[inline(always)]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            'M' => Some(Cell::Mud),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn as_char(&self) -> char {
        match self {
            Cell::Wall => 'X',
            Cell::Floor => '.',
            Cell::Mud => 'M',
        }
    }

    #[inline(always)]
    pub const fn is_passable(&self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
