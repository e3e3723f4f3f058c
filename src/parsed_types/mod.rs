//! Plain data produced by the parsers, before it is turned into search-level
//! structures such as [`crate::search::Maze`].

mod cell;

pub use cell::Cell;
