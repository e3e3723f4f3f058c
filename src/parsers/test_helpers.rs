use crate::parsers::ParseResult;

/// Convenience checks on parser output, mostly for tests and doc examples.
pub trait UnwrapValue<T> {
    /// Whether parsing succeeded with exactly `value`, ignoring the remainder.
    fn is_value(&self, value: T) -> bool;

    /// Whether parsing succeeded and consumed all of its input.
    fn is_exhaustive(&self) -> bool;
}

impl<'a, T: PartialEq> UnwrapValue<T> for ParseResult<'a, T> {
    fn is_value(&self, value: T) -> bool {
        matches!(self, Ok((_, parsed)) if *parsed == value)
    }

    fn is_exhaustive(&self) -> bool {
        matches!(self, Ok((remainder, _)) if remainder.fragment().is_empty())
    }
}
