use strum_macros::{Display, EnumIter};

/// A single move on the grid. The declaration order is the order in which
/// transitions are generated, which keeps search results reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display)]
pub enum Action {
    #[strum(to_string = "U")]
    Up,
    #[strum(to_string = "D")]
    Down,
    #[strum(to_string = "L")]
    Left,
    #[strum(to_string = "R")]
    Right,
}

impl Action {
    /// Column and row offsets of the move.
    #[inline(always)]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (0, -1),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Action::Up),
            'D' => Some(Action::Down),
            'L' => Some(Action::Left),
            'R' => Some(Action::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn iteration_order_is_fixed() {
        let actions: Vec<Action> = Action::iter().collect();
        assert_eq!(
            actions,
            vec![Action::Up, Action::Down, Action::Left, Action::Right]
        );
    }

    #[test]
    fn letters_round_trip() {
        for action in Action::iter() {
            let letter = action.to_string();
            assert_eq!(letter.len(), 1);
            assert_eq!(Action::from_char(letter.chars().next().unwrap()), Some(action));
        }
    }

    #[test]
    fn opposite_moves_cancel() {
        let (ux, uy) = Action::Up.delta();
        let (dx, dy) = Action::Down.delta();
        assert_eq!((ux + dx, uy + dy), (0, 0));
        let (lx, ly) = Action::Left.delta();
        let (rx, ry) = Action::Right.delta();
        assert_eq!((lx + rx, ly + ry), (0, 0));
    }
}
