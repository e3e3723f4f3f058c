use crate::search::{Position, RemainingGoals};

/// The unit of exploration: where the agent stands together with the goals
/// it has yet to visit. The same position with different outstanding goals
/// is a different state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub position: Position,
    pub remaining: RemainingGoals,
}

impl SearchState {
    #[inline(always)]
    pub fn new(position: Position, remaining: RemainingGoals) -> Self {
        Self {
            position,
            remaining,
        }
    }

    /// Whether every goal has been visited.
    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.remaining.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::GoalSet;
    use std::collections::HashSet;

    #[test]
    fn same_position_different_goals_are_distinct() {
        let goals = GoalSet::new([Position::new(1, 1), Position::new(3, 1)]);
        let here = Position::new(2, 1);
        let before = SearchState::new(here, goals.all());
        let after = SearchState::new(here, goals.all().without(0));
        assert_ne!(before, after);

        let closed: HashSet<SearchState> = [before].into_iter().collect();
        assert!(!closed.contains(&after));
        assert!(closed.contains(&SearchState::new(here, goals.all())));
    }

    #[test]
    fn terminal_when_no_goals_remain() {
        let state = SearchState::new(Position::new(0, 0), RemainingGoals::NONE);
        assert!(state.is_terminal());
    }
}
