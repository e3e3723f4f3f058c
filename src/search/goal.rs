//! Goal sets and the per-node record of which goals are still outstanding.
//!
//! A [`GoalSet`] is fixed for the duration of a search. Progress is never
//! recorded on it; instead every search state carries a [`RemainingGoals`]
//! bitmask indexed by goal position in the set.

use crate::search::Position;
use serde::{Deserialize, Serialize};

/// The largest goal set a single search supports, one bit per goal.
pub const MAX_GOALS: usize = u64::BITS as usize;

/// How goals have to be visited.
#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum VisitOrder {
    /// Every goal must be visited at least once, in any order.
    #[default]
    Any,
    /// Goals must be visited in the order they were listed. Entering a goal
    /// cell out of turn does not count as visiting it. A position may be
    /// listed more than once to require a return visit.
    Listed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSet {
    goals: Vec<Position>,
    order: VisitOrder,
}

impl GoalSet {
    /// Build a goal set visited in any order. Duplicates are dropped, keeping
    /// the first occurrence.
    pub fn new<I: IntoIterator<Item = Position>>(goals: I) -> Self {
        let mut unique: Vec<Position> = Vec::new();
        for goal in goals {
            if !unique.contains(&goal) {
                unique.push(goal);
            }
        }
        Self {
            goals: unique,
            order: VisitOrder::Any,
        }
    }

    /// Build a goal set that must be visited in the given order. Repeated
    /// positions are kept, each one a separate waypoint.
    pub fn listed<I: IntoIterator<Item = Position>>(goals: I) -> Self {
        Self {
            goals: goals.into_iter().collect(),
            order: VisitOrder::Listed,
        }
    }

    pub fn with_order<I: IntoIterator<Item = Position>>(goals: I, order: VisitOrder) -> Self {
        match order {
            VisitOrder::Any => Self::new(goals),
            VisitOrder::Listed => Self::listed(goals),
        }
    }

    #[inline(always)]
    pub fn order(&self) -> VisitOrder {
        self.order
    }

    #[inline(always)]
    pub fn positions(&self) -> &[Position] {
        &self.goals
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.goals.iter().position(|&goal| goal == position)
    }

    /// Every goal outstanding. Only meaningful for sets of at most
    /// [`MAX_GOALS`] goals, which the search engine checks up front.
    pub fn all(&self) -> RemainingGoals {
        let unused_bits = MAX_GOALS.saturating_sub(self.goals.len()) as u32;
        RemainingGoals(u64::MAX.checked_shr(unused_bits).unwrap_or(0))
    }

    /// The outstanding goals once the agent has entered `position`.
    pub fn visit(&self, remaining: RemainingGoals, position: Position) -> RemainingGoals {
        match self.order {
            VisitOrder::Any => match self.index_of(position) {
                Some(index) => remaining.without(index),
                None => remaining,
            },
            VisitOrder::Listed => {
                // Consecutive listings of the same cell are all met on entry.
                let mut remaining = remaining;
                while let Some(index) = remaining.first() {
                    if self.goals[index] != position {
                        break;
                    }
                    remaining = remaining.without(index);
                }
                remaining
            }
        }
    }

    /// The outstanding goals at the start of a search: standing on a goal
    /// visits it.
    pub fn remaining_at_start(&self, start: Position) -> RemainingGoals {
        self.visit(self.all(), start)
    }

    /// The goals that could be visited next. Under [`VisitOrder::Listed`] this
    /// is only the next goal in line.
    pub fn candidates(&self, remaining: RemainingGoals) -> impl Iterator<Item = Position> + '_ {
        let limit = match self.order {
            VisitOrder::Any => usize::MAX,
            VisitOrder::Listed => 1,
        };
        remaining.indices().take(limit).map(|index| self.goals[index])
    }

    /// The positions of the outstanding goals, in listed order.
    pub fn unvisited(&self, remaining: RemainingGoals) -> Vec<Position> {
        remaining.indices().map(|index| self.goals[index]).collect()
    }
}

/// Bitmask of outstanding goals; bit `i` refers to the `i`th goal of the
/// owning [`GoalSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RemainingGoals(u64);

impl RemainingGoals {
    pub const NONE: RemainingGoals = RemainingGoals(0);

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub fn contains(self, index: usize) -> bool {
        index < MAX_GOALS && self.0 & (1 << index) != 0
    }

    #[inline(always)]
    pub fn without(self, index: usize) -> RemainingGoals {
        if index < MAX_GOALS {
            RemainingGoals(self.0 & !(1 << index))
        } else {
            self
        }
    }

    /// Lowest outstanding goal index.
    #[inline(always)]
    pub fn first(self) -> Option<usize> {
        (!self.is_empty()).then(|| self.0.trailing_zeros() as usize)
    }

    /// Outstanding goal indices in increasing order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(index)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn duplicates_are_dropped() {
        let goals = GoalSet::new([p(1, 1), p(2, 2), p(1, 1)]);
        assert_eq!(goals.positions(), &[p(1, 1), p(2, 2)]);
        assert_eq!(goals.all().len(), 2);
    }

    #[test]
    fn all_covers_exactly_the_goals() {
        assert!(GoalSet::new([]).all().is_empty());
        let three = GoalSet::new([p(0, 0), p(0, 1), p(0, 2)]).all();
        assert_eq!(three.indices().collect::<Vec<_>>(), vec![0, 1, 2]);
        let full = GoalSet::new((0..MAX_GOALS).map(|x| p(x, 0))).all();
        assert_eq!(full.len(), MAX_GOALS);
    }

    #[test]
    fn any_order_visits_whichever_goal_is_entered() {
        let goals = GoalSet::new([p(5, 3), p(1, 3)]);
        let remaining = goals.visit(goals.all(), p(1, 3));
        assert_eq!(goals.unvisited(remaining), vec![p(5, 3)]);
        let remaining = goals.visit(remaining, p(3, 3));
        assert_eq!(remaining.len(), 1);
        assert!(goals.visit(remaining, p(5, 3)).is_empty());
    }

    #[test]
    fn listed_order_ignores_goals_entered_out_of_turn() {
        let goals = GoalSet::listed([p(5, 3), p(1, 3)]);
        let remaining = goals.visit(goals.all(), p(1, 3));
        assert_eq!(remaining, goals.all());
        let remaining = goals.visit(remaining, p(5, 3));
        assert_eq!(goals.unvisited(remaining), vec![p(1, 3)]);
        assert!(goals.visit(remaining, p(1, 3)).is_empty());
    }

    #[test]
    fn listed_order_keeps_return_visits() {
        let goals = GoalSet::listed([p(1, 1), p(3, 1), p(1, 1)]);
        assert_eq!(goals.len(), 3);
        let remaining = goals.visit(goals.all(), p(1, 1));
        assert_eq!(remaining.indices().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(goals.visit(remaining, p(1, 1)), remaining);
        let remaining = goals.visit(remaining, p(3, 1));
        assert_eq!(goals.unvisited(remaining), vec![p(1, 1)]);
        assert!(goals.visit(remaining, p(1, 1)).is_empty());
    }

    #[test]
    fn listed_order_meets_consecutive_repeats_together() {
        let goals = GoalSet::listed([p(1, 1), p(1, 1), p(3, 1)]);
        let remaining = goals.remaining_at_start(p(1, 1));
        assert_eq!(goals.unvisited(remaining), vec![p(3, 1)]);
    }

    #[test]
    fn with_order_dispatches_on_order() {
        let positions = [p(1, 1), p(3, 1), p(1, 1)];
        let any = GoalSet::with_order(positions, VisitOrder::Any);
        assert_eq!(any, GoalSet::new(positions));
        let listed = GoalSet::with_order(positions, VisitOrder::Listed);
        assert_eq!(listed, GoalSet::listed(positions));
        assert_eq!(listed.order(), VisitOrder::Listed);
    }

    #[test]
    fn start_on_goal_counts_as_visited() {
        let goals = GoalSet::new([p(1, 1), p(3, 1)]);
        let remaining = goals.remaining_at_start(p(1, 1));
        assert_eq!(goals.unvisited(remaining), vec![p(3, 1)]);
    }

    #[test]
    fn candidates_follow_visit_order() {
        let positions = [p(1, 1), p(3, 1), p(5, 1)];
        let any = GoalSet::new(positions);
        assert_eq!(any.candidates(any.all()).count(), 3);
        let listed = GoalSet::listed(positions);
        let remaining = listed.all().without(0);
        assert_eq!(listed.candidates(remaining).collect::<Vec<_>>(), vec![p(3, 1)]);
    }

    #[test]
    fn remaining_goal_bit_operations() {
        let remaining = RemainingGoals(0b1010);
        assert!(remaining.contains(1));
        assert!(!remaining.contains(0));
        assert!(!remaining.contains(MAX_GOALS + 3));
        assert_eq!(remaining.first(), Some(1));
        assert_eq!(remaining.without(1).first(), Some(3));
        assert_eq!(remaining.without(99), remaining);
        assert_eq!(RemainingGoals::NONE.first(), None);
    }
}
