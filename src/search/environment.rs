//! The contract between the search engine and the world it searches.

use crate::search::{replay, Action, GoalSet, Position};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use std::fmt::Debug;

/// Cost of a move or of a whole plan.
pub type Cost = OrderedFloat<f64>;

/// A legal move out of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub cost: Cost,
    pub to: Position,
}

impl Transition {
    pub fn new(action: Action, cost: impl Into<Cost>, to: Position) -> Self {
        Self {
            action,
            cost: cost.into(),
            to,
        }
    }
}

/// Grid moves are 4-connected, so this never spills to the heap.
pub type Transitions = SmallVec<[Transition; 4]>;

pub trait Environment: Debug {
    /// Whether `position` lies within the environment's bounds.
    fn contains(&self, position: Position) -> bool;

    /// All legal moves out of `position`, in a deterministic order. Moves into
    /// impassable cells are not listed. Every cost must be finite and at least
    /// [`Environment::min_step_cost`].
    fn transitions(&self, position: Position) -> Transitions;

    /// A lower bound on the cost of any single move. Heuristics scale grid
    /// distances by this, so it has to be strictly positive.
    fn min_step_cost(&self) -> Cost;

    /// Replay `plan` from `start` and report its total cost and whether it is
    /// a legal plan that visits every goal. An illegal move ends the replay;
    /// the cost is then the cost of the legal prefix.
    fn solution_test(&self, plan: &[Action], start: Position, goals: &GoalSet) -> (Cost, bool) {
        let replay = replay(plan, self, start, goals);
        (replay.cost, replay.is_solution())
    }
}
