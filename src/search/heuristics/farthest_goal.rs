use crate::search::{Cost, GoalSet, Heuristic, HeuristicValue, Position, RemainingGoals};

/// Manhattan distance to the farthest goal that could be visited next, scaled
/// by the cheapest move cost. Every remaining goal has to be reached at some
/// point, so the farthest one is still a lower bound, and never a worse one
/// than [`super::NearestGoal`].
#[derive(Debug, Clone)]
pub struct FarthestGoal {
    min_step_cost: Cost,
}

impl FarthestGoal {
    pub fn new(min_step_cost: Cost) -> Self {
        Self { min_step_cost }
    }
}

impl Heuristic for FarthestGoal {
    fn evaluate(
        &mut self,
        position: Position,
        remaining: RemainingGoals,
        goals: &GoalSet,
    ) -> HeuristicValue {
        goals
            .candidates(remaining)
            .map(|goal| position.manhattan_distance(&goal))
            .max()
            .map_or(HeuristicValue::from(0.), |distance| {
                self.min_step_cost * HeuristicValue::from(distance as f64)
            })
    }
}
