use crate::search::{Cost, GoalSet, Heuristic, HeuristicValue, Position, RemainingGoals};

/// Manhattan distance to the nearest goal that could be visited next, scaled
/// by the cheapest move cost. Walls are ignored, as is the cost of visiting
/// the goals after that one.
#[derive(Debug, Clone)]
pub struct NearestGoal {
    min_step_cost: Cost,
}

impl NearestGoal {
    pub fn new(min_step_cost: Cost) -> Self {
        Self { min_step_cost }
    }
}

impl Heuristic for NearestGoal {
    fn evaluate(
        &mut self,
        position: Position,
        remaining: RemainingGoals,
        goals: &GoalSet,
    ) -> HeuristicValue {
        goals
            .candidates(remaining)
            .map(|goal| position.manhattan_distance(&goal))
            .min()
            .map_or(HeuristicValue::from(0.), |distance| {
                self.min_step_cost * HeuristicValue::from(distance as f64)
            })
    }
}
