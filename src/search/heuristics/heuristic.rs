use crate::search::heuristics::{FarthestGoal, NearestGoal, ZeroHeuristic};
use crate::search::{Cost, GoalSet, Position, RemainingGoals};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the cost of visiting every goal in `remaining`, starting at
    /// `position` and ending anywhere. The estimate must never exceed the true
    /// cost and must be zero once no goals remain.
    fn evaluate(
        &mut self,
        position: Position,
        remaining: RemainingGoals,
        goals: &GoalSet,
    ) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Manhattan distance to the nearest remaining goal.")]
    NearestGoal,
    #[clap(help = "Manhattan distance to the farthest remaining goal. Never weaker \
        than nearest-goal.")]
    FarthestGoal,
    #[clap(name = "zero", help = "The zero heuristic, i.e. uniform-cost search.")]
    #[serde(rename = "zero")]
    ZeroHeuristic,
}

impl HeuristicName {
    /// Build the heuristic for an environment whose cheapest move costs
    /// `min_step_cost`. Grid distances are scaled by it so the estimate stays
    /// a lower bound whatever the cell costs are.
    pub fn create(&self, min_step_cost: Cost) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::NearestGoal => Box::new(NearestGoal::new(min_step_cost)),
            HeuristicName::FarthestGoal => Box::new(FarthestGoal::new(min_step_cost)),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
