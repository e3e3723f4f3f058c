//! Admissible lower bounds on the cost of visiting every remaining goal.

mod farthest_goal;
mod heuristic;
mod nearest_goal;
mod zero_heuristic;

pub use farthest_goal::FarthestGoal;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use nearest_goal::NearestGoal;
pub use zero_heuristic::ZeroHeuristic;
