use crate::search::{Action, Cost, Position, MAX_GOALS};
use thiserror::Error;

/// Errors that stop a search before or during expansion. Running out of
/// states is not an error, see [`super::SearchResult::NoSolution`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("malformed environment: {0}")]
    MalformedEnvironment(#[from] MalformedEnvironment),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("the goal set is empty")]
    EmptyGoalSet,
    #[error("start {0} is outside the environment")]
    StartOutOfBounds(Position),
    #[error("goal {0} is outside the environment")]
    GoalOutOfBounds(Position),
    #[error("{count} goals given, at most {MAX_GOALS} are supported")]
    TooManyGoals { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEnvironment {
    #[error("minimum step cost {0} is not a positive finite number")]
    InvalidMinimumCost(Cost),
    #[error("move {action} from {position} has non-positive or non-finite cost {cost}")]
    NonPositiveCost {
        position: Position,
        action: Action,
        cost: Cost,
    },
    #[error("move {action} from {position} costs {cost}, below the minimum step cost {minimum}")]
    CostBelowMinimum {
        position: Position,
        action: Action,
        cost: Cost,
        minimum: Cost,
    },
}
