//! Multi-goal optimal search over grid environments.
//!
//! The pieces fit together as follows: an [`Environment`] (usually a
//! [`Maze`]) says which moves are legal from a cell and what they cost, a
//! [`GoalSet`] says which cells must all be visited, and the
//! [`search_engines::AStar`] engine explores [`SearchState`]s (a position
//! paired with the goals still outstanding) until every goal has been
//! visited, returning the cheapest [`Plan`].

mod action;
pub mod config;
mod environment;
mod frontier;
mod goal;
pub mod heuristics;
mod maze;
mod plan;
mod position;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod state;
mod termination_condition;
mod validate;
mod verbosity;

pub use action::Action;
pub use environment::{Cost, Environment, Transition, Transitions};
pub use frontier::Frontier;
pub use goal::{GoalSet, RemainingGoals, VisitOrder, MAX_GOALS};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use maze::{CellCosts, Maze, MazeError};
pub use plan::{Plan, PlanError};
pub use position::Position;
pub use search_node::{NodeId, SearchNode};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use state::SearchState;
pub use termination_condition::{SearchLimits, TerminationCondition};
pub use validate::{replay, validate, Replay, ValidationError};
pub use verbosity::Verbosity;
