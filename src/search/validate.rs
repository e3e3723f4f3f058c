//! Independent checking of plans against an environment, used by callers and
//! tests to confirm a search result and to recompute its true cost. The search
//! loop itself never calls into this module.

use crate::search::{Action, Cost, Environment, GoalSet, Position, RemainingGoals};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step {step}: move {action} is not legal from {position}")]
    IllegalMove {
        step: usize,
        action: Action,
        position: Position,
    },
    #[error("plan ends at {position} with {} goal(s) not visited", .unvisited.len())]
    GoalsNotVisited {
        position: Position,
        unvisited: Vec<Position>,
    },
}

/// The outcome of replaying a plan move by move.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    /// Cost of the legal prefix of the plan.
    pub cost: Cost,
    /// Where the legal prefix ends.
    pub position: Position,
    pub remaining: RemainingGoals,
    /// The first illegal move, as `(step index, action)`.
    pub illegal_move: Option<(usize, Action)>,
}

impl Replay {
    pub fn is_solution(&self) -> bool {
        self.illegal_move.is_none() && self.remaining.is_empty()
    }
}

/// Replay `plan` from `start`, stopping at the first move the environment
/// does not offer.
pub fn replay<E: Environment + ?Sized>(
    plan: &[Action],
    environment: &E,
    start: Position,
    goals: &GoalSet,
) -> Replay {
    let mut cost = Cost::from(0.);
    let mut position = start;
    let mut remaining = goals.remaining_at_start(start);
    for (step, &action) in plan.iter().enumerate() {
        let transitions = environment.transitions(position);
        match transitions.iter().find(|t| t.action == action) {
            Some(transition) => {
                cost += transition.cost;
                position = transition.to;
                remaining = goals.visit(remaining, position);
            }
            None => {
                return Replay {
                    cost,
                    position,
                    remaining,
                    illegal_move: Some((step, action)),
                }
            }
        }
    }
    Replay {
        cost,
        position,
        remaining,
        illegal_move: None,
    }
}

/// Check that `plan` is legal and visits every goal, returning its cost.
pub fn validate<E: Environment + ?Sized>(
    plan: &[Action],
    environment: &E,
    start: Position,
    goals: &GoalSet,
) -> Result<Cost, ValidationError> {
    let replay = replay(plan, environment, start, goals);
    if let Some((step, action)) = replay.illegal_move {
        debug!(step, %action, position = %replay.position, "illegal move in plan");
        return Err(ValidationError::IllegalMove {
            step,
            action,
            position: replay.position,
        });
    }
    if !replay.remaining.is_empty() {
        let unvisited = goals.unvisited(replay.remaining);
        debug!(unvisited = unvisited.len(), "plan does not visit every goal");
        return Err(ValidationError::GoalsNotVisited {
            position: replay.position,
            unvisited,
        });
    }
    Ok(replay.cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Maze, Plan};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn validate_plan(plan: &str, start: Position, goals: &GoalSet) -> Result<Cost, ValidationError> {
        let maze = Maze::from_text(CORRIDORS_MAZE_TEXT).unwrap();
        let plan = Plan::from_text(plan).unwrap();
        validate(&plan, &maze, start, goals)
    }

    #[test]
    fn validate_good_plan_ok() {
        let goals = GoalSet::new([Position::new(5, 3)]);
        let cost = validate_plan("U U R R R R D D", Position::new(1, 3), &goals).unwrap();
        assert_approx_eq!(cost.into_inner(), 8.);
    }

    #[test]
    fn validate_counts_mud() {
        let goals = GoalSet::new([Position::new(3, 2)]);
        let cost = validate_plan("U R R D", Position::new(1, 2), &goals).unwrap();
        assert_approx_eq!(cost.into_inner(), 4.);
        let cost = validate_plan("R R", Position::new(1, 2), &goals).unwrap();
        assert_approx_eq!(cost.into_inner(), 4.);
    }

    #[test]
    fn validate_bad_plan_illegal_move() {
        let goals = GoalSet::new([Position::new(5, 3)]);
        let error = validate_plan("U U R U", Position::new(1, 3), &goals).unwrap_err();
        assert_eq!(
            error,
            ValidationError::IllegalMove {
                step: 3,
                action: Action::Up,
                position: Position::new(2, 1),
            }
        );
    }

    #[test]
    fn validate_bad_plan_incomplete() {
        let goals = GoalSet::new([Position::new(5, 3), Position::new(3, 3)]);
        let error = validate_plan("U U R R D D", Position::new(1, 3), &goals).unwrap_err();
        assert_eq!(
            error,
            ValidationError::GoalsNotVisited {
                position: Position::new(3, 3),
                unvisited: vec![Position::new(5, 3)],
            }
        );
    }

    #[test]
    fn empty_plan_solves_goal_at_start() {
        let goals = GoalSet::new([Position::new(1, 3)]);
        let cost = validate_plan("", Position::new(1, 3), &goals).unwrap();
        assert_approx_eq!(cost.into_inner(), 0.);
    }

    #[test]
    fn solution_test_reports_cost_and_validity() {
        let maze = Maze::from_text(CORRIDORS_MAZE_TEXT).unwrap();
        let goals = GoalSet::new([Position::new(5, 3)]);
        let plan = Plan::from_text("U U R R R R D D").unwrap();
        let (cost, is_solution) = maze.solution_test(&plan, Position::new(1, 3), &goals);
        assert!(is_solution);
        assert_approx_eq!(cost.into_inner(), 8.);

        let (cost, is_solution) = maze.solution_test(&plan[..6], Position::new(1, 3), &goals);
        assert!(!is_solution);
        assert_approx_eq!(cost.into_inner(), 6.);
    }
}
