use crate::search::{Environment, GoalSet, Maze, Position, RemainingGoals, SearchState};
use std::collections::HashMap;

pub const CORRIDORS_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/corridors.txt"
));

pub const MUDFLATS_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/mudflats.txt"
));

pub const SEALED_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/sealed.txt"
));

pub const COURTYARD_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/courtyard.txt"
));

/// The outstanding goals given as a bitmask over goal indices.
pub fn remaining_from_mask(goals: &GoalSet, mask: u64) -> RemainingGoals {
    (0..goals.len())
        .filter(|&index| mask & (1 << index) == 0)
        .fold(goals.all(), |remaining, index| remaining.without(index))
}

/// The exact cost of visiting every outstanding goal from every state of
/// `maze`, found by relaxing all transitions until nothing changes. States
/// from which the goals cannot all be visited are left out.
///
/// Only meant for small mazes with a handful of goals.
pub fn exact_remaining_costs(maze: &Maze, goals: &GoalSet) -> HashMap<SearchState, f64> {
    let positions: Vec<Position> = maze.passable_positions().collect();
    let masks: Vec<RemainingGoals> = (0..(1u64 << goals.len()))
        .map(|mask| remaining_from_mask(goals, mask))
        .collect();

    let mut costs: HashMap<SearchState, f64> = positions
        .iter()
        .map(|&position| (SearchState::new(position, RemainingGoals::NONE), 0.))
        .collect();
    let mut changed = true;
    while changed {
        changed = false;
        for &position in &positions {
            for &remaining in masks.iter().filter(|remaining| !remaining.is_empty()) {
                let best = maze
                    .transitions(position)
                    .into_iter()
                    .filter_map(|transition| {
                        let next = SearchState::new(
                            transition.to,
                            goals.visit(remaining, transition.to),
                        );
                        costs
                            .get(&next)
                            .map(|cost| cost + transition.cost.into_inner())
                    })
                    .reduce(f64::min);
                let Some(best) = best else { continue };
                let state = SearchState::new(position, remaining);
                if costs.get(&state).map_or(true, |&cost| best < cost) {
                    costs.insert(state, best);
                    changed = true;
                }
            }
        }
    }
    costs
}

/// The cheapest cost of a plan from `start` visiting every goal, if any.
pub fn brute_force_cost(maze: &Maze, start: Position, goals: &GoalSet) -> Option<f64> {
    exact_remaining_costs(maze, goals)
        .get(&SearchState::new(start, goals.remaining_at_start(start)))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brute_force_agrees_with_hand_computed_costs() {
        let corridors = Maze::from_text(CORRIDORS_MAZE_TEXT).unwrap();
        let p = Position::new;
        assert_eq!(
            brute_force_cost(&corridors, p(1, 3), &GoalSet::new([p(5, 3)])),
            Some(8.)
        );
        assert_eq!(
            brute_force_cost(&corridors, p(1, 1), &GoalSet::new([p(5, 3), p(1, 3)])),
            Some(10.)
        );
        let sealed = Maze::from_text(SEALED_MAZE_TEXT).unwrap();
        assert_eq!(
            brute_force_cost(&sealed, p(5, 1), &GoalSet::new([p(5, 3)])),
            None
        );
    }
}
