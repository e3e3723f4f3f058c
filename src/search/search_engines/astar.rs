//! A* over the augmented state space of (position, remaining goals).
//!
//! Successor states are pushed without checking whether the frontier already
//! holds a node for the same state; popped nodes whose state has already been
//! expanded are discarded. With a consistent heuristic the first expansion of
//! a state is along a cheapest path, so no state is ever expanded twice.

use crate::search::{
    search_engines::{InvalidInput, MalformedEnvironment, SearchError, SearchResult},
    Cost, Environment, Frontier, GoalSet, HeuristicName, HeuristicValue, Position, SearchLimits,
    SearchSpace, SearchState, SearchStatistics, TerminationCondition, Transition, MAX_GOALS,
};
use tracing::{info, trace};

/// One expansion, in the order the search performed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionRecord {
    pub state: SearchState,
    pub f: HeuristicValue,
}

#[derive(Debug)]
pub struct AStar {
    heuristic_name: HeuristicName,
    limits: SearchLimits,
    record_expansions: bool,
    expansions: Vec<ExpansionRecord>,
}

impl Default for AStar {
    fn default() -> Self {
        Self::new(HeuristicName::default())
    }
}

impl AStar {
    pub fn new(heuristic_name: HeuristicName) -> Self {
        Self {
            heuristic_name,
            limits: SearchLimits::none(),
            record_expansions: false,
            expansions: vec![],
        }
    }

    pub fn with_limits(self, limits: SearchLimits) -> Self {
        Self { limits, ..self }
    }

    /// Keep a record of every expansion of the next searches, available from
    /// [`AStar::expansions`].
    pub fn with_expansion_trace(self) -> Self {
        Self {
            record_expansions: true,
            ..self
        }
    }

    /// The expansions of the most recent search, if recording was enabled.
    pub fn expansions(&self) -> &[ExpansionRecord] {
        &self.expansions
    }

    /// Find a cheapest plan from `start` that visits every goal.
    ///
    /// Each call builds its own search space; nothing carries over between
    /// calls apart from the expansion trace.
    pub fn search<E: Environment + ?Sized>(
        &mut self,
        environment: &E,
        start: Position,
        goals: &GoalSet,
    ) -> Result<(SearchResult, SearchStatistics), SearchError> {
        check_input(environment, start, goals)?;
        let min_step_cost = environment.min_step_cost();
        if !min_step_cost.into_inner().is_finite() || min_step_cost <= Cost::from(0.) {
            return Err(MalformedEnvironment::InvalidMinimumCost(min_step_cost).into());
        }
        info!(
            heuristic = ?self.heuristic_name,
            order = ?goals.order(),
            %start,
            num_goals = goals.len(),
        );

        self.expansions.clear();
        let mut heuristic = self.heuristic_name.create(min_step_cost);
        let mut statistics = SearchStatistics::new();
        let mut termination_condition = TerminationCondition::new(self.limits);
        let mut frontier = Frontier::new();

        let root_state = SearchState::new(start, goals.remaining_at_start(start));
        let root_h = heuristic.evaluate(start, root_state.remaining, goals);
        statistics.increment_evaluated_nodes();
        statistics.register_heuristic_value(root_h);
        let mut search_space = SearchSpace::new(root_state, root_h);
        let root_node = search_space.get_root_node();
        frontier.push(root_node.get_node_id(), root_node.get_f());
        statistics.increment_generated_nodes(1);

        let result = loop {
            termination_condition.log_if_needed();
            let Some((node_id, f)) = frontier.pop() else {
                info!("frontier exhausted");
                break SearchResult::NoSolution;
            };
            let state = *search_space.get_state(node_id);

            if state.is_terminal() {
                let goal_node = search_space.get_node(node_id);
                let plan = search_space.extract_plan(goal_node);
                info!(plan_length = plan.len(), plan_cost = goal_node.get_g().into_inner());
                break SearchResult::Success(plan);
            }

            if search_space.is_closed(&state) {
                statistics.increment_skipped_closed_nodes();
                continue;
            }

            if let Some(result) =
                termination_condition.should_terminate(statistics.get_expanded_nodes())
            {
                info!(?result, "search aborted");
                break result;
            }

            search_space.close(state);
            statistics.increment_expanded_nodes();
            if self.record_expansions {
                self.expansions.push(ExpansionRecord { state, f });
            }
            let node = search_space.get_node(node_id);
            let g = node.get_g();
            trace!(
                position = %state.position,
                remaining = state.remaining.len(),
                g = g.into_inner(),
                h = node.get_h().into_inner(),
                "expanding"
            );
            for transition in environment.transitions(state.position) {
                check_transition(state.position, &transition, min_step_cost)?;
                let next_state = SearchState::new(
                    transition.to,
                    goals.visit(state.remaining, transition.to),
                );
                if search_space.is_closed(&next_state) {
                    statistics.increment_pruned_successors();
                    continue;
                }

                let h = heuristic.evaluate(next_state.position, next_state.remaining, goals);
                statistics.increment_evaluated_nodes();
                statistics.register_heuristic_value(h);

                let child_g = g + transition.cost;
                let child_id =
                    search_space.insert_node(next_state, node_id, transition.action, child_g, h);
                frontier.push(child_id, child_g + h);
                statistics.increment_generated_nodes(1);
            }
        };

        statistics.finalise_search();
        termination_condition.finalise();
        statistics.record_peak_memory_usage_mb(termination_condition.get_peak_memory_usage_mb());
        info!(
            closed_states = search_space.num_closed(),
            search_nodes = search_space.len(),
            peak_frontier_size = frontier.peak_len(),
            monotone_expansions = frontier.is_monotone(),
        );
        Ok((result, statistics))
    }
}

/// Find a cheapest plan from `start` visiting every goal, using the default
/// heuristic and no limits.
pub fn solve<E: Environment + ?Sized>(
    environment: &E,
    start: Position,
    goals: &GoalSet,
) -> Result<SearchResult, SearchError> {
    AStar::default()
        .search(environment, start, goals)
        .map(|(result, _)| result)
}

fn check_input<E: Environment + ?Sized>(
    environment: &E,
    start: Position,
    goals: &GoalSet,
) -> Result<(), InvalidInput> {
    if goals.is_empty() {
        return Err(InvalidInput::EmptyGoalSet);
    }
    if goals.len() > MAX_GOALS {
        return Err(InvalidInput::TooManyGoals { count: goals.len() });
    }
    if !environment.contains(start) {
        return Err(InvalidInput::StartOutOfBounds(start));
    }
    if let Some(&goal) = goals
        .positions()
        .iter()
        .find(|&&goal| !environment.contains(goal))
    {
        return Err(InvalidInput::GoalOutOfBounds(goal));
    }
    Ok(())
}

fn check_transition(
    position: Position,
    transition: &Transition,
    min_step_cost: Cost,
) -> Result<(), MalformedEnvironment> {
    let cost = transition.cost;
    if !cost.into_inner().is_finite() || cost <= Cost::from(0.) {
        return Err(MalformedEnvironment::NonPositiveCost {
            position,
            action: transition.action,
            cost,
        });
    }
    if cost < min_step_cost {
        return Err(MalformedEnvironment::CostBelowMinimum {
            position,
            action: transition.action,
            cost,
            minimum: min_step_cost,
        });
    }
    Ok(())
}
