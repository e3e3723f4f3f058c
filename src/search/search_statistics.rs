use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::{Duration, Instant};
use tracing::info;

const LOG_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded, i.e. states closed
    expanded_nodes: usize,
    /// Number of nodes evaluated by the heuristic
    evaluated_nodes: usize,
    /// Number of nodes pushed onto the frontier
    generated_nodes: usize,
    /// Number of popped nodes discarded because their state was closed
    skipped_closed_nodes: usize,
    /// Number of successors not generated because their state was closed
    pruned_successors: usize,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the search finished
    search_duration: Option<Duration>,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
    /// Highest resident memory sampled during the search, if any
    peak_memory_usage_mb: Option<usize>,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            skipped_closed_nodes: 0,
            pruned_successors: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            search_duration: None,
            last_log_time: Instant::now(),
            peak_memory_usage_mb: None,
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            info!(best_heuristic_value = self.best_heuristic_value.into_inner());
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_skipped_closed_nodes(&mut self) {
        self.skipped_closed_nodes += 1;
    }

    pub fn increment_pruned_successors(&mut self) {
        self.pruned_successors += 1;
    }

    pub fn get_expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn get_evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn get_generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn get_skipped_closed_nodes(&self) -> usize {
        self.skipped_closed_nodes
    }

    pub fn get_pruned_successors(&self) -> usize {
        self.pruned_successors
    }

    pub fn get_best_heuristic_value(&self) -> HeuristicValue {
        self.best_heuristic_value
    }

    /// Wall-clock time of the search, once it has been finalised.
    pub fn get_search_duration(&self) -> Option<Duration> {
        self.search_duration
    }

    pub fn record_peak_memory_usage_mb(&mut self, peak_memory_usage_mb: Option<usize>) {
        self.peak_memory_usage_mb = peak_memory_usage_mb;
    }

    pub fn get_peak_memory_usage_mb(&self) -> Option<usize> {
        self.peak_memory_usage_mb
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > LOG_INTERVAL {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            skipped_closed_nodes = self.skipped_closed_nodes,
            pruned_successors = self.pruned_successors,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&mut self) {
        let duration = self.search_start_time.elapsed();
        self.search_duration = Some(duration);
        info!("finalising search");
        self.log();
        info!(search_duration = duration.as_secs_f64());
    }
}
