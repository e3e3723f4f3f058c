use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

const LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Memory is sampled every this many expansions.
const MEMORY_SAMPLE_INTERVAL: usize = 1024;

/// Resource caps on a single search. All of them are off by default, in which
/// case a search only ends when it finds a plan or runs out of states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
    pub expansion_limit: Option<usize>,
}

impl SearchLimits {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_time_limit(self, time_limit: Duration) -> Self {
        Self {
            time_limit: Some(time_limit),
            ..self
        }
    }

    pub fn with_memory_limit_mb(self, memory_limit_mb: usize) -> Self {
        Self {
            memory_limit_mb: Some(memory_limit_mb),
            ..self
        }
    }

    pub fn with_expansion_limit(self, expansion_limit: usize) -> Self {
        Self {
            expansion_limit: Some(expansion_limit),
            ..self
        }
    }
}

#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        info!(
            time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = limits.memory_limit_mb,
            expansion_limit = limits.expansion_limit,
        );
        Self {
            limits,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > LOG_INTERVAL {
            self.last_log_time = Instant::now();
            self.sample_memory();
            self.log();
        }
    }

    fn sample_memory(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    fn log(&self) {
        info!(
            peak_memory_usage_mb = self.peak_memory_usage_mb,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        self.sample_memory();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn get_peak_memory_usage_mb(&self) -> Option<usize> {
        self.peak_memory_usage_mb
    }

    /// Check the limits before expanding another node, given how many nodes
    /// have been expanded so far.
    pub fn should_terminate(&mut self, expanded_nodes: usize) -> Option<SearchResult> {
        if let Some(expansion_limit) = self.limits.expansion_limit {
            if expanded_nodes >= expansion_limit {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() >= time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.limits.memory_limit_mb {
            if expanded_nodes % MEMORY_SAMPLE_INTERVAL == 0 {
                self.sample_memory();
            }
            if self
                .peak_memory_usage_mb
                .is_some_and(|peak_usage| peak_usage > memory_limit_mb)
            {
                return Some(SearchResult::MemoryLimitExceeded);
            }
        }
        None
    }
}
