use crate::search::Plan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A minimum-cost plan visiting every goal
    Success(Plan),
    /// The search space was exhausted without visiting every goal
    NoSolution,
    /// The search was aborted by its time limit
    TimeLimitExceeded,
    /// The search was aborted by its memory limit
    MemoryLimitExceeded,
    /// The search was aborted by its expansion limit
    ExpansionLimitExceeded,
}

impl SearchResult {
    /// Whether the search stopped on a limit rather than running to
    /// completion.
    pub fn is_aborted(&self) -> bool {
        matches!(
            self,
            SearchResult::TimeLimitExceeded
                | SearchResult::MemoryLimitExceeded
                | SearchResult::ExpansionLimitExceeded
        )
    }

    pub fn plan(&self) -> Option<&Plan> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            _ => None,
        }
    }
}
