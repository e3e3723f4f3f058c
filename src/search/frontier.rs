use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Min-priority queue of search nodes ordered by `f`. Ties go to the node that
/// was pushed first, so a search over the same inputs always expands nodes in
/// the same order.
#[derive(Debug)]
pub struct Frontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
    last_popped: Option<HeuristicValue>,
    is_monotone: bool,
    peak_len: usize,
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
            last_popped: None,
            is_monotone: true,
            peak_len: 0,
        }
    }

    pub fn push(&mut self, node_id: NodeId, f: HeuristicValue) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(node_id, Reverse((f, sequence)));
        self.peak_len = self.peak_len.max(self.queue.len());
    }

    /// Remove the node with the lowest `f`, returning it with its priority.
    pub fn pop(&mut self) -> Option<(NodeId, HeuristicValue)> {
        let (node_id, Reverse((f, _))) = self.queue.pop()?;
        if self.last_popped.is_some_and(|last| f < last) {
            self.is_monotone = false;
        }
        self.last_popped = Some(f);
        Some((node_id, f))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn last_popped(&self) -> Option<HeuristicValue> {
        self.last_popped
    }

    /// Whether every pop so far had an `f` no lower than the pop before it.
    /// Holds for A* with a consistent heuristic.
    pub fn is_monotone(&self) -> bool {
        self.is_monotone
    }

    /// The most entries the frontier held at any one time.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(value: f64) -> HeuristicValue {
        HeuristicValue::from(value)
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut frontier = Frontier::new();
        frontier.push(NodeId::new(0), f(5.));
        frontier.push(NodeId::new(1), f(2.));
        frontier.push(NodeId::new(2), f(3.));
        assert_eq!(frontier.pop(), Some((NodeId::new(1), f(2.))));
        assert_eq!(frontier.pop(), Some((NodeId::new(2), f(3.))));
        assert_eq!(frontier.pop(), Some((NodeId::new(0), f(5.))));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_monotone());
    }

    #[test]
    fn ties_are_first_in_first_out() {
        let mut frontier = Frontier::new();
        for index in [7, 3, 9, 1] {
            frontier.push(NodeId::new(index), f(4.));
        }
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop())
            .map(|(node_id, _)| node_id.id())
            .collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }

    #[test]
    fn detects_non_monotone_pops() {
        let mut frontier = Frontier::new();
        frontier.push(NodeId::new(0), f(3.));
        frontier.pop();
        frontier.push(NodeId::new(1), f(1.));
        frontier.pop();
        assert!(!frontier.is_monotone());
        assert_eq!(frontier.last_popped(), Some(f(1.)));
    }

    #[test]
    fn tracks_peak_len() {
        let mut frontier = Frontier::new();
        frontier.push(NodeId::new(0), f(1.));
        frontier.push(NodeId::new(1), f(1.));
        frontier.pop();
        frontier.push(NodeId::new(2), f(1.));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.peak_len(), 2);
    }
}
