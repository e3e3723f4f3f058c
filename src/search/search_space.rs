use crate::search::{Action, Cost, HeuristicValue, NodeId, Plan, SearchNode, SearchState};
use segvec::{Linear, SegVec};
use std::collections::HashSet;

/// A [`SearchSpace`] owns everything one search call creates: the arena of
/// search nodes, the state each node represents, and the closed set of states
/// that have already been expanded.
///
/// Parent references are arena indices and only ever point at nodes inserted
/// earlier, so the nodes form a tree rooted at the start node.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<SearchState, Linear>,
    closed: HashSet<SearchState>,
}

impl SearchSpace {
    pub fn new(initial_state: SearchState, h: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();

        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_root(root_node_id, h));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            closed: HashSet::new(),
        }
    }

    /// Add a node for `state`, reached from `parent_id` by `action`. A new
    /// node is created even if another node already represents `state`.
    pub fn insert_node(
        &mut self,
        state: SearchState,
        parent_id: NodeId,
        action: Action,
        g: Cost,
        h: HeuristicValue,
    ) -> NodeId {
        debug_assert!(parent_id.id() < self.nodes.len());
        let node_id = NodeId::new(self.nodes.len());
        self.nodes
            .push(SearchNode::new_with_parent(node_id, parent_id, action, g, h));
        self.states.push(state);
        node_id
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &SearchState {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn is_closed(&self, state: &SearchState) -> bool {
        self.closed.contains(state)
    }

    /// Mark `state` as expanded. Returns `false` if it already was.
    pub fn close(&mut self, state: SearchState) -> bool {
        self.closed.insert(state)
    }

    pub fn num_closed(&self) -> usize {
        self.closed.len()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// The actions leading from the root to `goal_node`.
    pub fn extract_plan(&self, goal_node: &SearchNode) -> Plan {
        let mut steps = vec![];
        let mut current_node = goal_node;
        while let (Some(parent_id), Some(action)) =
            (current_node.get_parent_id(), current_node.get_action())
        {
            steps.push(action);
            current_node = self.get_node(parent_id);
        }
        steps.reverse();
        Plan::new(steps)
    }
}
