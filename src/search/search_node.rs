use crate::search::{Action, Cost, HeuristicValue};

/// Index of a [`SearchNode`] in the search space arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// A [`SearchNode`] is a node in the search tree. It holds the information
/// about a state that is specific to one path through the search: its cost,
/// heuristic estimate and the node it was generated from.
///
/// Nodes are never modified once they are in the arena. The same state may be
/// represented by several nodes when it is reached along different paths; only
/// the first one popped from the frontier is expanded.
#[derive(Debug, Clone)]
pub struct SearchNode {
    node_id: NodeId,
    /// Node this one was generated from, [`None`] for the root
    parent_id: Option<NodeId>,
    /// Action that led here from the parent, [`None`] for the root
    action: Option<Action>,
    /// Cost of the path from the root
    g: Cost,
    /// Heuristic estimate of the cost to visit the remaining goals
    h: HeuristicValue,
}

impl SearchNode {
    pub fn new_root(node_id: NodeId, h: HeuristicValue) -> Self {
        Self {
            node_id,
            parent_id: None,
            action: None,
            g: Cost::from(0.),
            h,
        }
    }

    pub fn new_with_parent(
        node_id: NodeId,
        parent_id: NodeId,
        action: Action,
        g: Cost,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            parent_id: Some(parent_id),
            action: Some(action),
            g,
            h,
        }
    }

    #[inline(always)]
    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline(always)]
    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    #[inline(always)]
    pub fn get_action(&self) -> Option<Action> {
        self.action
    }

    #[inline(always)]
    pub fn get_g(&self) -> Cost {
        self.g
    }

    #[inline(always)]
    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    /// Priority of the node in the frontier, `g + h`.
    #[inline(always)]
    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
