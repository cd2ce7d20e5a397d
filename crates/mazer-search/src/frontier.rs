//! The frontier: discovered-but-not-yet-expanded search nodes.

use std::collections::VecDeque;
use std::fmt;

use mazer_core::{Action, Cell};

/// Index of an expanded node in the engine's node arena.
pub type NodeId = usize;

/// One step in the exploration tree.
///
/// `parent` is an arena index into the nodes already expanded by the
/// engine, so the link only ever points backward; the root has neither
/// parent nor action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: Cell,
    pub parent: Option<NodeId>,
    pub action: Option<Action>,
}

impl SearchNode {
    /// The root node of a search tree.
    pub fn root(state: Cell) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    /// A child of the expanded node `parent`, reached via `action`.
    pub fn child(state: Cell, parent: NodeId, action: Action) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

/// Removal order of a [`Frontier`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Last in, first out. Depth-first exploration order.
    Lifo,
    /// First in, first out. Breadth-first exploration order; the default,
    /// and the only policy with a shortest-path guarantee.
    #[default]
    Fifo,
}

/// Error returned by [`Frontier::remove`] on an empty frontier.
///
/// The engine checks [`Frontier::is_empty`] before every removal, so this
/// is a defensive contract on the container rather than a reachable
/// condition in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFrontier;

impl fmt::Display for EmptyFrontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("remove from empty frontier")
    }
}

impl std::error::Error for EmptyFrontier {}

/// An ordered container of pending [`SearchNode`]s.
///
/// A single type covers both removal policies; the policy is fixed at
/// construction. `add` is O(1) amortized; `contains_state` is a linear
/// scan, which is fine at toy-maze scale (an auxiliary index would speed
/// it up without changing the observable order).
#[derive(Debug, Clone)]
pub struct Frontier {
    nodes: VecDeque<SearchNode>,
    policy: Policy,
}

impl Frontier {
    /// Create an empty frontier with the given removal policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            nodes: VecDeque::new(),
            policy,
        }
    }

    /// The removal policy fixed at construction.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Append a node.
    pub fn add(&mut self, node: SearchNode) {
        self.nodes.push_back(node);
    }

    /// Whether no nodes are pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of pending nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Remove and return the next node per policy.
    pub fn remove(&mut self) -> Result<SearchNode, EmptyFrontier> {
        let node = match self.policy {
            Policy::Lifo => self.nodes.pop_back(),
            Policy::Fifo => self.nodes.pop_front(),
        };
        node.ok_or(EmptyFrontier)
    }

    /// Whether some pending node has the given state.
    pub fn contains_state(&self, state: Cell) -> bool {
        self.nodes.iter().any(|n| n.state == state)
    }

    /// Drop all pending nodes, keeping the policy and capacity.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
