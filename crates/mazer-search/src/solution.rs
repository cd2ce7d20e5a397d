use mazer_core::{Action, Cell};

/// The result of a successful search.
///
/// `actions` and `cells` are parallel sequences ordered start→goal:
/// applying `actions[i]` to the previous cell (or to the start, for i = 0)
/// lands on `cells[i]`. The start itself is excluded, the goal included,
/// so both sequences are empty when start == goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The moves taken, in order.
    pub actions: Vec<Action>,
    /// The cells visited, in order, ending on the goal.
    pub cells: Vec<Cell>,
    /// Total nodes dequeued during the search, goal included.
    pub num_explored: usize,
}

impl Solution {
    /// Path length in edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the path is empty (start == goal).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
