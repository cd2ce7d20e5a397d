//! Uninformed graph search over grid mazes.
//!
//! This crate implements the search engine behind *mazer*:
//!
//! - **Frontier** ([`Frontier`]): the pending-node container, with
//!   last-in-first-out ([`Policy::Lifo`]) and first-in-first-out
//!   ([`Policy::Fifo`]) removal selected at construction.
//! - **Topology** ([`Topology`]): the neighbor-enumeration seam between the
//!   engine and whatever supplies the grid.
//! - **Engine** ([`Search`]): the dequeue/expand loop and path
//!   reconstruction, producing a [`Solution`].
//!
//! The Fifo policy is the default: on an unweighted grid it guarantees a
//! path of minimal edge count. Lifo gives depth-first exploration with no
//! such guarantee.

mod engine;
mod frontier;
mod solution;
mod topology;

pub use engine::{Search, SolveError};
pub use frontier::{EmptyFrontier, Frontier, NodeId, Policy, SearchNode};
pub use solution::Solution;
pub use topology::Topology;
