//! The search engine: dequeue, expand, reconstruct.

use std::collections::HashSet;
use std::fmt;

use mazer_core::{Action, Cell};

use crate::frontier::{EmptyFrontier, Frontier, Policy, SearchNode};
use crate::solution::Solution;
use crate::topology::Topology;

/// Errors terminating a [`Search::solve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The goal is unreachable from the start. A legitimate outcome on
    /// disconnected grids.
    NoSolution,
    /// Frontier underflow. The engine checks emptiness before every
    /// removal, so this indicates a broken invariant, not bad input.
    Frontier(EmptyFrontier),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolution => f.write_str("no solution: goal is unreachable from start"),
            Self::Frontier(e) => write!(f, "frontier invariant violated: {e}"),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<EmptyFrontier> for SolveError {
    fn from(e: EmptyFrontier) -> Self {
        Self::Frontier(e)
    }
}

/// Uninformed single-source single-goal search over a [`Topology`].
///
/// `Search` owns the frontier, the explored set, the arena of expanded
/// nodes and a neighbor scratch buffer, and reuses their allocations
/// across calls. All of them are reset on `solve` entry, so repeated
/// invocations are independent: no search state leaks from one call to
/// the next.
pub struct Search {
    frontier: Frontier,
    explored: HashSet<Cell>,
    /// Expanded nodes; frontier nodes refer to parents by index in here.
    nodes: Vec<SearchNode>,
    nbuf: Vec<(Action, Cell)>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}

impl Search {
    /// Create a search engine with the given frontier policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            frontier: Frontier::new(policy),
            explored: HashSet::new(),
            nodes: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The frontier policy this engine searches with.
    pub fn policy(&self) -> Policy {
        self.frontier.policy()
    }

    /// Find a path from `start` to `goal`.
    ///
    /// `start` and `goal` must be free cells of the topology; that is the
    /// caller's contract and is not validated here. Under [`Policy::Fifo`]
    /// the returned path has minimal edge count. Fails with
    /// [`SolveError::NoSolution`] when the goal is unreachable.
    pub fn solve<T: Topology>(
        &mut self,
        topo: &T,
        start: Cell,
        goal: Cell,
    ) -> Result<Solution, SolveError> {
        self.frontier.clear();
        self.explored.clear();
        self.nodes.clear();

        self.frontier.add(SearchNode::root(start));
        let mut num_explored = 0usize;

        loop {
            if self.frontier.is_empty() {
                log::debug!("search exhausted after {num_explored} expansions, goal {goal} unreachable");
                return Err(SolveError::NoSolution);
            }

            let node = self.frontier.remove()?;
            num_explored += 1;

            if node.state == goal {
                let solution = self.reconstruct(node, num_explored);
                log::debug!(
                    "goal {goal} reached: {} steps, {num_explored} nodes explored",
                    solution.len()
                );
                return Ok(solution);
            }

            self.explored.insert(node.state);
            let id = self.nodes.len();
            self.nodes.push(node);

            self.nbuf.clear();
            topo.neighbors(node.state, &mut self.nbuf);
            for i in 0..self.nbuf.len() {
                let (action, state) = self.nbuf[i];
                // A neighbor already explored, or already pending under
                // some other parent, must not be enqueued again: each
                // state enters the tree at most once.
                if self.explored.contains(&state) || self.frontier.contains_state(state) {
                    continue;
                }
                self.frontier.add(SearchNode::child(state, id, action));
            }
        }
    }

    /// Walk parent links from the goal node back to the root, then flip
    /// both sequences so they read start→goal. The root contributes
    /// neither an action nor a cell.
    fn reconstruct(&self, goal_node: SearchNode, num_explored: usize) -> Solution {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut node = goal_node;
        while let (Some(parent), Some(action)) = (node.parent, node.action) {
            actions.push(action);
            cells.push(node.state);
            node = self.nodes[parent];
        }
        actions.reverse();
        cells.reverse();
        Solution {
            actions,
            cells,
            num_explored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Grid;

    /// Build a grid from an ASCII map: `#` wall, `A` start, `B` goal,
    /// anything else free. Short lines are padded with free cells.
    fn parse(map: &str) -> (Grid, Cell, Cell) {
        let lines: Vec<&str> = map.lines().collect();
        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap();
        let mut grid = Grid::new(width, height);
        let mut start = None;
        let mut goal = None;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let c = Cell::new(row as i32, col as i32);
                match ch {
                    '#' => grid.set_wall(c, true),
                    'A' => start = Some(c),
                    'B' => goal = Some(c),
                    _ => {}
                }
            }
        }
        (grid, start.unwrap(), goal.unwrap())
    }

    /// Replay the action sequence from `start` and check it matches the
    /// cell sequence, stays on free cells, and ends on `goal`.
    fn assert_walk(grid: &Grid, start: Cell, goal: Cell, sol: &Solution) {
        assert_eq!(sol.actions.len(), sol.cells.len());
        let mut cur = start;
        for (action, &cell) in sol.actions.iter().zip(&sol.cells) {
            cur = cur + action.delta();
            assert_eq!(cur, cell, "cell sequence disagrees with action replay");
            assert!(grid.open(cur), "path crosses wall or leaves grid at {cur}");
        }
        assert_eq!(cur, goal);
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::new(3, 3);
        let c = Cell::new(1, 1);
        let sol = Search::default().solve(&grid, c, c).unwrap();
        assert!(sol.is_empty());
        assert!(sol.cells.is_empty());
        assert_eq!(sol.num_explored, 1);
    }

    #[test]
    fn straight_corridor() {
        let (grid, start, goal) = parse("A..B");
        let sol = Search::default().solve(&grid, start, goal).unwrap();
        assert_eq!(sol.actions, vec![Action::Right; 3]);
        assert_eq!(
            sol.cells,
            vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 3)]
        );
        assert_eq!(sol.num_explored, 4);
        assert_walk(&grid, start, goal, &sol);
    }

    #[test]
    fn unreachable_goal_fails() {
        let (grid, start, goal) = parse("A#B");
        let err = Search::default().solve(&grid, start, goal).unwrap_err();
        assert_eq!(err, SolveError::NoSolution);
    }

    #[test]
    fn walled_row_with_gap() {
        // One wall row separating two free rows, gap on the right.
        let (grid, start, goal) = parse(
            "A..\n\
             ##.\n\
             B..",
        );
        let sol = Search::default().solve(&grid, start, goal).unwrap();
        assert_eq!(
            sol.actions,
            vec![
                Action::Right,
                Action::Right,
                Action::Down,
                Action::Down,
                Action::Left,
                Action::Left,
            ]
        );
        // Breadth-first dequeues every reachable free cell before the goal.
        assert_eq!(sol.num_explored, grid.free_count());
        assert_eq!(sol.num_explored, 7);
        assert_walk(&grid, start, goal, &sol);
    }

    #[test]
    fn adjacent_cells_with_wall_between() {
        // Start and goal are adjacent but separated by a wall; Fifo finds
        // the 4-step detour. Expansion order (up, down, left, right)
        // makes the left-hand detour the one returned.
        let (grid, start, goal) = parse(
            ".A.\n\
             .#.\n\
             .B.",
        );
        let sol = Search::default().solve(&grid, start, goal).unwrap();
        assert_eq!(
            sol.actions,
            vec![Action::Left, Action::Down, Action::Down, Action::Right]
        );
        assert_eq!(
            sol.cells,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1)
            ]
        );
        assert_eq!(sol.num_explored, 8);
        assert_walk(&grid, start, goal, &sol);
    }

    #[test]
    fn fifo_beats_lifo_on_looped_map() {
        // The goal sits left of the start behind a wall; the rightward
        // loop is longer. Lifo expands the most recent child first and
        // takes the loop, Fifo returns the minimal path.
        let map = "B#A.\n\
                   .#..\n\
                   ....";
        let (grid, start, goal) = parse(map);

        let bfs = Search::new(Policy::Fifo).solve(&grid, start, goal).unwrap();
        assert_eq!(bfs.len(), 6);
        assert_walk(&grid, start, goal, &bfs);

        let dfs = Search::new(Policy::Lifo).solve(&grid, start, goal).unwrap();
        assert_eq!(dfs.len(), 8);
        assert_walk(&grid, start, goal, &dfs);
    }

    #[test]
    fn explored_never_exceeds_free_cells() {
        let (grid, start, goal) = parse(
            "A....\n\
             .....\n\
             .....\n\
             .....\n\
             ....B",
        );
        for policy in [Policy::Fifo, Policy::Lifo] {
            let sol = Search::new(policy).solve(&grid, start, goal).unwrap();
            assert!(sol.num_explored <= grid.free_count());
            assert_walk(&grid, start, goal, &sol);
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let (grid, start, goal) = parse(
            "A...\n\
             .##.\n\
             ...B",
        );
        let first = Search::default().solve(&grid, start, goal).unwrap();
        let second = Search::default().solve(&grid, start, goal).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn engine_is_reusable_across_solves() {
        let mut search = Search::default();

        let (blocked, s1, g1) = parse("A#B");
        assert_eq!(search.solve(&blocked, s1, g1), Err(SolveError::NoSolution));

        // A failed run leaves nothing behind that taints the next one.
        let (open, s2, g2) = parse("A..B");
        let sol = search.solve(&open, s2, g2).unwrap();
        assert_eq!(sol.len(), 3);
        assert_eq!(sol.num_explored, 4);

        // Nor does a successful run.
        let again = search.solve(&open, s2, g2).unwrap();
        assert_eq!(again, sol);
    }

    #[test]
    fn pending_neighbor_is_not_enqueued_twice() {
        // On an open grid interior cells become reachable from several
        // parents while still pending. With duplicate suppression every
        // free cell is dequeued exactly once, so the corner-to-corner
        // search dequeues precisely all nine cells.
        let (grid, start, goal) = parse(
            "A..\n\
             ...\n\
             ..B",
        );
        let sol = Search::default().solve(&grid, start, goal).unwrap();
        assert_eq!(sol.num_explored, 9);
        assert_eq!(sol.len(), 4);
    }
}
