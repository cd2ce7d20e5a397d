use mazer_core::{Action, Cell, Grid};

/// Neighbor enumeration — the seam between the engine and the grid.
pub trait Topology {
    /// Append the reachable neighbors of `state` into `buf`, as
    /// (move, resulting cell) pairs. The caller clears `buf` before
    /// calling.
    ///
    /// Candidates must be produced in [`Action::ALL`] order: that order
    /// decides which of several equal-length paths a search returns, and
    /// callers rely on it being stable.
    fn neighbors(&self, state: Cell, buf: &mut Vec<(Action, Cell)>);
}

impl Topology for Grid {
    fn neighbors(&self, state: Cell, buf: &mut Vec<(Action, Cell)>) {
        for action in Action::ALL {
            let candidate = state + action.delta();
            if self.open(candidate) {
                buf.push((action, candidate));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_yields_all_four_in_order() {
        let g = Grid::new(3, 3);
        let mut buf = Vec::new();
        g.neighbors(Cell::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                (Action::Up, Cell::new(0, 1)),
                (Action::Down, Cell::new(2, 1)),
                (Action::Left, Cell::new(1, 0)),
                (Action::Right, Cell::new(1, 2)),
            ]
        );
    }

    #[test]
    fn bounds_and_walls_filter_candidates() {
        let mut g = Grid::new(3, 3);
        g.set_wall(Cell::new(0, 1), true);
        let mut buf = Vec::new();
        // Top-left corner: up and left are out of bounds, right is a wall.
        g.neighbors(Cell::new(0, 0), &mut buf);
        assert_eq!(buf, vec![(Action::Down, Cell::new(1, 0))]);
    }

    #[test]
    fn fully_walled_in_cell_has_no_neighbors() {
        let mut g = Grid::new(3, 3);
        for c in [
            Cell::new(0, 1),
            Cell::new(2, 1),
            Cell::new(1, 0),
            Cell::new(1, 2),
        ] {
            g.set_wall(c, true);
        }
        let mut buf = Vec::new();
        g.neighbors(Cell::new(1, 1), &mut buf);
        assert!(buf.is_empty());
    }
}
