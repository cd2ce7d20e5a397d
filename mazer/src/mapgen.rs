//! Random maze generation.
//!
//! Carves a connected open region into an all-wall grid with a
//! 4-directional drunk walk. The start is the carve origin and the goal
//! the carved cell farthest from it, so every generated maze is solvable
//! by construction.

use mazer_core::{Action, Cell, Grid, manhattan};
use rand::{Rng, RngExt};

use crate::map::Maze;

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator driven by `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `width`×`height` maze with roughly `fill_pct`
    /// (0.0–1.0) of its area carved open.
    ///
    /// The walk starts at the center and steps to a uniformly random
    /// cardinal neighbor, clamped to the grid, until the carve target is
    /// reached or the step budget runs out. A step that would undo the
    /// previous one keeps going straight instead, which favors corridors
    /// over tight knots. The goal is the carved cell with the greatest
    /// Manhattan distance from the start.
    pub fn generate(&mut self, width: usize, height: usize, fill_pct: f64) -> Maze {
        let mut grid = Grid::new(width, height);
        for row in 0..height {
            for col in 0..width {
                grid.set_wall(Cell::new(row as i32, col as i32), true);
            }
        }

        let total = width * height;
        let target = ((total as f64) * fill_pct).round() as usize;
        let target = target.clamp(2, total);

        let start = Cell::new((height / 2) as i32, (width / 2) as i32);
        grid.set_wall(start, false);
        let mut goal = start;
        let mut carved = 1;
        let mut pos = start;
        let mut last: Option<Action> = None;

        // Safety budget: a walk revisits carved cells freely, so it may
        // need many more steps than `target`.
        let step_limit = total * 50;
        for _ in 0..step_limit {
            if carved >= target {
                break;
            }
            let mut action = Action::ALL[self.rng.random_range(0..4u32) as usize];
            if let Some(prev) = last {
                if action == prev.opposite() {
                    action = prev;
                }
            }
            let next = pos + action.delta();
            if !grid.contains(next) {
                continue;
            }
            pos = next;
            last = Some(action);
            if grid.is_wall(pos) {
                grid.set_wall(pos, false);
                carved += 1;
                if manhattan(start, pos) > manhattan(start, goal) {
                    goal = pos;
                }
            }
        }

        Maze { grid, start, goal }
    }
}
