//! Textual maze maps: parsing and rendering.
//!
//! The map format is character-per-cell: `A` marks the unique start, `B`
//! the unique goal, a space is a free cell and any other character is a
//! wall. Lines may have uneven lengths; short lines are padded with free
//! cells on the right.

use std::collections::HashSet;
use std::fmt;

use mazer_core::{Cell, Grid};
use mazer_search::Solution;

/// A parsed maze: the wall grid plus its unique start and goal cells.
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

/// Errors from [`Maze::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// The map text contains no cells at all.
    Empty,
    /// No `A` marker.
    NoStart,
    /// More than one `A` marker.
    MultipleStarts,
    /// No `B` marker.
    NoGoal,
    /// More than one `B` marker.
    MultipleGoals,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "map is empty",
            Self::NoStart => "map has no starting point (A)",
            Self::MultipleStarts => "map must have exactly one starting point (A)",
            Self::NoGoal => "map has no goal (B)",
            Self::MultipleGoals => "map must have exactly one goal (B)",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MapError {}

impl Maze {
    /// Parse a maze from map text.
    ///
    /// The start and goal cells are guaranteed free, unique and in
    /// bounds on success, which is the contract the search engine
    /// relies on.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = text.lines().collect();
        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut grid = Grid::new(width, height);
        let mut start = None;
        let mut goal = None;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let c = Cell::new(row as i32, col as i32);
                match ch {
                    'A' => {
                        if start.replace(c).is_some() {
                            return Err(MapError::MultipleStarts);
                        }
                    }
                    'B' => {
                        if goal.replace(c).is_some() {
                            return Err(MapError::MultipleGoals);
                        }
                    }
                    ' ' => {}
                    _ => grid.set_wall(c, true),
                }
            }
        }

        Ok(Self {
            grid,
            start: start.ok_or(MapError::NoStart)?,
            goal: goal.ok_or(MapError::NoGoal)?,
        })
    }

    /// Render the maze as text, optionally overlaying a solution path.
    ///
    /// Walls draw as `█`, the start as `A`, the goal as `B`, cells on the
    /// solution path as `*` and other free cells as spaces. Every row
    /// ends with a newline.
    pub fn render(&self, solution: Option<&Solution>) -> String {
        let on_path: HashSet<Cell> = solution
            .map(|s| s.cells.iter().copied().collect())
            .unwrap_or_default();

        let mut out = String::with_capacity(self.grid.len() + self.grid.height());
        for c in self.grid.cells() {
            if self.grid.is_wall(c) {
                out.push('█');
            } else if c == self.start {
                out.push('A');
            } else if c == self.goal {
                out.push('B');
            } else if on_path.contains(&c) {
                out.push('*');
            } else {
                out.push(' ');
            }
            if c.col as usize == self.grid.width() - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
