//! The [`Grid`] type — a row-major wall matrix.
//!
//! `true` at a cell means the cell is a wall (impassable). The grid is
//! built once by a collaborator (map parser, generator) and only read
//! during a search.

use crate::cell::Cell;

/// A height×width boolean wall matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl Grid {
    /// Create a new grid of the given dimensions with every cell free.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            walls: vec![false; width * height],
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Convert a cell to a flat index. Returns `None` if out of bounds.
    #[inline]
    fn idx(&self, c: Cell) -> Option<usize> {
        if c.row >= 0 && c.col >= 0 && (c.row as usize) < self.height && (c.col as usize) < self.width
        {
            Some((c.row as usize) * self.width + c.col as usize)
        } else {
            None
        }
    }

    /// Whether `c` lies within grid bounds.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.idx(c).is_some()
    }

    /// Whether `c` is a wall. Out-of-bounds cells are not walls.
    #[inline]
    pub fn is_wall(&self, c: Cell) -> bool {
        self.idx(c).is_some_and(|i| self.walls[i])
    }

    /// Whether `c` is in bounds and free.
    #[inline]
    pub fn open(&self, c: Cell) -> bool {
        self.idx(c).is_some_and(|i| !self.walls[i])
    }

    /// Mark `c` as wall or free. Out-of-bounds cells are ignored.
    pub fn set_wall(&mut self, c: Cell, wall: bool) {
        if let Some(i) = self.idx(c) {
            self.walls[i] = wall;
        }
    }

    /// Number of free (non-wall) cells.
    pub fn free_count(&self) -> usize {
        self.walls.iter().filter(|&&w| !w).count()
    }

    /// Row-major iterator over every cell position.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let w = self.width;
        (0..self.walls.len()).map(move |i| Cell::new((i / w) as i32, (i % w) as i32))
    }
}
