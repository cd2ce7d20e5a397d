//! Mazer — parse, generate and solve text mazes.

pub mod map;
pub mod mapgen;

pub use map::{MapError, Maze};
pub use mapgen::MazeGen;
