//! **mazer-core** — Grid-maze domain types.
//!
//! This crate provides the foundational types shared across the *mazer*
//! workspace: grid coordinates, the four-move action vocabulary, and the
//! read-only wall grid that searches run against.

pub mod cell;
pub mod grid;

pub use cell::{Action, Cell, manhattan};
pub use grid::Grid;
