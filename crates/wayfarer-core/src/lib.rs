//! **wayfarer-core** — Terrain maps and movement costs (core types).
//!
//! This crate provides the foundational types used across the *wayfarer*
//! toolkit: geometry primitives, the terrain symbol alphabet with its
//! movement-cost table, and the immutable text-parsed grid that searches
//! run over.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::Point;
pub use grid::{Cell, Grid, MalformedMap, OutOfBounds};
pub use terrain::{CostModel, DEFAULT_STEP_COST, is_obstacle};
