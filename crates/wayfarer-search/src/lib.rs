//! Best-first search strategies for wayfarer terrain maps.
//!
//! This crate provides one search engine with three interchangeable
//! strategies for routing across a [`wayfarer_core::Grid`]:
//!
//! - **A\*** — ascending estimated total `f = g + h` ([`Strategy::AStar`])
//! - **Dijkstra** — ascending cost-from-start `g` ([`Strategy::Dijkstra`])
//! - **BFS** — first-in-first-out discovery order ([`Strategy::Bfs`])
//!
//! All three share the loop in [`SearchEngine`] and differ only in how the
//! [`Frontier`] orders its cells, so their reports ([`PathReport`]) are
//! directly comparable.
//!
//! ```
//! use wayfarer_core::{CostModel, Grid};
//! use wayfarer_search::{SearchEngine, Strategy};
//!
//! let grid = Grid::parse("A..\n...\n..B").unwrap();
//! let costs = CostModel::default();
//! let report = SearchEngine::new(&grid, &costs, Strategy::AStar).run();
//! assert!(report.is_found());
//! assert_eq!(report.cost, 4.0);
//! ```

mod cancel;
mod distance;
mod engine;
mod frontier;
mod report;
mod strategy;

pub use cancel::CancelToken;
pub use distance::{euclidean, manhattan};
pub use engine::{CellStatus, SearchEngine, SearchStatus};
pub use frontier::Frontier;
pub use report::PathReport;
pub use strategy::{ParseStrategyError, Strategy};
