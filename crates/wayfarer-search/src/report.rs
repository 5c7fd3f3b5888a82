//! Search results.

use wayfarer_core::Point;

use crate::engine::SearchStatus;
use crate::strategy::Strategy;

/// The outcome of one search run: the route (if any) plus counters that
/// describe how much work the run did.
///
/// Reports are plain data, detached from the engine and the grid, so they
/// can be compared across strategies or serialized as a whole.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathReport {
    /// Strategy that produced this report.
    pub strategy: Strategy,
    /// Terminal state of the run (or `Running` for a mid-run snapshot).
    pub status: SearchStatus,
    /// Route coordinates from start to goal inclusive; empty when the goal
    /// was not reached.
    pub path: Vec<Point>,
    /// Accumulated cost of the route; 0 when there is no route.
    pub cost: f64,
    /// Cells expanded (moved to the closed set) during the run.
    pub expanded: usize,
    /// Cells still open when the run ended. The goal leaves the open set
    /// the moment it is selected, so on a successful run it is not
    /// counted here.
    pub frontier: usize,
    /// Engine iterations performed, including the final one that selected
    /// the goal.
    pub iterations: usize,
}

impl PathReport {
    /// Whether the run reached the goal.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Number of moves along the route: one less than the number of route
    /// cells, and 0 when there is no route or the start is the goal.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathReport {
        PathReport {
            strategy: Strategy::AStar,
            status: SearchStatus::Found,
            path: vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)],
            cost: 2.0,
            expanded: 4,
            frontier: 3,
            iterations: 5,
        }
    }

    #[test]
    fn steps_is_one_less_than_path_cells() {
        assert_eq!(sample().steps(), 2);
    }

    #[test]
    fn steps_is_zero_without_a_route() {
        let report = PathReport {
            status: SearchStatus::Exhausted,
            path: Vec::new(),
            cost: 0.0,
            ..sample()
        };
        assert!(!report.is_found());
        assert_eq!(report.steps(), 0);
    }

    #[test]
    fn steps_is_zero_for_single_cell_route() {
        let report = PathReport {
            path: vec![Point::new(2, 2)],
            ..sample()
        };
        assert_eq!(report.steps(), 0);
    }
}
