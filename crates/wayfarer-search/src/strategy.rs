//! Search strategy selection.
//!
//! All strategies run through the same engine loop and differ only in how
//! the next frontier cell is chosen, so switching strategy changes which
//! route is found and how much of the map gets explored, never the
//! surrounding bookkeeping.

use std::fmt;
use std::str::FromStr;

/// The rule for picking the next frontier cell to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Lowest estimated total `f = g + h` first, with a Euclidean goal
    /// estimate. Finds a cheapest route while expanding few cells.
    AStar,
    /// Lowest cost-from-start `g` first. Finds a cheapest route with no
    /// goal guidance, exploring evenly in all directions.
    Dijkstra,
    /// First discovered, first expanded. Ignores terrain costs and finds a
    /// route with the fewest steps.
    Bfs,
}

impl Strategy {
    /// All strategies, in the order they are listed to users.
    pub const ALL: [Strategy; 3] = [Strategy::AStar, Strategy::Dijkstra, Strategy::Bfs];

    /// Priority key for a cell with cost-from-start `g` and estimated total
    /// `f`. Lower keys pop first; equal keys pop in insertion order. BFS
    /// uses a constant key so insertion order alone decides.
    #[inline]
    pub(crate) fn priority(self, g: f64, f: f64) -> f64 {
        match self {
            Strategy::AStar => f,
            Strategy::Dijkstra => g,
            Strategy::Bfs => 0.0,
        }
    }

    /// Whether an already-open cell is re-keyed when a cheaper route to it
    /// appears. Cost-guided strategies do this to stay optimal; BFS keeps
    /// its first discovery so expansion stays strictly first-in-first-out.
    #[inline]
    pub(crate) fn relaxes_open(self) -> bool {
        !matches!(self, Strategy::Bfs)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::AStar => "astar",
            Strategy::Dijkstra => "dijkstra",
            Strategy::Bfs => "bfs",
        };
        write!(f, "{name}")
    }
}

/// Error for an unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?}, expected one of: astar, dijkstra, bfs",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astar" => Ok(Strategy::AStar),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "bfs" => Ok(Strategy::Bfs),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Strategy::AStar).unwrap(), "\"AStar\"");
        let back: Strategy = serde_json::from_str("\"Dijkstra\"").unwrap();
        assert_eq!(back, Strategy::Dijkstra);
    }
}
