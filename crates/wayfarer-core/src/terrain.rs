//! Terrain symbols and movement costs.
//!
//! A map file is plain text: one character per cell. Most characters name a
//! terrain kind with a movement cost; `#` marks an impassable obstacle and
//! `A`/`B` mark the endpoints. Characters outside the table are tolerated
//! and move at [`DEFAULT_STEP_COST`], so maps with decorative symbols still
//! parse.

use std::collections::HashMap;

pub const START: char = 'A';
pub const GOAL: char = 'B';
pub const OBSTACLE: char = '#';
pub const PLAIN: char = '.';
pub const ROAD: char = 'r';
pub const GRASS: char = 'g';
pub const FOREST: char = 'f';
pub const MOUNTAIN: char = 'm';
pub const WATER: char = 'w';

/// Cost applied to symbols missing from the cost table.
pub const DEFAULT_STEP_COST: f64 = 1.0;

/// Whether a terrain symbol marks an impassable cell.
pub fn is_obstacle(symbol: char) -> bool {
    symbol == OBSTACLE
}

// ---------------------------------------------------------------------------
// CostModel
// ---------------------------------------------------------------------------

/// Cost of entering a cell, per terrain symbol.
///
/// The cost of a move depends only on the destination cell's symbol; leaving
/// a cell is free. Obstacles never reach cost lookup because the search
/// filters them out before considering a move.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    costs: HashMap<char, f64>,
}

impl Default for CostModel {
    /// The standard table: roads and plains cost 1, grass 5, forest 10,
    /// mountain 50, water 100. Endpoint markers stand on plain ground.
    fn default() -> Self {
        let costs = [
            (PLAIN, 1.0),
            (ROAD, 1.0),
            (START, 1.0),
            (GOAL, 1.0),
            (GRASS, 5.0),
            (FOREST, 10.0),
            (MOUNTAIN, 50.0),
            (WATER, 100.0),
        ]
        .into_iter()
        .collect();
        Self { costs }
    }
}

impl CostModel {
    /// Cost of stepping onto a cell with the given symbol.
    ///
    /// Unknown symbols fall back to [`DEFAULT_STEP_COST`].
    #[inline]
    pub fn step_cost(&self, symbol: char) -> f64 {
        self.costs.get(&symbol).copied().unwrap_or(DEFAULT_STEP_COST)
    }

    /// Override or add the cost for one symbol.
    ///
    /// Distance estimates stay admissible as long as every cost is at
    /// least 1.
    pub fn with_cost(mut self, symbol: char, cost: f64) -> Self {
        debug_assert!(cost > 0.0, "step costs must be positive");
        self.costs.insert(symbol, cost);
        self
    }
}
