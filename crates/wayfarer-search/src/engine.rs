//! The search engine: one best-first loop shared by every strategy.
//!
//! Each iteration removes the best frontier cell under the active strategy,
//! finishes if it is the goal, and otherwise expands it: every passable
//! neighbor is discovered or, for cost-guided strategies, re-keyed when the
//! new route to it is cheaper. The expanded cell moves to the closed set
//! and is never reconsidered.
//!
//! An engine instance covers exactly one run. Per-cell metrics live in a
//! flat side table indexed like [`Grid`] cells, so the terrain itself stays
//! untouched and a fresh engine starts from a clean slate.

use std::mem;

use wayfarer_core::{CostModel, Grid, OutOfBounds, Point};

use crate::cancel::CancelToken;
use crate::distance::euclidean;
use crate::frontier::Frontier;
use crate::report::PathReport;
use crate::strategy::Strategy;

// ---------------------------------------------------------------------------
// Status types
// ---------------------------------------------------------------------------

/// Engine state. Everything except `Running` is terminal and sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The frontier still holds candidates and the goal has not been seen.
    Running,
    /// The goal was selected from the frontier; a route exists.
    Found,
    /// The frontier emptied, or the expansion limit was hit, without
    /// reaching the goal.
    Exhausted,
    /// A [`CancelToken`] stopped the run before it could finish.
    Cancelled,
}

impl SearchStatus {
    /// Whether the run has ended.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SearchStatus::Running
    }
}

/// Per-cell classification for rendering and diagnostics.
///
/// Endpoint markers outrank everything else, and a route cell outranks the
/// open/closed distinction, so a renderer can map each cell to exactly one
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    /// Never discovered.
    Unvisited,
    /// In the frontier, awaiting expansion.
    Open,
    /// Expanded; never reconsidered.
    Closed,
    /// The run's start cell.
    Start,
    /// The run's goal cell.
    Goal,
    /// On the found route (excluding the endpoints).
    OnPath,
}

// ---------------------------------------------------------------------------
// Node side table
// ---------------------------------------------------------------------------

/// Discovery stage of a cell within the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Stage {
    #[default]
    Unvisited,
    Open,
    Closed,
}

/// Per-cell search metrics. Lives in a flat vector parallel to the grid's
/// cell indices; `pos` is only meaningful once the cell is discovered.
#[derive(Clone, Debug, Default)]
struct Node {
    pos: Point,
    g: f64,
    h: f64,
    f: f64,
    parent: Option<Point>,
    stage: Stage,
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Best-first search over a terrain grid.
///
/// The engine borrows the grid and cost table, owns all run state, and can
/// be driven one [`step`](Self::step) at a time or straight to the end with
/// [`run`](Self::run). Endpoints default to the map's `A` and `B` markers.
#[derive(Debug)]
pub struct SearchEngine<'a> {
    grid: &'a Grid,
    costs: &'a CostModel,
    strategy: Strategy,
    start: Point,
    goal: Point,
    frontier: Frontier,
    nodes: Vec<Node>,
    status: SearchStatus,
    path: Vec<Point>,
    expanded: usize,
    iterations: usize,
    expansion_limit: usize,
    nbuf: Vec<Point>,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine searching from the map's `A` marker to its `B`
    /// marker.
    ///
    /// The expansion limit defaults to the grid's cell count, which a
    /// healthy run can never hit because each cell is expanded at most
    /// once.
    pub fn new(grid: &'a Grid, costs: &'a CostModel, strategy: Strategy) -> Self {
        let cells = grid.cell_count();
        let mut engine = Self {
            grid,
            costs,
            strategy,
            start: grid.start(),
            goal: grid.goal(),
            frontier: Frontier::new(strategy, cells),
            nodes: vec![Node::default(); cells],
            status: SearchStatus::Running,
            path: Vec::new(),
            expanded: 0,
            iterations: 0,
            expansion_limit: cells,
            nbuf: Vec::with_capacity(4),
        };
        engine.seed();
        engine
    }

    /// Search between arbitrary coordinates instead of the map's markers.
    ///
    /// Both points must be inside the grid. They may be any cells:
    /// obstacles block entry, not exit, so a start on an obstacle still
    /// expands outward, while a goal on an obstacle is simply never
    /// reached. Resets any progress made so far.
    pub fn with_endpoints(mut self, from: Point, to: Point) -> Result<Self, OutOfBounds> {
        self.grid.at(from)?;
        self.grid.at(to)?;
        self.start = from;
        self.goal = to;
        self.reset();
        Ok(self)
    }

    /// Cap the number of expansions; hitting the cap ends the run as
    /// [`SearchStatus::Exhausted`].
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = limit;
        self
    }

    /// The strategy driving this run.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Current engine state.
    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Start of the run.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal of the run.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The found route, start to goal inclusive; empty until the goal is
    /// reached.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Cells expanded so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Cells currently open.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Iterations performed so far.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Advance the run by one iteration and return the resulting state.
    ///
    /// One iteration selects the best frontier cell, finishes if it is the
    /// goal, and otherwise expands it. Calling `step` after the run ended
    /// returns the terminal state unchanged.
    pub fn step(&mut self) -> SearchStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        let Some(ci) = self.frontier.pop_best() else {
            log::debug!(
                "frontier exhausted after {} expansions, no route",
                self.expanded
            );
            self.status = SearchStatus::Exhausted;
            return self.status;
        };
        self.iterations += 1;

        let cp = self.nodes[ci].pos;
        if cp == self.goal {
            self.path = self.backtrace();
            self.status = SearchStatus::Found;
            log::debug!(
                "goal {} reached after {} expansions, route costs {}",
                cp,
                self.expanded,
                self.nodes[ci].g
            );
            return self.status;
        }
        if self.expanded >= self.expansion_limit {
            log::debug!("expansion limit {} reached, giving up", self.expansion_limit);
            self.status = SearchStatus::Exhausted;
            return self.status;
        }

        let grid = self.grid;
        let costs = self.costs;
        let strategy = self.strategy;
        let goal = self.goal;
        let current_g = self.nodes[ci].g;

        let mut nbuf = mem::take(&mut self.nbuf);
        nbuf.clear();
        grid.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = grid.index_of(np) else {
                continue;
            };
            let Some(cell) = grid.cell(ni) else {
                continue;
            };
            if cell.obstacle {
                continue;
            }

            let node = &mut self.nodes[ni];
            match node.stage {
                // Closed cells keep their route for good.
                Stage::Closed => {}
                Stage::Open => {
                    if !strategy.relaxes_open() {
                        continue;
                    }
                    let tentative = current_g + costs.step_cost(cell.symbol);
                    if tentative >= node.g {
                        continue;
                    }
                    node.g = tentative;
                    node.f = tentative + node.h;
                    node.parent = Some(cp);
                    self.frontier.insert(ni, tentative, node.f);
                }
                Stage::Unvisited => {
                    let g = current_g + costs.step_cost(cell.symbol);
                    let h = euclidean(np, goal);
                    *node = Node {
                        pos: np,
                        g,
                        h,
                        f: g + h,
                        parent: Some(cp),
                        stage: Stage::Open,
                    };
                    self.frontier.insert(ni, g, g + h);
                }
            }
        }
        self.nbuf = nbuf;

        self.nodes[ci].stage = Stage::Closed;
        self.expanded += 1;
        log::trace!(
            "expanded {} (g={}), {} open",
            cp,
            current_g,
            self.frontier.len()
        );
        self.status
    }

    /// Run until the engine reaches a terminal state and report the result.
    pub fn run(&mut self) -> PathReport {
        while !self.step().is_terminal() {}
        self.report()
    }

    /// Like [`run`](Self::run), but poll `token` before every iteration; a
    /// cancelled token ends the run as [`SearchStatus::Cancelled`].
    pub fn run_with_cancel(&mut self, token: &CancelToken) -> PathReport {
        while self.status == SearchStatus::Running {
            if token.is_cancelled() {
                log::debug!("search cancelled after {} iterations", self.iterations);
                self.status = SearchStatus::Cancelled;
                break;
            }
            self.step();
        }
        self.report()
    }

    /// Snapshot the run as a [`PathReport`].
    ///
    /// Valid at any time: a mid-run snapshot carries `Running` status, the
    /// counters so far, and an empty route.
    pub fn report(&self) -> PathReport {
        PathReport {
            strategy: self.strategy,
            status: self.status,
            path: self.path.clone(),
            cost: self.route_cost(),
            expanded: self.expanded,
            frontier: self.frontier.len(),
            iterations: self.iterations,
        }
    }

    /// Classify `p` for rendering.
    ///
    /// Endpoints win over everything, then route membership, then the
    /// open/closed stage. Out-of-grid points read as unvisited.
    pub fn cell_status(&self, p: Point) -> CellStatus {
        if p == self.start {
            return CellStatus::Start;
        }
        if p == self.goal {
            return CellStatus::Goal;
        }
        if self.status == SearchStatus::Found && self.path.contains(&p) {
            return CellStatus::OnPath;
        }
        match self.grid.index_of(p).map(|i| self.nodes[i].stage) {
            Some(Stage::Open) => CellStatus::Open,
            Some(Stage::Closed) => CellStatus::Closed,
            _ => CellStatus::Unvisited,
        }
    }

    /// Clear all run state and seed the start cell again.
    fn reset(&mut self) {
        self.frontier = Frontier::new(self.strategy, self.grid.cell_count());
        self.nodes.fill(Node::default());
        self.status = SearchStatus::Running;
        self.path.clear();
        self.expanded = 0;
        self.iterations = 0;
        self.seed();
    }

    /// Put the start cell on the frontier with zero accumulated cost.
    fn seed(&mut self) {
        // Endpoints are validated before seeding, so the lookup cannot fail.
        let Some(si) = self.grid.index_of(self.start) else {
            self.status = SearchStatus::Exhausted;
            return;
        };
        let h = euclidean(self.start, self.goal);
        self.nodes[si] = Node {
            pos: self.start,
            g: 0.0,
            h,
            f: h,
            parent: None,
            stage: Stage::Open,
        };
        self.frontier.insert(si, 0.0, h);
    }

    /// Walk predecessor links back from the goal and reverse into a
    /// start-to-goal route.
    fn backtrace(&self) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(self.goal);
        while let Some(p) = cur {
            path.push(p);
            cur = self.grid.index_of(p).and_then(|i| self.nodes[i].parent);
        }
        path.reverse();
        path
    }

    /// The goal's accumulated cost once found, 0 otherwise.
    fn route_cost(&self) -> f64 {
        if self.status != SearchStatus::Found {
            return 0.0;
        }
        self.grid
            .index_of(self.goal)
            .map(|i| self.nodes[i].g)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;

    const OPEN_3X3: &str = "\
A..
...
..B";

    // A vertical wall on column 2 with its only gap at row 2.
    const WALL_GAP: &str = "\
A.#..
..#..
.....
..#.B";

    // A band of water splits the map: the fewest-steps route wades
    // straight through, the cheapest route walks around.
    const LAKE: &str = "\
A.w.B
..w..
.....";

    fn run_strategy(map: &str, strategy: Strategy) -> PathReport {
        let grid = Grid::parse(map).unwrap();
        let costs = CostModel::default();
        let mut engine = SearchEngine::new(&grid, &costs, strategy);
        engine.run()
    }

    #[test]
    fn astar_crosses_open_ground() {
        let report = run_strategy(OPEN_3X3, Strategy::AStar);
        assert!(report.is_found());
        assert_eq!(report.cost, 4.0);
        assert_eq!(report.steps(), 4);
        assert_eq!(report.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(report.path.last(), Some(&Point::new(2, 2)));
    }

    #[test]
    fn every_strategy_routes_through_the_gap() {
        let grid = Grid::parse(WALL_GAP).unwrap();
        for strategy in Strategy::ALL {
            let report = run_strategy(WALL_GAP, strategy);
            assert!(report.is_found(), "{strategy} found no route");
            assert!(
                report.path.contains(&Point::new(2, 2)),
                "{strategy} skipped the gap"
            );
            for p in &report.path {
                assert!(!grid.at(*p).unwrap().obstacle, "{strategy} crossed a wall");
            }
        }
    }

    #[test]
    fn route_steps_are_adjacent() {
        for strategy in Strategy::ALL {
            let report = run_strategy(WALL_GAP, strategy);
            for pair in report.path.windows(2) {
                assert_eq!(
                    manhattan(pair[0], pair[1]),
                    1,
                    "{strategy} made a non-cardinal move"
                );
            }
        }
    }

    #[test]
    fn reported_cost_sums_route_step_costs() {
        let costs = CostModel::default();
        for map in [OPEN_3X3, WALL_GAP, LAKE] {
            let grid = Grid::parse(map).unwrap();
            for strategy in Strategy::ALL {
                let report = run_strategy(map, strategy);
                let summed: f64 = report.path[1..]
                    .iter()
                    .map(|p| costs.step_cost(grid.at(*p).unwrap().symbol))
                    .sum();
                assert_eq!(report.cost, summed, "{strategy} cost mismatch");
            }
        }
    }

    #[test]
    fn cost_guided_strategies_walk_around_the_lake() {
        let astar = run_strategy(LAKE, Strategy::AStar);
        let dijkstra = run_strategy(LAKE, Strategy::Dijkstra);
        assert_eq!(astar.cost, 8.0);
        assert_eq!(dijkstra.cost, 8.0);
        assert_eq!(astar.steps(), 8);
        assert_eq!(dijkstra.steps(), 8);
    }

    #[test]
    fn bfs_wades_straight_through_the_lake() {
        let grid = Grid::parse(LAKE).unwrap();
        let report = run_strategy(LAKE, Strategy::Bfs);
        assert!(report.is_found());
        // Fewest steps, terrain costs be damned.
        assert_eq!(
            report.steps(),
            manhattan(grid.start(), grid.goal()) as usize
        );
        assert_eq!(report.cost, 103.0);
    }

    #[test]
    fn cheaper_route_improves_an_open_junction() {
        // Both arms funnel through the junction at (3, 2). Under A* the
        // forest arm reaches it first, so the junction sits open at cost
        // 14 until the grass arm arrives and re-keys it to 13.
        let junction = "\
A.f.###
g##.##B
g......";
        let astar = run_strategy(junction, Strategy::AStar);
        let dijkstra = run_strategy(junction, Strategy::Dijkstra);
        assert_eq!(astar.cost, 17.0);
        assert_eq!(dijkstra.cost, 17.0);
        assert_eq!(astar.steps(), 9);
        // The route comes in from the grass side and skips the forest.
        assert!(astar.path.contains(&Point::new(2, 2)));
        assert!(!astar.path.contains(&Point::new(2, 0)));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let grid = Grid::parse(LAKE).unwrap();
        let costs = CostModel::default();
        for strategy in Strategy::ALL {
            let first = SearchEngine::new(&grid, &costs, strategy).run();
            let second = SearchEngine::new(&grid, &costs, strategy).run();
            assert_eq!(first, second, "{strategy} is not deterministic");
        }
    }

    #[test]
    fn astar_expands_fewer_cells_than_bfs() {
        let corridor = "\
A.....B
.......
.......";
        let astar = run_strategy(corridor, Strategy::AStar);
        let bfs = run_strategy(corridor, Strategy::Bfs);
        assert!(astar.is_found() && bfs.is_found());
        assert!(
            astar.expanded < bfs.expanded,
            "astar expanded {} vs bfs {}",
            astar.expanded,
            bfs.expanded
        );
    }

    #[test]
    fn walled_off_goal_exhausts() {
        let sealed = "\
A.#.B
..#..
..#..";
        for strategy in Strategy::ALL {
            let report = run_strategy(sealed, strategy);
            assert_eq!(report.status, SearchStatus::Exhausted, "{strategy}");
            assert!(!report.is_found());
            assert!(report.path.is_empty());
            assert_eq!(report.cost, 0.0);
            // The whole reachable region was tried before giving up.
            assert_eq!(report.expanded, 6, "{strategy}");
            assert_eq!(report.frontier, 0, "{strategy}");
        }
    }

    #[test]
    fn start_equals_goal_finishes_without_expanding() {
        let grid = Grid::parse(OPEN_3X3).unwrap();
        let costs = CostModel::default();
        let p = Point::new(1, 1);
        let mut engine = SearchEngine::new(&grid, &costs, Strategy::AStar)
            .with_endpoints(p, p)
            .unwrap();
        let report = engine.run();
        assert!(report.is_found());
        assert_eq!(report.path, vec![p]);
        assert_eq!(report.cost, 0.0);
        assert_eq!(report.expanded, 0);
        assert_eq!(report.iterations, 1);
        assert_eq!(report.frontier, 0);
    }

    #[test]
    fn with_endpoints_overrides_markers() {
        let grid = Grid::parse(OPEN_3X3).unwrap();
        let costs = CostModel::default();
        let mut engine = SearchEngine::new(&grid, &costs, Strategy::Dijkstra)
            .with_endpoints(Point::new(2, 0), Point::new(0, 2))
            .unwrap();
        assert_eq!(engine.start(), Point::new(2, 0));
        assert_eq!(engine.goal(), Point::new(0, 2));
        let report = engine.run();
        assert!(report.is_found());
        assert_eq!(report.path.first(), Some(&Point::new(2, 0)));
        assert_eq!(report.path.last(), Some(&Point::new(0, 2)));
    }

    #[test]
    fn with_endpoints_rejects_outside_points() {
        let grid = Grid::parse(OPEN_3X3).unwrap();
        let costs = CostModel::default();
        let err = SearchEngine::new(&grid, &costs, Strategy::AStar)
            .with_endpoints(Point::new(0, 0), Point::new(5, 5))
            .unwrap_err();
        assert_eq!(err, OutOfBounds(Point::new(5, 5)));
    }

    #[test]
    fn endpoints_on_obstacles_block_entry_not_exit() {
        let grid = Grid::parse("A#B").unwrap();
        let costs = CostModel::default();
        let wall = Point::new(1, 0);

        // A start on the wall walks out of it.
        let mut from_wall = SearchEngine::new(&grid, &costs, Strategy::AStar)
            .with_endpoints(wall, Point::new(2, 0))
            .unwrap();
        let report = from_wall.run();
        assert!(report.is_found());
        assert_eq!(report.path, vec![wall, Point::new(2, 0)]);
        assert_eq!(report.cost, 1.0);

        // A goal on the wall is never entered.
        let mut to_wall = SearchEngine::new(&grid, &costs, Strategy::AStar)
            .with_endpoints(Point::new(0, 0), wall)
            .unwrap();
        assert_eq!(to_wall.run().status, SearchStatus::Exhausted);
    }

    #[test]
    fn expansion_limit_gives_up_early() {
        let corridor = "A....B";
        let grid = Grid::parse(corridor).unwrap();
        let costs = CostModel::default();

        let mut engine =
            SearchEngine::new(&grid, &costs, Strategy::AStar).with_expansion_limit(2);
        let report = engine.run();
        assert_eq!(report.status, SearchStatus::Exhausted);
        assert_eq!(report.expanded, 2);
        assert_eq!(report.iterations, 3);

        let mut strict = SearchEngine::new(&grid, &costs, Strategy::AStar).with_expansion_limit(0);
        assert_eq!(strict.run().expanded, 0);
    }

    #[test]
    fn terminal_state_is_sticky() {
        let grid = Grid::parse(OPEN_3X3).unwrap();
        let costs = CostModel::default();
        let mut engine = SearchEngine::new(&grid, &costs, Strategy::Bfs);
        let report = engine.run();
        assert!(report.is_found());

        for _ in 0..3 {
            assert_eq!(engine.step(), SearchStatus::Found);
        }
        assert_eq!(engine.run(), report);
        assert_eq!(engine.report(), report);
    }

    #[test]
    fn pre_cancelled_token_stops_immediately() {
        let grid = Grid::parse(WALL_GAP).unwrap();
        let costs = CostModel::default();
        let token = CancelToken::new();
        token.cancel();

        let mut engine = SearchEngine::new(&grid, &costs, Strategy::AStar);
        let report = engine.run_with_cancel(&token);
        assert_eq!(report.status, SearchStatus::Cancelled);
        assert_eq!(report.iterations, 0);
        assert!(report.path.is_empty());
    }

    #[test]
    fn cancel_between_steps_preserves_progress() {
        let grid = Grid::parse(WALL_GAP).unwrap();
        let costs = CostModel::default();
        let token = CancelToken::new();

        let mut engine = SearchEngine::new(&grid, &costs, Strategy::Dijkstra);
        engine.step();
        engine.step();
        token.cancel();
        let report = engine.run_with_cancel(&token);
        assert_eq!(report.status, SearchStatus::Cancelled);
        assert_eq!(report.iterations, 2);
        assert_eq!(report.expanded, 2);
    }

    #[test]
    fn uncancelled_token_does_not_interfere() {
        let token = CancelToken::new();
        let grid = Grid::parse(OPEN_3X3).unwrap();
        let costs = CostModel::default();
        let mut engine = SearchEngine::new(&grid, &costs, Strategy::AStar);
        let report = engine.run_with_cancel(&token);
        assert!(report.is_found());
        assert_eq!(report.cost, 4.0);
    }

    #[test]
    fn cell_status_tracks_the_run() {
        let grid = Grid::parse("A...B").unwrap();
        let costs = CostModel::default();
        let mut engine = SearchEngine::new(&grid, &costs, Strategy::AStar);

        engine.step();
        engine.step();
        assert_eq!(engine.cell_status(Point::new(0, 0)), CellStatus::Start);
        assert_eq!(engine.cell_status(Point::new(1, 0)), CellStatus::Closed);
        assert_eq!(engine.cell_status(Point::new(2, 0)), CellStatus::Open);
        assert_eq!(engine.cell_status(Point::new(3, 0)), CellStatus::Unvisited);
        assert_eq!(engine.cell_status(Point::new(4, 0)), CellStatus::Goal);

        let report = engine.run();
        assert!(report.is_found());
        assert_eq!(engine.cell_status(Point::new(1, 0)), CellStatus::OnPath);
        assert_eq!(engine.cell_status(Point::new(3, 0)), CellStatus::OnPath);
        // Endpoints keep their markers even though they are on the route.
        assert_eq!(engine.cell_status(Point::new(0, 0)), CellStatus::Start);
        assert_eq!(engine.cell_status(Point::new(4, 0)), CellStatus::Goal);
    }

    #[test]
    fn cell_status_outside_grid_is_unvisited() {
        let grid = Grid::parse(OPEN_3X3).unwrap();
        let costs = CostModel::default();
        let engine = SearchEngine::new(&grid, &costs, Strategy::AStar);
        assert_eq!(engine.cell_status(Point::new(9, 9)), CellStatus::Unvisited);
    }

    #[test]
    fn mid_run_report_is_running() {
        let grid = Grid::parse(WALL_GAP).unwrap();
        let costs = CostModel::default();
        let mut engine = SearchEngine::new(&grid, &costs, Strategy::Bfs);
        assert_eq!(engine.step(), SearchStatus::Running);
        let snapshot = engine.report();
        assert_eq!(snapshot.status, SearchStatus::Running);
        assert!(snapshot.path.is_empty());
        assert_eq!(snapshot.cost, 0.0);
        assert_eq!(snapshot.expanded, 1);
    }

    #[test]
    fn ragged_map_is_searchable() {
        // The lower-right arm is only reachable through the long row.
        let ragged = "\
A..
....
..B";
        let report = run_strategy(ragged, Strategy::AStar);
        assert!(report.is_found());
        assert_eq!(report.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(report.path.last(), Some(&Point::new(2, 2)));
        assert_eq!(report.cost, 4.0);
    }
}
