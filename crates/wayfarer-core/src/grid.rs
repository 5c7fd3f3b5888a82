//! Terrain grids parsed from text maps.
//!
//! A map is one row of terrain symbols per line. Rows may have different
//! lengths; coordinates past a short row's end are simply out of bounds.
//! Exactly one `A` (start) and one `B` (goal) must appear somewhere in the
//! map. Cells never change after parsing.

use std::fmt;

use crate::geom::Point;
use crate::terrain;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One grid position: its coordinate, terrain symbol, and obstacle flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub symbol: char,
    pub obstacle: bool,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems in map input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedMap {
    /// The input contains no cells at all.
    Empty,
    /// No `A` marker found.
    MissingStart,
    /// No `B` marker found.
    MissingGoal,
    /// More than one `A` marker found.
    MultipleStarts { first: Point, second: Point },
    /// More than one `B` marker found.
    MultipleGoals { first: Point, second: Point },
}

impl fmt::Display for MalformedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map is empty"),
            Self::MissingStart => write!(f, "map has no start marker 'A'"),
            Self::MissingGoal => write!(f, "map has no goal marker 'B'"),
            Self::MultipleStarts { first, second } => {
                write!(f, "map has more than one start marker 'A': {first} and {second}")
            }
            Self::MultipleGoals { first, second } => {
                write!(f, "map has more than one goal marker 'B': {first} and {second}")
            }
        }
    }
}

impl std::error::Error for MalformedMap {}

/// A coordinate outside the grid was used where a valid cell is required.
///
/// Map data can never trigger this; it signals a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds(pub Point);

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point {} is outside the grid", self.0)
    }
}

impl std::error::Error for OutOfBounds {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An immutable terrain grid with validated start and goal markers.
///
/// Cells are stored row-major in one flat vector with per-row offsets, so
/// the grid may be ragged and searches can keep per-cell state in plain
/// vectors indexed the same way. [`index_of`](Self::index_of) and
/// [`point_of`](Self::point_of) convert between the two addressings.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    /// `offsets[y]` is the flat index of the first cell of row `y`; the
    /// final entry is the total cell count.
    offsets: Vec<usize>,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Parse a text map.
    ///
    /// Every character becomes a cell, including blanks and symbols outside
    /// the terrain table; a blank line becomes a zero-width row. Fails if
    /// the map has no cells or does not contain exactly one `A` and exactly
    /// one `B`.
    pub fn parse(input: &str) -> Result<Self, MalformedMap> {
        let mut cells: Vec<Cell> = Vec::new();
        let mut offsets = vec![0];
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;

        for (y, line) in input.lines().enumerate() {
            for (x, symbol) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match symbol {
                    terrain::START => {
                        if let Some(first) = start {
                            return Err(MalformedMap::MultipleStarts { first, second: pos });
                        }
                        start = Some(pos);
                    }
                    terrain::GOAL => {
                        if let Some(first) = goal {
                            return Err(MalformedMap::MultipleGoals { first, second: pos });
                        }
                        goal = Some(pos);
                    }
                    _ => {}
                }
                cells.push(Cell {
                    pos,
                    symbol,
                    obstacle: terrain::is_obstacle(symbol),
                });
            }
            offsets.push(cells.len());
        }

        if cells.is_empty() {
            return Err(MalformedMap::Empty);
        }
        let start = start.ok_or(MalformedMap::MissingStart)?;
        let goal = goal.ok_or(MalformedMap::MissingGoal)?;

        Ok(Self {
            cells,
            offsets,
            start,
            goal,
        })
    }

    /// Position of the `A` marker.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the `B` marker.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of cells in row `y`, or 0 for a row outside the grid.
    #[inline]
    pub fn row_width(&self, y: i32) -> usize {
        if y < 0 || y as usize >= self.height() {
            return 0;
        }
        self.offsets[y as usize + 1] - self.offsets[y as usize]
    }

    /// Total number of cells across all rows.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `p` addresses a cell, honoring each row's own length.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.row_width(p.y)
    }

    /// The cell at `p`, or [`OutOfBounds`] if `p` is outside the grid.
    pub fn at(&self, p: Point) -> Result<&Cell, OutOfBounds> {
        self.index_of(p).map(|i| &self.cells[i]).ok_or(OutOfBounds(p))
    }

    /// The cell at flat index `idx`, if it exists.
    #[inline]
    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    /// Flat row-major index of `p`, if `p` is inside the grid.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(self.offsets[p.y as usize] + p.x as usize)
        } else {
            None
        }
    }

    /// Coordinate of the cell at flat index `idx`; inverse of
    /// [`index_of`](Self::index_of).
    pub fn point_of(&self, idx: usize) -> Option<Point> {
        if idx >= self.cells.len() {
            return None;
        }
        // Zero-width rows share an offset, so find the last row starting at
        // or before idx.
        let y = self.offsets.partition_point(|&o| o <= idx) - 1;
        Some(Point::new((idx - self.offsets[y]) as i32, y as i32))
    }

    /// Append the in-bounds cardinal neighbors of `p` to `buf`.
    ///
    /// Only bounds are checked here; obstacle cells are still reported so
    /// that callers decide what is passable. The caller clears `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.offsets.windows(2).map(|w| &self.cells[w[0]..w[1]])
    }
}

impl fmt::Display for Grid {
    /// The map as text, one row of symbols per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
