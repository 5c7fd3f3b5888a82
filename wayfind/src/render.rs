//! Board rendering: map symbols overlaid with search statuses.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, ResetColor, SetForegroundColor},
};

use wayfarer_core::{Cell, Grid};
use wayfarer_search::{CellStatus, SearchEngine};

/// Character shown for a cell.
///
/// Endpoints and untouched terrain keep their map symbols; cells the search
/// has touched are overwritten with their status.
fn status_char(cell: &Cell, status: CellStatus) -> char {
    match status {
        CellStatus::Start | CellStatus::Goal | CellStatus::Unvisited => cell.symbol,
        CellStatus::OnPath => '@',
        CellStatus::Open => 'o',
        CellStatus::Closed => 'x',
    }
}

fn status_color(status: CellStatus) -> Option<Color> {
    match status {
        CellStatus::Start => Some(Color::Green),
        CellStatus::Goal => Some(Color::Red),
        CellStatus::OnPath => Some(Color::Yellow),
        CellStatus::Open => Some(Color::Cyan),
        CellStatus::Closed => Some(Color::DarkGrey),
        CellStatus::Unvisited => None,
    }
}

/// Write the whole board to `out`, one line per map row.
pub fn write_board<W: Write>(
    out: &mut W,
    grid: &Grid,
    engine: &SearchEngine<'_>,
    color: bool,
) -> io::Result<()> {
    for row in grid.rows() {
        for cell in row {
            let status = engine.cell_status(cell.pos);
            let ch = status_char(cell, status);
            let fg = if color { status_color(status) } else { None };
            match fg {
                Some(c) => {
                    queue!(out, SetForegroundColor(c))?;
                    write!(out, "{ch}")?;
                    queue!(out, ResetColor)?;
                }
                None => write!(out, "{ch}")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print the board to stdout.
pub fn print_board(grid: &Grid, engine: &SearchEngine<'_>, color: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_board(&mut out, grid, engine, color)?;
    out.flush()
}
