//! Distance metrics used for goal estimates.

use wayfarer_core::Point;

/// Euclidean (L2) distance between two points.
///
/// This is the goal estimate used by A*. On a grid whose moves are cardinal
/// and cost at least 1 each, the straight-line distance never exceeds the
/// true remaining cost, so it never steers A* past a cheaper route.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan (L1) distance between two points.
///
/// The minimum number of cardinal steps between `a` and `b` on an
/// unobstructed grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
