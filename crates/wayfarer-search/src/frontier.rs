//! The frontier: discovered cells waiting to be expanded.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::strategy::Strategy;

/// Heap entry referencing a cell by flat index.
///
/// Ordered by strategy key, then by insertion sequence so that equal keys
/// pop oldest first. Reversed so `BinaryHeap` (a max-heap) pops the
/// smallest key.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    key: f64,
    seq: u64,
    idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// The set of open cells, keyed by the active strategy's priority.
///
/// Re-inserting a cell supersedes its previous entry: the old heap entry
/// stays behind but is recognized as stale and skipped when popped, so a
/// cell can never be returned twice without being re-inserted in between.
#[derive(Debug)]
pub struct Frontier {
    strategy: Strategy,
    heap: BinaryHeap<OpenEntry>,
    /// Per cell index, the sequence number of its live entry (if open).
    live: Vec<Option<u64>>,
    next_seq: u64,
    len: usize,
}

impl Frontier {
    /// Create an empty frontier for a grid with `cells` total cells.
    pub fn new(strategy: Strategy, cells: usize) -> Self {
        Self {
            strategy,
            heap: BinaryHeap::new(),
            live: vec![None; cells],
            next_seq: 0,
            len: 0,
        }
    }

    /// The strategy whose priority keys order this frontier.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Insert the cell at flat index `idx` with metrics `g` and `f`, or
    /// re-key it if it is already open.
    ///
    /// `idx` must be below the cell count the frontier was created with.
    pub fn insert(&mut self, idx: usize, g: f64, f: f64) {
        let key = self.strategy.priority(g, f);
        let seq = self.next_seq;
        self.next_seq += 1;
        if self.live[idx].is_none() {
            self.len += 1;
        }
        self.live[idx] = Some(seq);
        self.heap.push(OpenEntry { key, seq, idx });
    }

    /// Remove and return the best open cell, or `None` when the frontier
    /// is exhausted. Stale entries from superseded insertions are skipped.
    pub fn pop_best(&mut self) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            if self.live[entry.idx] == Some(entry.seq) {
                self.live[entry.idx] = None;
                self.len -= 1;
                return Some(entry.idx);
            }
        }
        None
    }

    /// Whether the cell at `idx` is currently open.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.live.get(idx).is_some_and(Option::is_some)
    }

    /// Number of open cells (stale heap entries not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no cells are open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
