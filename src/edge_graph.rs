//! Edge-graph builder (C4) — the central algorithm.
//!
//! Builds a directed graph on the (W+1)×(H+1) corner lattice whose arcs are
//! the unit boundary segments of a cluster, forming one clockwise loop per
//! outer contour and one counter-clockwise loop per hole.
//!
//! Every corner lattice point is modeled as exactly two arena slots (a
//! tagged sum of {single, split} flattened ahead of time): most corners
//! only ever use slot 0; a corner becomes a genuine *split vertex* only when
//! two diagonally touching cluster pixels independently wire edges through
//! it, at which point the builder reroutes the second wiring to slot 1.
//! After construction the two slots are indistinguishable from two
//! coincident ordinary nodes — the loop extractor (C5) never needs to know
//! a split happened.

use crate::cluster::is_4_connected;
use crate::error::PixvgError;
use crate::grid::Grid2D;
use crate::neighborhood::neumann_neighbors;

/// A directed graph on the corner lattice, built by [`build_edge_graph`].
///
/// Internally a flat arena of two slots per corner: arena index `2*c` and
/// `2*c + 1` for corner id `c = y * corner_cols + x`.
#[derive(Debug, Clone)]
pub struct EdgeGraph {
    corner_cols: usize,
    next: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
    /// Per-corner active slot (0 or 1), used only while building.
    active: Vec<u8>,
}

impl EdgeGraph {
    fn new(corner_cols: usize, corner_rows: usize) -> Self {
        let corner_count = corner_cols * corner_rows;
        EdgeGraph {
            corner_cols,
            next: vec![None; corner_count * 2],
            prev: vec![None; corner_count * 2],
            active: vec![0; corner_count],
        }
    }

    fn corner_id(&self, x: i64, y: i64) -> usize {
        y as usize * self.corner_cols + x as usize
    }

    /// The arena index currently in use for new wiring at `(x, y)`,
    /// splitting the corner into two slots first if its active slot is
    /// already fully wired (both `next` and `prev` set).
    fn slot_for_wiring(&mut self, x: i64, y: i64) -> usize {
        let cid = self.corner_id(x, y);
        let active = self.active[cid] as usize;
        let idx = cid * 2 + active;
        if self.next[idx].is_some() && self.prev[idx].is_some() {
            debug_assert_eq!(
                active, 0,
                "corner ({x}, {y}) was wired a third time; its cluster is not 4-connected"
            );
            self.active[cid] = 1;
            cid * 2 + 1
        } else {
            idx
        }
    }

    /// Connects `a -> b`: sets `a.next = b` and `b.prev = a` on their
    /// currently active slots, splitting either endpoint into a split
    /// vertex first if it is already fully wired.
    fn connect(&mut self, a: (i64, i64), b: (i64, i64)) {
        let a_idx = self.slot_for_wiring(a.0, a.1);
        let b_idx = self.slot_for_wiring(b.0, b.1);
        self.next[a_idx] = Some(b_idx);
        self.prev[b_idx] = Some(a_idx);
    }

    /// Number of arena slots (two per corner, whether or not ever used).
    pub fn node_count(&self) -> usize {
        self.next.len()
    }

    pub fn next_of(&self, idx: usize) -> Option<usize> {
        self.next[idx]
    }

    pub fn prev_of(&self, idx: usize) -> Option<usize> {
        self.prev[idx]
    }

    pub fn coords_of(&self, idx: usize) -> (i64, i64) {
        let cid = idx / 2;
        ((cid % self.corner_cols) as i64, (cid / self.corner_cols) as i64)
    }
}

/// Builds the edge graph for a single cluster bitmask (1 = inside cluster,
/// 0 = outside).
///
/// Requires `bitmask` to be 4-connected — [`split_into_clusters`] guarantees
/// this for its output. Checked defensively with `debug_assert!` rather than
/// a runtime error: a non-4-connected bitmask reaching this function is a
/// caller bug, not a recoverable condition, and the builder itself never
/// fails on well-formed input.
///
/// [`split_into_clusters`]: crate::cluster::split_into_clusters
pub fn build_edge_graph(bitmask: &Grid2D<u8>) -> Result<EdgeGraph, PixvgError> {
    debug_assert!(
        is_4_connected(bitmask),
        "edge-graph builder requires a 4-connected cluster bitmask"
    );

    let (width, height) = (bitmask.width(), bitmask.height());
    let mut graph = EdgeGraph::new(width + 1, height + 1);

    for y in 0..height {
        for x in 0..width {
            if bitmask.get_xy(x, y) != 1 {
                continue;
            }

            let neighbors = neumann_neighbors(bitmask, x as i64, y as i64)?;
            let (x, y) = (x as i64, y as i64);
            let (tl, tr, br, bl) = ((x, y), (x + 1, y), (x + 1, y + 1), (x, y + 1));

            // Clockwise on outer contours, counter-clockwise on holes.
            if neighbors.top.unwrap_or(0) == 0 {
                graph.connect(tl, tr);
            }
            if neighbors.right.unwrap_or(0) == 0 {
                graph.connect(tr, br);
            }
            if neighbors.bottom.unwrap_or(0) == 0 {
                graph.connect(br, bl);
            }
            if neighbors.left.unwrap_or(0) == 0 {
                graph.connect(bl, tl);
            }
        }
    }

    Ok(graph)
}
