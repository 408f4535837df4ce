//! Loop extraction (C5).
//!
//! Walks the edge graph's arena slots in ascending order and, for every slot
//! not yet claimed by an earlier walk, follows `next` pointers until it
//! returns to the start, recording the visited corner coordinates as one
//! closed [`Loop`]. A slot left dangling (no `next`) means the graph was not
//! a union of closed cycles, which cannot happen for a well-formed 4-connected
//! cluster and is reported as [`PixvgError::NotEnclosed`].

use crate::edge_graph::EdgeGraph;
use crate::error::PixvgError;
use crate::point::Point;

/// A closed sequence of corner-lattice points, clockwise for an outer
/// contour and counter-clockwise for a hole.
#[derive(Debug, Clone)]
pub struct Loop {
    points: Vec<Point>,
}

impl Loop {
    /// Builds a loop directly from an already-closed point sequence, used by
    /// [`crate::loop_simplifier::simplify`] to produce its reduced loop.
    pub fn from_points(points: Vec<Point>) -> Self {
        Loop { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Extracts every closed loop from `graph`, in order of each loop's lowest
/// arena index (equivalently, row-major order of each loop's topmost then
/// leftmost corner), for deterministic, reproducible output.
pub fn extract_loops(graph: &EdgeGraph) -> Result<Vec<Loop>, PixvgError> {
    let mut claimed = vec![false; graph.node_count()];
    let mut loops = Vec::new();

    for start in 0..graph.node_count() {
        if claimed[start] || graph.next_of(start).is_none() {
            continue;
        }

        let mut points = Vec::new();
        let mut idx = start;
        loop {
            if claimed[idx] {
                return Err(PixvgError::NotEnclosed);
            }
            claimed[idx] = true;
            let (x, y) = graph.coords_of(idx);
            points.push(Point::new(x, y));

            idx = graph.next_of(idx).ok_or(PixvgError::NotEnclosed)?;
            if idx == start {
                break;
            }
        }

        loops.push(Loop { points });
    }

    Ok(loops)
}
