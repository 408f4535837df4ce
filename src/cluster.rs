//! Connected-components labeler (C3).
//!
//! Splits one color region's bitmask into 4-connected clusters using an
//! explicit-stack iterative flood fill (no recursion), matching the
//! `skimage.measure.label(connectivity=1)` behavior the original
//! implementation relied on.

use std::collections::HashMap;

use crate::error::PixvgError;
use crate::grid::Grid2D;
use crate::neighborhood::neumann_neighbors;
use crate::point::Point;
use crate::region::ColorRegion;

/// A [`ColorRegion`] whose point set is additionally 4-connected: any two
/// points are reachable from each other using only ±1 steps in x or y,
/// visiting only cells in the set. Clusters are produced exclusively by
/// [`split_into_clusters`], which upholds this invariant.
pub type Cluster = ColorRegion;

/// Labels the 4-connected components of `bitmask`. Returns a matrix of the
/// same shape where 0 means background and positive integers label each
/// component, assigned in row-major first-discovery order starting at 1.
///
/// O(W·H): each cell is pushed and popped from the stack a bounded number
/// of times; re-visits are filtered by checking the label at pop time.
pub fn label_components(bitmask: &Grid2D<u8>) -> Grid2D<u32> {
    let width = bitmask.width();
    let height = bitmask.height();
    let mut labels = Grid2D::new(width, height, 0u32);
    let mut next_label = 1u32;
    let mut stack: Vec<(i64, i64)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if bitmask.get_xy(x, y) != 1 || labels.get_xy(x, y) != 0 {
                continue;
            }

            stack.push((x as i64, y as i64));
            while let Some((cx, cy)) = stack.pop() {
                let (ux, uy) = (cx as usize, cy as usize);
                if labels.get_xy(ux, uy) != 0 {
                    continue;
                }
                labels.set_xy(ux, uy, next_label);

                let neighbors =
                    neumann_neighbors(bitmask, cx, cy).expect("flood fill stays in bounds");
                if neighbors.top == Some(1) {
                    stack.push((cx, cy - 1));
                }
                if neighbors.right == Some(1) {
                    stack.push((cx + 1, cy));
                }
                if neighbors.bottom == Some(1) {
                    stack.push((cx, cy + 1));
                }
                if neighbors.left == Some(1) {
                    stack.push((cx - 1, cy));
                }
            }
            next_label += 1;
        }
    }

    labels
}

/// Splits `region` into one [`Cluster`] per 4-connected component, in
/// row-major first-discovery order, each carrying the parent region's color
/// and dimensions.
pub fn split_into_clusters(region: &ColorRegion) -> Result<Vec<Cluster>, PixvgError> {
    let labels = label_components(region.bitmask());
    let (width, height) = (region.width(), region.height());

    let mut index_of: HashMap<u32, usize> = HashMap::new();
    let mut clusters: Vec<Cluster> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let id = labels.get_xy(x, y);
            if id == 0 {
                continue;
            }

            let idx = match index_of.get(&id) {
                Some(&idx) => idx,
                None => {
                    let idx = clusters.len();
                    clusters.push(ColorRegion::new(region.color, width, height));
                    index_of.insert(id, idx);
                    idx
                }
            };

            clusters[idx].add_point(Point::new(x as i64, y as i64))?;
        }
    }

    Ok(clusters)
}

/// Checks that `bitmask` contains at most one 4-connected component.
/// [`split_into_clusters`] guarantees this for its output; the edge-graph
/// builder (C4) asserts it defensively rather than trusting callers, per the
/// precondition spelled out in the design notes.
pub fn is_4_connected(bitmask: &Grid2D<u8>) -> bool {
    let labels = label_components(bitmask);
    let mut seen = None;
    for y in 0..labels.height() {
        for x in 0..labels.width() {
            let id = labels.get_xy(x, y);
            if id == 0 {
                continue;
            }
            match seen {
                None => seen = Some(id),
                Some(first) if first != id => return false,
                _ => {}
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn bitmask_from_rows(rows: &[&str]) -> Grid2D<u8> {
        let height = rows.len();
        let width = rows[0].len();
        let mut grid = Grid2D::new(width, height, 0u8);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set_xy(x, y, if ch == '#' { 1 } else { 0 });
            }
        }
        grid
    }

    #[test]
    fn labels_single_blob() {
        let bm = bitmask_from_rows(&["###", "###", "###"]);
        let labels = label_components(&bm);
        let first = labels.get_xy(0, 0);
        assert_eq!(first, 1);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(labels.get_xy(x, y), first);
            }
        }
    }

    #[test]
    fn diagonal_touch_is_two_components() {
        let bm = bitmask_from_rows(&["#.", ".#"]);
        let labels = label_components(&bm);
        assert_ne!(labels.get_xy(0, 0), labels.get_xy(1, 1));
        assert_eq!(labels.get_xy(0, 1), 0);
        assert_eq!(labels.get_xy(1, 0), 0);
    }

    #[test]
    fn split_into_clusters_groups_four_connected_pixels_only() {
        let color = Color::new(1, 2, 3, 255);
        let mut region = ColorRegion::new(color, 2, 2);
        region.add_point(Point::new(0, 0)).unwrap();
        region.add_point(Point::new(1, 1)).unwrap();

        let clusters = split_into_clusters(&region).unwrap();
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| c.points().len() == 1));
    }

    #[test]
    fn split_into_clusters_keeps_l_shape_as_one_cluster() {
        let color = Color::new(0, 0, 0, 255);
        let mut region = ColorRegion::new(color, 2, 2);
        region.add_point(Point::new(0, 0)).unwrap();
        region.add_point(Point::new(1, 0)).unwrap();
        region.add_point(Point::new(0, 1)).unwrap();

        let clusters = split_into_clusters(&region).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].points().len(), 3);
    }

    #[test]
    fn is_4_connected_detects_diagonal_touch() {
        let bm = bitmask_from_rows(&["#.", ".#"]);
        assert!(!is_4_connected(&bm));
        let bm2 = bitmask_from_rows(&["##", "##"]);
        assert!(is_4_connected(&bm2));
    }
}
