//! Von Neumann (4-) neighborhood probe (C1).
//!
//! Reads the up-to-four cardinal neighbors of a cell in a [`Grid2D`],
//! marking out-of-bounds neighbors as *absent* rather than collapsing them
//! to a sentinel value — this keeps "absent" distinguishable from "0".

use crate::error::PixvgError;
use crate::grid::Grid2D;

/// The four cardinal neighbors of a cell. `None` means the neighbor would
/// fall outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood4<T> {
    pub top: Option<T>,
    pub right: Option<T>,
    pub bottom: Option<T>,
    pub left: Option<T>,
}

/// Returns the Von Neumann neighborhood of `(x, y)` in `grid`.
///
/// Fails if `grid` is degenerate (zero width or height) or if `(x, y)` is
/// outside the grid's bounds.
pub fn neumann_neighbors<T: Copy>(
    grid: &Grid2D<T>,
    x: i64,
    y: i64,
) -> Result<Neighborhood4<T>, PixvgError> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(PixvgError::NotTwoDimensional);
    }

    let (w, h) = (grid.width() as i64, grid.height() as i64);
    if x < 0 || y < 0 || x >= w || y >= h {
        return Err(PixvgError::OutOfBounds { x, y });
    }

    Ok(Neighborhood4 {
        top: (y != 0).then(|| grid.get_xy(x as usize, (y - 1) as usize)),
        right: (x != w - 1).then(|| grid.get_xy((x + 1) as usize, y as usize)),
        bottom: (y != h - 1).then(|| grid.get_xy(x as usize, (y + 1) as usize)),
        left: (x != 0).then(|| grid.get_xy((x - 1) as usize, y as usize)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cell_has_two_absent_neighbors() {
        let grid = Grid2D::new(3, 3, 0u8);
        let n = neumann_neighbors(&grid, 0, 0).unwrap();
        assert_eq!(n.top, None);
        assert_eq!(n.left, None);
        assert_eq!(n.right, Some(0));
        assert_eq!(n.bottom, Some(0));
    }

    #[test]
    fn interior_cell_has_all_four_neighbors() {
        let grid = Grid2D::new(3, 3, 1u8);
        let n = neumann_neighbors(&grid, 1, 1).unwrap();
        assert_eq!(n.top, Some(1));
        assert_eq!(n.right, Some(1));
        assert_eq!(n.bottom, Some(1));
        assert_eq!(n.left, Some(1));
    }

    #[test]
    fn absent_is_distinguishable_from_zero() {
        let grid = Grid2D::new(2, 2, 0u8);
        let n = neumann_neighbors(&grid, 0, 0).unwrap();
        assert_ne!(n.top, Some(0));
        assert_eq!(n.top, None);
    }

    #[test]
    fn out_of_bounds_coordinate_fails() {
        let grid = Grid2D::new(2, 2, 0u8);
        assert!(matches!(
            neumann_neighbors(&grid, 5, 0),
            Err(PixvgError::OutOfBounds { x: 5, y: 0 })
        ));
    }

    #[test]
    fn degenerate_grid_fails() {
        let grid: Grid2D<u8> = Grid2D::new(0, 0, 0);
        assert!(matches!(
            neumann_neighbors(&grid, 0, 0),
            Err(PixvgError::NotTwoDimensional)
        ));
    }
}
