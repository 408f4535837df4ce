//! Collinear-vertex simplification (C6).
//!
//! Removes every vertex of a [`Loop`] that lies exactly between its two
//! neighbors on a straight horizontal or vertical run, leaving only the
//! points where the boundary actually turns. Traced loops only ever run
//! axis-aligned, so "collinear" here always means "same x" or "same y" as
//! both neighbors — no general cross-product test is needed.

use crate::loop_extractor::Loop;
use crate::point::Point;

/// True if `b` lies on the straight segment from `a` to `c`, i.e. `b` is
/// redundant and can be removed without changing the traced shape.
fn is_collinear(a: Point, b: Point, c: Point) -> bool {
    (a.x == b.x && b.x == c.x) || (a.y == b.y && b.y == c.y)
}

/// Removes collinear vertices from `loop_`, leaving only the points at which
/// the boundary changes direction. A loop with 3 or fewer points is already
/// maximally simplified and is left untouched.
pub fn simplify(loop_: &Loop) -> Loop {
    let points = loop_.points();
    let n = points.len();
    if n <= 3 {
        return Loop::from_points(points.to_vec());
    }

    let mut simplified: Vec<Point> = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];
        if !is_collinear(prev, cur, next) {
            simplified.push(cur);
        }
    }

    // A fully straight degenerate loop (shouldn't occur for a real closed
    // boundary, but keep at least one point rather than emit an empty path).
    if simplified.is_empty() {
        simplified.push(points[0]);
    }

    Loop::from_points(simplified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loop_of(points: &[(i64, i64)]) -> Loop {
        Loop::from_points(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn square_has_no_collinear_points_to_remove() {
        let l = loop_of(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
        let simplified = simplify(&l);
        assert_eq!(simplified.points(), l.points());
    }

    #[test]
    fn mid_edge_point_is_removed() {
        // A 2x1 rectangle traced per-pixel has a redundant midpoint on its
        // top and bottom edges.
        let l = loop_of(&[(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
        let simplified = simplify(&l);
        assert_eq!(
            simplified.points(),
            &[
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn staircase_keeps_every_turning_point() {
        let l = loop_of(&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (0, 2)]);
        let simplified = simplify(&l);
        assert_eq!(simplified.len(), l.len());
    }

    #[test]
    fn short_loop_is_left_untouched() {
        let l = loop_of(&[(0, 0), (1, 0), (1, 1)]);
        let simplified = simplify(&l);
        assert_eq!(simplified.points(), l.points());
    }

    #[test]
    fn simplifying_twice_is_the_same_as_once() {
        // A second pass over an already-simplified loop must be a no-op:
        // every remaining vertex is already a turning point, so none of them
        // can newly become collinear with their neighbors.
        let l = loop_of(&[(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
        let once = simplify(&l);
        let twice = simplify(&once);
        assert_eq!(once.points(), twice.points());
    }
}
