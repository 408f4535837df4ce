//! Integer 2D coordinates, shared by pixel space ([0, W) × [0, H)) and
//! corner-lattice space ([0, W] × [0, H]).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}
