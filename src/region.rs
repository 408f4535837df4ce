//! Color-region partitioner (C2).
//!
//! Groups the pixels of a source image by exact RGBA key into per-color
//! bitmasks, one [`ColorRegion`] per distinct color observed.

use std::collections::HashMap;

use crate::color::Color;
use crate::error::PixvgError;
use crate::grid::Grid2D;
use crate::image_processor::ImageData;
use crate::point::Point;

/// A (color, bitmask, point-set) triple. The bitmask and point list are kept
/// consistent: a coordinate is set in the bitmask iff it is present in the
/// point list.
#[derive(Debug, Clone)]
pub struct ColorRegion {
    pub color: Color,
    width: usize,
    height: usize,
    bitmask: Grid2D<u8>,
    points: Vec<Point>,
}

impl ColorRegion {
    pub fn new(color: Color, width: usize, height: usize) -> Self {
        ColorRegion {
            color,
            width,
            height,
            bitmask: Grid2D::new(width, height, 0u8),
            points: Vec::new(),
        }
    }

    /// Adds `point` to the region. Fails if `point` falls outside the
    /// region's declared dimensions. Adding the same point twice is a no-op.
    pub fn add_point(&mut self, point: Point) -> Result<(), PixvgError> {
        if point.x < 0
            || point.y < 0
            || point.x as usize >= self.width
            || point.y as usize >= self.height
        {
            return Err(PixvgError::OutOfBounds {
                x: point.x,
                y: point.y,
            });
        }
        let (x, y) = (point.x as usize, point.y as usize);
        if self.bitmask.get_xy(x, y) == 0 {
            self.bitmask.set_xy(x, y, 1);
            self.points.push(point);
        }
        Ok(())
    }

    pub fn has_point(&self, point: Point) -> bool {
        if point.x < 0 || point.y < 0 {
            return false;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        x < self.width && y < self.height && self.bitmask.get_xy(x, y) == 1
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bitmask(&self) -> &Grid2D<u8> {
        &self.bitmask
    }

    /// Points in first-discovery (row-major) order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Partitions `image` into one [`ColorRegion`] per distinct color, in
/// row-major first-appearance order. Every pixel ends up in exactly one
/// region; regions' bitmasks are pairwise disjoint and union to the full
/// image.
pub fn partition_by_color(image: &ImageData) -> Result<Vec<ColorRegion>, PixvgError> {
    let width = image.width as usize;
    let height = image.height as usize;

    let mut index_of: HashMap<String, usize> = HashMap::new();
    let mut regions: Vec<ColorRegion> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let p = image.pixels[y * width + x];
            let color = Color::new(p.r, p.g, p.b, p.a);
            let key = color.to_hex();

            let idx = match index_of.get(&key) {
                Some(&idx) => idx,
                None => {
                    let idx = regions.len();
                    regions.push(ColorRegion::new(color, width, height));
                    index_of.insert(key, idx);
                    idx
                }
            };

            regions[idx].add_point(Point::new(x as i64, y as i64))?;
        }
    }

    Ok(regions)
}
