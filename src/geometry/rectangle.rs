use crate::error::Result;
use crate::math::polygon_2d::scale_to;
use crate::math::Point2;

use super::{Polygon, Shape};

fn unit_square() -> [Point2; 4] {
    [
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 0.0),
    ]
}

/// An axis-aligned rectangle with a corner at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
    polygon: Polygon,
}

impl Rectangle {
    /// Creates a `width` x `height` rectangle.
    ///
    /// Negative dimensions mirror the rectangle; the area stays `|width * height|`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the scaled outline is not a simple polygon.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let polygon = Polygon::new(scale_to(&unit_square(), width, height))?;
        Ok(Self {
            width,
            height,
            polygon,
        })
    }

    /// Returns the width the shape was scaled to.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height the shape was scaled to.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the underlying polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.polygon.area()
    }
}

/// A square with a corner at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    size: f64,
    polygon: Polygon,
}

impl Square {
    /// Creates a square with side `size`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the scaled outline is not a simple polygon.
    pub fn new(size: f64) -> Result<Self> {
        let polygon = Polygon::new(scale_to(&unit_square(), size, size))?;
        Ok(Self { size, polygon })
    }

    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the underlying polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.polygon.area()
    }
}
