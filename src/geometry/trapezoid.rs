use crate::error::Result;
use crate::math::polygon_2d::scale_to;
use crate::math::Point2;

use super::{Polygon, Shape};

/// An isosceles trapezoid inscribed in a `width` x `height` box.
///
/// The base spans the full width and the top spans the middle half, so the
/// area is `0.75 * width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trapezoid {
    width: f64,
    height: f64,
    polygon: Polygon,
}

impl Trapezoid {
    /// Creates a trapezoid scaled to `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the scaled outline is not a simple polygon.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let outline = [
            Point2::new(0.0, 0.0),
            Point2::new(0.25, 1.0),
            Point2::new(0.75, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let polygon = Polygon::new(scale_to(&outline, width, height))?;
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

impl Shape for Trapezoid {
    fn area(&self) -> f64 {
        self.polygon.area()
    }
}
