use crate::error::Result;
use crate::math::polygon_2d::scale_to;
use crate::math::Point2;

use super::{Polygon, Shape};

/// A hexagon inscribed in a `width` x `height` box.
///
/// Vertices sit at 0°, 60°, ..., 300° on the circle of radius 0.5 centred in
/// the unit box, then the box is stretched to size. For a unit box the area is
/// `3√3/8`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hexagon {
    width: f64,
    height: f64,
    polygon: Polygon,
}

impl Hexagon {
    /// Creates a hexagon scaled to `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the scaled outline is not a simple polygon.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let outline: Vec<Point2> = (0..6)
            .map(|i| {
                let angle = f64::from(i * 60).to_radians();
                Point2::new(0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin())
            })
            .collect();
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

impl Shape for Hexagon {
    fn area(&self) -> f64 {
        self.polygon.area()
    }
}
