use std::f64::consts::PI;

use super::Shape;

/// An axis-aligned ellipse given by its two radii.
///
/// Area is closed-form; no polygon is generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    /// Creates an ellipse with radii `radius_x` and `radius_y`.
    #[must_use]
    pub fn new(radius_x: f64, radius_y: f64) -> Self {
        Self { radius_x, radius_y }
    }

    /// Returns the radius along x.
    #[must_use]
    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    /// Returns the radius along y.
    #[must_use]
    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
}

impl Shape for Ellipse {
    fn area(&self) -> f64 {
        (PI * self.radius_x * self.radius_y).abs()
    }
}

/// A circle: an ellipse with equal radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle(Ellipse);

impl Circle {
    /// Creates a circle of the given radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self(Ellipse::new(radius, radius))
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.0.radius_x
    }

    /// Returns the circle as a general ellipse.
    #[must_use]
    pub fn as_ellipse(&self) -> &Ellipse {
        &self.0
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        self.0.area()
    }
}
