use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::math::{Point2, Tolerance};

use super::{Polygon, Shape};

/// A triangle built from its three side lengths.
///
/// Side `a` is laid along the x-axis from the origin; the third vertex is
/// placed by the law of cosines so that it is `b` away from the origin and
/// `c` away from `(a, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    sides: [f64; 3],
    tolerance: Tolerance,
    polygon: Polygon,
}

impl Triangle {
    /// Creates a triangle with sides `a`, `b`, `c` and the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DegenerateTriangle` if the sides cannot form
    /// a triangle with non-zero area.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::with_tolerance(a, b, c, Tolerance::default())
    }

    /// Creates a triangle, using `tolerance` for validation and
    /// [`Triangle::is_rectangular`].
    ///
    /// # Errors
    ///
    /// Same as [`Triangle::new`].
    pub fn with_tolerance(a: f64, b: f64, c: f64, tolerance: Tolerance) -> Result<Self> {
        let x = (b * b + a * a - c * c) / (2.0 * a);
        let y = (b * b - x * x).sqrt();

        // NaN covers a = 0 and the triangle inequality; a flat apex covers equality.
        if y.is_nan() || tolerance.is_negligible(y, a) {
            debug!(a, b, c, "rejected triangle: sides are degenerate");
            return Err(ValidationError::DegenerateTriangle { a, b, c }.into());
        }

        let vertices = vec![Point2::new(0.0, 0.0), Point2::new(a, 0.0), Point2::new(x, y)];
        let polygon = Polygon::with_tolerance(vertices, tolerance)?;
        Ok(Self {
            sides: [a, b, c],
            tolerance,
            polygon,
        })
    }

    /// Returns the side lengths as given to the constructor.
    #[must_use]
    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }

    /// Returns the underlying polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Returns whether the triangle has a right angle.
    ///
    /// Compares squared edge lengths of the placed vertices against each
    /// Pythagorean relation, within the tolerance of the largest one.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        let v = self.polygon.vertices();
        let a = nalgebra::distance_squared(&v[0], &v[1]);
        let b = nalgebra::distance_squared(&v[1], &v[2]);
        let c = nalgebra::distance_squared(&v[2], &v[0]);
        let largest = a.max(b).max(c);

        let tol = self.tolerance;
        tol.is_negligible(a - b - c, largest)
            || tol.is_negligible(b - a - c, largest)
            || tol.is_negligible(c - a - b, largest)
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        self.polygon.area()
    }
}
