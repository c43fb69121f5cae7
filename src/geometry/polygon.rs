use tracing::{debug, trace};

use crate::error::{Result, ValidationError};
use crate::math::intersect_2d::segments_intersect;
use crate::math::polygon_2d::{perimeter_2d, signed_area_2d};
use crate::math::{Point2, Tolerance};

use super::Shape;

/// A simple polygon: an ordered, implicitly closed ring of at least three
/// vertices whose edges do not cross.
///
/// Validity is checked once, at construction. There is no mutation API, so a
/// `Polygon` stays valid for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from `vertices`, validated with the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooFewVertices` for fewer than 3 vertices and
    /// `ValidationError::SelfIntersecting` if any two edges intersect.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        Self::with_tolerance(vertices, Tolerance::default())
    }

    /// Creates a polygon from a vertex sequence that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NullInput` if `vertices` is `None`, otherwise
    /// fails as [`Polygon::new`] does.
    pub fn from_optional(vertices: Option<Vec<Point2>>) -> Result<Self> {
        let Some(vertices) = vertices else {
            debug!("rejected polygon: no vertex sequence supplied");
            return Err(ValidationError::NullInput.into());
        };
        Self::new(vertices)
    }

    /// Creates a polygon from `vertices`, validated with `tolerance`.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::new`].
    pub fn with_tolerance(vertices: Vec<Point2>, tolerance: Tolerance) -> Result<Self> {
        if vertices.len() < 3 {
            debug!(count = vertices.len(), "rejected polygon: too few vertices");
            return Err(ValidationError::TooFewVertices {
                count: vertices.len(),
            }
            .into());
        }

        if let Some((first_edge, second_edge)) = Self::find_self_intersection(&vertices, tolerance)
        {
            debug!(first_edge, second_edge, "rejected polygon: edges intersect");
            return Err(ValidationError::SelfIntersecting {
                first_edge,
                second_edge,
            }
            .into());
        }

        trace!(vertices = vertices.len(), "polygon validated");
        Ok(Self { vertices })
    }

    /// Finds the first pair of intersecting edges of the closed ring through
    /// `vertices`.
    ///
    /// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`, so the closing
    /// edge takes part like any other. Every unordered pair is tested once;
    /// adjacent edges are included and only flagged when they overlap beyond
    /// their shared vertex. Runs in O(n²).
    #[must_use]
    pub fn find_self_intersection(
        vertices: &[Point2],
        tolerance: Tolerance,
    ) -> Option<(usize, usize)> {
        let n = vertices.len();
        for i in 0..n {
            let (a0, a1) = (&vertices[i], &vertices[(i + 1) % n]);
            for j in (i + 1)..n {
                let (b0, b1) = (&vertices[j], &vertices[(j + 1) % n]);
                if segments_intersect(a0, a1, b0, b1, tolerance) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Returns the vertices in ring order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a valid polygon has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the edges as `(start, end)` pairs, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Shoelace sum halved: positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Returns the length of the boundary.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.vertices)
    }
}

impl Shape for Polygon {
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}
