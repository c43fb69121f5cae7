use super::{Point2, Tolerance};

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The third point lies to the left of the directed line through the first two.
    CounterClockwise,
    /// The third point lies to the right of the directed line through the first two.
    Clockwise,
    /// The three points lie on one line (within tolerance).
    Collinear,
}

impl Orientation {
    /// Returns whether `self` and `other` are strictly opposite turns.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Clockwise, Self::CounterClockwise) | (Self::CounterClockwise, Self::Clockwise)
        )
    }
}

/// Twice the signed area of triangle `(a, b, c)`, computed as
/// `(c - a) x (b - a)`.
///
/// Positive when `c` lies to the right of `a -> b`, negative when it lies to
/// the left, zero when the points are collinear.
#[must_use]
pub fn direction(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (c.x - a.x) * (b.y - a.y) - (b.x - a.x) * (c.y - a.y)
}

/// Classifies [`direction`] against the tolerance.
///
/// The triple is collinear when `|direction|` is within the tolerance of
/// `|b - a| * |c - a|`, i.e. when the sine of the angle at `a` is negligible.
/// The test does not depend on the scale of the input.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2, tolerance: Tolerance) -> Orientation {
    let d = direction(a, b, c);
    let scale = nalgebra::distance(a, b) * nalgebra::distance(a, c);
    if tolerance.is_negligible(d, scale) {
        Orientation::Collinear
    } else if d > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Returns whether `p` lies strictly inside segment `a`-`b`.
///
/// `p` must be collinear with the segment (see [`orientation`]) and project
/// strictly between the endpoints along the segment's dominant axis, so
/// diagonal segments are handled the same way as axis-aligned ones. Endpoints
/// are not interior, and a zero-length segment has no interior.
#[must_use]
pub fn on_segment(a: &Point2, b: &Point2, p: &Point2, tolerance: Tolerance) -> bool {
    if orientation(a, b, p, tolerance) != Orientation::Collinear {
        return false;
    }
    let (lo, hi, v) = if (b.x - a.x).abs() >= (b.y - a.y).abs() {
        (a.x.min(b.x), a.x.max(b.x), p.x)
    } else {
        (a.y.min(b.y), a.y.max(b.y), p.y)
    };
    let margin = tolerance.epsilon() * (hi - lo);
    hi > lo && v > lo + margin && v < hi - margin
}

/// Tests whether segments `p1`-`p2` and `p3`-`p4` intersect.
///
/// Reports proper crossings, and touching or overlapping configurations where
/// an endpoint of one segment lies strictly inside the other. Two segments
/// that only share an endpoint do not intersect.
#[must_use]
pub fn segments_intersect(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
    tolerance: Tolerance,
) -> bool {
    let d1 = orientation(p3, p4, p1, tolerance);
    let d2 = orientation(p3, p4, p2, tolerance);
    let d3 = orientation(p1, p2, p3, tolerance);
    let d4 = orientation(p1, p2, p4, tolerance);

    if d1.is_opposite(d2) && d3.is_opposite(d4) {
        return true;
    }

    // `on_segment` repeats the collinearity test for each endpoint.
    on_segment(p3, p4, p1, tolerance)
        || on_segment(p3, p4, p2, tolerance)
        || on_segment(p1, p2, p3, tolerance)
        || on_segment(p1, p2, p4, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn intersect(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64)) -> bool {
        segments_intersect(
            &p(a.0, a.1),
            &p(b.0, b.1),
            &p(c.0, c.1),
            &p(d.0, d.1),
            Tolerance::default(),
        )
    }

    #[test]
    fn direction_sign() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        assert!(direction(&a, &b, &p(0.5, -1.0)) > 0.0);
        assert!(direction(&a, &b, &p(0.5, 1.0)) < 0.0);
        assert!(direction(&a, &b, &p(3.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn direction_is_twice_triangle_area() {
        let d = direction(&p(0.0, 0.0), &p(4.0, 0.0), &p(0.0, 3.0));
        assert!((d.abs() - 12.0).abs() < TOLERANCE);
    }

    #[test]
    fn orientation_classifies_turns() {
        let tol = Tolerance::default();
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        assert_eq!(orientation(&a, &b, &p(0.0, 1.0), tol), Orientation::CounterClockwise);
        assert_eq!(orientation(&a, &b, &p(0.0, -1.0), tol), Orientation::Clockwise);
        assert_eq!(orientation(&a, &b, &p(2.0, 1e-9), tol), Orientation::Collinear);
    }

    #[test]
    fn on_segment_axis_aligned() {
        let tol = Tolerance::default();
        assert!(on_segment(&p(0.0, 0.0), &p(0.0, 4.0), &p(0.0, 2.0), tol));
        assert!(on_segment(&p(4.0, 1.0), &p(0.0, 1.0), &p(1.0, 1.0), tol));
        assert!(!on_segment(&p(0.0, 0.0), &p(0.0, 4.0), &p(0.0, 5.0), tol));
    }

    #[test]
    fn on_segment_diagonal() {
        let tol = Tolerance::default();
        assert!(on_segment(&p(0.0, 0.0), &p(2.0, 2.0), &p(1.0, 1.0), tol));
        assert!(!on_segment(&p(0.0, 0.0), &p(2.0, 2.0), &p(3.0, 3.0), tol));
    }

    #[test]
    fn on_segment_excludes_endpoints() {
        let tol = Tolerance::default();
        assert!(!on_segment(&p(0.0, 0.0), &p(2.0, 0.0), &p(0.0, 0.0), tol));
        assert!(!on_segment(&p(0.0, 0.0), &p(2.0, 0.0), &p(2.0, 0.0), tol));
    }

    #[test]
    fn on_segment_rejects_point_off_the_line() {
        let tol = Tolerance::default();
        assert!(!on_segment(&p(0.0, 0.0), &p(4.0, 0.0), &p(2.0, 1.0), tol));
        assert!(!on_segment(&p(0.0, 0.0), &p(1e-3, 0.0), &p(5e-4, 1e-4), tol));
    }

    #[test]
    fn orientation_independent_of_scale() {
        let tol = Tolerance::default();
        for scale in [1e-6, 1e-3, 1.0, 1e3, 1e6] {
            let a = p(0.0, 0.0);
            let b = p(scale, 0.0);
            assert_eq!(
                orientation(&a, &b, &p(0.5 * scale, 0.1 * scale), tol),
                Orientation::CounterClockwise
            );
            assert_eq!(
                orientation(&a, &b, &p(0.5 * scale, -0.1 * scale), tol),
                Orientation::Clockwise
            );
            assert_eq!(
                orientation(&a, &b, &p(2.0 * scale, 0.0), tol),
                Orientation::Collinear
            );
        }
    }

    #[test]
    fn small_non_crossing_segments() {
        // Same layout as `disjoint_segments`, shrunk to a millimetre.
        assert!(!intersect((0.0, 0.0), (1e-3, 0.0), (0.0, 1e-3), (1e-3, 1e-3)));
        assert!(!intersect((0.0, 0.0), (1e-3, 0.0), (5e-4, 1e-4), (1e-3, 1e-3)));
    }

    #[test]
    fn on_segment_zero_length() {
        let tol = Tolerance::default();
        assert!(!on_segment(&p(1.0, 1.0), &p(1.0, 1.0), &p(1.0, 1.0), tol));
    }

    #[test]
    fn proper_crossing() {
        assert!(intersect((0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)));
    }

    #[test]
    fn disjoint_segments() {
        assert!(!intersect((0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)));
        assert!(!intersect((0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, -5.0)));
    }

    #[test]
    fn shared_endpoint_is_not_intersection() {
        assert!(!intersect((0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0)));
        assert!(!intersect((0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (2.0, 0.0)));
    }

    #[test]
    fn endpoint_touching_interior() {
        // T-junction: (1, 0) sits inside the first segment.
        assert!(intersect((0.0, 0.0), (2.0, 0.0), (1.0, 0.0), (1.0, 3.0)));
        assert!(intersect((1.0, 0.0), (1.0, 3.0), (0.0, 0.0), (2.0, 0.0)));
    }

    #[test]
    fn collinear_overlap() {
        assert!(intersect((0.0, 0.0), (3.0, 0.0), (2.0, 0.0), (5.0, 0.0)));
        assert!(intersect((0.0, 0.0), (3.0, 3.0), (1.0, 1.0), (5.0, 5.0)));
    }

    #[test]
    fn collinear_disjoint() {
        assert!(!intersect((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)));
        assert!(!intersect((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)));
    }

    #[test]
    fn adjacent_edge_folding_back() {
        assert!(intersect((0.0, 0.0), (2.0, 0.0), (2.0, 0.0), (1.0, 0.0)));
    }

    #[test]
    fn symmetric_in_argument_order() {
        let cases = [
            ((0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)),
            ((0.0, 0.0), (2.0, 0.0), (1.0, 0.0), (1.0, 3.0)),
            ((0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)),
        ];
        for (a, b, c, d) in cases {
            assert_eq!(intersect(a, b, c, d), intersect(c, d, a, b));
            assert_eq!(intersect(a, b, c, d), intersect(b, a, d, c));
        }
    }
}
