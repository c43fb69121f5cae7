use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The last vertex
/// connects back to the first.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the length of the closed boundary through `points`.
#[must_use]
pub fn perimeter_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| nalgebra::distance(&points[i], &points[(i + 1) % n]))
        .sum()
}

/// Scales every point by `width_factor` along x and `height_factor` along y.
///
/// No validation is performed; negative factors mirror the points.
#[must_use]
pub fn scale_to(points: &[Point2], width_factor: f64, height_factor: f64) -> Vec<Point2> {
    points
        .iter()
        .map(|p| Point2::new(p.x * width_factor, p.y * height_factor))
        .collect()
}
