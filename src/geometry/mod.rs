mod ellipse;
mod hexagon;
mod polygon;
mod rectangle;
mod trapezoid;
mod triangle;

pub use ellipse::{Circle, Ellipse};
pub use hexagon::Hexagon;
pub use polygon::Polygon;
pub use rectangle::{Rectangle, Square};
pub use trapezoid::Trapezoid;
pub use triangle::Triangle;

/// Trait for planar shapes with a measurable area.
pub trait Shape {
    /// Returns the area enclosed by the shape. Always non-negative.
    fn area(&self) -> f64;
}

/// Sums the areas of a heterogeneous collection of shapes.
#[must_use]
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}
