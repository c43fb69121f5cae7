pub mod error;
pub mod geometry;
pub mod math;

pub use error::{PlanarError, Result};
pub use geometry::Shape;
