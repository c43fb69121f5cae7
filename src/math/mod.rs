pub mod intersect_2d;
pub mod polygon_2d;

use crate::error::{ConfigError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-6;

/// Tolerance used by every floating-point comparison in the crate.
///
/// Comparisons are relative: a quantity is weighed against a scale of the
/// same dimension (see [`Tolerance::is_negligible`]).
///
/// Defaults to [`TOLERANCE`]. Construct a custom one with [`Tolerance::new`]
/// and pass it to the `with_tolerance` constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a tolerance of `epsilon`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTolerance` if `epsilon` is not finite or
    /// not strictly positive.
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::InvalidTolerance { value: epsilon }.into());
        }
        Ok(Self(epsilon))
    }

    /// Returns the raw epsilon value.
    #[must_use]
    pub fn epsilon(self) -> f64 {
        self.0
    }

    /// Returns whether `|value| <= epsilon * |scale|`.
    #[must_use]
    pub fn is_negligible(self, value: f64, scale: f64) -> bool {
        value.abs() <= self.0 * scale.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(TOLERANCE)
    }
}
