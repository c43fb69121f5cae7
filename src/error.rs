use thiserror::Error;

/// Top-level error type for the planar area library.
#[derive(Debug, Error, PartialEq)]
pub enum PlanarError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while constructing a shape from caller-supplied data.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("no vertex sequence was supplied")]
    NullInput,

    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("edges {first_edge} and {second_edge} intersect")]
    SelfIntersecting {
        first_edge: usize,
        second_edge: usize,
    },

    #[error("sides ({a}, {b}, {c}) do not form a triangle")]
    DegenerateTriangle { a: f64, b: f64, c: f64 },
}

/// Errors related to numeric configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive, got {value}")]
    InvalidTolerance { value: f64 },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
