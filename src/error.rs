//! Error taxonomy for the quadrature engine.

use thiserror::Error;

/// Errors that can be returned by any of the ten field-evaluation entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TesseroidError {
    /// Observation coordinate arrays did not all have the same length.
    #[error("observation arrays must have the same length: lon={lon}, lat={lat}, height={height}")]
    ShapeMismatch {
        lon: usize,
        lat: usize,
        height: usize,
    },

    /// A precondition on a scalar parameter failed (`ratio <= 0`, `njobs == 0`, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Caller requested a field name this engine does not implement.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Caller requested a compute backend this engine does not implement.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// Adaptive subdivision exceeded the stack capacity for one (point, tesseroid) pair.
    #[error("adaptive subdivision stack overflowed at observation point {point_index}")]
    StackOverflow { point_index: usize },

    /// The observation point lies strictly inside a tesseroid's bounds; the kernel
    /// is singular there and no amount of refinement avoids it.
    #[error("observation point {point_index} lies inside a tesseroid")]
    PointInsideTesseroid { point_index: usize },

    /// A malformed tesseroid (bounds not strictly ordered, non-finite density).
    #[error("invalid tesseroid: {0}")]
    InvalidTesseroid(String),
}
