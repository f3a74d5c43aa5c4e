//! Error types for Fibonacci mesh construction.

use scatter_math::ScatterError;
use thiserror::Error;

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors reported by checked mesh construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// The mesh must hold at least one sample.
    #[error("sampling must be at least 1")]
    EmptySampling,

    /// Cap half-angle outside `(0, π]`.
    #[error("invalid max angle {0} rad: must lie in (0, π]")]
    InvalidMaxAngle(f64),

    /// An angle parameter is NaN or infinite.
    #[error("{name} is not finite: {value}")]
    NonFiniteAngle {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Failure in an underlying geometry kernel.
    #[error(transparent)]
    Math(#[from] ScatterError),
}
