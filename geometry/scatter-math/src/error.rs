//! Error types for scattering-geometry kernels.

use thiserror::Error;

/// Result type for scattering-geometry operations.
pub type ScatterResult<T> = Result<T, ScatterError>;

/// Errors reported by the checked entry points of this crate.
///
/// The unchecked kernels never return these; they leave preconditions to
/// the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScatterError {
    /// Numerical aperture outside `[0, 2]`.
    #[error("invalid numerical aperture {0}: must lie in [0, 2]")]
    InvalidNumericalAperture(f64),

    /// Rotation axis has (near) zero length.
    #[error("rotation axis has zero length")]
    ZeroAxis,
}

impl ScatterError {
    /// Check if this is a numerical aperture error.
    #[must_use]
    pub fn is_invalid_aperture(&self) -> bool {
        matches!(self, Self::InvalidNumericalAperture(_))
    }
}
