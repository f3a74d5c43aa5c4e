//! Axis-angle rotations built from unit quaternions.

use nalgebra::{Matrix3, Vector3};
use tracing::warn;

use crate::error::{ScatterError, ScatterResult};

/// Build the 3×3 rotation matrix for a right-handed rotation of
/// `angle_degrees` about `axis`.
///
/// The axis is normalized first. The matrix comes from the unit quaternion
/// `(cos(θ/2), -sin(θ/2)·n)`, laid out so that it rotates column vectors
/// counter-clockwise when looking down the axis.
///
/// A zero-length axis has no direction; the identity is returned and a
/// warning is emitted.
///
/// # Example
///
/// ```
/// use scatter_math::rotation_matrix;
/// use nalgebra::Vector3;
///
/// let m = rotation_matrix(Vector3::z(), 90.0);
/// let v = m * Vector3::x();
/// assert!((v.y - 1.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::many_single_char_names)]
// Single-char names: quaternion components a, b, c, d
pub fn rotation_matrix(axis: Vector3<f64>, angle_degrees: f64) -> Matrix3<f64> {
    let norm = axis.norm();
    if norm < f64::EPSILON {
        warn!(?axis, "rotation axis has zero length, using identity");
        return Matrix3::identity();
    }
    let axis = axis / norm;

    let half = angle_degrees.to_radians() / 2.0;
    let (sin_h, cos_h) = half.sin_cos();

    let a = cos_h;
    let b = -sin_h * axis.x;
    let c = -sin_h * axis.y;
    let d = -sin_h * axis.z;

    #[rustfmt::skip]
    let matrix = Matrix3::new(
        a*a + b*b - c*c - d*d,  2.0 * (b*c + a*d),      2.0 * (b*d - a*c),
        2.0 * (b*c - a*d),      a*a + c*c - b*b - d*d,  2.0 * (c*d + a*b),
        2.0 * (b*d + a*c),      2.0 * (c*d - a*b),      a*a + d*d - b*b - c*c,
    );
    matrix
}

/// A rigid rotation about an axis through the origin.
///
/// Constructed on demand for each rotation call; it is never stored as
/// mesh state.
///
/// # Example
///
/// ```
/// use scatter_math::AxisRotation;
/// use nalgebra::Vector3;
///
/// let quarter = AxisRotation::new(Vector3::z(), 90.0);
/// let half = quarter.then(&quarter);
/// let v = half.apply(Vector3::x());
/// assert!((v.x + 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    matrix: Matrix3<f64>,
}

impl Default for AxisRotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl AxisRotation {
    /// Rotation of `angle_degrees` about `axis` (see [`rotation_matrix`]).
    #[must_use]
    pub fn new(axis: Vector3<f64>, angle_degrees: f64) -> Self {
        Self {
            matrix: rotation_matrix(axis, angle_degrees),
        }
    }

    /// Rotation of `angle_degrees` about `axis`, rejecting a zero-length axis.
    ///
    /// # Errors
    ///
    /// Returns [`ScatterError::ZeroAxis`] if `axis` has no direction.
    pub fn try_new(axis: Vector3<f64>, angle_degrees: f64) -> ScatterResult<Self> {
        if axis.norm() < f64::EPSILON {
            return Err(ScatterError::ZeroAxis);
        }
        Ok(Self::new(axis, angle_degrees))
    }

    /// The rotation that leaves every vector unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// The underlying orthonormal matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Rotate a vector.
    #[inline]
    #[must_use]
    pub fn apply(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.matrix * v
    }

    /// The opposite rotation. For an orthonormal matrix this is the transpose.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Compose with another rotation: the result applies `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }
}
