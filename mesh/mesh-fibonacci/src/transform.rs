//! Rigid rotations of a mesh's sample directions.

use nalgebra::Vector3;
use scatter_math::AxisRotation;
use tracing::debug;

use crate::error::MeshResult;
use crate::mesh::FibonacciMesh;

/// The axis the cap is generated around, and the axis of
/// [`FibonacciMesh::rotate_around_axis`]: +Z.
#[must_use]
pub fn polar_axis() -> Vector3<f64> {
    Vector3::z()
}

impl FibonacciMesh {
    /// Rotate every sample by `angle_degrees` about the polar axis (+Z).
    ///
    /// Coordinates are rotated in place. Rotating by `θ` and then by `-θ`
    /// restores the original coordinates up to rounding.
    pub fn rotate_around_axis(&mut self, angle_degrees: f64) {
        self.rotate_around(polar_axis(), angle_degrees);
    }

    /// Rotate every sample by `angle_degrees` about an arbitrary `axis`.
    ///
    /// A zero-length axis leaves the coordinates unchanged.
    pub fn rotate_around(&mut self, axis: Vector3<f64>, angle_degrees: f64) {
        debug!(?axis, angle_degrees, "Rotating Fibonacci mesh");
        self.rotate(&AxisRotation::new(axis, angle_degrees));
    }

    /// Rotate every sample by `angle_degrees` about `axis`, rejecting a
    /// zero-length axis instead of ignoring it.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Math`](crate::MeshError::Math) wrapping
    /// [`ScatterError::ZeroAxis`](scatter_math::ScatterError::ZeroAxis);
    /// the coordinates are left untouched.
    pub fn try_rotate_around(&mut self, axis: Vector3<f64>, angle_degrees: f64) -> MeshResult<()> {
        let rotation = AxisRotation::try_new(axis, angle_degrees)?;
        debug!(?axis, angle_degrees, "Rotating Fibonacci mesh");
        self.rotate(&rotation);
        Ok(())
    }

    /// Apply a rotation to every sample in place.
    ///
    /// Clears the polarization basis and projections; call
    /// [`compute_vector_field`](Self::compute_vector_field) again to
    /// rebuild them for the new directions.
    pub fn rotate(&mut self, rotation: &AxisRotation) {
        for ((x, y), z) in self.x.iter_mut().zip(&mut self.y).zip(&mut self.z) {
            let p = rotation.apply(Vector3::new(*x, *y, *z));
            *x = p.x;
            *y = p.y;
            *z = p.z;
        }
        self.invalidate();
    }

    /// Spin by `rotation_angle` about +Z, then tilt by `gamma_offset` about +Y.
    pub(crate) fn apply_initial_orientation(&mut self) {
        let spin = AxisRotation::new(polar_axis(), self.config.rotation_angle);
        let tilt = AxisRotation::new(Vector3::y(), self.config.gamma_offset);
        self.rotate(&spin.then(&tilt));
    }
}
