//! Cartesian and spherical coordinates.
//!
//! Convention: `theta` is the polar angle measured from +Z, in `[0, π]`;
//! `phi` is the azimuth `atan2(y, x)`, in `(-π, π]`.

use std::f64::consts::PI;

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spherical coordinates of a point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphericalCoords {
    /// Distance from the origin.
    pub r: f64,
    /// Azimuth in radians, `(-π, π]`.
    pub phi: f64,
    /// Polar angle from +Z in radians, `[0, π]`.
    pub theta: f64,
}

impl SphericalCoords {
    /// Create spherical coordinates from their components.
    #[must_use]
    pub const fn new(r: f64, phi: f64, theta: f64) -> Self {
        Self { r, phi, theta }
    }

    /// Convert a cartesian point.
    ///
    /// The origin maps to `r = 0, phi = 0, theta = 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use scatter_math::SphericalCoords;
    /// use nalgebra::Vector3;
    ///
    /// let s = SphericalCoords::from_cartesian(Vector3::new(0.0, 2.0, 0.0));
    /// assert!((s.r - 2.0).abs() < 1e-12);
    /// assert!((s.phi - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// assert!((s.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_cartesian(p: Vector3<f64>) -> Self {
        let r = p.norm();
        // atan2(-0.0, x < 0) gives -π; keep the range half-open
        let phi = match p.y.atan2(p.x) {
            phi if phi <= -PI => PI,
            phi => phi,
        };
        // atan2 of the in-plane radius stays accurate near the poles
        let theta = p.x.hypot(p.y).atan2(p.z);
        Self { r, phi, theta }
    }

    /// Convert back to a cartesian point.
    #[must_use]
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let (sin_p, cos_p) = self.phi.sin_cos();
        Vector3::new(
            self.r * sin_t * cos_p,
            self.r * sin_t * sin_p,
            self.r * cos_t,
        )
    }

    /// Unit vector in the direction of increasing `theta`.
    #[must_use]
    pub fn e_theta(&self) -> Vector3<f64> {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let (sin_p, cos_p) = self.phi.sin_cos();
        Vector3::new(cos_t * cos_p, cos_t * sin_p, -sin_t)
    }

    /// Unit vector in the direction of increasing `phi`.
    #[must_use]
    pub fn e_phi(&self) -> Vector3<f64> {
        let (sin_p, cos_p) = self.phi.sin_cos();
        Vector3::new(-sin_p, cos_p, 0.0)
    }

    /// Unit radial vector.
    #[must_use]
    pub fn e_r(&self) -> Vector3<f64> {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let (sin_p, cos_p) = self.phi.sin_cos();
        Vector3::new(sin_t * cos_p, sin_t * sin_p, cos_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn axes() {
        let s = SphericalCoords::from_cartesian(Vector3::z());
        assert_relative_eq!(s.r, 1.0);
        assert_relative_eq!(s.theta, 0.0);

        let s = SphericalCoords::from_cartesian(-Vector3::z());
        assert_relative_eq!(s.theta, PI);

        let s = SphericalCoords::from_cartesian(Vector3::new(-1.0, 0.0, 0.0));
        assert_relative_eq!(s.phi, PI);
        assert_relative_eq!(s.theta, FRAC_PI_2);
    }

    #[test]
    fn negative_x_axis_with_signed_zero() {
        for p in [Vector3::new(-1.0, -0.0, 0.0), -Vector3::x(), Vector3::new(-2.0, -0.0, 3.0)] {
            let s = SphericalCoords::from_cartesian(p);
            assert_relative_eq!(s.phi, PI);
            assert!(s.phi > -PI);
        }
    }

    #[test]
    fn origin() {
        let s = SphericalCoords::from_cartesian(Vector3::zeros());
        assert_eq!(s, SphericalCoords::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn round_trip_off_axis() {
        let p = Vector3::new(1.0, -2.0, 0.5);
        let back = SphericalCoords::from_cartesian(p).to_cartesian();
        assert_relative_eq!(back, p, epsilon = 1e-12);
    }

    #[test]
    fn radius_matches_norm() {
        let p = Vector3::new(3.0, 4.0, 12.0);
        assert_relative_eq!(SphericalCoords::from_cartesian(p).r, 13.0, epsilon = 1e-12);
    }

    #[test]
    fn local_frame_is_orthonormal() {
        let s = SphericalCoords::new(1.0, 2.1, FRAC_PI_4);
        let (er, et, ep) = (s.e_r(), s.e_theta(), s.e_phi());
        assert_relative_eq!(er.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(et.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(ep.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(er.dot(&et), 0.0, epsilon = 1e-12);
        assert_relative_eq!(er.dot(&ep), 0.0, epsilon = 1e-12);
        assert_relative_eq!(et.dot(&ep), 0.0, epsilon = 1e-12);
        // right-handed: e_r × e_theta = e_phi
        assert_relative_eq!(er.cross(&et), ep, epsilon = 1e-12);
    }

    #[test]
    fn frame_at_pole_stays_tangent() {
        let s = SphericalCoords::from_cartesian(Vector3::z());
        assert_relative_eq!(s.e_theta().dot(&Vector3::z()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(s.e_phi().dot(&Vector3::z()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(s.e_theta().dot(&s.e_phi()), 0.0, epsilon = 1e-12);
    }
}
