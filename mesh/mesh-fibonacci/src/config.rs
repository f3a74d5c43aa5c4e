//! Configuration for Fibonacci mesh generation.

use std::f64::consts::{FRAC_PI_2, PI};

use scatter_math::na_to_angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::generate::cap_solid_angle;

/// Parameters for a Fibonacci mesh.
///
/// Angles that shape the sampled cap (`max_angle`, `phi_offset`) are in
/// radians. Angles that drive a rigid rotation of the finished mesh
/// (`rotation_angle`, `gamma_offset`) are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FibonacciConfig {
    /// Number of sample points. Default: 1000
    pub sampling: usize,

    /// Half-angle of the spherical cap around +Z, in radians.
    /// Default: π/2 (hemisphere)
    pub max_angle: f64,

    /// Azimuthal offset added to every golden-angle step, in radians.
    /// Default: 0
    pub phi_offset: f64,

    /// Spin of the cap about its own axis (+Z), in degrees. Applied before
    /// the tilt. Default: 0
    pub rotation_angle: f64,

    /// Tilt of the cap about +Y, in degrees. A positive tilt moves the cap
    /// center from +Z toward +X. Default: 0
    pub gamma_offset: f64,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            sampling: 1000,
            max_angle: FRAC_PI_2,
            phi_offset: 0.0,
            rotation_angle: 0.0,
            gamma_offset: 0.0,
        }
    }
}

impl FibonacciConfig {
    /// Create a configuration from all five parameters.
    #[must_use]
    pub const fn new(
        sampling: usize,
        max_angle: f64,
        phi_offset: f64,
        rotation_angle: f64,
        gamma_offset: f64,
    ) -> Self {
        Self {
            sampling,
            max_angle,
            phi_offset,
            rotation_angle,
            gamma_offset,
        }
    }

    /// Sample the hemisphere around +Z.
    #[must_use]
    pub fn hemisphere(sampling: usize) -> Self {
        Self {
            sampling,
            ..Default::default()
        }
    }

    /// Sample the whole sphere.
    #[must_use]
    pub fn full_sphere(sampling: usize) -> Self {
        Self {
            sampling,
            max_angle: PI,
            ..Default::default()
        }
    }

    /// Sample the acceptance cone of an aperture with the given numerical
    /// aperture.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Math`] if `na` is outside `[0, 2]`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_fibonacci::FibonacciConfig;
    ///
    /// let config = FibonacciConfig::from_numerical_aperture(500, 1.0).unwrap();
    /// assert!((config.max_angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn from_numerical_aperture(sampling: usize, na: f64) -> MeshResult<Self> {
        Ok(Self {
            sampling,
            max_angle: na_to_angle(na)?,
            ..Default::default()
        })
    }

    /// Set the number of sample points.
    #[must_use]
    pub const fn with_sampling(mut self, sampling: usize) -> Self {
        self.sampling = sampling;
        self
    }

    /// Set the cap half-angle in radians.
    #[must_use]
    pub const fn with_max_angle(mut self, max_angle: f64) -> Self {
        self.max_angle = max_angle;
        self
    }

    /// Set the azimuthal offset in radians.
    #[must_use]
    pub const fn with_phi_offset(mut self, phi_offset: f64) -> Self {
        self.phi_offset = phi_offset;
        self
    }

    /// Set the spin about +Z in degrees.
    #[must_use]
    pub const fn with_rotation_angle(mut self, rotation_angle: f64) -> Self {
        self.rotation_angle = rotation_angle;
        self
    }

    /// Set the tilt about +Y in degrees.
    #[must_use]
    pub const fn with_gamma_offset(mut self, gamma_offset: f64) -> Self {
        self.gamma_offset = gamma_offset;
        self
    }

    /// Analytic solid angle of the configured cap, `2π(1 - cos max_angle)`.
    #[must_use]
    pub fn solid_angle(&self) -> f64 {
        cap_solid_angle(self.max_angle)
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// - [`MeshError::EmptySampling`] if `sampling` is zero
    /// - [`MeshError::NonFiniteAngle`] if any angle is NaN or infinite
    /// - [`MeshError::InvalidMaxAngle`] if `max_angle` is outside `(0, π]`
    pub fn validate(&self) -> MeshResult<()> {
        if self.sampling == 0 {
            return Err(MeshError::EmptySampling);
        }

        for (name, value) in [
            ("max_angle", self.max_angle),
            ("phi_offset", self.phi_offset),
            ("rotation_angle", self.rotation_angle),
            ("gamma_offset", self.gamma_offset),
        ] {
            if !value.is_finite() {
                return Err(MeshError::NonFiniteAngle { name, value });
            }
        }

        if self.max_angle <= 0.0 || self.max_angle > PI {
            return Err(MeshError::InvalidMaxAngle(self.max_angle));
        }

        Ok(())
    }
}
