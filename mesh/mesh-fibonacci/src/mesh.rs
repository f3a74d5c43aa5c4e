//! The Fibonacci mesh: sample directions, solid angles and derived data.

// Sample counts stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use nalgebra::Vector3;
use scatter_math::SphericalCoords;
use tracing::{debug, warn};

use crate::config::FibonacciConfig;
use crate::error::MeshResult;
use crate::generate::fibonacci_cap;
use crate::polarization::{Projections, VectorField};

/// A quasi-uniform set of observation directions over a spherical cap.
///
/// Index `i` refers to the same sample in every per-point array: the
/// coordinates, the spherical readouts, `d_omega`, the polarization basis and
/// its projections.
///
/// Coordinates are the source of truth. Spherical coordinates are recomputed
/// from them on every read. The polarization basis and projections are
/// stored by [`compute_vector_field`](Self::compute_vector_field) and
/// [`compute_projections`](Self::compute_projections) and dropped whenever
/// the coordinates change, so a stale basis is never observable.
///
/// # Example
///
/// ```
/// use mesh_fibonacci::{FibonacciConfig, FibonacciMesh};
///
/// let mut mesh = FibonacciMesh::new(FibonacciConfig::hemisphere(100));
/// assert_eq!(mesh.len(), 100);
/// assert!((mesh.omega() - 2.0 * std::f64::consts::PI).abs() < 1e-9);
///
/// mesh.rotate_around_axis(30.0);
/// let projections = mesh.compute_projections();
/// assert_eq!(projections.h_para().len(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciMesh {
    pub(crate) config: FibonacciConfig,
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
    pub(crate) z: Vec<f64>,
    d_omega: Vec<f64>,
    omega: f64,
    pub(crate) vector_field: Option<VectorField>,
    pub(crate) projections: Option<Projections>,
}

impl FibonacciMesh {
    /// Generate a mesh without checking the configuration.
    ///
    /// The cap is sampled around +Z, spun by `rotation_angle` about +Z and
    /// then tilted by `gamma_offset` about +Y. A zero `sampling` gives an
    /// empty mesh; other invalid parameters give meaningless coordinates.
    /// Use [`try_new`](Self::try_new) to reject them instead.
    #[must_use]
    pub fn new(config: FibonacciConfig) -> Self {
        let points = fibonacci_cap(config.sampling, config.max_angle, config.phi_offset);

        let cap = config.solid_angle();
        let weight = if config.sampling == 0 {
            0.0
        } else {
            cap / config.sampling as f64
        };
        let d_omega = vec![weight; config.sampling];
        let omega: f64 = d_omega.iter().sum();

        let mut mesh = Self {
            config,
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            z: points.iter().map(|p| p.z).collect(),
            d_omega,
            omega,
            vector_field: None,
            projections: None,
        };
        mesh.apply_initial_orientation();

        debug!(
            sampling = config.sampling,
            max_angle = config.max_angle,
            omega = mesh.omega,
            "Generated Fibonacci mesh"
        );

        mesh
    }

    /// Validate the configuration, then generate the mesh.
    ///
    /// # Errors
    ///
    /// Returns the error from [`FibonacciConfig::validate`].
    pub fn try_new(config: FibonacciConfig) -> MeshResult<Self> {
        if let Err(err) = config.validate() {
            warn!(%err, "Rejected Fibonacci mesh configuration");
            return Err(err);
        }
        Ok(Self::new(config))
    }

    /// The configuration the mesh was generated from.
    #[must_use]
    pub const fn config(&self) -> &FibonacciConfig {
        &self.config
    }

    /// Number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the mesh has no sample points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// X coordinates.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y coordinates.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Z coordinates.
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Replace the X coordinates.
    ///
    /// Points are not renormalized onto the unit sphere. The length must
    /// match [`len`](Self::len). Clears the polarization basis.
    pub fn set_x(&mut self, x: Vec<f64>) {
        debug_assert_eq!(x.len(), self.len());
        self.x = x;
        self.invalidate();
    }

    /// Replace the Y coordinates. See [`set_x`](Self::set_x).
    pub fn set_y(&mut self, y: Vec<f64>) {
        debug_assert_eq!(y.len(), self.len());
        self.y = y;
        self.invalidate();
    }

    /// Replace the Z coordinates. See [`set_x`](Self::set_x).
    pub fn set_z(&mut self, z: Vec<f64>) {
        debug_assert_eq!(z.len(), self.len());
        self.z = z;
        self.invalidate();
    }

    /// Cartesian position of sample `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn point(&self, i: usize) -> Vector3<f64> {
        Vector3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Cartesian positions of all samples, in index order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Vector3<f64>> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| Vector3::new(x, y, z))
    }

    /// Spherical coordinates of all samples, computed from the current coordinates.
    #[must_use]
    pub fn spherical(&self) -> Vec<SphericalCoords> {
        self.points().map(SphericalCoords::from_cartesian).collect()
    }

    /// Distance of each sample from the origin.
    #[must_use]
    pub fn r(&self) -> Vec<f64> {
        self.points().map(|p| p.norm()).collect()
    }

    /// Azimuth of each sample in radians, `(-π, π]`.
    #[must_use]
    pub fn phi(&self) -> Vec<f64> {
        self.points()
            .map(|p| SphericalCoords::from_cartesian(p).phi)
            .collect()
    }

    /// Polar angle of each sample from +Z in radians, `[0, π]`.
    #[must_use]
    pub fn theta(&self) -> Vec<f64> {
        self.points()
            .map(|p| SphericalCoords::from_cartesian(p).theta)
            .collect()
    }

    /// Solid angle represented by each sample, in steradians.
    #[must_use]
    pub fn d_omega(&self) -> &[f64] {
        &self.d_omega
    }

    /// Total solid angle covered by the mesh, `Σ d_omega`.
    #[must_use]
    pub const fn omega(&self) -> f64 {
        self.omega
    }

    /// Relative difference between [`omega`](Self::omega) and the analytic
    /// solid angle of the configured cap.
    #[must_use]
    pub fn solid_angle_error(&self) -> f64 {
        let analytic = self.config.solid_angle();
        if analytic < f64::EPSILON {
            return self.omega.abs();
        }
        ((self.omega - analytic) / analytic).abs()
    }

    /// Drop everything derived from the coordinates.
    pub(crate) fn invalidate(&mut self) {
        self.vector_field = None;
        self.projections = None;
    }
}

impl std::fmt::Display for FibonacciMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FibonacciMesh: {} points, max angle {:.4} rad, Ω = {:.4} sr",
            self.len(),
            self.config.max_angle,
            self.omega
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn hemisphere_solid_angle() {
        let mesh = FibonacciMesh::new(FibonacciConfig::hemisphere(10_000));
        assert_eq!(mesh.len(), 10_000);
        assert_eq!(mesh.d_omega().len(), 10_000);
        assert_relative_eq!(mesh.omega(), 2.0 * PI, max_relative = 0.01);
        assert!(mesh.solid_angle_error() < 1e-9);
    }

    #[test]
    fn solid_angle_closes_for_every_size() {
        for sampling in [100, 1000, 10_000] {
            let mesh = FibonacciMesh::new(FibonacciConfig::hemisphere(sampling));
            let total: f64 = mesh.d_omega().iter().sum();
            assert_relative_eq!(total, mesh.omega());
            assert!(mesh.solid_angle_error() < 1e-9);
        }
    }

    #[test]
    fn uniform_weights() {
        let mesh = FibonacciMesh::new(FibonacciConfig::new(64, 0.4, 0.0, 0.0, 0.0));
        let expected = mesh.config().solid_angle() / 64.0;
        for w in mesh.d_omega() {
            assert_relative_eq!(*w, expected);
        }
    }

    #[test]
    fn radii_are_unit_after_generation() {
        let mesh = FibonacciMesh::new(FibonacciConfig::new(300, 1.2, 0.3, 25.0, 40.0));
        for r in mesh.r() {
            assert_relative_eq!(r, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn spherical_ranges() {
        let mesh = FibonacciMesh::new(FibonacciConfig::full_sphere(500));
        for s in mesh.spherical() {
            assert!((0.0..=PI).contains(&s.theta));
            assert!(s.phi >= -PI && s.phi <= PI);
        }
        assert!(mesh.theta().iter().all(|t| *t <= PI));
    }

    #[test]
    fn untilted_cap_stays_within_max_angle() {
        let mesh = FibonacciMesh::new(FibonacciConfig::new(400, 0.5, 0.0, 70.0, 0.0));
        for t in mesh.theta() {
            assert!(t <= 0.5 + 1e-12);
        }
    }

    #[test]
    fn gamma_tilts_toward_x() {
        let config = FibonacciConfig::new(2000, 0.2, 0.0, 0.0, 90.0);
        let mesh = FibonacciMesh::new(config);
        let centroid: Vector3<f64> = mesh.points().sum::<Vector3<f64>>() / mesh.len() as f64;
        let direction = centroid.normalize();
        assert_relative_eq!(direction.x, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn set_coordinates_without_renormalizing() {
        let mut mesh = FibonacciMesh::new(FibonacciConfig::hemisphere(3));
        mesh.set_x(vec![2.0, 0.0, 0.0]);
        mesh.set_y(vec![0.0, 3.0, 0.0]);
        mesh.set_z(vec![0.0, 0.0, 4.0]);

        assert_eq!(mesh.r(), vec![2.0, 3.0, 4.0]);
        assert_relative_eq!(mesh.phi()[1], FRAC_PI_2);
        assert_relative_eq!(mesh.theta()[0], FRAC_PI_2);
        assert_relative_eq!(mesh.theta()[2], 0.0);
    }

    #[test]
    fn setting_coordinates_clears_basis() {
        let mut mesh = FibonacciMesh::new(FibonacciConfig::hemisphere(8));
        mesh.compute_projections();
        assert!(mesh.vector_field().is_some());
        assert!(mesh.projections().is_some());

        let z = mesh.z().to_vec();
        mesh.set_z(z);
        assert!(mesh.vector_field().is_none());
        assert!(mesh.projections().is_none());
        assert!(mesh.parallel_vector().is_empty());
    }

    #[test]
    fn azimuth_on_negative_x_is_pi() {
        let mut mesh = FibonacciMesh::new(FibonacciConfig::hemisphere(1));
        mesh.set_x(vec![-1.0]);
        mesh.set_y(vec![-0.0]);
        mesh.set_z(vec![0.0]);

        assert_relative_eq!(mesh.phi()[0], PI);
        assert_relative_eq!(mesh.spherical()[0].phi, PI);
    }

    #[test]
    fn point_accessors_agree() {
        let mesh = FibonacciMesh::new(FibonacciConfig::hemisphere(5));
        for (i, p) in mesh.points().enumerate() {
            assert_eq!(p, mesh.point(i));
            assert_eq!(p.x, mesh.x()[i]);
        }
    }

    #[test]
    fn try_new_validates() {
        assert!(FibonacciMesh::try_new(FibonacciConfig::hemisphere(0)).is_err());
        assert!(FibonacciMesh::try_new(FibonacciConfig::default().with_max_angle(-1.0)).is_err());
        assert!(FibonacciMesh::try_new(FibonacciConfig::hemisphere(10)).is_ok());
    }

    #[test]
    fn empty_mesh() {
        let mesh = FibonacciMesh::new(FibonacciConfig::hemisphere(0));
        assert!(mesh.is_empty());
        assert_relative_eq!(mesh.omega(), 0.0);
    }

    #[test]
    fn display() {
        let mesh = FibonacciMesh::new(FibonacciConfig::hemisphere(10));
        let text = mesh.to_string();
        assert!(text.contains("10 points"));
        assert!(text.contains("6.2832"));
    }
}
