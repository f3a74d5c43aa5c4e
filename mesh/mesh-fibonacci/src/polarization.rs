//! Local polarization bases and their projection onto lab axes.
//!
//! At each observation direction the field splits into a component parallel
//! to the scattering plane (along `e_theta`) and one perpendicular to it
//! (along `e_phi`). A detector reads the field along fixed horizontal and
//! vertical lab axes; the four projections per sample map one basis onto
//! the other.

use nalgebra::Vector3;
use scatter_math::SphericalCoords;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::mesh::FibonacciMesh;

/// The horizontal lab axis, +X.
#[must_use]
pub fn horizontal_axis() -> Vector3<f64> {
    Vector3::x()
}

/// The vertical lab axis, +Y.
#[must_use]
pub fn vertical_axis() -> Vector3<f64> {
    Vector3::y()
}

/// Per-sample tangent basis.
///
/// `parallel[i]` is `e_theta` and `perpendicular[i]` is `e_phi` at sample
/// `i`. Both are unit length, orthogonal to each other and to the sample's
/// radial direction.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    parallel: Vec<Vector3<f64>>,
    perpendicular: Vec<Vector3<f64>>,
}

impl VectorField {
    /// Build the basis at each of `points`, in order.
    ///
    /// Points need not be unit length; only their direction matters.
    #[must_use]
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector3<f64>>,
    {
        let (parallel, perpendicular) = points
            .into_iter()
            .map(|p| {
                let s = SphericalCoords::from_cartesian(p);
                (s.e_theta(), s.e_phi())
            })
            .unzip();

        Self {
            parallel,
            perpendicular,
        }
    }

    /// Unit vectors along increasing `theta`.
    #[must_use]
    pub fn parallel(&self) -> &[Vector3<f64>] {
        &self.parallel
    }

    /// Unit vectors along increasing `phi`.
    #[must_use]
    pub fn perpendicular(&self) -> &[Vector3<f64>] {
        &self.perpendicular
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parallel.len()
    }

    /// Whether the field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parallel.is_empty()
    }

    /// Largest deviation from an orthonormal tangent frame over all samples.
    ///
    /// Checks unit length of both vectors, their mutual orthogonality and
    /// their orthogonality to the radial direction of the matching point.
    /// Points at the origin contribute only the first two checks.
    #[must_use]
    pub fn max_orthogonality_error<I>(&self, points: I) -> f64
    where
        I: IntoIterator<Item = Vector3<f64>>,
    {
        self.parallel
            .iter()
            .zip(&self.perpendicular)
            .zip(points)
            .map(|((par, perp), p)| {
                let mut worst = (par.norm() - 1.0)
                    .abs()
                    .max((perp.norm() - 1.0).abs())
                    .max(par.dot(perp).abs());
                if let Some(radial) = p.try_normalize(f64::EPSILON) {
                    worst = worst
                        .max(par.dot(&radial).abs())
                        .max(perp.dot(&radial).abs());
                }
                worst
            })
            .fold(0.0, f64::max)
    }

    /// Check that every sample's basis is orthonormal within `tolerance`.
    #[must_use]
    pub fn is_orthonormal<I>(&self, points: I, tolerance: f64) -> bool
    where
        I: IntoIterator<Item = Vector3<f64>>,
    {
        self.max_orthogonality_error(points) < tolerance
    }
}

/// Couplings of the polarization basis onto the horizontal and vertical axes.
///
/// `h_para[i] = parallel[i] · H`, `h_perp[i] = perpendicular[i] · H`, and the
/// same for `V`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Projections {
    h_para: Vec<f64>,
    h_perp: Vec<f64>,
    v_para: Vec<f64>,
    v_perp: Vec<f64>,
}

impl Projections {
    /// Project onto the default lab axes, H = +X and V = +Y.
    #[must_use]
    pub fn from_field(field: &VectorField) -> Self {
        Self::onto(field, horizontal_axis(), vertical_axis())
    }

    /// Project onto custom horizontal and vertical axes.
    #[must_use]
    pub fn onto(field: &VectorField, horizontal: Vector3<f64>, vertical: Vector3<f64>) -> Self {
        let n = field.len();
        let mut out = Self {
            h_para: Vec::with_capacity(n),
            h_perp: Vec::with_capacity(n),
            v_para: Vec::with_capacity(n),
            v_perp: Vec::with_capacity(n),
        };

        for (par, perp) in field.parallel.iter().zip(&field.perpendicular) {
            out.h_para.push(par.dot(&horizontal));
            out.h_perp.push(perp.dot(&horizontal));
            out.v_para.push(par.dot(&vertical));
            out.v_perp.push(perp.dot(&vertical));
        }

        out
    }

    /// Parallel vector projected on the horizontal axis.
    #[must_use]
    pub fn h_para(&self) -> &[f64] {
        &self.h_para
    }

    /// Perpendicular vector projected on the horizontal axis.
    #[must_use]
    pub fn h_perp(&self) -> &[f64] {
        &self.h_perp
    }

    /// Parallel vector projected on the vertical axis.
    #[must_use]
    pub fn v_para(&self) -> &[f64] {
        &self.v_para
    }

    /// Perpendicular vector projected on the vertical axis.
    #[must_use]
    pub fn v_perp(&self) -> &[f64] {
        &self.v_perp
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.h_para.len()
    }

    /// Whether there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.h_para.is_empty()
    }
}

impl FibonacciMesh {
    /// Compute the polarization basis from the current coordinates.
    ///
    /// Always rebuilds from scratch. Any stored projections are dropped.
    pub fn compute_vector_field(&mut self) -> &VectorField {
        let field = VectorField::from_points(self.points());
        debug!(samples = field.len(), "Computed polarization vector field");
        self.projections = None;
        self.vector_field.insert(field)
    }

    /// Compute the H/V projections of the polarization basis.
    ///
    /// Uses the stored basis, computing it first if the coordinates changed
    /// since the last [`compute_vector_field`](Self::compute_vector_field).
    pub fn compute_projections(&mut self) -> &Projections {
        let field = match self.vector_field.take() {
            Some(field) => field,
            None => VectorField::from_points(self.points()),
        };
        let projections = Projections::from_field(&field);
        debug!(samples = projections.len(), "Computed H/V projections");

        self.vector_field = Some(field);
        self.projections.insert(projections)
    }

    /// The stored polarization basis, if computed for the current coordinates.
    #[must_use]
    pub fn vector_field(&self) -> Option<&VectorField> {
        self.vector_field.as_ref()
    }

    /// The stored projections, if computed for the current coordinates.
    #[must_use]
    pub fn projections(&self) -> Option<&Projections> {
        self.projections.as_ref()
    }

    /// Parallel basis vectors; empty until computed.
    #[must_use]
    pub fn parallel_vector(&self) -> &[Vector3<f64>] {
        self.vector_field
            .as_ref()
            .map(VectorField::parallel)
            .unwrap_or_default()
    }

    /// Perpendicular basis vectors; empty until computed.
    #[must_use]
    pub fn perpendicular_vector(&self) -> &[Vector3<f64>] {
        self.vector_field
            .as_ref()
            .map(VectorField::perpendicular)
            .unwrap_or_default()
    }

    /// Horizontal projection of the parallel vectors; empty until computed.
    #[must_use]
    pub fn h_para(&self) -> &[f64] {
        self.projections
            .as_ref()
            .map(Projections::h_para)
            .unwrap_or_default()
    }

    /// Horizontal projection of the perpendicular vectors; empty until computed.
    #[must_use]
    pub fn h_perp(&self) -> &[f64] {
        self.projections
            .as_ref()
            .map(Projections::h_perp)
            .unwrap_or_default()
    }

    /// Vertical projection of the parallel vectors; empty until computed.
    #[must_use]
    pub fn v_para(&self) -> &[f64] {
        self.projections
            .as_ref()
            .map(Projections::v_para)
            .unwrap_or_default()
    }

    /// Vertical projection of the perpendicular vectors; empty until computed.
    #[must_use]
    pub fn v_perp(&self) -> &[f64] {
        self.projections
            .as_ref()
            .map(Projections::v_perp)
            .unwrap_or_default()
    }
}
