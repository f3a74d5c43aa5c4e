//! Fibonacci sampling of spherical caps for light-scattering detectors.
//!
//! This crate provides:
//! - Golden-angle (Fibonacci) sampling of a spherical cap with equal solid
//!   angle per sample
//! - Rigid rotation of the sampled directions
//! - Per-direction polarization bases (parallel/perpendicular to the
//!   scattering plane) and their projection onto horizontal/vertical lab axes
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Units
//!
//! Cap angles (`max_angle`, `phi_offset`) and every spherical readout are in
//! radians. Rotation angles (`rotation_angle`, `gamma_offset`,
//! [`FibonacciMesh::rotate_around_axis`]) are in degrees.
//!
//! # Example
//!
//! ```
//! use mesh_fibonacci::{FibonacciConfig, FibonacciMesh};
//!
//! // Detector with NA = 0.3, tilted 20° toward +X
//! let config = FibonacciConfig::from_numerical_aperture(2000, 0.3)
//!     .unwrap()
//!     .with_gamma_offset(20.0);
//! let mut mesh = FibonacciMesh::try_new(config).unwrap();
//!
//! assert!(mesh.solid_angle_error() < 1e-9);
//!
//! mesh.compute_vector_field();
//! mesh.compute_projections();
//! assert_eq!(mesh.h_para().len(), mesh.len());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod generate;
mod mesh;
mod polarization;
mod transform;

pub use config::FibonacciConfig;
pub use error::{MeshError, MeshResult};
pub use generate::{cap_solid_angle, golden_angle};
pub use mesh::FibonacciMesh;
pub use polarization::{Projections, VectorField, horizontal_axis, vertical_axis};
pub use transform::polar_axis;

// Re-export the kernels the mesh is built on
pub use scatter_math::{AxisRotation, SphericalCoords};
