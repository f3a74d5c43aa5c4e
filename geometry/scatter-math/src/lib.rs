//! Numeric kernels for light-scattering geometry.
//!
//! This crate provides the small building blocks that observation meshes and
//! polarization bases are assembled from:
//!
//! - [`vector`] kernels: sums, inner products, intensities, couplings
//! - [`na_to_angle`]: numerical aperture to acceptance half-angle
//! - [`rotation_matrix`] / [`AxisRotation`]: quaternion-built rotations
//! - [`SphericalCoords`]: cartesian/spherical conversion and local unit vectors
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Units
//!
//! Half-angles and spherical coordinates are in **radians**. Rotation angles
//! passed to [`rotation_matrix`] and [`AxisRotation::new`] are in **degrees**.
//!
//! # Example
//!
//! ```
//! use scatter_math::{AxisRotation, SphericalCoords, na_to_angle};
//! use nalgebra::Vector3;
//!
//! let half_angle = na_to_angle(0.2).unwrap();
//! let edge = SphericalCoords::new(1.0, 0.0, half_angle).to_cartesian();
//!
//! let spun = AxisRotation::new(Vector3::z(), 180.0).apply(edge);
//! assert!((spun.x + edge.x).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod aperture;
mod error;
mod rotation;
mod spherical;
pub mod vector;

pub use aperture::na_to_angle;
pub use error::{ScatterError, ScatterResult};
pub use rotation::{AxisRotation, rotation_matrix};
pub use spherical::SphericalCoords;
pub use vector::{
    add, concatenate, concatenate3, dot, matrix_multiply, matrix_vector_product,
    product_of_elements, squared_inplace, structured_coupling, structured_coupling_into, sum,
    unstructured_coupling, unstructured_coupling_into,
};
