//! Golden-angle sampling of a spherical cap.

// Sample indices stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use std::f64::consts::{PI, TAU};

use nalgebra::Vector3;

/// The golden angle, `2π(1 - 1/φ) = π(3 - √5)` radians (about 137.5°).
#[must_use]
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5.0_f64.sqrt())
}

/// Solid angle of a spherical cap with half-angle `max_angle`, in steradians.
///
/// Equal to `2π(1 - cos max_angle)`, evaluated as `4π sin²(max_angle / 2)`
/// to keep precision for narrow caps.
///
/// # Example
///
/// ```
/// use mesh_fibonacci::cap_solid_angle;
///
/// let hemisphere = cap_solid_angle(std::f64::consts::FRAC_PI_2);
/// assert!((hemisphere - 2.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[must_use]
pub fn cap_solid_angle(max_angle: f64) -> f64 {
    let half = (max_angle / 2.0).sin();
    4.0 * PI * half * half
}

/// Generate `sampling` unit vectors covering the cap of half-angle
/// `max_angle` around +Z.
///
/// Point `i` sits at the center of the `i`-th of `sampling` equal-area
/// bands: `1 - cos θ_i = (1 - cos max_angle) · (i + ½) / sampling`. Its
/// azimuth advances by the golden angle, `φ_i = (i · golden + phi_offset) mod 2π`.
/// Polar angle grows monotonically with `i`.
pub(crate) fn fibonacci_cap(sampling: usize, max_angle: f64, phi_offset: f64) -> Vec<Vector3<f64>> {
    let golden = golden_angle();
    // 1 - cos(max_angle), written to stay accurate for small caps
    let height = 2.0 * (max_angle / 2.0).sin().powi(2);
    let n = sampling as f64;

    (0..sampling)
        .map(|i| {
            let i = i as f64;
            let one_minus_cos = height * (i + 0.5) / n;
            let cos_t = 1.0 - one_minus_cos;
            let sin_t = (one_minus_cos * (2.0 - one_minus_cos)).max(0.0).sqrt();
            let phi = i.mul_add(golden, phi_offset).rem_euclid(TAU);
            let (sin_p, cos_p) = phi.sin_cos();
            Vector3::new(sin_t * cos_p, sin_t * sin_p, cos_t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn golden_angle_value() {
        let phi = f64::midpoint(1.0, 5.0_f64.sqrt());
        assert_relative_eq!(golden_angle(), TAU * (1.0 - 1.0 / phi), epsilon = 1e-12);
        assert_relative_eq!(golden_angle().to_degrees(), 137.507_764, epsilon = 1e-5);
    }

    #[test]
    fn cap_solid_angles() {
        assert_relative_eq!(cap_solid_angle(FRAC_PI_2), TAU, epsilon = 1e-12);
        assert_relative_eq!(cap_solid_angle(PI), 4.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(cap_solid_angle(0.0), 0.0);

        let a = 0.3_f64;
        assert_relative_eq!(cap_solid_angle(a), TAU * (1.0 - a.cos()), epsilon = 1e-12);
    }

    #[test]
    fn points_are_unit_and_inside_cap() {
        let max_angle = 0.7;
        let points = fibonacci_cap(500, max_angle, 0.0);
        assert_eq!(points.len(), 500);
        for p in &points {
            assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-12);
            assert!(p.z.acos() <= max_angle + 1e-12);
        }
    }

    #[test]
    fn polar_angle_is_monotonic() {
        let points = fibonacci_cap(200, FRAC_PI_2, 0.0);
        for pair in points.windows(2) {
            assert!(pair[1].z < pair[0].z);
        }
    }

    #[test]
    fn azimuth_follows_golden_angle() {
        let offset = 0.25;
        let points = fibonacci_cap(10, PI, offset);
        for (i, p) in points.iter().enumerate() {
            let expected = (i as f64).mul_add(golden_angle(), offset).rem_euclid(TAU);
            let actual = p.y.atan2(p.x).rem_euclid(TAU);
            assert_relative_eq!(actual, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn equal_area_bands() {
        // cos θ > 0.5 encloses half of the hemisphere's solid angle
        let points = fibonacci_cap(1000, FRAC_PI_2, 0.0);
        let above = points.iter().filter(|p| p.z > 0.5).count();
        assert_eq!(above, 500);
    }

    #[test]
    fn full_sphere_is_balanced() {
        let points = fibonacci_cap(2000, PI, 0.0);
        let centroid: Vector3<f64> = points.iter().sum::<Vector3<f64>>() / 2000.0;
        assert!(centroid.norm() < 1e-2);
    }

    #[test]
    fn empty_sampling() {
        assert!(fibonacci_cap(0, FRAC_PI_2, 0.0).is_empty());
    }
}
