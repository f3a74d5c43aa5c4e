//! Numerical aperture to half-angle conversion.

use std::f64::consts::FRAC_PI_2;

use crate::error::{ScatterError, ScatterResult};

/// Convert a numerical aperture to the half-angle of its acceptance cone.
///
/// For `na <= 1` this is `asin(na)`. Apertures above one extend the cone
/// past the equator: `asin(na - 1) + π/2`, so `na = 2` covers the full
/// sphere. Both branches meet at `na = 1` with a value of `π/2`.
///
/// # Errors
///
/// Returns [`ScatterError::InvalidNumericalAperture`] if `na` is negative,
/// NaN, or above 2 (where the upper branch has no real arcsine).
///
/// # Example
///
/// ```
/// use scatter_math::na_to_angle;
///
/// let angle = na_to_angle(0.5).unwrap();
/// assert!((angle - 0.5_f64.asin()).abs() < 1e-12);
/// ```
pub fn na_to_angle(na: f64) -> ScatterResult<f64> {
    if !(0.0..=2.0).contains(&na) {
        return Err(ScatterError::InvalidNumericalAperture(na));
    }

    if na <= 1.0 {
        Ok(na.asin())
    } else {
        Ok((na - 1.0).asin() + FRAC_PI_2)
    }
}
