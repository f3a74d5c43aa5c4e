//! Elementwise and reduction kernels over numeric sequences.
//!
//! Every kernel is generic over [`ComplexField`], so the same code serves
//! real intensities (`f64`) and complex field amplitudes (`Complex<f64>`).
//!
//! Matching lengths are a caller precondition. They are checked with
//! `debug_assert!` only; release builds never validate them.

use nalgebra::{ComplexField, DMatrix, one, zero};

/// Sum of all elements.
#[must_use]
pub fn sum<T: ComplexField>(v: &[T]) -> T {
    v.iter().fold(zero(), |acc, x| acc + x.clone())
}

/// Inner product `Σ v0[i] * v1[i]`.
///
/// No conjugation is applied to complex inputs.
#[must_use]
pub fn dot<T: ComplexField>(v0: &[T], v1: &[T]) -> T {
    debug_assert_eq!(v0.len(), v1.len());
    v0.iter()
        .zip(v1)
        .fold(zero(), |acc, (a, b)| acc + a.clone() * b.clone())
}

/// Replace each element with its squared modulus, `|v[i]|²`.
///
/// Turns complex field amplitudes into intensities in place.
pub fn squared_inplace<T: ComplexField>(v: &mut [T]) {
    for x in v.iter_mut() {
        *x = T::from_real(x.clone().modulus_squared());
    }
}

/// Elementwise sum of two sequences.
#[must_use]
pub fn add<T: ComplexField>(v0: &[T], v1: &[T]) -> Vec<T> {
    debug_assert_eq!(v0.len(), v1.len());
    v0.iter()
        .zip(v1)
        .map(|(a, b)| a.clone() + b.clone())
        .collect()
}

/// `v0` followed by `v1`.
#[must_use]
pub fn concatenate<T: Clone>(v0: &[T], v1: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(v0.len() + v1.len());
    out.extend_from_slice(v0);
    out.extend_from_slice(v1);
    out
}

/// `v0` followed by `v1` followed by `v2`.
#[must_use]
pub fn concatenate3<T: Clone>(v0: &[T], v1: &[T], v2: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(v0.len() + v1.len() + v2.len());
    out.extend_from_slice(v0);
    out.extend_from_slice(v1);
    out.extend_from_slice(v2);
    out
}

/// Product of all elements. The empty product is one.
///
/// Used for normalization factors such as a grid's volume element.
#[must_use]
pub fn product_of_elements<T: ComplexField>(v: &[T]) -> T {
    v.iter().fold(one(), |acc, x| acc * x.clone())
}

/// Dense matrix product `A * B` (`n×m` times `m×p` gives `n×p`).
#[must_use]
pub fn matrix_multiply<T: ComplexField>(a: &DMatrix<T>, b: &DMatrix<T>) -> DMatrix<T> {
    debug_assert_eq!(a.ncols(), b.nrows());
    a * b
}

/// Row-wise inner products of `a` with `v`; the result has `a.nrows()` entries.
#[must_use]
pub fn matrix_vector_product<T: ComplexField>(a: &DMatrix<T>, v: &[T]) -> Vec<T> {
    debug_assert_eq!(a.ncols(), v.len());
    a.row_iter()
        .map(|row| {
            row.iter()
                .zip(v)
                .fold(zero(), |acc, (m, x)| acc + m.clone() * x.clone())
        })
        .collect()
}

/// Paired coupling `out[i] = scalar * a[i] * b[i]`.
#[must_use]
pub fn unstructured_coupling<T: ComplexField>(a: &[T], b: &[T], scalar: T) -> Vec<T> {
    let mut out = vec![zero(); b.len()];
    unstructured_coupling_into(a, b, scalar, &mut out);
    out
}

/// [`unstructured_coupling`] writing into a caller-provided buffer of `b.len()` values.
pub fn unstructured_coupling_into<T: ComplexField>(a: &[T], b: &[T], scalar: T, out: &mut [T]) {
    debug_assert!(a.len() >= b.len());
    debug_assert_eq!(out.len(), b.len());
    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = scalar.clone() * x.clone() * y.clone();
    }
}

/// Outer-product coupling over a phi axis and a theta axis.
///
/// The result is flattened phi-major: the value for `(p, t)` lives at
/// `p * theta.len() + t` and equals `scalar * phi[p] * theta[t]`.
///
/// # Example
///
/// ```
/// use scatter_math::structured_coupling;
///
/// let out = structured_coupling(&[1.0, 2.0], &[3.0, 4.0], 1.0);
/// assert_eq!(out, vec![3.0, 4.0, 6.0, 8.0]);
/// ```
#[must_use]
pub fn structured_coupling<T: ComplexField>(phi: &[T], theta: &[T], scalar: T) -> Vec<T> {
    let mut out = vec![zero(); phi.len() * theta.len()];
    structured_coupling_into(phi, theta, scalar, &mut out);
    out
}

/// [`structured_coupling`] writing into a caller-provided buffer of
/// `phi.len() * theta.len()` values.
pub fn structured_coupling_into<T: ComplexField>(
    phi: &[T],
    theta: &[T],
    scalar: T,
    out: &mut [T],
) {
    debug_assert_eq!(out.len(), phi.len() * theta.len());
    let cols = theta.len();
    if cols == 0 {
        return;
    }
    for (row, p) in out.chunks_exact_mut(cols).zip(phi) {
        let scaled = scalar.clone() * p.clone();
        for (o, t) in row.iter_mut().zip(theta) {
            *o = scaled.clone() * t.clone();
        }
    }
}
