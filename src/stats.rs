//! Covariance and Pearson correlation for profile vectors.
//!
//! # Mathematical Background
//!
//! ## Covariance
//!
//! Covariance measures how two variables change together:
//!
//! ```text
//! Cov(X, Y) = (1/n) Σ (x_i - x̄)(y_i - ȳ)
//! ```
//!
//! ## Pearson Correlation
//!
//! Pearson correlation normalizes to [-1, 1]:
//!
//! ```text
//! r(X, Y) = Σ (x_i - x̄)(y_i - ȳ) / sqrt(Σ (x_i - x̄)² · Σ (y_i - ȳ)²)
//! ```
//!
//! A zero-variance variable makes the denominator vanish; that case is
//! reported as an explicit [`PerfilarError::DivisionByZero`] rather than an
//! undefined float.
//!
//! # Examples
//!
//! ```
//! use perfilar::stats::corr;
//! use perfilar::primitives::Vector;
//!
//! let x = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
//! let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]); // y = 2x + 1
//!
//! let r = corr(&x, &y).expect("both variables have variance");
//! assert!((r - 1.0).abs() < 1e-9);
//! ```

use crate::error::{PerfilarError, Result};
use crate::primitives::Vector;

/// Computes the population covariance between two vectors.
///
/// # Errors
///
/// Returns [`PerfilarError::LengthMismatch`] if the vectors differ in
/// length, and [`PerfilarError::DivisionByZero`] if they are empty.
pub fn cov(x: &Vector, y: &Vector) -> Result<f64> {
    let n = x.len();

    if n != y.len() {
        return Err(PerfilarError::LengthMismatch {
            expected: n,
            actual: y.len(),
        });
    }

    if n == 0 {
        return Err(PerfilarError::division_by_zero(
            "covariance of empty vectors",
        ));
    }

    let x_mean = x.mean();
    let y_mean = y.mean();

    let cov_sum: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
        .sum();

    Ok(cov_sum / n as f64)
}

/// Computes the Pearson correlation coefficient between two vectors.
///
/// The result is in [-1, 1]; its sign carries the direction of the linear
/// relationship.
///
/// # Errors
///
/// Returns [`PerfilarError::LengthMismatch`] if the vectors differ in
/// length, and [`PerfilarError::DivisionByZero`] if either vector is empty
/// or has zero variance.
pub fn corr(x: &Vector, y: &Vector) -> Result<f64> {
    let n = x.len();

    if n != y.len() {
        return Err(PerfilarError::LengthMismatch {
            expected: n,
            actual: y.len(),
        });
    }

    if n == 0 {
        return Err(PerfilarError::division_by_zero(
            "correlation of empty vectors",
        ));
    }

    let x_mean = x.mean();
    let y_mean = y.mean();

    let mut cov_sum = 0.0;
    let mut x_sq_sum = 0.0;
    let mut y_sq_sum = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        cov_sum += dx * dy;
        x_sq_sum += dx * dx;
        y_sq_sum += dy * dy;
    }

    let denom = (x_sq_sum * y_sq_sum).sqrt();
    if denom == 0.0 {
        return Err(PerfilarError::division_by_zero(
            "correlation of a zero-variance property",
        ));
    }

    Ok(cov_sum / denom)
}
