//! Appendable numeric vector with an always-consistent running average.

use crate::error::{PerfilarError, Result};

/// An ordered, appendable sequence of `f64` values.
///
/// The vector maintains `average` as an invariant: it equals the arithmetic
/// mean of all stored values at every observable point. The average is
/// updated incrementally on [`push`](Vector::push), never recomputed from
/// scratch, so reading it is O(1).
///
/// Elementwise binary operations require equal lengths and fail with
/// [`PerfilarError::LengthMismatch`] otherwise. Multiplying two vectors
/// yields the scalar dot product; multiplying by a scalar scales every
/// element.
///
/// # Examples
///
/// ```
/// use perfilar::primitives::Vector;
///
/// let mut v = Vector::new();
/// v.push(1.0);
/// v.push(2.0);
/// v.push(3.0);
/// assert!((v.mean() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    values: Vec<f64>,
    average: f64,
}

impl Vector {
    /// Creates an empty vector. The average of an empty vector is `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            average: 0.0,
        }
    }

    /// Creates a vector from a slice, computing the initial average.
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Self {
        let average = if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        };
        Self {
            values: values.to_vec(),
            average,
        }
    }

    /// Appends a value, updating the running average incrementally:
    /// `average = (average * old_len + x) / (old_len + 1)`.
    ///
    /// O(1) amortized.
    pub fn push(&mut self, x: f64) {
        let n = self.values.len() as f64;
        self.average = (self.average * n + x) / (n + 1.0);
        self.values.push(x);
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Returns the underlying slice of values in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns an iterator over the stored values.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Returns the sum of all stored values.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Returns the maintained running average. O(1); `0.0` when empty.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.average
    }

    /// Elementwise addition with another vector of equal length.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::LengthMismatch`] if lengths differ.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        let values: Vec<f64> = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Vector::from_slice(&values))
    }

    /// Elementwise subtraction with another vector of equal length.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::LengthMismatch`] if lengths differ.
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        let values: Vec<f64> = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Vector::from_slice(&values))
    }

    /// Adds a scalar to every element (broadcast).
    #[must_use]
    pub fn add_scalar(&self, s: f64) -> Vector {
        let values: Vec<f64> = self.values.iter().map(|x| x + s).collect();
        Vector::from_slice(&values)
    }

    /// Subtracts a scalar from every element (broadcast).
    #[must_use]
    pub fn sub_scalar(&self, s: f64) -> Vector {
        let values: Vec<f64> = self.values.iter().map(|x| x - s).collect();
        Vector::from_slice(&values)
    }

    /// Dot product with another vector of equal length: the scalar
    /// `Σ x_i * y_i`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::LengthMismatch`] if lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_len(other)?;
        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Multiplies every element by a scalar.
    #[must_use]
    pub fn scale(&self, s: f64) -> Vector {
        let values: Vec<f64> = self.values.iter().map(|x| x * s).collect();
        Vector::from_slice(&values)
    }

    /// Raises every element to the power `p`.
    #[must_use]
    pub fn powf(&self, p: f64) -> Vector {
        let values: Vec<f64> = self.values.iter().map(|x| x.powf(p)).collect();
        Vector::from_slice(&values)
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.values.len() != other.values.len() {
            return Err(PerfilarError::LengthMismatch {
                expected: self.values.len(),
                actual: other.values.len(),
            });
        }
        Ok(())
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
