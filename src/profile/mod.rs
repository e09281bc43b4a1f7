//! Per-property and per-class statistical profiles.
//!
//! A [`PropertyProfile`] accumulates online statistics for one numeric
//! feature; a [`ClassProfile`] groups one profile per declared property and
//! carries the training, correlation, and scoring logic.
//!
//! # Dispersion
//!
//! Dispersion is the biased population variance:
//!
//! ```text
//! D(X) = mean(X²) - mean(X)²
//! ```
//!
//! It is maintained with O(1) running sum and sum-of-squares accumulators
//! instead of rescanning the stored vector on every insertion; the result is
//! numerically equivalent within floating tolerance. Under floating-point
//! cancellation the naive formula can dip slightly below zero; that risk is
//! documented on [`PropertyProfile::dispersion`] and deliberately not
//! corrected.

mod class;

pub use class::{ClassProfile, Redundancy};

use serde::{Deserialize, Serialize};

use crate::primitives::Vector;

/// Online statistics for a single named numeric property.
///
/// Owns every observed value in insertion order (needed for the correlation
/// pass) alongside O(1) accumulators for count, extrema, sum, and
/// sum-of-squares.
///
/// # Examples
///
/// ```
/// use perfilar::profile::PropertyProfile;
///
/// let mut profile = PropertyProfile::new("sepal_length");
/// for x in [1.0, 2.0, 3.0, 4.0] {
///     profile.add(x);
/// }
/// assert!((profile.mean() - 2.5).abs() < 1e-12);
/// assert!((profile.dispersion() - 1.25).abs() < 1e-12);
/// assert!((profile.half_range() - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PropertyProfile {
    name: String,
    values: Vector,
    count: usize,
    min: f64,
    max: f64,
    sum: f64,
    sum_sq: f64,
    half_range: f64,
}

impl PropertyProfile {
    /// Creates an empty profile for the named property.
    ///
    /// `min` starts at the `f64::INFINITY` sentinel (larger than any
    /// legitimate value) and `max` at `f64::NEG_INFINITY`, so the first
    /// observation sets both.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: Vector::new(),
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            sum_sq: 0.0,
            half_range: 0.0,
        }
    }

    /// Records one observation: appends to the vector, updates extrema,
    /// the running accumulators, and the half-range. O(1) amortized.
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.values.push(value);
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self.sum += value;
        self.sum_sq += value * value;
        self.half_range = (self.max - self.min) / 2.0;
    }

    /// The property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of observations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Running minimum; `f64::INFINITY` before the first observation.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Running maximum; `f64::NEG_INFINITY` before the first observation.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Arithmetic mean of all observations; `0.0` before the first.
    ///
    /// Delegates to the vector's running average. A profile resumed from a
    /// snapshot has no raw vector, so it falls back to the restored sum
    /// accumulator; both paths agree within floating tolerance.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.values.len() == self.count {
            self.values.mean()
        } else {
            self.sum / self.count as f64
        }
    }

    /// Population variance `mean(X²) - mean(X)²`; `0.0` before the first
    /// observation.
    ///
    /// Floating-point cancellation can push this slightly below zero for
    /// near-constant data; callers that need a hard lower bound must clamp
    /// it themselves.
    #[must_use]
    pub fn dispersion(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        self.sum_sq / self.count as f64 - mean * mean
    }

    /// Half of the observed range, `(max - min) / 2` — the tolerance band
    /// used for interval scoring. `0.0` before the first observation.
    #[must_use]
    pub fn half_range(&self) -> f64 {
        self.half_range
    }

    /// Every observed value in insertion order.
    ///
    /// Empty for a profile resumed from a snapshot: the raw training
    /// stream is not persisted.
    #[must_use]
    pub fn values(&self) -> &Vector {
        &self.values
    }

    /// Captures the derived statistics for persistence.
    ///
    /// An untrained profile snapshots with zeroed extrema: the infinite
    /// sentinels are not representable in JSON.
    #[must_use]
    pub fn snapshot(&self) -> PropertySnapshot {
        if self.count == 0 {
            return PropertySnapshot {
                count: 0,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                dispersion: 0.0,
                half_range: 0.0,
            };
        }
        PropertySnapshot {
            count: self.count,
            min: self.min,
            max: self.max,
            mean: self.mean(),
            dispersion: self.dispersion(),
            half_range: self.half_range,
        }
    }

    /// Rebuilds a profile from a snapshot.
    ///
    /// The streaming accumulators are reconstructed exactly, so resumed
    /// training continues with correct mean and dispersion. The raw value
    /// vector is not persisted, so a correlation pass needs fresh
    /// observations.
    #[must_use]
    pub fn from_snapshot(name: &str, snapshot: &PropertySnapshot) -> Self {
        if snapshot.count == 0 {
            return Self::new(name);
        }
        let n = snapshot.count as f64;
        Self {
            name: name.to_string(),
            values: Vector::new(),
            count: snapshot.count,
            min: snapshot.min,
            max: snapshot.max,
            sum: snapshot.mean * n,
            sum_sq: (snapshot.dispersion + snapshot.mean * snapshot.mean) * n,
            half_range: snapshot.half_range,
        }
    }
}

/// Persisted statistics of one property: enough to resume classification
/// without the original training stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    /// Number of observations
    pub count: usize,
    /// Running minimum
    pub min: f64,
    /// Running maximum
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance
    pub dispersion: f64,
    /// Half of the observed range
    pub half_range: f64,
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
