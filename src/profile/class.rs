//! Per-class profile: training, correlation analysis, and sample scoring.

use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;

use crate::data::{Record, Schema};
use crate::error::{PerfilarError, Result};
use crate::profile::PropertyProfile;
use crate::stats;

/// A pair of properties whose linear correlation magnitude met the
/// acceptance threshold, suggesting one is derivable from the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Redundancy {
    /// First property of the pair (schema order)
    pub first: String,
    /// Second property of the pair (schema order)
    pub second: String,
    /// Signed Pearson correlation coefficient
    pub r: f64,
}

/// The set of property profiles characterizing one class's training
/// distribution.
///
/// The schema is fixed for the profile's lifetime; training only ever
/// appends observations. Mutation goes through `&mut self`, so the
/// compiler enforces the one-writer-per-class discipline; the profile is
/// plain data (`Send + Sync`), and read-only scoring across classes needs
/// no coordination.
#[derive(Debug, Clone)]
pub struct ClassProfile {
    name: String,
    schema: Vec<String>,
    properties: HashMap<String, PropertyProfile>,
    inclusive_bounds: bool,
}

impl ClassProfile {
    /// Creates an empty profile for `name` with one property profile per
    /// schema entry.
    #[must_use]
    pub fn new(name: &str, schema: &Schema) -> Self {
        let properties = schema
            .properties()
            .iter()
            .map(|p| (p.clone(), PropertyProfile::new(p)))
            .collect();
        Self {
            name: name.to_string(),
            schema: schema.properties().to_vec(),
            properties,
            inclusive_bounds: false,
        }
    }

    /// The class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared property names in schema order.
    #[must_use]
    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    /// Returns the profile for a declared property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyProfile> {
        self.properties.get(name)
    }

    pub(crate) fn set_inclusive_bounds(&mut self, inclusive: bool) {
        self.inclusive_bounds = inclusive;
    }

    pub(crate) fn insert_property(&mut self, profile: PropertyProfile) {
        self.properties.insert(profile.name().to_string(), profile);
    }

    /// Feeds one training record into the per-property profiles.
    ///
    /// Entries are applied in record order. There is no atomicity across
    /// entries: if an unknown property name is hit mid-record, the updates
    /// already applied in this call remain applied. That partial-application
    /// behavior is deliberate policy, not rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::InvalidPropertyName`] for a property not in
    /// the schema.
    pub fn train(&mut self, record: &Record) -> Result<()> {
        for (name, value) in record.iter() {
            let profile = self.properties.get_mut(name).ok_or_else(|| {
                PerfilarError::InvalidPropertyName { name: name.clone() }
            })?;
            profile.add(*value);
        }
        Ok(())
    }

    /// Scores how well a sample fits this class.
    ///
    /// Each sample entry is tested for strict interval membership
    /// `mean - half_range < value < mean + half_range`; a value exactly at
    /// either boundary does NOT count as in-range (unless inclusive bounds
    /// were configured on the dataset). The score is the fraction of
    /// in-range entries, in [0, 1]. Never mutates the profile.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::DivisionByZero`] for an empty sample and
    /// [`PerfilarError::InvalidPropertyName`] for a property not in the
    /// schema.
    pub fn score(&self, sample: &Record) -> Result<f64> {
        if sample.is_empty() {
            return Err(PerfilarError::division_by_zero("score of an empty sample"));
        }

        let mut in_range = 0_usize;
        for (name, value) in sample.iter() {
            let profile = self.properties.get(name).ok_or_else(|| {
                PerfilarError::InvalidPropertyName { name: name.clone() }
            })?;
            if self.in_range(profile, *value) {
                in_range += 1;
            }
        }

        Ok(in_range as f64 / sample.len() as f64)
    }

    fn in_range(&self, profile: &PropertyProfile, value: f64) -> bool {
        let lo = profile.mean() - profile.half_range();
        let hi = profile.mean() + profile.half_range();
        if self.inclusive_bounds {
            lo <= value && value <= hi
        } else {
            lo < value && value < hi
        }
    }

    /// Finds property pairs whose Pearson correlation magnitude is at
    /// least `threshold`.
    ///
    /// Every unordered pair of distinct declared properties is correlated
    /// over the full accumulated vectors, recomputed on each call rather
    /// than cached. The pairs are independent read-only work, so they are
    /// evaluated in parallel.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::DivisionByZero`] if any property has zero
    /// variance (or no observations, as after a snapshot resume).
    pub fn find_redundancies(&self, threshold: f64) -> Result<Vec<Redundancy>> {
        let mut pairs = Vec::new();
        for i in 0..self.schema.len() {
            for j in (i + 1)..self.schema.len() {
                pairs.push((self.schema[i].as_str(), self.schema[j].as_str()));
            }
        }

        let correlations: Vec<(&str, &str, f64)> = pairs
            .par_iter()
            .map(|&(a, b)| {
                let x = self.properties[a].values();
                let y = self.properties[b].values();
                stats::corr(x, y).map(|r| (a, b, r))
            })
            .collect::<Result<_>>()?;

        Ok(correlations
            .into_iter()
            .filter(|&(_, _, r)| r.abs() >= threshold)
            .map(|(a, b, r)| Redundancy {
                first: a.to_string(),
                second: b.to_string(),
                r,
            })
            .collect())
    }
}

impl fmt::Display for ClassProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class '{}'", self.name)?;
        for name in &self.schema {
            let p = &self.properties[name];
            writeln!(
                f,
                "  {}: count={} mean={} dispersion={} half_range={} min={} max={}",
                name,
                p.count(),
                p.mean(),
                p.dispersion(),
                p.half_range(),
                p.min(),
                p.max()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "class_tests.rs"]
mod tests;
