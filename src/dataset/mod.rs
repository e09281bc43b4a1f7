//! Dataset: one class profile per declared class, sharing one schema.
//!
//! The dataset routes training records to the named class and aggregates
//! classification across every class. Class set and schema are fixed at
//! construction; training only ever appends observations.
//!
//! Classification returns the full class→score map rather than a single
//! winner; callers apply their own decision policy (argmax, threshold).
//!
//! # Concurrency
//!
//! Training takes `&mut self`, so the compiler enforces an exclusive
//! writer. Class profiles are fully partitioned, so callers that split the
//! dataset into per-class writers need no further coordination, and
//! read-only classification may run concurrently once training is done.
//! Training a class while concurrently scoring against it is unsafe
//! without external synchronization: profile mutation is not atomic with
//! respect to reads of mean/half-range/dispersion.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::{Record, Schema};
use crate::error::{PerfilarError, Result};
use crate::profile::{ClassProfile, PropertyProfile, PropertySnapshot, Redundancy};

/// Default acceptance threshold for redundancy detection.
pub const DEFAULT_REDUNDANCY_THRESHOLD: f64 = 0.7;

/// A named collection of class profiles over one shared schema.
///
/// # Examples
///
/// ```
/// use perfilar::data::{Record, Schema};
/// use perfilar::dataset::Dataset;
///
/// let schema = Schema::new(vec!["x".to_string()]).expect("valid schema");
/// let mut dataset = Dataset::new("demo", schema, &["A", "B"])
///     .expect("valid classes");
///
/// for x in [1.0, 2.0, 3.0] {
///     let record = Record::from_pairs(vec![("x".to_string(), x)]);
///     dataset.train("A", &record).expect("declared class");
/// }
/// for x in [10.0, 11.0, 12.0] {
///     let record = Record::from_pairs(vec![("x".to_string(), x)]);
///     dataset.train("B", &record).expect("declared class");
/// }
///
/// let sample = Record::from_pairs(vec![("x".to_string(), 2.0)]);
/// let scores = dataset.classify(&sample).expect("valid sample");
/// assert_eq!(scores["A"], 1.0);
/// assert_eq!(scores["B"], 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    schema: Schema,
    class_order: Vec<String>,
    classes: HashMap<String, ClassProfile>,
}

impl Dataset {
    /// Creates a dataset with one empty profile per declared class.
    ///
    /// # Errors
    ///
    /// Returns an error if no classes are declared or a class name is
    /// duplicated or empty.
    pub fn new(name: &str, schema: Schema, class_names: &[&str]) -> Result<Self> {
        if class_names.is_empty() {
            return Err("Dataset must declare at least one class".into());
        }

        let mut class_order = Vec::with_capacity(class_names.len());
        let mut classes = HashMap::with_capacity(class_names.len());
        for &class_name in class_names {
            if class_name.is_empty() {
                return Err("Class names cannot be empty".into());
            }
            if classes
                .insert(
                    class_name.to_string(),
                    ClassProfile::new(class_name, &schema),
                )
                .is_some()
            {
                return Err(format!("Duplicate class name: '{class_name}'").into());
            }
            class_order.push(class_name.to_string());
        }

        Ok(Self {
            name: name.to_string(),
            schema,
            class_order,
            classes,
        })
    }

    /// Switches interval scoring to inclusive bounds
    /// (`mean - half_range <= value <= mean + half_range`).
    ///
    /// The default is the strict-exclusive test, where a value exactly at
    /// either boundary is not in range.
    #[must_use]
    pub fn with_inclusive_bounds(mut self, inclusive: bool) -> Self {
        for class in self.classes.values_mut() {
            class.set_inclusive_bounds(inclusive);
        }
        self
    }

    /// The dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared property schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Declared class names in declaration order.
    #[must_use]
    pub fn class_names(&self) -> &[String] {
        &self.class_order
    }

    /// Returns the profile for a declared class.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&ClassProfile> {
        self.classes.get(name)
    }

    /// Feeds one training record into the named class.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::InvalidClassName`] for an undeclared class
    /// and propagates [`PerfilarError::InvalidPropertyName`] from the class
    /// profile (with that class's partial-application policy).
    pub fn train(&mut self, class_name: &str, record: &Record) -> Result<()> {
        let class = self.classes.get_mut(class_name).ok_or_else(|| {
            PerfilarError::InvalidClassName {
                name: class_name.to_string(),
            }
        })?;
        class.train(record)
    }

    /// Scores the sample against every class and returns the full
    /// class→score map, each score in [0, 1]. Never mutates any profile.
    ///
    /// # Errors
    ///
    /// Propagates [`PerfilarError::InvalidPropertyName`] and
    /// [`PerfilarError::DivisionByZero`] (empty sample) from scoring.
    pub fn classify(&self, sample: &Record) -> Result<BTreeMap<String, f64>> {
        let mut scores = BTreeMap::new();
        for name in &self.class_order {
            let score = self.classes[name].score(sample)?;
            scores.insert(name.clone(), score);
        }
        Ok(scores)
    }

    /// Finds redundant property pairs within the named class.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::InvalidClassName`] for an undeclared class
    /// and propagates correlation errors.
    pub fn find_redundancies(
        &self,
        class_name: &str,
        threshold: f64,
    ) -> Result<Vec<Redundancy>> {
        let class = self.classes.get(class_name).ok_or_else(|| {
            PerfilarError::InvalidClassName {
                name: class_name.to_string(),
            }
        })?;
        class.find_redundancies(threshold)
    }

    /// Captures every class's derived statistics for persistence.
    #[must_use]
    pub fn snapshot(&self) -> DatasetSnapshot {
        let classes = self
            .class_order
            .iter()
            .map(|name| {
                let class = &self.classes[name];
                let properties = class
                    .schema()
                    .iter()
                    .map(|p| {
                        let profile = class.property(p).expect("schema property exists");
                        (p.clone(), profile.snapshot())
                    })
                    .collect();
                (name.clone(), ClassSnapshot { properties })
            })
            .collect();

        DatasetSnapshot {
            name: self.name.clone(),
            schema: self.schema.properties().to_vec(),
            classes,
        }
    }

    /// Rebuilds a dataset from a snapshot.
    ///
    /// The rebuilt dataset classifies exactly as the snapshotted one and
    /// continues training with exact mean and dispersion; the raw value
    /// vectors are not persisted, so a correlation pass needs fresh
    /// observations first.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot's schema is invalid or a class's
    /// property set disagrees with it.
    pub fn from_snapshot(snapshot: &DatasetSnapshot) -> Result<Self> {
        let schema = Schema::new(snapshot.schema.clone())?;
        let class_names: Vec<&str> = snapshot.classes.keys().map(String::as_str).collect();
        let mut dataset = Dataset::new(&snapshot.name, schema, &class_names)?;

        for (class_name, class_snapshot) in &snapshot.classes {
            for (property, property_snapshot) in &class_snapshot.properties {
                if !dataset.schema.contains(property) {
                    return Err(PerfilarError::InvalidPropertyName {
                        name: property.clone(),
                    });
                }
                let profile = PropertyProfile::from_snapshot(property, property_snapshot);
                dataset
                    .classes
                    .get_mut(class_name)
                    .expect("class inserted above")
                    .insert_property(profile);
            }
        }

        Ok(dataset)
    }

    /// Serializes the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PerfilarError::Serialization(e.to_string()))
    }

    /// Rebuilds a dataset from snapshot JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::Serialization`] on malformed JSON and
    /// propagates snapshot validation errors.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: DatasetSnapshot = serde_json::from_str(json)
            .map_err(|e| PerfilarError::Serialization(e.to_string()))?;
        Self::from_snapshot(&snapshot)
    }
}

/// Diagnostic dump of all per-class, per-property statistics.
///
/// Rendered in declaration order, so repeated dumps without intervening
/// training are byte-identical. For logging and inspection, not a stable
/// machine-readable contract.
impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dataset '{}'", self.name)?;
        for name in &self.class_order {
            write!(f, "{}", self.classes[name])?;
        }
        Ok(())
    }
}

/// Persisted statistics of one class: one snapshot per property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSnapshot {
    /// Property name → persisted statistics
    pub properties: BTreeMap<String, PropertySnapshot>,
}

/// Persisted form of a whole dataset: enough to resume classification
/// without the original training stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    /// Dataset name
    pub name: String,
    /// Property schema in declaration order
    pub schema: Vec<String>,
    /// Class name → persisted class statistics
    pub classes: BTreeMap<String, ClassSnapshot>,
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
