//! Schema-validated records for training and classification.
//!
//! A [`Schema`] declares the ordered set of numeric properties every class
//! tracks; it is fixed when a dataset is constructed. A [`Record`] carries
//! named numeric values, either built positionally against a schema (arity
//! checked at construction) or from free-form name/value pairs (names
//! checked when the record reaches a class profile).

use crate::error::{PerfilarError, Result};

/// Ordered list of unique property names shared by every class in a dataset.
///
/// # Examples
///
/// ```
/// use perfilar::data::Schema;
///
/// let schema = Schema::new(vec![
///     "sepal_length".to_string(),
///     "sepal_width".to_string(),
/// ]).expect("valid schema");
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    properties: Vec<String>,
}

impl Schema {
    /// Creates a schema from ordered property names.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains an empty name, or
    /// contains duplicates.
    pub fn new(properties: Vec<String>) -> Result<Self> {
        if properties.is_empty() {
            return Err("Schema must declare at least one property".into());
        }

        for name in &properties {
            if name.is_empty() {
                return Err("Property names cannot be empty".into());
            }
        }

        let mut names: Vec<&str> = properties.iter().map(String::as_str).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err(format!("Duplicate property name: '{}'", names[i]).into());
            }
        }

        Ok(Self { properties })
    }

    /// Returns the property names in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Returns the number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if no properties are declared (never true for a
    /// constructed schema).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns true if `name` is a declared property.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p == name)
    }
}

/// A named numeric record: one value per property, in order.
///
/// The same type serves training records and classification samples.
///
/// # Examples
///
/// ```
/// use perfilar::data::{Record, Schema};
///
/// let schema = Schema::new(vec!["x".to_string(), "y".to_string()])
///     .expect("valid schema");
/// let record = Record::from_schema(&schema, &[1.0, 2.0])
///     .expect("arity matches");
/// assert_eq!(record.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, f64)>,
}

impl Record {
    /// Builds a record positionally against a schema.
    ///
    /// # Errors
    ///
    /// Returns [`PerfilarError::LengthMismatch`] if the number of values
    /// differs from the number of declared properties.
    pub fn from_schema(schema: &Schema, values: &[f64]) -> Result<Self> {
        if values.len() != schema.len() {
            return Err(PerfilarError::LengthMismatch {
                expected: schema.len(),
                actual: values.len(),
            });
        }

        let fields = schema
            .properties()
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect();
        Ok(Self { fields })
    }

    /// Builds a record from free-form name/value pairs.
    ///
    /// Names are not validated here; a class profile rejects unknown names
    /// with [`PerfilarError::InvalidPropertyName`] when the record is
    /// trained or scored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, f64)>) -> Self {
        Self { fields: pairs }
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(property, value)` fields in order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, f64)> {
        self.fields.iter()
    }
}
