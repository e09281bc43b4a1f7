//! Perfilar: per-class statistical profiling and interval classification
//! in pure Rust.
//!
//! Perfilar builds online statistical profiles of numeric features from
//! streamed training records and scores how well an unlabeled sample fits
//! each class. A secondary facility detects pairwise linear correlation
//! between features to flag redundant properties. It is a minimal,
//! hand-rolled statistical classifier, not a machine-learning framework:
//! no gradient training, no probabilistic model fitting.
//!
//! # Quick Start
//!
//! ```
//! use perfilar::prelude::*;
//!
//! let schema = Schema::new(vec!["x".to_string()]).unwrap();
//! let mut dataset = Dataset::new("demo", schema, &["small", "large"]).unwrap();
//!
//! // Stream training records into their classes
//! for x in [1.0, 2.0, 3.0] {
//!     let record = Record::from_pairs(vec![("x".to_string(), x)]);
//!     dataset.train("small", &record).unwrap();
//! }
//! for x in [10.0, 11.0, 12.0] {
//!     let record = Record::from_pairs(vec![("x".to_string(), x)]);
//!     dataset.train("large", &record).unwrap();
//! }
//!
//! // Score an unlabeled sample against every class
//! let sample = Record::from_pairs(vec![("x".to_string(), 2.0)]);
//! let scores = dataset.classify(&sample).unwrap();
//! assert_eq!(scores["small"], 1.0);
//! assert_eq!(scores["large"], 0.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the appendable [`primitives::Vector`] with an
//!   always-consistent running average
//! - [`stats`]: covariance and Pearson correlation
//! - [`profile`]: per-property and per-class online statistics and scoring
//! - [`data`]: schema-validated records
//! - [`dataset`]: per-class routing, classification, snapshots
//!
//! # Scoring model
//!
//! Each trained property keeps a running mean and a half-range tolerance
//! band `(max - min) / 2`. A sample value counts as in-range for a class
//! when it falls strictly inside `mean ± half_range`; a class's score is
//! the fraction of in-range sample values. Scores are in [0, 1] and the
//! full per-class map is returned; callers pick their own decision policy.

pub mod data;
pub mod dataset;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod profile;
pub mod stats;
