//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use perfilar::prelude::*;
//! ```

pub use crate::data::{Record, Schema};
pub use crate::dataset::{Dataset, DatasetSnapshot, DEFAULT_REDUNDANCY_THRESHOLD};
pub use crate::error::{PerfilarError, Result};
pub use crate::primitives::Vector;
pub use crate::profile::{ClassProfile, PropertyProfile, Redundancy};
pub use crate::stats::{corr, cov};
