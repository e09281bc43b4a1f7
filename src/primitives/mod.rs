//! Core numeric primitives.
//!
//! [`Vector`] is the foundation every profile is built on: an appendable
//! sequence of `f64` values that keeps its arithmetic mean consistent at
//! every observable point.

mod vector;

pub use vector::Vector;
