//! numeric-utils: introductory linear algebra and probability helpers.
//!
//! The crate provides small generic `Vector` and `Matrix` containers with
//! addition, dot product, orthogonality and multiplication, a Monte-Carlo
//! estimator for two-dice sums, Bayes' rule for keyword spam filtering and
//! a conditional probability helper.
//!
//! Every routine returns a value or a typed [`error::NumericError`]; none of
//! them print. Formatting lives in the `numutil` command-line runner.
pub mod config;
pub mod error;
pub mod math;
pub mod probability;
pub mod stats;

pub use error::{NumericError, Result};
