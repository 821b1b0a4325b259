//! Runners behind the `numutil` binary.
//!
//! Each runner parses its inputs, calls into `numeric_utils` and writes
//! human-readable lines to the supplied writer so the output can be
//! captured in tests.
pub mod linalg;
pub mod probability;
pub mod util;
