//! Small vector and matrix types used throughout the crate.
//!
//! `Vector` (1D) and `Matrix` (2D, row-major) are generic over a
//! [`Scalar`] element so integer inputs keep exact, overflow-checked
//! integer arithmetic and real inputs keep floating-point arithmetic.
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use matrix::{matrix_multiply, Matrix};
pub use scalar::Scalar;
pub use vector::{add_vectors, check_orthogonal, dot_product, Vector};
