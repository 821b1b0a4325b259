//! Vector and matrix demos.
use std::io::Write;
use std::str::FromStr;

use anyhow::{Context, Result};
use numeric_utils::math::{Matrix, Scalar, Vector};
use numeric_utils::NumericError;

pub const DEFAULT_VECTOR_A: &str = "1,2,3";
pub const DEFAULT_VECTOR_B: &str = "4,5,6";
pub const DEFAULT_MATRIX_A: &str = "1,2;3,4";
pub const DEFAULT_MATRIX_B: &str = "5,6;7,8";

fn parse_pair<T>(a: &str, b: &str) -> std::result::Result<(T, T), NumericError>
where
    T: FromStr<Err = NumericError>,
{
    Ok((a.parse()?, b.parse()?))
}

/// Print the sum, dot product and orthogonality of two vectors.
///
/// Integer arithmetic is used when every entry is an integer, otherwise
/// both vectors are read as reals.
pub fn run_vectors<W: Write>(a: &str, b: &str, out: &mut W) -> Result<()> {
    if let Ok((a, b)) = parse_pair::<Vector<i64>>(a, b) {
        return report_vectors(&a, &b, out);
    }
    let (a, b) = parse_pair::<Vector<f64>>(a, b).context("Failed to parse vectors")?;
    report_vectors(&a, &b, out)
}

fn report_vectors<T, W>(a: &Vector<T>, b: &Vector<T>, out: &mut W) -> Result<()>
where
    T: Scalar,
    W: Write,
{
    let sum = a.add(b)?;
    let dot = a.dot(b)?;
    let orthogonal = a.is_orthogonal(b)?;

    writeln!(out, "Sum: {}", sum)?;
    writeln!(out, "Dot Product: {}", dot)?;
    writeln!(out, "Orthogonal: {}", orthogonal)?;
    Ok(())
}

/// Print the product of two matrices.
pub fn run_matrices<W: Write>(a: &str, b: &str, out: &mut W) -> Result<()> {
    if let Ok((a, b)) = parse_pair::<Matrix<i64>>(a, b) {
        return report_product(&a, &b, out);
    }
    let (a, b) = parse_pair::<Matrix<f64>>(a, b).context("Failed to parse matrices")?;
    report_product(&a, &b, out)
}

fn report_product<T, W>(a: &Matrix<T>, b: &Matrix<T>, out: &mut W) -> Result<()>
where
    T: Scalar,
    W: Write,
{
    let product = a.matmul(b)?;
    log::debug!("{:?} x {:?} -> {:?}", a.shape(), b.shape(), product.shape());
    writeln!(out, "Multiplication result: {}", product)?;
    Ok(())
}
