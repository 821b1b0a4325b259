use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{NumericError, Result};
use crate::math::scalar::{self, Scalar};
use crate::math::vector::{write_list, Vector};

/// Rectangular table of numbers stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), cells: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| NumericError::invalid(format!("shape ({}, {}) is too large", rows, cols)))?;
        if cells.len() != expected {
            return Err(NumericError::invalid(format!(
                "shape ({}, {}) needs {} entries, got {}",
                rows,
                cols,
                expected,
                cells.len()
            )));
        }
        Ok(Self { cells, rows, cols })
    }

    /// Builds a matrix from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(NumericError::invalid(format!(
                "row {} has {} entries, expected {}",
                idx,
                row.len(),
                ncols
            )));
        }
        Self::from_shape_vec((nrows, ncols), rows.into_iter().flatten().collect())
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn row_cells(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn row(&self, row: usize) -> Vector<T>
    where
        T: Clone,
    {
        self.row_cells(row).iter().cloned().collect()
    }

    pub fn column(&self, col: usize) -> Vector<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        self.cells.iter().skip(col).step_by(self.cols).cloned().collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|r| self.row_cells(r).to_vec()).collect()
    }
}

impl<T: Scalar> Matrix<T> {
    /// Standard product `self × rhs`.
    ///
    /// Requires `self.ncols() == rhs.nrows()`; the result has shape
    /// `(self.nrows(), rhs.ncols())` with `C[i][j] = Σ_k A[i][k] * B[k][j]`.
    /// Integer overflow is reported as `InvalidArgument`.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(NumericError::invalid(format!(
                "number of columns in A ({}) must equal number of rows in B ({})",
                self.cols, rhs.rows
            )));
        }

        let mut cells = Vec::new();
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc = scalar::mul_add(acc, self[(i, k)], rhs[(k, j)])?;
                }
                cells.push(acc);
            }
        }
        Matrix::from_shape_vec((self.rows, rhs.cols), cells)
    }
}

pub fn matrix_multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    a.matmul(b)
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.row_cells(row)[col]
    }
}

/// Parses rows separated by `;`, entries separated by `,`: `1,2;3,4`.
impl<T> FromStr for Matrix<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Matrix::from_rows(Vec::new());
        }
        let rows = trimmed
            .split(';')
            .map(|row| row.parse::<Vector<T>>().map(Vector::into_vec))
            .collect::<Result<Vec<Vec<T>>>>()?;
        Matrix::from_rows(rows)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, 0..self.rows, |f, r| {
            write_list(f, self.row_cells(r), |f, v| write!(f, "{}", v))
        })
    }
}
