use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{NumericError, Result};
use crate::math::scalar::{self, Scalar};

/// Ordered, fixed-length sequence of numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    fn paired<'a>(&'a self, other: &'a Vector<T>, op: &str) -> Result<impl Iterator<Item = (&'a T, &'a T)>> {
        if self.len() != other.len() {
            return Err(NumericError::invalid(format!(
                "{} requires vectors of equal length, got {} and {}",
                op,
                self.len(),
                other.len()
            )));
        }
        Ok(self.data.iter().zip(&other.data))
    }
}

impl<T: Scalar> Vector<T> {
    /// Element-wise sum of two equal-length vectors.
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.paired(other, "Vector addition")?
            .map(|(&a, &b)| scalar::add(a, b))
            .collect::<Result<Vec<T>>>()
            .map(Vector::from_vec)
    }

    /// Sum of pairwise products. The dot product of two empty vectors is zero.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.paired(other, "Dot product")?
            .try_fold(T::zero(), |acc, (&a, &b)| scalar::mul_add(acc, a, b))
    }

    /// True iff the dot product is exactly zero.
    pub fn is_orthogonal(&self, other: &Vector<T>) -> Result<bool> {
        Ok(self.dot(other)?.is_zero())
    }
}

pub fn add_vectors<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    a.add(b)
}

pub fn dot_product<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<T> {
    a.dot(b)
}

pub fn check_orthogonal<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<bool> {
    a.is_orthogonal(b)
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

/// Parses comma-separated numbers such as `1, 2, 3`. Empty input is the
/// empty vector.
impl<T> FromStr for Vector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Vector::from_vec(Vec::new()));
        }
        trimmed
            .split(',')
            .map(str::trim)
            .map(|token| token.parse::<T>().map_err(|e| NumericError::parse(token, e)))
            .collect()
    }
}

/// Writes `[a, b, c]` using each item's own formatter.
pub(crate) fn write_list<I, F>(f: &mut fmt::Formatter<'_>, items: I, mut item: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    f.write_str("[")?;
    for (idx, value) in items.into_iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        item(f, value)?;
    }
    f.write_str("]")
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.data, |f, v| write!(f, "{}", v))
    }
}
