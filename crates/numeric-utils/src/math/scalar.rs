use std::fmt::Display;
use std::ops::Mul;

use num_traits::{CheckedAdd, CheckedMul, Zero};

use crate::error::{NumericError, Result};

/// Element type of `Vector` and `Matrix`.
///
/// Integer sums and products are checked and report overflow as
/// `InvalidArgument`; floating-point arithmetic follows IEEE 754 and never
/// fails.
pub trait Scalar: Copy + Zero + Mul<Output = Self> + PartialEq + Display {
    fn try_add(self, rhs: Self) -> Option<Self>;
    fn try_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> Option<Self> {
                CheckedMul::checked_mul(&self, &rhs)
            }
        }
    )*};
}

macro_rules! float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

checked_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_scalar!(f32, f64);

/// `acc + a * b`, failing on integer overflow.
pub(crate) fn mul_add<T: Scalar>(acc: T, a: T, b: T) -> Result<T> {
    a.try_mul(b)
        .and_then(|p| acc.try_add(p))
        .ok_or_else(|| overflow(a, b))
}

pub(crate) fn add<T: Scalar>(a: T, b: T) -> Result<T> {
    a.try_add(b).ok_or_else(|| overflow(a, b))
}

fn overflow<T: Scalar>(a: T, b: T) -> NumericError {
    NumericError::invalid(format!("integer overflow combining {} and {}", a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_overflow_is_reported() {
        assert!(matches!(add(i64::MAX, 1), Err(NumericError::InvalidArgument(_))));
        assert!(mul_add(0i32, i32::MAX, 2).is_err());
        assert_eq!(mul_add(1u8, 3, 4).unwrap(), 13);
    }

    #[test]
    fn floats_saturate_to_infinity() {
        assert_eq!(add(f64::MAX, f64::MAX).unwrap(), f64::INFINITY);
    }
}
