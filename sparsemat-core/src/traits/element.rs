//! Matrix element type constraints
//!
//! Elements are fixed-width signed integers. Arithmetic goes through the
//! checked operations below so that overflow surfaces as an error instead of
//! wrapping. Sums of products are accumulated in `i128` and narrowed once,
//! so only a final value that does not fit the element type is an overflow.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// All element types must be:
/// - Copy: values are passed around by value
/// - Eq: zero detection is exact
/// - FromStr: entries are parsed from text
/// - Display: entries are written back to text
pub trait MatrixElement: Copy + Eq + Debug + Display + FromStr + Sized {
    /// The additive identity; never stored in a sparse matrix
    const ZERO: Self;

    /// Short type name, used in diagnostics
    const NAME: &'static str;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Addition returning `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction returning `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Multiplication returning `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Lossless conversion to the accumulator type
    fn widen(self) -> i128;

    /// Conversion back from the accumulator, `None` if out of range
    fn narrow(wide: i128) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;
                const NAME: &'static str = stringify!($ty);

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                #[inline]
                fn widen(self) -> i128 {
                    i128::from(self)
                }

                #[inline]
                fn narrow(wide: i128) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_matrix_element!(i8, i16, i32, i64, i128);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<T: MatrixElement>(a: T, b: T) -> Option<T> {
        MatrixElement::checked_add(a, b)
    }

    #[test]
    fn test_zero() {
        assert!(0i32.is_zero());
        assert!(!(-1i64).is_zero());
        assert_eq!(<i16 as MatrixElement>::ZERO, 0);
        assert_eq!(<i128 as MatrixElement>::NAME, "i128");
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(sum(100i8, 27), Some(127));
        assert_eq!(sum(100i8, 28), None);
        assert_eq!(MatrixElement::checked_sub(i32::MIN, 1), None);
        assert_eq!(MatrixElement::checked_mul(-4i64, 5), Some(-20));
        assert_eq!(MatrixElement::checked_mul(i16::MAX, 2), None);
    }

    #[test]
    fn test_widen_and_narrow() {
        assert_eq!((-100i8).widen(), -100);
        assert_eq!(<i8 as MatrixElement>::narrow(127), Some(127));
        assert_eq!(<i8 as MatrixElement>::narrow(128), None);
        assert_eq!(<i64 as MatrixElement>::narrow(i128::from(i64::MIN) - 1), None);
        assert_eq!(<i128 as MatrixElement>::narrow(i128::MAX), Some(i128::MAX));
    }
}
