use num_traits::PrimInt;
use std::fmt::{Debug, Display};

/// Fixed-width integer type that an [`IntRange`](crate::IntRange) can be
/// materialized into.
///
/// Implemented for the 8/16/32/64-bit signed and unsigned integers as well as
/// `isize` and `usize`. Every implementor converts losslessly to `i128`, which is
/// what range bounds are computed in.
pub trait RangeValue: PrimInt + Debug + Display + Default + Send + Sync + 'static {
    /// Name of the type, used in error messages.
    const WIDTH: &'static str;

    /// Exact widening conversion.
    fn as_i128(self) -> i128;

    /// Two's-complement truncation of `value` to this width.
    fn wrapping_from_i128(value: i128) -> Self;

    /// Exact conversion of `value`, or `None` if it does not fit this width.
    fn checked_from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_range_value {
    ($($T:ty),+ $(,)?) => {
        $(
            impl RangeValue for $T {
                const WIDTH: &'static str = stringify!($T);

                #[inline]
                fn as_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn wrapping_from_i128(value: i128) -> $T {
                    value as $T
                }

                #[inline]
                fn checked_from_i128(value: i128) -> Option<$T> {
                    <$T>::try_from(value).ok()
                }
            }
        )+
    };
}

impl_range_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::RangeValue;

    #[test]
    fn test_wrapping_truncates() {
        assert_eq!(u8::wrapping_from_i128(256), 0);
        assert_eq!(u8::wrapping_from_i128(-1), 255);
        assert_eq!(i8::wrapping_from_i128(128), -128);
        assert_eq!(u16::wrapping_from_i128(65_537), 1);
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert_eq!(u8::checked_from_i128(255), Some(255));
        assert_eq!(u8::checked_from_i128(256), None);
        assert_eq!(u32::checked_from_i128(-1), None);
        assert_eq!(i64::checked_from_i128(i64::MIN as i128), Some(i64::MIN));
        assert_eq!(i64::checked_from_i128(i64::MAX as i128 + 1), None);
    }

    #[test]
    fn test_widths() {
        assert_eq!(i16::WIDTH, "i16");
        assert_eq!(usize::WIDTH, "usize");
        assert_eq!(u64::MAX.as_i128(), 18_446_744_073_709_551_615);
    }
}
