//! Fixed-width integer ranges.

use log::{debug, trace};
use seqkit_common::{Error, Result};

use crate::{
    MaterializedRange,
    options::{Narrowing, RangeOptions},
    value::RangeValue,
};

/// An eagerly materialized `[start, end)` sequence of fixed-width integers.
///
/// The bounds are kept exactly as given (widened to `i128`), so
/// `len() == end() - start()` holds even when the values were produced with
/// [`Narrowing::Wrapping`] and no longer lie between the bounds. For the same
/// reason [`start`](IntRange::start) and [`end`](IntRange::end) return `i128`,
/// not `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntRange<T> {
    start: i128,
    end: i128,
    values: Vec<T>,
}

pub type Int8Range = IntRange<i8>;
pub type Int16Range = IntRange<i16>;
pub type Int32Range = IntRange<i32>;
pub type Int64Range = IntRange<i64>;
pub type IsizeRange = IntRange<isize>;
pub type Uint8Range = IntRange<u8>;
pub type Uint16Range = IntRange<u16>;
pub type Uint32Range = IntRange<u32>;
pub type Uint64Range = IntRange<u64>;
pub type UsizeRange = IntRange<usize>;

impl<T: RangeValue> IntRange<T> {
    /// Builds the range `start..end` in the native width `T`.
    ///
    /// Fails with `InvalidBound` if `end < start`, and with `Overflow` if the
    /// length cannot be allocated.
    pub fn new(start: T, end: T) -> Result<Self> {
        Self::materialize(start.as_i128(), end.as_i128(), &RangeOptions::default())
    }

    /// Builds the range from host-side bounds, converting every counter value
    /// into `T` with the given `narrowing` mode.
    pub fn from_host(start: i64, end: i64, narrowing: Narrowing) -> Result<Self> {
        Self::with_options(
            start,
            end,
            &RangeOptions::default().with_narrowing(narrowing),
        )
    }

    /// Builds the range from host-side bounds using explicit `options`.
    pub fn with_options(start: i64, end: i64, options: &RangeOptions) -> Result<Self> {
        Self::materialize(start.into(), end.into(), options)
    }

    fn materialize(start: i128, end: i128, options: &RangeOptions) -> Result<Self> {
        if end < start {
            debug!("rejected {} range: end {end} is below start {start}", T::WIDTH);
            return Err(Error::invalid_bound(start, end));
        }
        if options.narrowing == Narrowing::Checked && start < end {
            Self::check_width(start, end)?;
        }
        let len = usize::try_from(end - start)?;
        options.check_len(len)?;

        let mut values = Vec::new();
        values.try_reserve_exact(len)?;
        for value in start..end {
            values.push(options.narrowing.narrow(value)?);
        }

        trace!(
            "materialized {} range [{start}, {end}) with {len} values",
            T::WIDTH
        );
        Ok(IntRange { start, end, values })
    }

    /// Verifies up front that every value of the non-empty `[start, end)` fits
    /// `T`, reporting the first one that does not.
    fn check_width(start: i128, end: i128) -> Result<()> {
        if T::checked_from_i128(start).is_none() {
            return Err(Error::value_out_of_range(start, T::WIDTH));
        }
        if T::checked_from_i128(end - 1).is_none() {
            let first_outside = T::max_value().as_i128() + 1;
            debug!("rejected {} range: {first_outside} does not fit", T::WIDTH);
            return Err(Error::value_out_of_range(first_outside, T::WIDTH));
        }
        Ok(())
    }

    /// Inclusive lower bound.
    #[inline]
    pub fn start(&self) -> i128 {
        self.start
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn end(&self) -> i128 {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.values.iter().copied()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: RangeValue> MaterializedRange for IntRange<T> {
    type Value = T;

    fn values(&self) -> &[T] {
        &self.values
    }
}

impl<'a, T> IntoIterator for &'a IntRange<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> IntoIterator for IntRange<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
