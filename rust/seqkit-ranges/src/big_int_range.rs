//! Arbitrary-precision integer ranges.

use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::One;
use seqkit_common::{Error, Result};

use crate::{MaterializedRange, options::RangeOptions};

/// An eagerly materialized `[start, end)` sequence of [`BigInt`] values.
///
/// The bounds themselves are unrestricted, but the difference `end - start`
/// must fit in `usize` and be allocatable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigIntRange {
    start: BigInt,
    end: BigInt,
    values: Vec<BigInt>,
}

impl BigIntRange {
    pub fn new(start: impl Into<BigInt>, end: impl Into<BigInt>) -> Result<Self> {
        Self::with_options(start, end, &RangeOptions::default())
    }

    /// Builds the range honoring `options.max_len`. The narrowing mode has no
    /// effect on arbitrary-precision values.
    pub fn with_options(
        start: impl Into<BigInt>,
        end: impl Into<BigInt>,
        options: &RangeOptions,
    ) -> Result<Self> {
        let start = start.into();
        let end = end.into();
        if end < start {
            debug!("rejected big int range: end {end} is below start {start}");
            return Err(Error::invalid_bound(&start, &end));
        }

        let diff = &end - &start;
        let len = usize::try_from(&diff).map_err(|_| {
            Error::overflow(format!(
                "range length {diff} exceeds the host's addressable size"
            ))
        })?;
        options.check_len(len)?;

        let mut values = Vec::new();
        values.try_reserve_exact(len)?;
        let mut current = start.clone();
        for _ in 0..len {
            let next = &current + BigInt::one();
            values.push(current);
            current = next;
        }

        trace!("materialized big int range [{start}, {end}) with {len} values");
        Ok(BigIntRange { start, end, values })
    }

    #[inline]
    pub fn start(&self) -> &BigInt {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &BigInt {
        &self.end
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
    pub fn values(&self) -> &[BigInt] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigInt> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<BigInt> {
        self.values
    }
}

impl MaterializedRange for BigIntRange {
    type Value = BigInt;

    fn values(&self) -> &[BigInt] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a BigIntRange {
    type Item = &'a BigInt;
    type IntoIter = std::slice::Iter<'a, BigInt>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for BigIntRange {
    type Item = BigInt;
    type IntoIter = std::vec::IntoIter<BigInt>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqkit_common::ErrorKind;

    #[test]
    fn test_small_range() {
        let range = BigIntRange::new(0, 10).unwrap();
        assert_eq!(range.len(), 10);
        let mut looped = Vec::new();
        range.for_each(|v| looped.push(v.clone()));
        itertools::assert_equal(looped, (0..10).map(BigInt::from));
        assert_eq!(range.start(), &BigInt::from(0));
        assert_eq!(range.end(), &BigInt::from(10));
    }

    #[test]
    fn test_bounds_beyond_u64() {
        let start = BigInt::from(u64::MAX) * 1000u32;
        let end = &start + 3;
        let range = BigIntRange::new(start.clone(), end).unwrap();
        assert_eq!(
            range.into_vec(),
            vec![start.clone(), &start + 1, &start + 2]
        );
    }

    #[test]
    fn test_negative_bounds() {
        let range = BigIntRange::new(-2, 1).unwrap();
        itertools::assert_equal(range.iter().cloned(), (-2..1).map(BigInt::from));
    }

    #[test]
    fn test_empty() {
        let range = BigIntRange::new(42, 42).unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn test_end_below_start_is_rejected() {
        let err = BigIntRange::new(5, 3).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidBound { start, end } => {
                assert_eq!(start, "5");
                assert_eq!(end, "3");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_length_beyond_usize_is_overflow() {
        let start = BigInt::from(0);
        let end = BigInt::from(usize::MAX) + 1;
        let err = BigIntRange::new(start, end).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_unallocatable_length_is_overflow() {
        let err = BigIntRange::new(0, BigInt::from(usize::MAX)).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_max_len_option() {
        let options = RangeOptions::default().with_max_len(100);
        assert_eq!(BigIntRange::with_options(0, 100, &options).unwrap().len(), 100);
        let err = BigIntRange::with_options(0, 101, &options).unwrap_err();
        assert!(err.is_overflow());
    }
}
