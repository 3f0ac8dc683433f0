//! Construction options for materialized ranges.

use seqkit_common::{Error, Result};

use crate::value::RangeValue;

/// How a host-side counter value is converted into the range's value width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Narrowing {
    /// A value outside the target width fails construction.
    #[default]
    Checked,
    /// Values outside the target width are truncated (two's complement), so a
    /// `u8` range over `250..260` yields `250..=255` followed by `0..=3`.
    Wrapping,
}

impl Narrowing {
    /// Converts `value` into `T` according to this mode.
    #[inline]
    pub fn narrow<T: RangeValue>(self, value: i128) -> Result<T> {
        match self {
            Narrowing::Checked => T::checked_from_i128(value)
                .ok_or_else(|| Error::value_out_of_range(value, T::WIDTH)),
            Narrowing::Wrapping => Ok(T::wrapping_from_i128(value)),
        }
    }
}

/// Options for range construction.
#[derive(Debug, Clone, Default)]
pub struct RangeOptions {
    /// Conversion mode for values that may not fit the target width.
    /// Ignored by [`BigIntRange`](crate::BigIntRange).
    pub narrowing: Narrowing,
    /// Upper limit on the number of materialized values. `None` means the
    /// only limit is what the host can allocate.
    pub max_len: Option<usize>,
}

impl RangeOptions {
    pub fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Verifies that a range of `len` values is permitted by `max_len`.
    pub(crate) fn check_len(&self, len: usize) -> Result<()> {
        match self.max_len {
            Some(max_len) if len > max_len => Err(Error::overflow(format!(
                "range length {len} exceeds the configured maximum of {max_len}"
            ))),
            _ => Ok(()),
        }
    }
}
