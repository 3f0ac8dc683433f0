//! Eagerly materialized integer ranges.
//!
//! A range is built once from a `[start, end)` bound pair and holds every value of
//! that interval in ascending order. Two kinds are provided:
//!
//! - [`IntRange<T>`] for the fixed-width primitive integers (see [`RangeValue`]),
//!   with per-width aliases such as [`Int8Range`] or [`Uint64Range`].
//! - [`BigIntRange`] for arbitrary-precision bounds, backed by [`num_bigint::BigInt`].
//!
//! Both implement [`MaterializedRange`], so generic code can query the length and
//! visit the values without caring about the width.
//!
//! Construction never panics on bad input: `end < start`, values that do not fit
//! the requested width, and lengths that cannot be allocated are all reported as
//! [`seqkit_common::Error`].

pub mod big_int_range;
pub mod int_range;
pub mod options;
pub mod value;

pub use big_int_range::BigIntRange;
pub use int_range::{
    Int8Range, Int16Range, Int32Range, Int64Range, IntRange, IsizeRange, Uint8Range, Uint16Range,
    Uint32Range, Uint64Range, UsizeRange,
};
pub use options::{Narrowing, RangeOptions};
pub use value::RangeValue;

/// Common read access to a materialized range.
pub trait MaterializedRange {
    type Value;

    /// The generated values, in ascending order.
    fn values(&self) -> &[Self::Value];

    /// Number of generated values, equal to `end - start`.
    fn len(&self) -> usize {
        self.values().len()
    }

    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Invokes `visitor` once per value, in ascending order.
    fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Value),
    {
        self.values().iter().for_each(visitor)
    }
}
