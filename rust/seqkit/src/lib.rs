//! # seqkit
//!
//! Small, eager sequence utilities.
//!
//! * [`ranges`] - materialized `[start, end)` integer ranges in every fixed width,
//!   plus an arbitrary-precision variant
//! * [`stream`] - a persistent, chainable wrapper over an ordered sequence
//! * [`common`] - the error type shared by both
//!
//! The two components are independent; this crate only gathers them behind a
//! single dependency.

pub use seqkit_common as common;
pub use seqkit_ranges as ranges;
pub use seqkit_stream as stream;

pub use seqkit_common::{Error, ErrorKind, Result};
pub use seqkit_stream::Stream;
