//! A persistent, chainable wrapper over an ordered sequence of elements.
//!
//! [`Stream<T>`] offers eager query and transform operations (`filter`, `take`,
//! `drop_while`, `find`, `map`, ...). Every transform returns a new stream and
//! leaves the receiver untouched, so calls chain naturally:
//!
//! ```
//! use seqkit_stream::stream;
//!
//! let evens = stream![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
//!     .filter(|x| x % 2 == 0)
//!     .take(3);
//! assert_eq!(evens.values(), &[2, 4, 6]);
//! ```
//!
//! Streams share their storage: cloning, and operations that only narrow the
//! visible window (`take`, `drop`, `take_last`, `drop_last`, and the `*_while`
//! variants), do not copy any elements.
//!
//! Transforms that change the element type live outside the stream, see [`map`].

pub mod stream;
pub mod util;


pub use stream::{Stream, StreamIntoIter};

/// Creates a [`Stream`] from a list of elements, like `vec!`.
///
/// ```
/// use seqkit_stream::{Stream, stream};
///
/// let s = stream![1, 3, 5];
/// assert_eq!(s.len(), 3);
///
/// let empty: Stream<i32> = stream![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! stream {
    () => {
        $crate::Stream::empty()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Stream::from_vec(vec![$($elem),+])
    };
}

/// Applies `transform` to every element of `values`, producing a sequence of a
/// possibly different element type.
pub fn map<T, O, F>(values: &[T], transform: F) -> Vec<O>
where
    F: FnMut(&T) -> O,
{
    values.iter().map(transform).collect()
}
