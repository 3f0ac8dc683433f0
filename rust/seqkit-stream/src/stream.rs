//! The [`Stream`] type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use log::debug;
use seqkit_common::{Error, Result};

use crate::util::coerce_at_most;

/// An immutable, cheaply cloneable sequence of elements with chainable
/// query and transform operations.
///
/// Internally a window (`offset`, `len`) into shared `Arc<[T]>` storage.
/// Operations take `&self` and return a new stream; a handle never observes
/// operations applied through another handle.
pub struct Stream<T> {
    storage: Arc<[T]>,
    offset: usize,
    len: usize,
}

impl<T> Stream<T> {
    /// Creates a stream holding `elements` in their original order.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Stream::from_vec(elements.into_iter().collect())
    }

    pub fn from_vec(vec: Vec<T>) -> Self {
        let len = vec.len();
        Stream {
            storage: Arc::from(vec),
            offset: 0,
            len,
        }
    }

    pub fn empty() -> Self {
        Stream::from_vec(Vec::new())
    }

    /// A new stream sharing this stream's storage, restricted to the
    /// `start..end` positions of the current window.
    fn window(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len);
        Stream {
            storage: self.storage.clone(),
            offset: self.offset + start,
            len: end - start,
        }
    }

    /// The current elements.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.storage[self.offset..self.offset + self.len]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn not_empty(&self) -> bool {
        self.len > 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values().iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().to_vec()
    }

    /// Removes the element at `index`, shifting the following elements left.
    ///
    /// Fails with `IndexOutOfRange` if `index >= len()`.
    pub fn remove_index(&self, index: usize) -> Result<Self>
    where
        T: Clone,
    {
        if index >= self.len {
            debug!("remove_index({index}) on a stream of {} elements", self.len);
            return Err(Error::index_out_of_range(index, self.len));
        }
        if index == 0 {
            return Ok(self.window(1, self.len));
        }
        if index == self.len - 1 {
            return Ok(self.window(0, index));
        }
        let values = self.values();
        Ok(values[..index]
            .iter()
            .chain(&values[index + 1..])
            .cloned()
            .collect())
    }

    /// Keeps the elements matching `predicate`, preserving their order.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|elem| predicate(elem)).cloned().collect()
    }

    /// Returns `true` if any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.values().contains(element)
    }

    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action)
    }

    /// Invokes `action` with each element and its zero-based position.
    pub fn for_each_indexed<F>(&self, mut action: F)
    where
        F: FnMut(usize, &T),
    {
        for (index, elem) in self.iter().enumerate() {
            action(index, elem);
        }
    }

    /// Number of elements matching `predicate`.
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|elem| predicate(elem)).count()
    }

    /// `true` if every element matches `predicate`, including when the stream
    /// is empty.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// `true` if at least one element matches `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// First element matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|elem| predicate(elem))
    }

    /// Last element matching `predicate`.
    pub fn last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().rev().find(|elem| predicate(elem))
    }

    /// Returns a pseudo-randomly selected element using the thread-local
    /// generator.
    ///
    /// The selection is uniform over positions `0..len() - 1`: the final
    /// element is never returned. Fails with `InsufficientElements` when the
    /// stream holds fewer than two elements.
    pub fn random(&self) -> Result<&T> {
        let bound = self.random_bound()?;
        Ok(&self.values()[fastrand::usize(..bound)])
    }

    /// Same as [`Stream::random`], drawing from the caller's generator.
    pub fn random_with(&self, rng: &mut fastrand::Rng) -> Result<&T> {
        let bound = self.random_bound()?;
        Ok(&self.values()[rng.usize(..bound)])
    }

    fn random_bound(&self) -> Result<usize> {
        if self.len < 2 {
            debug!("random selection from a stream of {} elements", self.len);
            return Err(Error::insufficient_elements("random", 2, self.len));
        }
        Ok(self.len - 1)
    }

    /// Removes the first `n` elements, or all of them if `n >= len()`.
    pub fn drop(&self, n: usize) -> Self {
        self.window(coerce_at_most(n, self.len), self.len)
    }

    /// Removes the last `n` elements, or all of them if `n >= len()`.
    pub fn drop_last(&self, n: usize) -> Self {
        self.take(self.len.saturating_sub(n))
    }

    /// Removes the trailing run of elements matching `predicate`.
    pub fn drop_last_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let keep = self
            .iter()
            .rposition(|elem| !predicate(elem))
            .map_or(0, |index| index + 1);
        self.window(0, keep)
    }

    /// Selects the elements at `indices`, in the order the indices are given.
    ///
    /// Positions at or beyond `len()` are skipped rather than reported.
    pub fn slice(&self, indices: &[usize]) -> Self
    where
        T: Clone,
    {
        let values = self.values();
        indices
            .iter()
            .filter_map(|&index| values.get(index))
            .cloned()
            .collect()
    }

    /// Removes the leading run of elements matching `predicate`.
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let skip = self
            .iter()
            .position(|elem| !predicate(elem))
            .unwrap_or(self.len);
        self.window(skip, self.len)
    }

    /// Keeps the first `n` elements.
    pub fn take(&self, n: usize) -> Self {
        self.window(0, coerce_at_most(n, self.len))
    }

    /// Keeps the last `n` elements.
    pub fn take_last(&self, n: usize) -> Self {
        self.window(self.len - coerce_at_most(n, self.len), self.len)
    }

    /// Keeps the leading run of elements matching `predicate`.
    pub fn take_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let keep = self
            .iter()
            .position(|elem| !predicate(elem))
            .unwrap_or(self.len);
        self.window(0, keep)
    }

    /// Replaces every element with `transform(element)`.
    ///
    /// The element type is preserved; use [`crate::map`] to change it.
    pub fn map<F>(&self, transform: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        self.iter().map(transform).collect()
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            storage: self.storage.clone(),
            offset: self.offset,
            len: self.len,
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stream").field(&self.values()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values() == other.values()
    }
}

impl<T: Eq> Eq for Stream<T> {}

impl<T: Hash> Hash for Stream<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values().hash(state)
    }
}

impl<T> AsRef<[T]> for Stream<T> {
    fn as_ref(&self) -> &[T] {
        self.values()
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(vec: Vec<T>) -> Self {
        Stream::from_vec(vec)
    }
}

impl<T: Clone> From<&[T]> for Stream<T> {
    fn from(slice: &[T]) -> Self {
        Stream::from_vec(slice.to_vec())
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stream::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values().iter()
    }
}

/// By-value iterator over a [`Stream`], cloning elements out of the shared
/// storage.
#[derive(Clone)]
pub struct StreamIntoIter<T> {
    stream: Stream<T>,
    pos: usize,
}

impl<T: Clone> Iterator for StreamIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.stream.values().get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stream.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for StreamIntoIter<T> {}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        StreamIntoIter {
            stream: self,
            pos: 0,
        }
    }
}
