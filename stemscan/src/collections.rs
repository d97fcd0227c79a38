//! Scratch buffer type shared by the analysis stages.

use alloc::vec::Vec;

/// Capacity is always grown to a multiple of this many elements.
const GROWTH_STEP: usize = 8;

/// A growable vector intended to be reused across hinting calls.
///
/// Clearing retains the allocation, and growth always rounds the capacity
/// up to the next multiple of eight so that repeatedly hinting glyphs of
/// increasing size amortizes reallocation.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScratchVec<T>(Vec<T>);

impl<T> ScratchVec<T> {
    /// Creates a new, empty `ScratchVec<T>`.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of elements that can be held without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Clears the vector, removing all values but keeping the allocation.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Tries to reserve capacity for at least `additional` more elements.
    ///
    /// Returns false if the allocation failed.
    pub fn try_reserve(&mut self, additional: usize) -> bool {
        let len = self.0.len();
        let Some(required) = len.checked_add(additional) else {
            return false;
        };
        if required <= self.0.capacity() {
            return true;
        }
        let Some(new_cap) = required.checked_next_multiple_of(GROWTH_STEP) else {
            return false;
        };
        self.0.try_reserve_exact(new_cap - len).is_ok()
    }

    /// Appends an element to the back of the vector.
    pub fn push(&mut self, value: T) {
        if self.0.len() == self.0.capacity() {
            // On failure, fall back to the growth policy of Vec
            self.try_reserve(1);
        }
        self.0.push(value);
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    /// Shortens the vector, keeping the first `len` elements.
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len)
    }

    /// Extracts a slice containing the entire vector.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Extracts a mutable slice of the entire vector.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T> Default for ScratchVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::ops::Deref for ScratchVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> core::ops::DerefMut for ScratchVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> PartialEq<[T]> for ScratchVec<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> core::fmt::Debug for ScratchVec<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice().iter()).finish()
    }
}

impl<T> FromIterator<T> for ScratchVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        for value in iter {
            vec.push(value);
        }
        vec
    }
}

impl<'a, T> IntoIterator for &'a ScratchVec<T> {
    type IntoIter = core::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ScratchVec<T> {
    type IntoIter = core::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
