//! Fixed-capacity contiguous array that hands out [`Position`] ranges.
//!
//! `FixedArray<T, S>` owns exactly `S` slots of `T`; the length is part of the
//! type and never changes. It is a passive owner: elements are written through
//! indexing or through positions obtained from [`range_mut`](FixedArray::range_mut),
//! and traversed through [`begin`](FixedArray::begin)/[`end`](FixedArray::end)
//! or the iterators built on top of them.
//!
//! ```
//! use contig_core::FixedArray;
//!
//! let mut array = FixedArray::<i32, 20>::new();
//! for i in 0..array.size() {
//!     array[i] = i as i32;
//! }
//!
//! assert_eq!(array.end() - array.begin(), 20);
//! assert_eq!(array.iter().rev().next(), Some(&19));
//! ```

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::addr;
use crate::block::Block;
use crate::error::AccessError;
use crate::position::Position;
use crate::reversed::Reversed;
use crate::walk::{Walk, WalkMut};

/// An array of exactly `S` elements with position-based traversal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const S: usize> {
    storage: [T; S],
}

/// Shared iterator over a [`FixedArray`].
pub type Iter<'a, T> = Walk<'a, Position<'a, T>>;

/// Exclusive iterator over a [`FixedArray`].
pub type IterMut<'a, T> = WalkMut<'a, Position<'a, T>>;

impl<T: Default, const S: usize> FixedArray<T, S> {
    /// Creates an array with every slot set to `T::default()`.
    pub fn new() -> Self {
        FixedArray {
            storage: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const S: usize> FixedArray<T, S> {
    /// Number of slots. Always `S`.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        S
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        S
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        S == 0
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.storage.get_mut(index)
    }

    /// # Safety
    ///
    /// `index` must be less than `S`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < S);
        // SAFETY: forwarded to the caller.
        unsafe { self.storage.get_unchecked(index) }
    }

    /// # Safety
    ///
    /// `index` must be less than `S`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < S);
        // SAFETY: forwarded to the caller.
        unsafe { self.storage.get_unchecked_mut(index) }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }

    pub fn into_inner(self) -> [T; S] {
        self.storage
    }

    #[inline(always)]
    fn base(&self) -> *mut T {
        self.storage.as_ptr().cast_mut()
    }

    /// Position of slot 0. Read-only: see [`range_mut`](Self::range_mut) for writes.
    #[inline(always)]
    pub fn begin(&self) -> Position<'_, T> {
        let lo = self.base();
        Position::within(lo, Block::new(lo, S))
    }

    /// Position one past the last slot. A traversal limit, never dereferenced.
    #[inline(always)]
    pub fn end(&self) -> Position<'_, T> {
        let lo = self.base();
        Position::within(addr::step(lo, S as isize), Block::new(lo, S))
    }

    /// The `[begin, end)` pair, valid for writing.
    pub fn range_mut(&mut self) -> (Position<'_, T>, Position<'_, T>) {
        Position::bounds_mut(&mut self.storage)
    }

    /// Reverse position of the last slot.
    pub fn rbegin(&self) -> Reversed<Position<'_, T>> {
        Reversed::new(self.end())
    }

    /// Reverse position one before slot 0.
    pub fn rend(&self) -> Reversed<Position<'_, T>> {
        Reversed::new(self.begin())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        // SAFETY: `[begin, end)` delimits the storage, borrowed for the iterator.
        unsafe { Walk::new(self.begin(), self.end()) }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (begin, end) = self.range_mut();
        // SAFETY: `[begin, end)` delimits the storage, exclusively borrowed.
        unsafe { WalkMut::new(begin, end) }
    }

    /// Slot index addressed by `pos`, if it addresses a slot of this array.
    pub fn offset_of(&self, pos: Position<'_, T>) -> Result<usize, AccessError> {
        if pos.is_null() {
            return Err(AccessError::Null);
        }
        let lo = self.base();
        if !addr::on_slot_boundary(pos.as_ptr(), lo) {
            return Err(AccessError::ForeignBlock);
        }
        let offset = addr::distance(pos.as_ptr(), lo);
        if offset < 0 || offset as usize >= S {
            return Err(AccessError::OutOfBounds { offset, len: S });
        }
        Ok(offset as usize)
    }

    pub fn contains(&self, pos: Position<'_, T>) -> bool {
        self.offset_of(pos).is_ok()
    }

    /// Dereferences `pos` after checking that it addresses a slot of this array.
    pub fn try_deref(&self, pos: Position<'_, T>) -> Result<&T, AccessError> {
        let index = self.offset_of(pos).inspect_err(|err| {
            tracing::debug!(%err, position = ?pos, "rejected position");
        })?;
        Ok(&self.storage[index])
    }
}

impl<T: Ord, const S: usize> FixedArray<T, S> {
    /// First position whose element is not less than `value`, or `end()`.
    ///
    /// The array must be sorted; otherwise the result is unspecified (but
    /// always a position in `[begin, end]`).
    pub fn lower_bound(&self, value: &T) -> Position<'_, T> {
        // SAFETY: `[begin, end)` delimits the storage.
        unsafe { crate::algo::lower_bound(self.begin(), self.end(), value) }
    }
}

impl<T: Default, const S: usize> Default for FixedArray<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const S: usize> From<[T; S]> for FixedArray<T, S> {
    fn from(storage: [T; S]) -> Self {
        FixedArray { storage }
    }
}

impl<T: fmt::Debug, const S: usize> fmt::Debug for FixedArray<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const S: usize> Index<usize> for FixedArray<T, S> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T, const S: usize> IndexMut<usize> for FixedArray<T, S> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage[index]
    }
}

impl<'a, T, const S: usize> IntoIterator for &'a FixedArray<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const S: usize> IntoIterator for &'a mut FixedArray<T, S> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
