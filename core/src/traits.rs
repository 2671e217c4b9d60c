//! The random-access traversal contract, as a trait.
//!
//! Generic algorithms in [`algo`](crate::algo) and the [`Walk`](crate::Walk)
//! iterators are written against [`RandomAccess`] rather than against
//! [`Position`], so a position and a raw `*mut T` can be used interchangeably.

use crate::addr;
use crate::position::Position;

/// A copyable, totally ordered handle into contiguous storage.
///
/// Implementations must keep the operations mutually consistent:
///
/// - `p.offset_by(n).offset_by(-n) == p`
/// - `q.distance_from(p) == n` iff `p.offset_by(n) == q` (same block)
/// - `p < q` iff `q.distance_from(p) > 0`
pub trait RandomAccess<'a>: Copy + Ord {
    type Item: 'a;

    /// Moves by `n` slots, in O(1), never reading.
    fn offset_by(self, n: isize) -> Self;

    /// Signed number of slots from `origin` to `self`.
    fn distance_from(self, origin: Self) -> isize;

    /// Dereferences the handle.
    ///
    /// # Safety
    ///
    /// The handle must address a live, initialized slot that is not mutably
    /// borrowed for `'a`.
    unsafe fn read(self) -> &'a Self::Item;
}

/// A [`RandomAccess`] handle that can also be written through.
pub trait RandomAccessMut<'a>: RandomAccess<'a> {
    /// Mutably dereferences the handle.
    ///
    /// # Safety
    ///
    /// As for [`RandomAccess::read`], and no other reference to the slot may
    /// be alive for `'a`.
    unsafe fn read_mut(self) -> &'a mut Self::Item;
}

impl<'a, T> RandomAccess<'a> for Position<'a, T> {
    type Item = T;

    #[inline(always)]
    fn offset_by(self, n: isize) -> Self {
        self + n
    }

    #[inline(always)]
    fn distance_from(self, origin: Self) -> isize {
        self - origin
    }

    #[inline(always)]
    unsafe fn read(self) -> &'a T {
        // SAFETY: forwarded to the caller.
        unsafe { self.as_ref() }
    }
}

impl<'a, T> RandomAccessMut<'a> for Position<'a, T> {
    #[inline(always)]
    unsafe fn read_mut(self) -> &'a mut T {
        // SAFETY: forwarded to the caller.
        unsafe { self.as_mut() }
    }
}

impl<'a, T: 'a> RandomAccess<'a> for *mut T {
    type Item = T;

    #[inline(always)]
    fn offset_by(self, n: isize) -> Self {
        addr::step(self, n)
    }

    #[inline(always)]
    fn distance_from(self, origin: Self) -> isize {
        addr::distance(self, origin)
    }

    #[inline(always)]
    unsafe fn read(self) -> &'a T {
        // SAFETY: forwarded to the caller.
        unsafe { &*self }
    }
}

impl<'a, T: 'a> RandomAccessMut<'a> for *mut T {
    #[inline(always)]
    unsafe fn read_mut(self) -> &'a mut T {
        // SAFETY: forwarded to the caller.
        unsafe { &mut *self }
    }
}

static_assertions::assert_impl_all!(Position<'static, i32>: RandomAccess<'static>, RandomAccessMut<'static>);
static_assertions::assert_impl_all!(*mut i32: RandomAccess<'static>, RandomAccessMut<'static>);
