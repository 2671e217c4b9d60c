//! Reverse position adapter.

use core::cmp::Ordering;

use crate::traits::{RandomAccess, RandomAccessMut};

/// Walks a range backwards by flipping every operation of the wrapped handle.
///
/// `Reversed(base)` addresses the slot *before* `base`, so
/// `Reversed(end)..Reversed(begin)` visits `[begin, end)` from the back.
///
/// ```
/// use contig_core::{FixedArray, RandomAccess, Reversed};
///
/// let array = FixedArray::<u8, 3>::from([1, 2, 3]);
/// let first = Reversed::new(array.end());
/// // SAFETY: `end - 1` is the last slot.
/// assert_eq!(unsafe { *first.read() }, 3);
/// assert_eq!(Reversed::new(array.begin()).distance_from(first), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<P>(P);

impl<P> Reversed<P> {
    pub const fn new(base: P) -> Self {
        Reversed(base)
    }

    /// The wrapped handle, one slot past the addressed one.
    pub fn base(self) -> P {
        self.0
    }
}

impl<P: Ord> PartialOrd for Reversed<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord> Ord for Reversed<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl<'a, P: RandomAccess<'a>> RandomAccess<'a> for Reversed<P> {
    type Item = P::Item;

    #[inline(always)]
    fn offset_by(self, n: isize) -> Self {
        Reversed(self.0.offset_by(n.wrapping_neg()))
    }

    #[inline(always)]
    fn distance_from(self, origin: Self) -> isize {
        origin.0.distance_from(self.0)
    }

    #[inline(always)]
    unsafe fn read(self) -> &'a P::Item {
        // SAFETY: the caller guarantees the slot before `base` is live.
        unsafe { self.0.offset_by(-1).read() }
    }
}

impl<'a, P: RandomAccessMut<'a>> RandomAccessMut<'a> for Reversed<P> {
    #[inline(always)]
    unsafe fn read_mut(self) -> &'a mut P::Item {
        // SAFETY: forwarded to the caller.
        unsafe { self.0.offset_by(-1).read_mut() }
    }
}
