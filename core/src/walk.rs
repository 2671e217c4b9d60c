//! Iterators over a `[first, last)` range of any [`RandomAccess`] handle.

use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::traits::{RandomAccess, RandomAccessMut};

/// Shared iteration over `[first, last)`.
///
/// Double-ended and exact-size, so `.rev()`, `.len()` and friends work.
pub struct Walk<'a, P: RandomAccess<'a>> {
    front: P,
    back: P,
    phantom: PhantomData<&'a P::Item>,
}

impl<'a, P: RandomAccess<'a>> Walk<'a, P> {
    /// # Safety
    ///
    /// `first` and `last` must delimit a range of the same block with
    /// `first <= last`, and every slot in it must be readable for `'a`.
    pub unsafe fn new(first: P, last: P) -> Self {
        debug_assert!(first <= last);
        Walk {
            front: first,
            back: last,
            phantom: PhantomData,
        }
    }

    /// The remaining `[front, back)` handles.
    pub fn bounds(&self) -> (P, P) {
        (self.front, self.back)
    }
}

impl<'a, P: RandomAccess<'a>> Iterator for Walk<'a, P> {
    type Item = &'a P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: `front` is inside the range handed to `new`.
        let item = unsafe { self.front.read() };
        self.front = self.front.offset_by(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.distance_from(self.front) as usize;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }
        self.front = self.front.offset_by(n as isize);
        self.next()
    }
}

impl<'a, P: RandomAccess<'a>> DoubleEndedIterator for Walk<'a, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.back.offset_by(-1);
        // SAFETY: `back` is inside the range handed to `new`.
        Some(unsafe { self.back.read() })
    }
}

impl<'a, P: RandomAccess<'a>> ExactSizeIterator for Walk<'a, P> {}
impl<'a, P: RandomAccess<'a>> FusedIterator for Walk<'a, P> {}

impl<'a, P: RandomAccess<'a>> Clone for Walk<'a, P> {
    fn clone(&self) -> Self {
        Walk {
            front: self.front,
            back: self.back,
            phantom: PhantomData,
        }
    }
}

impl<'a, P: RandomAccess<'a> + core::fmt::Debug> core::fmt::Debug for Walk<'a, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Walk")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// Exclusive iteration over `[first, last)`.
pub struct WalkMut<'a, P: RandomAccessMut<'a>> {
    front: P,
    back: P,
    phantom: PhantomData<&'a mut P::Item>,
}

impl<'a, P: RandomAccessMut<'a>> WalkMut<'a, P> {
    /// # Safety
    ///
    /// As for [`Walk::new`], and the range must be writable and not otherwise
    /// borrowed for `'a`.
    pub unsafe fn new(first: P, last: P) -> Self {
        debug_assert!(first <= last);
        WalkMut {
            front: first,
            back: last,
            phantom: PhantomData,
        }
    }
}

impl<'a, P: RandomAccessMut<'a>> Iterator for WalkMut<'a, P> {
    type Item = &'a mut P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: every slot is yielded at most once, so the borrows are disjoint.
        let item = unsafe { self.front.read_mut() };
        self.front = self.front.offset_by(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.distance_from(self.front) as usize;
        (len, Some(len))
    }
}

impl<'a, P: RandomAccessMut<'a>> DoubleEndedIterator for WalkMut<'a, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.back.offset_by(-1);
        // SAFETY: every slot is yielded at most once, so the borrows are disjoint.
        Some(unsafe { self.back.read_mut() })
    }
}

impl<'a, P: RandomAccessMut<'a>> ExactSizeIterator for WalkMut<'a, P> {}
impl<'a, P: RandomAccessMut<'a>> FusedIterator for WalkMut<'a, P> {}

impl<'a, P: RandomAccessMut<'a> + core::fmt::Debug> core::fmt::Debug for WalkMut<'a, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WalkMut")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
