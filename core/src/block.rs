//! Bounds of the contiguous block a position was derived from.
//!
//! With the `checked` feature a `Block` records `[lo, lo + len)` and turns
//! contract violations into panics. Positions whose blocks overlap (an array
//! and a subslice of it, or a single slot of it) count as the same block. Without it, `Block` is zero sized and every
//! check compiles to nothing, so positions stay pointer sized.

#[cfg(feature = "checked")]
pub(crate) use checked::Block;
#[cfg(not(feature = "checked"))]
pub(crate) use unchecked::Block;

#[cfg(feature = "checked")]
mod checked {
    use core::ptr;

    use crate::addr;
    use crate::error::AccessError;

    pub(crate) struct Block<T> {
        lo: *mut T,
        len: usize,
    }

    impl<T> Block<T> {
        pub(crate) const NONE: Self = Block {
            lo: ptr::null_mut(),
            len: 0,
        };

        #[inline]
        pub(crate) fn new(lo: *mut T, len: usize) -> Self {
            Block { lo, len }
        }

        /// Slot index of `ptr` inside this block.
        pub(crate) fn locate(&self, ptr: *mut T) -> Result<usize, AccessError> {
            if ptr.is_null() {
                return Err(AccessError::Null);
            }
            let offset = addr::distance(ptr, self.lo);
            if offset < 0 || offset as usize >= self.len {
                return Err(AccessError::OutOfBounds {
                    offset,
                    len: self.len,
                });
            }
            Ok(offset as usize)
        }

        #[inline]
        #[track_caller]
        pub(crate) fn check_deref(&self, ptr: *mut T) {
            if let Err(err) = self.locate(ptr) {
                panic!("{err}");
            }
        }

        /// Address range `[lo, hi)` covered by the block.
        fn span(&self) -> (usize, usize) {
            (self.lo.addr(), addr::step(self.lo, self.len as isize).addr())
        }

        /// Blocks carved out of the same storage overlap. An empty block
        /// belongs to any block whose closed range holds its address.
        fn overlaps(&self, other: &Self) -> bool {
            let (a_lo, a_hi) = self.span();
            let (b_lo, b_hi) = other.span();
            if a_lo == a_hi {
                b_lo <= a_lo && a_lo <= b_hi
            } else if b_lo == b_hi {
                a_lo <= b_lo && b_lo <= a_hi
            } else {
                a_lo < b_hi && b_lo < a_hi
            }
        }

        #[inline]
        #[track_caller]
        pub(crate) fn check_same(&self, other: &Self) {
            if !self.overlaps(other) {
                panic!("{}", AccessError::ForeignBlock);
            }
        }
    }

    impl<T> Clone for Block<T> {
        fn clone(&self) -> Self {
            *self
        }
    }
    impl<T> Copy for Block<T> {}
}

#[cfg(not(feature = "checked"))]
mod unchecked {
    use core::marker::PhantomData;

    pub(crate) struct Block<T>(PhantomData<*mut T>);

    impl<T> Block<T> {
        pub(crate) const NONE: Self = Block(PhantomData);

        #[inline(always)]
        pub(crate) fn new(_lo: *mut T, _len: usize) -> Self {
            Self::NONE
        }

        #[inline(always)]
        pub(crate) fn check_deref(&self, _ptr: *mut T) {}

        #[inline(always)]
        pub(crate) fn check_same(&self, _other: &Self) {}
    }

    impl<T> Clone for Block<T> {
        fn clone(&self) -> Self {
            *self
        }
    }
    impl<T> Copy for Block<T> {}

    static_assertions::assert_eq_size!(Block<u64>, ());
}
