//! Random-access positions into contiguous storage.
//!
//! A [`Position`] behaves like a raw pointer into a block of `T`: it can be
//! compared, stepped forward and backward, offset by any distance, subtracted
//! from another position and dereferenced. Unlike a raw pointer it carries the
//! lifetime of the borrow it came from, so it can never outlive the storage it
//! points into.
//!
//! ```text
//!   begin                          end
//!     │                             │
//!     ▼                             ▼
//!   [ t0 | t1 | t2 | ... | t(S-1) ]
//!     └────── end - begin == S ─────┘
//! ```
//!
//! # Example
//!
//! ```
//! use contig_core::FixedArray;
//!
//! let mut array = FixedArray::<i32, 4>::from([10, 20, 30, 40]);
//! let (begin, end) = array.range_mut();
//!
//! assert_eq!(end - begin, 4);
//! assert_eq!(begin + (end - begin), end);
//!
//! // SAFETY: both positions address slots of `array`.
//! unsafe {
//!     *(begin + 1).as_mut() += 1;
//!     assert_eq!(*begin.at(1), 21);
//!     assert_eq!(*(end - 1).as_ref(), 40);
//! }
//! ```
//!
//! # Contract
//!
//! Positions are only meaningfully compared, subtracted or dereferenced against
//! positions into the same block. Arithmetic is always memory safe (it never
//! reads), but dereferencing is `unsafe`: the position must address a live slot
//! of its block. Build with the `checked` feature to turn violations into panics.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use crate::addr;
use crate::block::Block;

/// A non-owning, copyable handle to one slot of a contiguous block of `T`.
///
/// See the [module docs](self) for the full contract.
pub struct Position<'a, T> {
    ptr: *mut T,
    block: Block<T>,
    // Invariant in `T`: positions from `bounds_mut` are written through.
    phantom: PhantomData<&'a mut [T]>,
}

#[cfg(not(feature = "checked"))]
static_assertions::assert_eq_size!(Position<'static, u8>, usize);
#[cfg(not(feature = "checked"))]
static_assertions::assert_eq_size!(Position<'static, [u64; 4]>, usize);

static_assertions::assert_impl_all!(Position<'static, i32>: Copy, Ord, Hash, Default, fmt::Debug);

impl<'a, T> Position<'a, T> {
    /// The null sentinel. Never dereferenceable.
    pub const fn null() -> Self {
        Position {
            ptr: ptr::null_mut(),
            block: Block::NONE,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn within(ptr: *mut T, block: Block<T>) -> Self {
        Position {
            ptr,
            block,
            phantom: PhantomData,
        }
    }

    /// Returns the `[begin, end)` pair delimiting `slice`.
    ///
    /// The positions may only be read through.
    pub fn bounds(slice: &'a [T]) -> (Self, Self) {
        Self::span(slice.as_ptr().cast_mut(), slice.len())
    }

    /// Returns the `[begin, end)` pair delimiting `slice`.
    ///
    /// The positions may be read and written through.
    pub fn bounds_mut(slice: &'a mut [T]) -> (Self, Self) {
        Self::span(slice.as_mut_ptr(), slice.len())
    }

    fn span(lo: *mut T, len: usize) -> (Self, Self) {
        let block = Block::new(lo, len);
        (
            Self::within(lo, block),
            Self::within(addr::step(lo, len as isize), block),
        )
    }

    /// Wraps a single slot. The slot forms a block of its own, one element long.
    pub fn from_ref(slot: &'a T) -> Self {
        Self::bounds(core::slice::from_ref(slot)).0
    }

    /// Wraps a single slot, allowing writes through it.
    pub fn from_mut(slot: &'a mut T) -> Self {
        Self::bounds_mut(core::slice::from_mut(slot)).0
    }

    #[inline(always)]
    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }

    /// The wrapped address.
    #[inline(always)]
    pub fn as_ptr(self) -> *mut T {
        self.ptr
    }

    /// Dereferences the position.
    ///
    /// # Safety
    ///
    /// The position must address a live slot of its block: not null and not
    /// past-the-end. No `&mut` to the same slot may be alive.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn as_ref(self) -> &'a T {
        self.block.check_deref(self.ptr);
        // SAFETY: the caller guarantees the slot is live and not mutably borrowed.
        unsafe { &*self.ptr }
    }

    /// Mutably dereferences the position.
    ///
    /// # Safety
    ///
    /// Same as [`as_ref`](Self::as_ref), and additionally: the position must
    /// come from a mutable borrow ([`Position::bounds_mut`],
    /// [`FixedArray::range_mut`](crate::FixedArray::range_mut), ...) and no
    /// other reference to the slot may be alive while the result is used.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn as_mut(self) -> &'a mut T {
        self.block.check_deref(self.ptr);
        // SAFETY: the caller guarantees exclusive access to a live slot.
        unsafe { &mut *self.ptr }
    }

    /// Indexed access: `*(self + n)` without building the intermediate position.
    ///
    /// # Safety
    ///
    /// `self + n` must satisfy the requirements of [`as_ref`](Self::as_ref).
    #[inline(always)]
    #[track_caller]
    pub unsafe fn at(self, n: isize) -> &'a T {
        let slot = addr::step(self.ptr, n);
        self.block.check_deref(slot);
        // SAFETY: forwarded to the caller.
        unsafe { &*slot }
    }

    /// Mutable indexed access.
    ///
    /// # Safety
    ///
    /// `self + n` must satisfy the requirements of [`as_mut`](Self::as_mut).
    #[inline(always)]
    #[track_caller]
    pub unsafe fn at_mut(self, n: isize) -> &'a mut T {
        let slot = addr::step(self.ptr, n);
        self.block.check_deref(slot);
        // SAFETY: forwarded to the caller.
        unsafe { &mut *slot }
    }

    /// Pre-increment: moves to the next slot and returns the moved position.
    #[inline(always)]
    pub fn inc(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Post-increment: moves to the next slot and returns the prior position.
    #[inline(always)]
    pub fn post_inc(&mut self) -> Self {
        let prior = *self;
        self.inc();
        prior
    }

    /// Pre-decrement: moves to the previous slot and returns the moved position.
    #[inline(always)]
    pub fn dec(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Post-decrement: moves to the previous slot and returns the prior position.
    #[inline(always)]
    pub fn post_dec(&mut self) -> Self {
        let prior = *self;
        self.dec();
        prior
    }
}

// --- Value semantics (manual impls to avoid `T: Clone/Eq/...` bounds) ---

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Position<'_, T> {}

impl<T> Default for Position<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for Position<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position").field(&self.ptr).finish()
    }
}

impl<T> PartialEq for Position<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}
impl<T> Eq for Position<'_, T> {}

impl<T> PartialOrd for Position<'_, T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Position<'_, T> {
    #[inline(always)]
    #[track_caller]
    fn cmp(&self, other: &Self) -> Ordering {
        self.block.check_same(&other.block);
        self.ptr.cmp(&other.ptr)
    }
}

impl<T> Hash for Position<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
    }
}

// --- Arithmetic ---

impl<T> AddAssign<isize> for Position<'_, T> {
    #[inline(always)]
    fn add_assign(&mut self, n: isize) {
        self.ptr = addr::step(self.ptr, n);
    }
}

impl<T> SubAssign<isize> for Position<'_, T> {
    #[inline(always)]
    fn sub_assign(&mut self, n: isize) {
        self.ptr = addr::step(self.ptr, n.wrapping_neg());
    }
}

impl<T> Add<isize> for Position<'_, T> {
    type Output = Self;

    #[inline(always)]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<'a, T> Add<Position<'a, T>> for isize {
    type Output = Position<'a, T>;

    #[inline(always)]
    fn add(self, pos: Position<'a, T>) -> Position<'a, T> {
        pos + self
    }
}

impl<T> Sub<isize> for Position<'_, T> {
    type Output = Self;

    #[inline(always)]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> Sub for Position<'_, T> {
    type Output = isize;

    /// Signed number of slots from `origin` to `self`.
    #[inline(always)]
    #[track_caller]
    fn sub(self, origin: Self) -> isize {
        self.block.check_same(&origin.block);
        addr::distance(self.ptr, origin.ptr)
    }
}

// Same semantics as `&'a T` for sending across threads; writes go through
// `unsafe` and require `T: Send` as well.
unsafe impl<T: Send + Sync> Send for Position<'_, T> {}
unsafe impl<T: Send + Sync> Sync for Position<'_, T> {}
