//! Address arithmetic shared by positions and raw pointers.
//!
//! Everything here is wrapping arithmetic on addresses: nothing is ever read,
//! so these functions are safe for any input, including null and
//! out-of-range pointers.

use core::mem::{align_of, size_of};

/// Bytes between two consecutive slots.
///
/// Zero-sized types step by their alignment so that distinct slots keep
/// distinct (and still aligned) addresses.
#[inline(always)]
pub(crate) const fn stride<T>() -> usize {
    if size_of::<T>() == 0 {
        align_of::<T>()
    } else {
        size_of::<T>()
    }
}

/// Moves `ptr` by `n` slots.
#[inline(always)]
pub(crate) fn step<T>(ptr: *mut T, n: isize) -> *mut T {
    if size_of::<T>() == 0 {
        let bytes = n.wrapping_mul(stride::<T>() as isize);
        ptr.cast::<u8>().wrapping_offset(bytes).cast()
    } else {
        ptr.wrapping_offset(n)
    }
}

/// Signed number of slots from `origin` to `to`.
#[inline(always)]
pub(crate) fn distance<T>(to: *mut T, origin: *mut T) -> isize {
    let bytes = to.addr().wrapping_sub(origin.addr()) as isize;
    bytes / stride::<T>() as isize
}

/// Whether `to` sits on a slot boundary relative to `origin`.
#[inline(always)]
pub(crate) fn on_slot_boundary<T>(to: *mut T, origin: *mut T) -> bool {
    to.addr().wrapping_sub(origin.addr()) % stride::<T>() == 0
}
