//! Algorithms generic over [`RandomAccess`] handles.
//!
//! These only rely on the traversal contract, so they accept a [`Position`],
//! a [`Reversed`] adapter or a raw `*mut T` alike.
//!
//! [`Position`]: crate::Position
//! [`Reversed`]: crate::Reversed

use crate::traits::RandomAccess;

/// Number of slots in `[first, last)`. Negative if `last < first`.
#[inline]
pub fn distance<'a, P: RandomAccess<'a>>(first: P, last: P) -> isize {
    last.distance_from(first)
}

/// Moves `pos` by `n` slots in O(1).
#[inline]
pub fn advance<'a, P: RandomAccess<'a>>(pos: &mut P, n: isize) {
    *pos = pos.offset_by(n);
}

/// The handle one slot after `pos`.
#[inline]
pub fn next<'a, P: RandomAccess<'a>>(pos: P) -> P {
    pos.offset_by(1)
}

/// The handle one slot before `pos`.
#[inline]
pub fn prev<'a, P: RandomAccess<'a>>(pos: P) -> P {
    pos.offset_by(-1)
}

/// First handle in the sorted range `[first, last)` whose item is not less
/// than `value`, or `last` if there is none.
///
/// Runs in O(log n) comparisons using only offsets and differences.
///
/// # Safety
///
/// `[first, last)` must be a readable range of one block, sorted by `Ord`.
pub unsafe fn lower_bound<'a, P>(mut first: P, last: P, value: &P::Item) -> P
where
    P: RandomAccess<'a>,
    P::Item: Ord,
{
    let mut count = distance(first, last);
    while count > 0 {
        let half = count / 2;
        let mid = first.offset_by(half);
        // SAFETY: `mid` lies in `[first, last)`.
        if unsafe { mid.read() } < value {
            first = next(mid);
            count -= half + 1;
        } else {
            count = half;
        }
    }
    first
}
