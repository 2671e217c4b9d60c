//! Errors reported by checked position access.

use thiserror::Error;

/// Why a position could not be dereferenced.
///
/// Returned by [`FixedArray::try_deref`](crate::FixedArray::try_deref) and
/// friends. With the `checked` feature, the same values are used as panic
/// messages for contract violations inside [`Position`](crate::Position).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The position is the null sentinel.
    #[error("null position dereferenced")]
    Null,

    /// The position addresses a slot outside `[0, len)` of its block.
    #[error("position offset {offset} is outside of [0, {len})")]
    OutOfBounds { offset: isize, len: usize },

    /// The position was derived from a different block.
    #[error("position belongs to a different block")]
    ForeignBlock,
}
