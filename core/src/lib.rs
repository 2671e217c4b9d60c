//! Fixed-size contiguous storage with pointer-like random-access positions.
//!
//! - [`FixedArray<T, S>`] owns exactly `S` elements.
//! - [`Position<'a, T>`] is a copyable handle into that storage that supports
//!   the full random-access contract: comparison, stepping, offsets,
//!   differences, dereference and indexed access.
//! - [`RandomAccess`] states that contract as a trait, implemented by positions,
//!   raw `*mut T` pointers and the [`Reversed`] adapter, so the generic
//!   algorithms in [`algo`] accept any of them.
//!
//! # Quick Start
//!
//! ```
//! use contig_core::{FixedArray, algo};
//!
//! let mut array = FixedArray::<i32, 20>::new();
//! for i in 0..20 {
//!     array[i] = i as i32;
//! }
//!
//! let (begin, end) = (array.begin(), array.end());
//! assert_eq!(algo::distance(begin, end), 20);
//! assert_eq!(begin + (end - begin), end);
//!
//! let reversed: Vec<i32> = array.iter().rev().copied().collect();
//! assert_eq!(reversed[0], 19);
//! ```
//!
//! # Checked builds
//!
//! Dereferencing a position is `unsafe` and unchecked by default, which keeps
//! positions pointer sized and branch free. Enabling the `checked` feature
//! makes every position remember its block and panic with an [`AccessError`]
//! on null, out-of-range or cross-block use. [`FixedArray::try_deref`] is a
//! checked alternative available in every build.

#![no_std]

mod addr;
mod block;

pub mod algo;
pub mod error;
pub mod fixed_array;
pub mod position;
pub mod reversed;
pub mod traits;
pub mod walk;

pub use error::AccessError;
pub use fixed_array::{FixedArray, Iter, IterMut};
pub use position::Position;
pub use reversed::Reversed;
pub use traits::{RandomAccess, RandomAccessMut};
pub use walk::{Walk, WalkMut};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub(crate) mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
