//! Contig - fixed-size arrays with pointer-like positions
//!
//! # Overview
//!
//! Contig provides [`FixedArray<T, S>`], an array of exactly `S` elements, and
//! [`Position<'a, T>`], a copyable handle into it that behaves like a raw
//! pointer: it compares, steps, offsets, subtracts and dereferences, with all
//! operations kept mutually consistent (`begin + (end - begin) == end`).
//!
//! Generic algorithms are written against the [`RandomAccess`] trait, so they
//! accept positions, raw pointers and [`Reversed`] adapters interchangeably.
//!
//! # Quick Start
//!
//! ```
//! use contig::{FixedArray, render::bracketed};
//!
//! let mut array = FixedArray::<i32, 20>::new();
//! for i in 0..array.size() {
//!     array[i] = i as i32;
//! }
//!
//! assert_eq!(array.end() - array.begin(), 20);
//! assert_eq!(
//!     bracketed(array.iter().rev()),
//!     "[ 19 18 17 16 15 14 13 12 11 10 9 8 7 6 5 4 3 2 1 0  ]",
//! );
//! ```
//!
//! # API Tiers
//!
//! 1. **Checked API** (`try_deref`, `offset_of`, `get`): returns
//!    [`AccessError`] on misuse.
//! 2. **Unchecked API** (`Position::as_ref`, `Position::at`, ...): `unsafe`,
//!    no overhead. Enable the `checked` feature to turn contract violations
//!    into panics while testing.

pub mod render;

pub use contig_core::*;
pub use render::{Bracketed, bracketed};
