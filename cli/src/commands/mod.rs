//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod show;
pub mod verify;
