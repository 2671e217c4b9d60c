//! Contig CLI library.
//!
//! This crate provides the `contig` demonstration binary: it fills a
//! `FixedArray<i64, 20>`, prints it through positions and verifies the
//! position identities. The public modules are primarily exposed for testing
//! purposes.

pub mod cli;
pub mod commands;
pub mod common;
