//! Common utilities shared across CLI commands.

pub mod error;
pub mod sample;

pub use error::CliResult;
