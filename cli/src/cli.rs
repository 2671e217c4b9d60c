//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Contig - fixed-size arrays with pointer-like positions
#[derive(Parser, Debug)]
#[command(name = "contig", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill the sample array and print it
    Show(ShowArgs),

    /// Check the position identities over every pair of positions
    Verify(VerifyArgs),
}

/// How the sample array is filled: element `i` is `start + i * step`.
#[derive(Args, Debug, Clone, Copy)]
pub struct FillArgs {
    /// Value of the first element
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    /// Difference between consecutive elements
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub step: i64,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Traversal order
    #[arg(long, default_value = "reverse")]
    pub order: Order,

    #[command(flatten)]
    pub fill: FillArgs,
}

/// Arguments for the `verify` command.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub fill: FillArgs,
}

/// Traversal order for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// From `begin` to `end`
    Forward,
    /// From `end` back to `begin`
    #[default]
    Reverse,
}
