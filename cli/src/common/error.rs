//! Error handling utilities for the CLI.

use miette::{Diagnostic, MietteHandlerOpts, Report};
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[diagnostic(
        code(contig::overflow),
        help("choose a smaller --start or --step so all 20 elements fit in i64")
    )]
    #[error("element {index} overflows i64: {start} + {index} * {step}")]
    Overflow { index: usize, start: i64, step: i64 },

    #[diagnostic(code(contig::identity))]
    #[error("identity `{identity}` does not hold for offsets {p} and {q}")]
    Identity {
        identity: &'static str,
        p: isize,
        q: isize,
    },

    #[diagnostic(code(contig::access))]
    #[error("position rejected")]
    Access(#[from] contig::AccessError),
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    miette::set_hook(Box::new(move |_| {
        Box::new(MietteHandlerOpts::new().color(!no_color).build())
    }))
    .ok();
    eprintln!("{:?}", Report::new(error));
    std::process::exit(1);
}
