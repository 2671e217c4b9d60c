//! The sample array every command works on.

use contig::FixedArray;

use crate::cli::FillArgs;
use crate::common::error::{CliError, CliResult};

/// Number of elements in the sample array.
pub const LEN: usize = 20;

pub type Sample = FixedArray<i64, LEN>;

/// Fills the sample array with `start + i * step`.
pub fn filled(fill: FillArgs) -> CliResult<Sample> {
    let FillArgs { start, step } = fill;
    let mut array = Sample::new();
    for index in 0..array.size() {
        array[index] = (index as i64)
            .checked_mul(step)
            .and_then(|offset| offset.checked_add(start))
            .ok_or(CliError::Overflow { index, start, step })?;
    }
    tracing::debug!(start, step, len = LEN, "filled sample array");
    Ok(array)
}
