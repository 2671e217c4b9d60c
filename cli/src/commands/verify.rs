//! The `verify` command - check the position identities on the sample array.
//!
//! Every pair of positions in `[begin, end]` is checked against the offset,
//! difference, ordering and stepping identities, and every in-range position
//! against indexed access and checked dereference.

use contig::{Position, RandomAccess};

use crate::cli::VerifyArgs;
use crate::common::error::{CliError, CliResult};
use crate::common::sample::{self, LEN, Sample};

/// Run the verify command.
pub fn run(args: VerifyArgs) -> CliResult<()> {
    let array = sample::filled(args.fill)?;
    let checks = verify(&array)?;
    tracing::info!(checks, "all identities hold");
    println!("ok: {checks} checks");
    Ok(())
}

/// Counts identity checks and reports the first failure.
struct Checker<'a> {
    begin: Position<'a, i64>,
    count: usize,
}

impl<'a> Checker<'a> {
    fn ensure(
        &mut self,
        holds: bool,
        identity: &'static str,
        p: Position<'a, i64>,
        q: Position<'a, i64>,
    ) -> CliResult<()> {
        self.count += 1;
        if holds {
            return Ok(());
        }
        let (p, q) = (p - self.begin, q - self.begin);
        tracing::warn!(identity, p, q, "identity violated");
        Err(CliError::Identity { identity, p, q })
    }
}

/// Checks every identity over the array and returns the number of checks.
pub fn verify(array: &Sample) -> CliResult<usize> {
    let begin = array.begin();
    let end = array.end();
    let mut checker = Checker { begin, count: 0 };
    let positions: Vec<_> = (0..=LEN as isize).map(|n| begin + n).collect();

    checker.ensure(end - begin == LEN as isize, "end - begin == size", begin, end)?;
    checker.ensure(begin + (end - begin) == end, "begin + (end - begin) == end", begin, end)?;

    for &p in &positions {
        for &q in &positions {
            let n = q - p;
            checker.ensure(p + n == q, "p + (q - p) == q", p, q)?;
            checker.ensure(p + n == n + p, "p + n == n + p", p, q)?;
            checker.ensure((p + n) - n == p, "(p + n) - n == p", p, q)?;
            checker.ensure((p - n) + n == p, "(p - n) + n == p", p, q)?;
            checker.ensure((p < q) == (n > 0), "p < q <=> q - p > 0", p, q)?;
            checker.ensure(p.distance_from(q) == -n, "p - q == -(q - p)", p, q)?;
        }

        let mut stepped = p;
        let prior = stepped.post_inc();
        checker.ensure(prior == p && stepped == p + 1, "p++ == p, then p + 1", p, stepped)?;
        checker.ensure(*stepped.dec() == p, "--(p + 1) == p", p, stepped)?;
    }

    for &p in &positions[..LEN] {
        let offset = p - begin;
        for n in -offset..(LEN as isize - offset) {
            // SAFETY: `p + n` lies in `[begin, end)`.
            let (indexed, dereferenced) = unsafe { (*p.at(n), *(p + n).as_ref()) };
            checker.ensure(indexed == dereferenced, "p[n] == *(p + n)", p, p + n)?;
        }
        let expected = array[offset as usize];
        checker.ensure(*array.try_deref(p)? == expected, "*p == array[p - begin]", p, p)?;
    }

    let forward: Vec<i64> = array.iter().copied().collect();
    let mut backward: Vec<i64> = array.iter().rev().copied().collect();
    backward.reverse();
    checker.ensure(forward == backward, "reverse(reverse(range)) == range", begin, end)?;
    checker.ensure(forward == array.as_slice(), "traversal == storage", begin, end)?;

    Ok(checker.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FillArgs;

    #[test]
    fn sample_array_passes() {
        let array = sample::filled(FillArgs { start: 0, step: 1 }).unwrap();
        let checks = verify(&array).unwrap();
        // 2 + 21 * 21 * 6 + 21 * 2 + 20 * 20 + 20 + 2
        assert_eq!(checks, 2 + 2646 + 42 + 400 + 20 + 2);
    }

    #[test]
    fn contents_do_not_matter() {
        let array = sample::filled(FillArgs { start: -7, step: -3 }).unwrap();
        assert!(verify(&array).is_ok());
    }
}
