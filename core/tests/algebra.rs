//! Cross-operation identities of `Position`, checked over every pair of
//! positions in a 20-element array.

use contig_core::{FixedArray, Position, RandomAccess, Reversed, algo};
use pretty_assertions::assert_eq;

const N: usize = 20;

fn counting() -> FixedArray<i32, N> {
    let mut array = FixedArray::new();
    for i in 0..N {
        array[i] = i as i32;
    }
    array
}

/// All positions in `[begin, end]`.
fn positions(array: &FixedArray<i32, N>) -> Vec<Position<'_, i32>> {
    (0..=N as isize).map(|n| array.begin() + n).collect()
}

// =============================================================================
// Offset and difference
// =============================================================================

#[test]
fn offset_by_difference_lands_on_target() {
    let array = counting();
    for &p in &positions(&array) {
        for &q in &positions(&array) {
            assert_eq!(p + (q - p), q);
        }
    }
}

#[test]
fn difference_matches_offset() {
    let array = counting();
    let begin = array.begin();
    for &p in &positions(&array) {
        for n in -(N as isize)..=N as isize {
            let q = p + n;
            assert_eq!(q - p, n);
            assert_eq!((p + n) - n, p);
            assert_eq!((p - n) + n, p);
            assert_eq!(p + n, n + p);
        }
        assert_eq!(p - begin + begin, p);
    }
}

#[test]
fn increment_equals_unit_offset() {
    let array = counting();
    for &p in &positions(&array) {
        let mut a = p;
        let mut b = p;
        a.inc();
        b += 1;
        assert_eq!(a, b);

        a.dec();
        b -= 1;
        assert_eq!(a, b);
        assert_eq!(a, p);
    }
}

#[test]
fn post_increment_returns_prior_value() {
    let array = counting();
    let mut p = array.begin();
    let mut visited = Vec::new();
    while p != array.end() {
        let prior = p.post_inc();
        assert_eq!(p - prior, 1);
        // SAFETY: `prior` is in `[begin, end)`.
        visited.push(unsafe { *prior.as_ref() });
    }
    assert_eq!(visited, (0..N as i32).collect::<Vec<_>>());
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn ordering_agrees_with_difference() {
    let array = counting();
    for &p in &positions(&array) {
        for &q in &positions(&array) {
            assert_eq!(p < q, (q - p) > 0);
            assert_eq!(p == q, (q - p) == 0);
            assert_eq!(p.cmp(&q), (p - q).cmp(&0));
        }
    }
}

#[test]
fn ordering_is_transitive() {
    let array = counting();
    let all = positions(&array);
    for &p in &all {
        for &q in &all {
            for &r in &all {
                if p < q && q < r {
                    assert!(p < r);
                }
            }
        }
    }
}

// =============================================================================
// Dereference
// =============================================================================

#[test]
fn indexed_access_matches_dereference() {
    let array = counting();
    let begin = array.begin();
    for &p in &positions(&array)[..N] {
        let base = p - begin;
        for n in -base..(N as isize - base) {
            // SAFETY: `p + n` is in `[begin, end)`.
            unsafe {
                assert_eq!(p.at(n), (p + n).as_ref());
                assert_eq!(*p.at(n), (base + n) as i32);
            }
        }
    }
}

#[test]
fn writes_through_positions_are_visible_by_index() {
    let mut array = FixedArray::<i32, N>::new();
    {
        let (begin, end) = array.range_mut();
        let len = end - begin;
        for n in 0..len {
            // SAFETY: `begin + n` is in `[begin, end)` of an exclusive borrow.
            unsafe { *begin.at_mut(n) = (len - 1 - n) as i32 };
        }
    }
    for i in 0..N {
        assert_eq!(array[i], (N - 1 - i) as i32);
    }
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn fill_and_traverse_both_ways() {
    let array = counting();
    assert_eq!(array.size(), 20);
    assert_eq!(array.end() - array.begin(), 20);
    assert_eq!(array.begin() + (array.end() - array.begin()), array.end());

    let forward: Vec<i32> = array.iter().copied().collect();
    assert_eq!(forward, (0..20).collect::<Vec<_>>());

    let backward: Vec<i32> = array.iter().rev().copied().collect();
    assert_eq!(backward, (0..20).rev().collect::<Vec<_>>());
}

#[test]
fn reverse_adapter_matches_reverse_iteration() {
    let array = counting();
    let mut r = array.rbegin();
    let mut seen = Vec::new();
    while r != array.rend() {
        // SAFETY: `r` is in the reversed `[rbegin, rend)`.
        seen.push(unsafe { *r.read() });
        algo::advance(&mut r, 1);
    }
    let expected: Vec<i32> = array.iter().rev().copied().collect();
    assert_eq!(seen, expected);
    assert_eq!(algo::distance(array.rbegin(), array.rend()), 20);
    assert_eq!(array.rend(), Reversed::new(array.begin()));
}

#[test]
fn size_is_independent_of_contents() {
    let zeros = FixedArray::<u64, 20>::new();
    let maxes = FixedArray::from([u64::MAX; 20]);
    assert_eq!(zeros.size(), 20);
    assert_eq!(maxes.size(), 20);
}
