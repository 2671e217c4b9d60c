//! The facade re-exports the core API and renders arrays.

use contig::{AccessError, FixedArray, Position, RandomAccess, bracketed};
use pretty_assertions::assert_eq;

#[test]
fn core_types_are_reexported() {
    let array = FixedArray::from([5u8, 6, 7]);
    let begin: Position<u8> = array.begin();
    assert_eq!(begin.offset_by(3), array.end());
    assert_eq!(array.try_deref(Position::null()), Err(AccessError::Null));
}

#[test]
fn demonstration_output() {
    let mut array = FixedArray::<i64, 20>::new();
    for i in 0..20 {
        array[i] = i as i64;
    }
    assert_eq!(
        format!("{}", bracketed(array.iter().rev())),
        "[ 19 18 17 16 15 14 13 12 11 10 9 8 7 6 5 4 3 2 1 0  ]"
    );
    assert_eq!(bracketed(array.iter().take(3)), "[ 0 1 2  ]");
}
