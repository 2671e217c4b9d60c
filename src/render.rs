//! Text rendering of element sequences.
//!
//! The format is `[ e1 e2 ... en  ]`: an opening bracket and a space, every
//! element followed by a single space, then one more space and the closing
//! bracket. An empty sequence renders as `[  ]`.

use std::fmt;

/// `Display` adapter for an iterator of displayable items.
///
/// Every `fmt` call walks a clone of the iterator, so the adapter renders the
/// same text each time it is formatted.
///
/// # Example
///
/// ```
/// use contig::{FixedArray, render::Bracketed};
///
/// let array = FixedArray::from([1, 2, 3]);
/// assert_eq!(Bracketed::new(array.iter().rev()).to_string(), "[ 3 2 1  ]");
/// ```
#[derive(Clone)]
pub struct Bracketed<I> {
    items: I,
}

impl<I> Bracketed<I> {
    pub fn new(items: impl IntoIterator<IntoIter = I>) -> Self {
        Bracketed {
            items: items.into_iter(),
        }
    }
}

impl<I> fmt::Display for Bracketed<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for item in self.items.clone() {
            write!(f, "{item} ")?;
        }
        f.write_str(" ]")
    }
}

impl<I> fmt::Debug for Bracketed<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bracketed").finish_non_exhaustive()
    }
}

/// Renders `items` to a `String` in the bracketed format.
pub fn bracketed<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let body: String = items.into_iter().map(|item| format!("{item} ")).collect();
    format!("[ {body} ]")
}
