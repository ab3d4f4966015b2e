use thiserror::Error;

/// A matching element together with its zero-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<T> {
    pub index: usize,
    pub value: T,
}
impl<T> Found<T> {
    #[must_use]
    pub const fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Found<U> {
        Found {
            index: self.index,
            value: f(self.value),
        }
    }
    pub fn into_flatten(self) -> (usize, T) {
        (self.index, self.value)
    }
}
impl<T: Clone> Found<&T> {
    #[must_use]
    pub fn cloned(self) -> Found<T> {
        self.map(Clone::clone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("element not found")]
pub struct ElementNotFound;

/// Scans from the front and returns the first element satisfying `pred`.
///
/// ```rust
/// use seq_ops::{find, ElementNotFound};
///
/// let seq = [12345, 123, 125];
/// let found = find(&seq, |x| *x == 125).unwrap();
/// assert_eq!(found.into_flatten(), (2, &125));
/// assert_eq!(find(&seq, |x| *x > 99999), Err(ElementNotFound));
/// ```
pub fn find<T>(
    seq: &[T],
    mut pred: impl FnMut(&T) -> bool,
) -> Result<Found<&T>, ElementNotFound> {
    for (i, value) in seq.iter().enumerate() {
        if pred(value) {
            return Ok(Found::new(i, value));
        }
    }
    Err(ElementNotFound)
}

/// Same scan as [`find`], returning `-1` when no element matches
#[must_use]
pub fn find_index<T>(seq: &[T], pred: impl FnMut(&T) -> bool) -> isize {
    match find(seq, pred) {
        Ok(found) => isize::try_from(found.index).unwrap_or(isize::MAX),
        Err(ElementNotFound) => -1,
    }
}
