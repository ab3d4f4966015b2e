/// Returns the elements satisfying `pred`, in their original order.
///
/// ```rust
/// use seq_ops::filter;
///
/// let filtered = filter(&[12345, 123, 125], |x| *x != 12345);
/// assert_eq!(filtered, [123, 125]);
/// ```
#[must_use]
pub fn filter<T: Clone>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut res = vec![];
    for x in seq {
        if pred(x) {
            res.push(x.clone());
        }
    }
    res
}

/// Applies `f` to every element.
///
/// The output has the same length as `seq`.
///
/// ```rust
/// use seq_ops::map;
///
/// let mapped = map(&[12345_i32, 123, 125], |x| x.to_string());
/// assert_eq!(mapped, ["12345", "123", "125"]);
/// ```
#[must_use]
pub fn map<T, U>(seq: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
    let mut res = Vec::with_capacity(seq.len());
    res.extend(seq.iter().map(f));
    res
}

/// Returns the first element satisfying `pred`, or `default` if there is none.
#[must_use]
pub fn first_or_default<T: Clone>(
    seq: &[T],
    mut pred: impl FnMut(&T) -> bool,
    default: T,
) -> T {
    for x in seq {
        if pred(x) {
            return x.clone();
        }
    }
    default
}

/// `false` on an empty sequence
#[must_use]
pub fn some<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> bool {
    for x in seq {
        if pred(x) {
            return true;
        }
    }
    false
}

/// `true` on an empty sequence
#[must_use]
pub fn every<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> bool {
    for x in seq {
        if !pred(x) {
            return false;
        }
    }
    true
}
