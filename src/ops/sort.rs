//! Comparison sorts driven by a "may precede" relation.
//!
//! A comparator `prec(a, b)` returns `true` when `a` may be placed before, or
//! at the same position as, `b`. Both strict (`a < b`) and non-strict
//! (`a <= b`) relations are accepted and produce the same order:
//!
//! ```rust
//! use seq_ops::{quick_sort, sort};
//!
//! let mut a = [7, 9, 5, 10, 3, 6, 1, 8, 2, 4];
//! sort(&mut a, |a, b| a <= b);
//! assert_eq!(a, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let mut b = [123, 125, 12345];
//! quick_sort(&mut b, |a, b| a >= b);
//! assert_eq!(b, [12345, 125, 123]);
//! ```
//!
//! A relation that is not a consistent order leaves the result unspecified,
//! but every sort still terminates with a permutation of its input.

use core::cmp::Ordering;

/// Converts a "may precede" relation into a three-way [`Ordering`].
///
/// `a` is [`Ordering::Less`] only if it may precede `b` and `b` may not
/// precede `a`. Ties under either a strict or a non-strict relation are
/// [`Ordering::Equal`].
pub fn precede_ordering<T>(prec: &mut impl FnMut(&T, &T) -> bool, a: &T, b: &T) -> Ordering {
    match (prec(a, b), prec(b, a)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortAlgo {
    /// Stable merge sort
    #[default]
    Merge,
    /// Unstable in-place Lomuto quicksort
    Quick,
}

/// Sorts `seq` in place with a stable merge sort and returns it.
///
/// An element from the right run is taken first only when it strictly
/// precedes the left one.
pub fn sort<T>(seq: &mut [T], mut prec: impl FnMut(&T, &T) -> bool) -> &mut [T] {
    let order = merge_order(seq, &mut prec);
    permute(seq, &order);
    seq
}

pub fn sort_with<T>(
    seq: &mut [T],
    algo: SortAlgo,
    prec: impl FnMut(&T, &T) -> bool,
) -> &mut [T] {
    match algo {
        SortAlgo::Merge => sort(seq, prec),
        SortAlgo::Quick => quick_sort(seq, prec),
    }
}

/// Bottom-up merge over indices into `seq`.
///
/// `order[k]` is the index of the element that belongs at position `k`.
fn merge_order<T>(seq: &[T], prec: &mut impl FnMut(&T, &T) -> bool) -> Vec<usize> {
    let n = seq.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut buf = vec![0; n];
    let mut width = 1;
    while width < n {
        for lo in (0..n).step_by(2 * width) {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            let (mut l, mut r) = (lo, mid);
            for slot in &mut buf[lo..hi] {
                let take_right = r < hi
                    && (l >= mid
                        || precede_ordering(prec, &seq[order[l]], &seq[order[r]])
                            == Ordering::Greater);
                if take_right {
                    *slot = order[r];
                    r += 1;
                } else {
                    *slot = order[l];
                    l += 1;
                }
            }
        }
        core::mem::swap(&mut order, &mut buf);
        width *= 2;
    }
    order
}

/// Moves `seq[order[k]]` to position `k` by following the permutation's cycles
fn permute<T>(seq: &mut [T], order: &[usize]) {
    let mut placed = vec![false; order.len()];
    for start in 0..order.len() {
        if placed[start] {
            continue;
        }
        let mut i = start;
        loop {
            placed[i] = true;
            let next = order[i];
            if next == start {
                break;
            }
            seq.swap(i, next);
            i = next;
        }
    }
}

/// Lomuto partition with the last element as pivot.
///
/// Returns the final index of the pivot, or [`None`] for an empty slice.
/// Every element placed before the pivot satisfied `prec(x, pivot)`; every
/// element after it did not.
pub fn partition<T>(seq: &mut [T], mut prec: impl FnMut(&T, &T) -> bool) -> Option<usize> {
    lomuto(seq, &mut prec)
}

fn lomuto<T>(seq: &mut [T], prec: &mut impl FnMut(&T, &T) -> bool) -> Option<usize> {
    let (pivot, rest) = seq.split_last_mut()?;
    let pivot = &*pivot;
    let mut boundary = 0;
    for i in 0..rest.len() {
        if prec(&rest[i], pivot) {
            rest.swap(i, boundary);
            boundary += 1;
        }
    }
    let hi = rest.len();
    seq.swap(boundary, hi);
    Some(boundary)
}

/// Sorts `seq` in place with a recursive Lomuto quicksort and returns it.
///
/// Not stable. Degrades to quadratic time on input already ordered under
/// `prec`.
pub fn quick_sort<T>(seq: &mut [T], mut prec: impl FnMut(&T, &T) -> bool) -> &mut [T] {
    quick_sort_range(seq, &mut prec);
    seq
}

fn quick_sort_range<T>(mut seq: &mut [T], prec: &mut impl FnMut(&T, &T) -> bool) {
    // Recurse into the shorter side so the stack stays logarithmic
    while seq.len() > 1 {
        let Some(p) = lomuto(seq, prec) else {
            break;
        };
        let (left, right) = core::mem::take(&mut seq).split_at_mut(p);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort_range(left, prec);
            seq = right;
        } else {
            quick_sort_range(right, prec);
            seq = left;
        }
    }
}
