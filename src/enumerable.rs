use crate::{
    ops::{
        find::{ElementNotFound, Found, find},
        pred::{every, filter, first_or_default, map, some},
        sort::{SortAlgo, sort_with},
    },
};

/// Owned sequence with chainable eager operations.
///
/// Operations producing a sequence return a new [`Enumerable`] and leave the
/// receiver untouched.
///
/// ```rust
/// use seq_ops::Enumerable;
///
/// let seq = Enumerable::new(vec![7, 9, 5, 10, 3, 6, 1, 8, 2, 4]);
/// let sorted = seq.filter(|x| x % 2 == 0).sort(|a, b| a <= b);
/// assert_eq!(sorted.value(), [2, 4, 6, 8, 10]);
/// assert_eq!(seq.value()[0], 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Enumerable<T> {
    data: Vec<T>,
}
impl<T> Enumerable<T> {
    #[must_use]
    pub const fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn value(&self) -> &[T] {
        &self.data
    }
    #[must_use]
    pub fn into_value(self) -> Vec<T> {
        self.data
    }

    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Enumerable<U> {
        Enumerable::new(map(&self.data, f))
    }

    #[must_use]
    pub fn some(&self, pred: impl FnMut(&T) -> bool) -> bool {
        some(&self.data, pred)
    }
    #[must_use]
    pub fn every(&self, pred: impl FnMut(&T) -> bool) -> bool {
        every(&self.data, pred)
    }

    pub fn find(&self, pred: impl FnMut(&T) -> bool) -> Result<Found<&T>, ElementNotFound> {
        find(&self.data, pred)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}
impl<T: Clone> Enumerable<T> {
    #[must_use]
    pub fn filter(&self, pred: impl FnMut(&T) -> bool) -> Self {
        Self::new(filter(&self.data, pred))
    }

    #[must_use]
    pub fn first_or_default(&self, pred: impl FnMut(&T) -> bool, default: T) -> T {
        first_or_default(&self.data, pred, default)
    }

    /// Sorts a copy of the data with the stable merge sort
    #[must_use]
    pub fn sort(&self, prec: impl FnMut(&T, &T) -> bool) -> Self {
        self.sort_with(SortAlgo::Merge, prec)
    }
    #[must_use]
    pub fn sort_with(&self, algo: SortAlgo, prec: impl FnMut(&T, &T) -> bool) -> Self {
        let mut data = self.data.clone();
        sort_with(&mut data, algo, prec);
        Self::new(data)
    }
}

impl<T> From<Vec<T>> for Enumerable<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}
impl<T> From<Enumerable<T>> for Vec<T> {
    fn from(value: Enumerable<T>) -> Self {
        value.into_value()
    }
}
impl<T> FromIterator<T> for Enumerable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
impl<T> IntoIterator for Enumerable<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
impl<'a, T> IntoIterator for &'a Enumerable<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
