#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

#[cfg(feature = "nightly")]
#[cfg(test)]
mod bench;
pub mod enumerable;
pub mod ops;

pub use enumerable::Enumerable;
pub use ops::{
    find::{ElementNotFound, Found, find, find_index},
    pred::{every, filter, first_or_default, map, some},
    sort::{SortAlgo, partition, precede_ordering, quick_sort, sort, sort_with},
};
