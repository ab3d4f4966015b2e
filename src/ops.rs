//! Eager operations over borrowed sequences.
//!
//! Read-only operations take `&[T]` and allocate their output. Only the sorts
//! take `&mut [T]` and reorder the caller's storage.

pub mod find;
pub mod pred;
pub mod sort;
