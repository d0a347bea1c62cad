//! Ordered collections backed by a red black tree.
//!
//! `OrderedSet<T, C>` keeps its elements in ascending order under a `Comparator<T>` and supports
//! union, intersection and equality. `OrderedMap<K, V, C>` is built on top of it, ordering
//! key-value pairs by key alone.

pub mod compare;
pub mod red_black_tree;

mod arena;
mod error;

pub use crate::error::InvariantViolation;
