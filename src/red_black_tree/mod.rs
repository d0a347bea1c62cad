//! Self-balancing binary search tree that uses a color bit and parent links to keep the tree
//! approximately balanced during insertions.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{OrderedMap, OrderedMapIntoIter, OrderedMapIter};
pub use self::set::{OrderedSet, OrderedSetIntoIter, OrderedSetIter};
