use std::error::Error;
use std::fmt;

/// A red black tree invariant that was found to be broken by `validate`.
///
/// A tree can only end up in one of these states if its comparator is not a consistent total
/// order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvariantViolation {
    /// The root node is red.
    BlackRoot,
    /// A child's parent link does not point back at the node that owns it.
    ParentLink,
    /// A red node has a red child.
    RedNodeRedChild,
    /// Two paths from the same node to an empty leaf pass through a different number of black
    /// nodes.
    BlackHeight,
    /// An in-order traversal is not strictly ascending under the comparator.
    BinarySearch,
    /// The recorded length differs from the number of reachable nodes.
    SizeMismatch,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            InvariantViolation::BlackRoot => "root node is red",
            InvariantViolation::ParentLink => "parent link does not match child link",
            InvariantViolation::RedNodeRedChild => "red node has a red child",
            InvariantViolation::BlackHeight => "black height differs between paths",
            InvariantViolation::BinarySearch => "values are not strictly ascending",
            InvariantViolation::SizeMismatch => "length differs from reachable node count",
        };
        write!(f, "red black tree invariant violated: {}", description)
    }
}

impl Error for InvariantViolation {}
