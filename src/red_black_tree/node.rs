use crate::arena::Handle;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// `left` and `right` are the owning links of the tree. `parent` is a back-reference used only
/// while rotating and rebalancing.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub color: Color,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
    pub parent: Option<Handle>,
}

impl<T> Node<T> {
    pub fn new(value: T, parent: Option<Handle>) -> Self {
        Node {
            value,
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }
}
