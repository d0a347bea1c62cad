use crate::arena::{Arena, Handle};
use crate::error::InvariantViolation;
use crate::red_black_tree::node::{Color, Node};
use log::{debug, trace};
use std::cmp::Ordering;
use std::mem;

const CHUNK_SIZE: usize = 64;

/// The comparator-agnostic part of a red black tree.
///
/// Every node lives in `arena`, so the tree is the sole owner of the node graph. Callers pass the
/// ordering in on each operation: `insert` takes a two-argument comparator and lookups take a
/// probe closure that compares the key being searched for against a stored value.
#[derive(Clone)]
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: Option<Handle>,
    len: usize,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(CHUNK_SIZE),
            root: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn is_red(&self, handle: Option<Handle>) -> bool {
        match handle {
            None => false,
            Some(handle) => self.arena[handle].color == Color::Red,
        }
    }

    fn parent(&self, handle: Handle) -> Option<Handle> {
        self.arena[handle].parent
    }

    // Points whichever link referenced `old` (a child link of `parent`, or the root) at `new`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Handle) {
        match parent {
            None => self.root = Some(new),
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(old) {
                    node.left = Some(new);
                } else {
                    node.right = Some(new);
                }
            },
        }
    }

    fn rotate_left(&mut self, handle: Handle) {
        trace!("rotating left at {:?}", handle);
        let child = self.arena[handle]
            .right
            .expect("Expected right child node to be `Some`.");
        let grandchild = self.arena[child].left;

        self.arena[handle].right = grandchild;
        if let Some(grandchild) = grandchild {
            self.arena[grandchild].parent = Some(handle);
        }

        let parent = self.parent(handle);
        self.arena[child].parent = parent;
        self.replace_child(parent, handle, child);

        self.arena[child].left = Some(handle);
        self.arena[handle].parent = Some(child);
    }

    fn rotate_right(&mut self, handle: Handle) {
        trace!("rotating right at {:?}", handle);
        let child = self.arena[handle]
            .left
            .expect("Expected left child node to be `Some`.");
        let grandchild = self.arena[child].right;

        self.arena[handle].left = grandchild;
        if let Some(grandchild) = grandchild {
            self.arena[grandchild].parent = Some(handle);
        }

        let parent = self.parent(handle);
        self.arena[child].parent = parent;
        self.replace_child(parent, handle, child);

        self.arena[child].right = Some(handle);
        self.arena[handle].parent = Some(child);
    }

    // Restores the coloring invariants after `curr` was linked in as a red leaf.
    fn fix_after_insert(&mut self, mut curr: Handle) {
        while let Some(parent) = self.parent(curr) {
            if self.arena[parent].color == Color::Black {
                break;
            }

            // a red node is never the root, so the grandparent exists
            let grandparent = self
                .parent(parent)
                .expect("Expected red node to have a parent.");

            if self.arena[grandparent].left == Some(parent) {
                let uncle = self.arena[grandparent].right;
                match uncle {
                    Some(uncle) if self.arena[uncle].color == Color::Red => {
                        self.arena[parent].color = Color::Black;
                        self.arena[uncle].color = Color::Black;
                        self.arena[grandparent].color = Color::Red;
                        curr = grandparent;
                    },
                    _ => {
                        if self.arena[parent].right == Some(curr) {
                            curr = parent;
                            self.rotate_left(curr);
                        }
                        let parent = self.parent(curr).expect("Expected node to have a parent.");
                        self.arena[parent].color = Color::Black;
                        self.arena[grandparent].color = Color::Red;
                        self.rotate_right(grandparent);
                    },
                }
            } else {
                let uncle = self.arena[grandparent].left;
                match uncle {
                    Some(uncle) if self.arena[uncle].color == Color::Red => {
                        self.arena[parent].color = Color::Black;
                        self.arena[uncle].color = Color::Black;
                        self.arena[grandparent].color = Color::Red;
                        curr = grandparent;
                    },
                    _ => {
                        if self.arena[parent].left == Some(curr) {
                            curr = parent;
                            self.rotate_right(curr);
                        }
                        let parent = self.parent(curr).expect("Expected node to have a parent.");
                        self.arena[parent].color = Color::Black;
                        self.arena[grandparent].color = Color::Red;
                        self.rotate_left(grandparent);
                    },
                }
            }
        }

        if let Some(root) = self.root {
            self.arena[root].color = Color::Black;
        }
    }

    /// Inserts `value`, replacing and returning the stored value if one compares equal to it.
    pub fn insert<F>(&mut self, value: T, mut cmp: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut parent = None;
        let mut is_left = false;
        let mut curr = self.root;

        while let Some(handle) = curr {
            let node = &mut self.arena[handle];
            match cmp(&value, &node.value) {
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
                Ordering::Less => {
                    is_left = true;
                    curr = node.left;
                },
                Ordering::Greater => {
                    is_left = false;
                    curr = node.right;
                },
            }
            parent = Some(handle);
        }

        let handle = self.arena.allocate(Node::new(value, parent));
        match parent {
            None => self.root = Some(handle),
            Some(parent) if is_left => self.arena[parent].left = Some(handle),
            Some(parent) => self.arena[parent].right = Some(handle),
        }
        self.len += 1;
        self.fix_after_insert(handle);
        None
    }

    fn find<F>(&self, mut probe: F) -> Option<Handle>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match probe(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns the stored value for which `probe` returns `Ordering::Equal`. `probe` reports how
    /// the key being searched for compares to the value it is given.
    pub fn get<F>(&self, probe: F) -> Option<&T>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.find(probe).map(|handle| &self.arena[handle].value)
    }

    pub fn get_mut<F>(&mut self, probe: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> Ordering,
    {
        match self.find(probe) {
            Some(handle) => Some(&mut self.arena[handle].value),
            None => None,
        }
    }

    pub fn min(&self) -> Option<&T> {
        self.root.map(|mut curr| {
            while let Some(left) = self.arena[curr].left {
                curr = left;
            }
            &self.arena[curr].value
        })
    }

    pub fn max(&self) -> Option<&T> {
        self.root.map(|mut curr| {
            while let Some(right) = self.arena[curr].right {
                curr = right;
            }
            &self.arena[curr].value
        })
    }

    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!("clearing red black tree with {} nodes", self.len);
        }
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn iter(&self) -> TreeIter<'_, T> {
        TreeIter {
            arena: &self.arena,
            current: self.root,
            stack: Vec::new(),
            remaining: self.len,
        }
    }

    fn black_height(
        &self,
        handle: Option<Handle>,
        parent: Option<Handle>,
    ) -> Result<usize, InvariantViolation> {
        let handle = match handle {
            Some(handle) => handle,
            None => return Ok(0),
        };
        let node = &self.arena[handle];

        if node.parent != parent {
            return Err(InvariantViolation::ParentLink);
        }
        if node.color == Color::Red && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(InvariantViolation::RedNodeRedChild);
        }

        let left_height = self.black_height(node.left, Some(handle))?;
        let right_height = self.black_height(node.right, Some(handle))?;
        if left_height != right_height {
            return Err(InvariantViolation::BlackHeight);
        }

        match node.color {
            Color::Black => Ok(left_height + 1),
            Color::Red => Ok(left_height),
        }
    }

    /// Checks every red black tree invariant under the ordering `cmp`.
    pub fn validate<F>(&self, mut cmp: F) -> Result<(), InvariantViolation>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.is_red(self.root) {
            return Err(InvariantViolation::BlackRoot);
        }
        self.black_height(self.root, None)?;

        let mut count = 0;
        let mut prev = None;
        for value in self.iter() {
            if let Some(prev) = prev {
                if cmp(prev, value) != Ordering::Less {
                    return Err(InvariantViolation::BinarySearch);
                }
            }
            prev = Some(value);
            count += 1;
        }

        if count != self.len || self.arena.len() != self.len {
            return Err(InvariantViolation::SizeMismatch);
        }
        Ok(())
    }
}

impl<T> IntoIterator for Tree<T> {
    type IntoIter = TreeIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        TreeIntoIter {
            current: self.root,
            remaining: self.len,
            arena: self.arena,
            stack: Vec::new(),
        }
    }
}

/// An owning in-order iterator over a `Tree<T>`. Nodes are released as they are yielded.
pub struct TreeIntoIter<T> {
    arena: Arena<Node<T>>,
    current: Option<Handle>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<T> Iterator for TreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.current = self.arena[handle].left;
            self.stack.push(handle);
        }
        self.stack.pop().map(|handle| {
            let node = self.arena.free(handle);
            self.current = node.right;
            self.remaining -= 1;
            node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for TreeIntoIter<T> {}

/// A borrowing in-order iterator over a `Tree<T>`.
pub struct TreeIter<'a, T> {
    arena: &'a Arena<Node<T>>,
    current: Option<Handle>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while let Some(handle) = self.current {
            self.current = arena[handle].left;
            self.stack.push(handle);
        }
        self.stack.pop().map(|handle| {
            let node = &arena[handle];
            self.current = node.right;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for TreeIter<'a, T> {}
