//! Chunked allocator that owns the nodes of a tree.

use std::mem;
use std::ops::{Index, IndexMut};

/// A copyable reference to a slot in an `Arena<T>`.
///
/// A handle does not own the value it points to, so it can be stored freely as a child or parent
/// link without affecting the lifetime of the value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
}

#[derive(Clone)]
enum Block<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// An allocator for a single type of object that hands out `Handle`s instead of references.
///
/// Objects are stored in fixed-capacity chunks so that allocating never moves an existing object.
/// Freed slots are threaded onto a free list and reused by later allocations. Every object still
/// in the arena is dropped when the arena is cleared or dropped.
#[derive(Clone)]
pub struct Arena<T> {
    head: Option<Handle>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> Arena<T> {
    fn is_valid_handle(&self, handle: Handle) -> bool {
        handle.chunk_index < self.chunks.len()
            && handle.block_index < self.chunks[handle.chunk_index].len()
    }

    /// Constructs a new, empty `Arena<T>` holding at most `chunk_size` objects per chunk.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Expected a positive chunk size.");
        Arena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves `value` into the arena and returns a handle to it.
    pub fn allocate(&mut self, value: T) -> Handle {
        if self.len == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        self.len += 1;

        match self.head.take() {
            None => {
                let chunk_index = self.chunks.len() - 1;
                let chunk = &mut self.chunks[chunk_index];
                chunk.push(Block::Occupied(value));
                Handle {
                    chunk_index,
                    block_index: chunk.len() - 1,
                }
            },
            Some(handle) => {
                let block = mem::replace(
                    &mut self.chunks[handle.chunk_index][handle.block_index],
                    Block::Occupied(value),
                );
                match block {
                    Block::Vacant(next) => self.head = next,
                    Block::Occupied(_) => panic!("Expected free list to point at a vacant block."),
                }
                handle
            },
        }
    }

    /// Removes the object referenced by `handle` from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` refers to a slot that is out of bounds or already vacant.
    pub fn free(&mut self, handle: Handle) -> T {
        assert!(
            self.is_valid_handle(handle),
            "Expected handle to be in bounds of the arena.",
        );
        let block = mem::replace(
            &mut self.chunks[handle.chunk_index][handle.block_index],
            Block::Vacant(self.head),
        );
        match block {
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(handle);
                value
            },
            Block::Vacant(next) => {
                self.chunks[handle.chunk_index][handle.block_index] = Block::Vacant(next);
                panic!("Expected handle to refer to an occupied block.");
            },
        }
    }

    /// Drops every object in the arena and releases all chunks.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.head = None;
        self.len = 0;
        self.capacity = 0;
    }

    /// Returns a reference to the object referenced by `handle`, or `None` if the slot is vacant
    /// or out of bounds.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        match self.chunks[handle.chunk_index][handle.block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the object referenced by `handle`, or `None` if the slot is
    /// vacant or out of bounds.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        match self.chunks[handle.chunk_index][handle.block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Expected handle to refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Expected handle to refer to a live object.")
    }
}
