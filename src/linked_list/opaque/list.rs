use core::ptr::NonNull;

use super::{cursor::Nodes, node::RawNode, status::Status};

/// A singly linked list of opaque item references.
///
/// Insertion happens at the head, lookup and removal compare item references
/// by address. The list owns its nodes and nothing else: dropping it frees
/// every remaining node but leaves the referenced items untouched.
#[derive(Debug)]
pub struct RawList<T> {
    head: Option<NonNull<RawNode<T>>>,
    size: usize,
}

impl<T> RawList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        RawList {
            head: None,
            size: 0,
        }
    }

    pub(crate) fn head(&self) -> Option<NonNull<RawNode<T>>> {
        self.head
    }

    /// Prepends `item` in a freshly allocated node.
    ///
    /// Returns [`Status::AllocError`] and leaves the list untouched when the
    /// node cannot be allocated.
    pub fn push(&mut self, item: NonNull<T>) -> Status {
        match RawNode::allocate(item, self.head) {
            Some(node) => {
                self.head = Some(node);
                self.size += 1;
                Status::Ok
            }
            None => Status::AllocError,
        }
    }

    /// Removes the head node and returns its item reference, or `None` when
    /// the list is empty.
    pub fn pull(&mut self) -> Option<NonNull<T>> {
        let head = self.head.take()?;
        unsafe {
            self.head = head.as_ref().next;
            self.size -= 1;
            Some(RawNode::release(head))
        }
    }

    /// Returns the item reference at zero-based `index` from the head
    /// without removing it, or `None` when `index` is past the last node.
    pub fn peek(&self, index: usize) -> Option<NonNull<T>> {
        self.nodes()
            .nth(index)
            .map(|node| unsafe { node.as_ref().item })
    }

    /// Searches head-to-tail for `item` by address.
    ///
    /// Returns [`Status::Empty`] for a list with no nodes, otherwise
    /// [`Status::Found`] or [`Status::NotFound`].
    pub fn contains(&self, item: NonNull<T>) -> Status {
        if self.head.is_none() {
            return Status::Empty;
        }
        for node in self.nodes() {
            if unsafe { node.as_ref().item } == item {
                return Status::Found;
            }
        }
        Status::NotFound
    }

    /// Unlinks and frees the first node holding `item`, relinking its
    /// predecessor to its successor.
    ///
    /// Returns [`Status::Empty`] for a list with no nodes,
    /// [`Status::NotFound`] when no node matches, [`Status::Ok`] otherwise.
    pub fn remove(&mut self, item: NonNull<T>) -> Status {
        if self.head.is_none() {
            return Status::Empty;
        }
        unsafe {
            let mut prev: Option<NonNull<RawNode<T>>> = None;
            let mut current = self.head;
            while let Some(node) = current {
                if node.as_ref().item != item {
                    prev = current;
                    current = node.as_ref().next;
                    continue;
                }

                match prev {
                    Some(mut prev) => prev.as_mut().next = node.as_ref().next,
                    None => self.head = node.as_ref().next,
                }
                RawNode::release(node);
                self.size -= 1;
                return Status::Ok;
            }
        }
        Status::NotFound
    }

    /// Frees every node and resets the list to empty. The list stays usable.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            unsafe {
                current = node.as_ref().next;
                RawNode::release(node);
            }
        }
        self.size = 0;
    }

    /// Returns the maintained node count without walking the chain.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` when the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub(crate) fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }
}

impl<T> Default for RawList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for RawList<T> {}
unsafe impl<T: Sync> Sync for RawList<T> {}
