use core::ptr::NonNull;

use super::{list::RawList, status::Status};

/// A nullable owner of a [`RawList`].
///
/// The handle is the unit callers pass around. It starts live and empty
/// after [`ListHandle::create`], and [`ListHandle::destroy`] resets it to
/// the null state after freeing every node. Every operation accepts a null
/// handle and answers through the return channel instead of panicking, so a
/// destroyed handle can still be probed (and destroyed again) safely.
#[derive(Debug)]
pub struct ListHandle<T> {
    inner: Option<RawList<T>>,
}

impl<T> ListHandle<T> {
    /// Creates a handle owning a new, empty list.
    pub const fn create() -> Self {
        ListHandle {
            inner: Some(RawList::new()),
        }
    }

    /// Creates a handle already in the null state.
    pub const fn null() -> Self {
        ListHandle { inner: None }
    }

    /// Returns `true` when the handle no longer owns a list.
    pub fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    /// Frees every node and the list itself, leaving the handle null.
    ///
    /// Calling this on an already-null handle is a no-op.
    pub fn destroy(&mut self) {
        self.inner = None;
    }

    /// Prepends `item`; the previous head becomes its successor.
    ///
    /// Returns [`Status::Null`] for a null handle, [`Status::AllocError`]
    /// when the node cannot be allocated (the list is left unmodified), or
    /// [`Status::Ok`].
    pub fn push(&mut self, item: NonNull<T>) -> Status {
        match self.inner.as_mut() {
            Some(list) => list.push(item),
            None => Status::Null,
        }
    }

    /// Removes the head node and returns its item reference.
    ///
    /// Returns `None`, without changing anything, when the handle is null or
    /// the list is empty. The removed node is freed; the returned item
    /// reference is handed back untouched.
    pub fn pull(&mut self) -> Option<NonNull<T>> {
        self.inner.as_mut()?.pull()
    }

    /// Returns the item reference at zero-based `index` from the head
    /// without removing it.
    ///
    /// Returns `None` when the handle is null, the list is empty, or `index`
    /// is out of bounds.
    pub fn peek_item_by_index(&self, index: usize) -> Option<NonNull<T>> {
        self.inner.as_ref()?.peek(index)
    }

    /// Searches head-to-tail for `item` by address.
    ///
    /// Returns [`Status::Null`] for a null handle, [`Status::Empty`] for a
    /// live list with no nodes, otherwise [`Status::Found`] or
    /// [`Status::NotFound`].
    pub fn contains_item(&self, item: NonNull<T>) -> Status {
        match self.inner.as_ref() {
            Some(list) => list.contains(item),
            None => Status::Null,
        }
    }

    /// Returns the maintained node count, or `-1` for a null handle.
    ///
    /// Never walks the chain.
    pub fn length(&self) -> isize {
        match self.inner.as_ref() {
            Some(list) => list.len() as isize,
            None => -1,
        }
    }

    /// Frees every node and resets the list to empty, keeping the handle
    /// live. No-op on a null handle.
    pub fn clear(&mut self) {
        if let Some(list) = self.inner.as_mut() {
            list.clear();
        }
    }

    /// Unlinks and frees the first node holding `item`.
    ///
    /// Returns [`Status::Null`] for a null handle, [`Status::Empty`] for a
    /// live list with no nodes, [`Status::NotFound`] when no node matches,
    /// or [`Status::Ok`] after removing exactly one node.
    pub fn remove_item(&mut self, item: NonNull<T>) -> Status {
        match self.inner.as_mut() {
            Some(list) => list.remove(item),
            None => Status::Null,
        }
    }
}

impl<T> Default for ListHandle<T> {
    fn default() -> Self {
        Self::create()
    }
}
