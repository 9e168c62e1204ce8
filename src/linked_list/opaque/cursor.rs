use core::ptr::NonNull;

use super::{list::RawList, node::RawNode};

/// A head-to-tail walk over the nodes of a [`RawList`].
///
/// The shared borrow of the list keeps it unmodified for the lifetime of the
/// cursor, so each visited node stays valid until the cursor moves past it.
pub(crate) struct Nodes<'a, T> {
    _list: &'a RawList<T>,
    current: Option<NonNull<RawNode<T>>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(list: &'a RawList<T>) -> Self {
        Self {
            current: list.head(),
            _list: list,
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NonNull<RawNode<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next };
        })
    }
}
