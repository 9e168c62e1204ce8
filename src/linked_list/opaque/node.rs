use core::alloc::Layout;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc};

/// A heap-allocated node pairing one item reference with the link to the
/// next node.
///
/// The item reference is stored verbatim; the node never dereferences it.
pub(crate) struct RawNode<T> {
    pub(crate) item: NonNull<T>,
    pub(crate) next: Option<NonNull<RawNode<T>>>,
}

impl<T> RawNode<T> {
    /// Allocates a node holding `item` that links to `next`.
    ///
    /// Returns `None` when the allocator cannot satisfy the request, leaving
    /// nothing to clean up.
    pub(crate) fn allocate(
        item: NonNull<T>,
        next: Option<NonNull<RawNode<T>>>,
    ) -> Option<NonNull<RawNode<T>>> {
        let layout = Layout::new::<RawNode<T>>();
        let node = NonNull::new(unsafe { alloc(layout) } as *mut RawNode<T>)?;
        unsafe { node.as_ptr().write(RawNode { item, next }) };
        Some(node)
    }

    /// Frees the node storage and returns the item reference it held.
    ///
    /// # Safety
    ///
    /// `node` must come from [`RawNode::allocate`], must already be unlinked
    /// from its list, and must not be released twice.
    pub(crate) unsafe fn release(node: NonNull<RawNode<T>>) -> NonNull<T> {
        unsafe {
            let item = node.as_ref().item;
            dealloc(node.as_ptr() as *mut u8, Layout::new::<RawNode<T>>());
            item
        }
    }
}
