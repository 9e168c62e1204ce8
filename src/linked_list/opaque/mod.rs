//! # Opaque-handle singly linked list
//!
//! A singly linked list of caller-owned item references, addressed through a
//! nullable [`handle::ListHandle`].
//!
//! ## Core Components
//!
//! - [`status::Status`]: The closed set of result codes returned by the list operations.
//! - [`list::RawList`]: The head-plus-count list over heap-allocated nodes.
//! - [`handle::ListHandle`]: A nullable owner of a `RawList`; the public entry point.
//!
//! ## Ownership
//!
//! Items are stored as `NonNull<T>` and compared by address, never by value.
//! The list never dereferences or frees an item; the caller keeps full
//! ownership of the pointed-to data and must keep it alive for as long as it
//! can be handed back by `pull` or `peek_item_by_index`. The list owns only
//! its nodes and frees each of them on exactly one path (pull, remove, clear,
//! destroy, drop).
//!
//! ## Null handles
//!
//! Every operation accepts a null handle and reports it through the return
//! channel ([`status::Status::Null`], `None`, or the `-1` length sentinel);
//! nothing panics. `destroy` resets the handle to the null state and is a
//! no-op when called again.

pub mod handle;
pub mod list;
pub mod node;
pub mod status;

mod cursor;

#[cfg(test)]
mod tests;

pub use handle::ListHandle;
pub use status::Status;
