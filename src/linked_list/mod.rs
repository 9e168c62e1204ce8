//! Linked list implementations.
//!
//! The [`opaque`] flavor stores caller-owned item references behind a
//! nullable handle. The list allocates one node per stored reference and
//! frees exactly those nodes; the referenced items themselves are never
//! read, copied, or freed by the list.
//!
//! # Examples
//!
//! ```
//! use opal_collections::linked_list::opaque::{ListHandle, Status};
//! use core::ptr::NonNull;
//!
//! let a = 10;
//! let b = 20;
//! let c = 30;
//!
//! let mut list = ListHandle::create();
//! assert_eq!(list.push(NonNull::from(&a)), Status::Ok);
//! assert_eq!(list.push(NonNull::from(&b)), Status::Ok);
//! assert_eq!(list.push(NonNull::from(&c)), Status::Ok);
//!
//! assert_eq!(list.length(), 3);
//! assert_eq!(list.peek_item_by_index(0), Some(NonNull::from(&c)));
//!
//! assert_eq!(list.remove_item(NonNull::from(&b)), Status::Ok);
//! assert_eq!(list.length(), 2);
//!
//! list.destroy();
//! assert!(list.is_null());
//! assert_eq!(list.length(), -1);
//! ```
pub mod opaque;
