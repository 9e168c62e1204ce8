extern crate std;

use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use crate::linked_list::opaque::{list::RawList, Status};

fn collect(list: &RawList<i32>) -> Vec<i32> {
    let mut values = vec![];
    let mut index = 0;
    while let Some(item) = list.peek(index) {
        values.push(unsafe { *item.as_ref() });
        index += 1;
    }
    values
}

#[test]
fn test_push_pull_order() {
    let item1 = 1;
    let item2 = 2;

    let mut list = RawList::new();
    assert!(list.is_empty());

    assert_eq!(list.push(NonNull::from(&item1)), Status::Ok);
    assert_eq!(list.push(NonNull::from(&item2)), Status::Ok);
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());

    let pulled = list.pull().unwrap();
    assert_eq!(unsafe { *pulled.as_ref() }, 2);
    assert_eq!(list.len(), 1);

    let pulled = list.pull().unwrap();
    assert_eq!(unsafe { *pulled.as_ref() }, 1);
    assert!(list.is_empty());
    assert!(list.pull().is_none());
}

#[test]
fn test_peek_walks_from_head() {
    let item1 = 1;
    let item2 = 2;
    let item3 = 3;

    let mut list = RawList::new();
    list.push(NonNull::from(&item1));
    list.push(NonNull::from(&item2));
    list.push(NonNull::from(&item3));

    assert_eq!(collect(&list), vec![3, 2, 1]);
    assert!(list.peek(3).is_none());
}

#[test]
fn test_contains_statuses() {
    let item1 = 1;
    let item2 = 2;

    let mut list = RawList::new();
    assert_eq!(list.contains(NonNull::from(&item1)), Status::Empty);

    list.push(NonNull::from(&item1));
    assert_eq!(list.contains(NonNull::from(&item1)), Status::Found);
    assert_eq!(list.contains(NonNull::from(&item2)), Status::NotFound);
}

#[test]
fn test_remove_relinks_neighbors() {
    let item1 = 1;
    let item2 = 2;
    let item3 = 3;

    let mut list = RawList::new();
    list.push(NonNull::from(&item1));
    list.push(NonNull::from(&item2));
    list.push(NonNull::from(&item3));

    assert_eq!(list.remove(NonNull::from(&item2)), Status::Ok);
    assert_eq!(collect(&list), vec![3, 1]);

    assert_eq!(list.remove(NonNull::from(&item3)), Status::Ok);
    assert_eq!(collect(&list), vec![1]);

    assert_eq!(list.remove(NonNull::from(&item1)), Status::Ok);
    assert!(list.is_empty());

    assert_eq!(list.remove(NonNull::from(&item1)), Status::Empty);
}

#[test]
fn test_clear_resets_list() {
    let items = [1, 2, 3, 4];

    let mut list = RawList::new();
    for item in &items {
        list.push(NonNull::from(item));
    }

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.pull().is_none());

    // The list stays usable after a clear.
    list.push(NonNull::from(&items[0]));
    assert_eq!(list.len(), 1);
}
