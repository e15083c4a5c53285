extern crate std;

use std::boxed::Box;
use std::vec::Vec;

use core::ptr::NonNull;

use rand::Rng;

use crate::{Chain, List, Node, NodeNext, Reclaim};

fn heap(val: u32) -> NonNull<Node<u32>> {
    NonNull::from(Box::leak(Box::new(Node::new(val))))
}

fn values(list: &List<NodeNext<u32>>) -> Vec<u32> {
    let mut vals = Vec::new();
    unsafe {
        for e in list.iter() {
            vals.push(*e.as_ref().data());
        }
    }
    vals
}

fn free_all(list: &mut List<NodeNext<u32>>) -> usize {
    let mut freed = 0;
    list.clear(Reclaim::Free(&mut |e| {
        freed += 1;
        drop(unsafe { Box::from_raw(e.as_ptr()) });
    }));
    freed
}

#[test]
fn test_sort_empty_and_single() {
    let mut list = List::<NodeNext<u32>>::new();
    list.sort_by(|a, b| a.data().cmp(b.data()));
    assert!(list.is_empty());

    list.push(heap(7));
    list.sort_by(|a, b| a.data().cmp(b.data()));
    assert_eq!(values(&list), [7]);
    assert_eq!(free_all(&mut list), 1);
}

#[test]
fn test_sort_two_elements() {
    let mut list = List::<NodeNext<u32>>::new();
    list.push(heap(1));
    list.push(heap(2));
    list.sort_by(|a, b| a.data().cmp(b.data()));
    assert_eq!(values(&list), [1, 2]);
    assert_eq!(free_all(&mut list), 2);
}

#[test]
fn test_sort_presorted_and_reversed() {
    // Pushing ascending values yields a descending chain.
    let mut list = List::<NodeNext<u32>>::new();
    for v in 0..100 {
        list.push(heap(v));
    }
    list.sort_by(|a, b| a.data().cmp(b.data()));
    let vals = values(&list);
    assert!(vals.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(vals.len(), 100);

    // Sorting a sorted chain keeps it sorted.
    list.sort_by(|a, b| a.data().cmp(b.data()));
    assert_eq!(values(&list), vals);
    assert_eq!(free_all(&mut list), 100);
}

#[test]
fn test_sort_random_chains() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let len = rng.random_range(1..=100);
        let mut list = List::<NodeNext<u32>>::new();
        for _ in 0..len {
            list.push(heap(rng.random_range(0..20)));
        }

        list.sort_by(|a, b| a.data().cmp(b.data()));

        assert_eq!(list.len(), len);
        let vals = values(&list);
        assert!(vals.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(free_all(&mut list), len);
    }
}

#[test]
fn test_sort_descending_comparator() {
    let mut list = List::<NodeNext<u32>>::new();
    for v in [3, 1, 4, 1, 5] {
        list.push(heap(v));
    }
    list.sort_by(|a, b| b.data().cmp(a.data()));
    assert_eq!(values(&list), [5, 4, 3, 1, 1]);
    assert_eq!(free_all(&mut list), 5);
}
