extern crate std;

use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use crate::{Chain, Node, NodeNext, SlimList};

fn values(list: &SlimList<NodeNext<i32>>) -> Vec<i32> {
    let mut vals = Vec::new();
    unsafe {
        for e in list.iter() {
            vals.push(*e.as_ref().data());
        }
    }
    vals
}

#[test]
fn test_slim_list_with_nodes() {
    let mut list = SlimList::<NodeNext<i32>>::new();
    let mut node1 = Node::new(1);
    let mut node2 = Node::new(2);
    let mut node3 = Node::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3));

    assert_eq!(values(&list), vec![3, 2, 1]);

    list.reverse();
    assert_eq!(values(&list), vec![1, 2, 3]);

    let popped = list.pop().unwrap();
    assert_eq!(unsafe { *popped.as_ref().data() }, 1);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_node_payload_access() {
    let mut node = Node::new(41);
    *node.data_mut() += 1;
    assert_eq!(*node.data(), 42);
    assert_eq!(node.into_data(), 42);

    let node: Node<i32> = Node::default();
    assert_eq!(*node.data(), 0);
}
