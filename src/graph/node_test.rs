use super::*;
use crate::dev_utils;

// *************
// *** tests ***
// *************

#[test]
fn new_node_should_be_disconnected() {
    let node = Node::new(dev_utils::word());

    assert!(!node.is_connected(), "new node should have no edges");
    assert!(node.incident_edges().is_empty());
}

#[test]
fn data_accessors_should_work() {
    let mut node = Node::new(1);
    assert_eq!(&1, node.data(), "data should be set");

    node.set_data(2);
    assert_eq!(&2, node.data(), "data should be updated");

    *node.data_mut() += 1;
    assert_eq!(3, *node, "data should deref");

    assert_eq!(3, node.into_data(), "into data should return data");
}

#[test]
fn add_edge_ref_should_preserve_order() {
    let mut node = Node::new(dev_utils::word());
    let e1 = EdgeId::new();
    let e2 = EdgeId::new();

    node.add_edge_ref(e1.clone());
    node.add_edge_ref(e2.clone());

    let incident = node.incident_edges().iter().collect::<Vec<_>>();
    assert_eq!(
        vec![&e1, &e2],
        incident,
        "incident edges should be in insertion order"
    );
}

#[test]
fn remove_edge_ref_should_work() {
    let mut node = Node::new(dev_utils::word());
    let e1 = EdgeId::new();

    node.add_edge_ref(e1.clone());
    assert!(node.is_connected());

    node.remove_edge_ref(&e1);
    assert!(!node.is_connected(), "edge ref should be removed");
}

#[test]
fn edge_to_should_return_connecting_edge() {
    let mut a = Node::new(dev_utils::word());
    let mut b = Node::new(dev_utils::word());
    let edge = EdgeId::new();

    a.add_edge_ref(edge.clone());
    b.add_edge_ref(edge.clone());

    assert_eq!(
        Some(&edge),
        a.edge_to(&b),
        "shared incident edge should be found"
    );
}

#[test]
fn edge_to_should_return_none_when_disconnected() {
    let a = Node::new(dev_utils::word());
    let b = Node::new(dev_utils::word());

    assert_eq!(None, a.edge_to(&b), "disconnected nodes should have no edge");
}

#[test]
fn edge_to_should_take_last_match() {
    // two shared edges only occur if the one edge per pair invariant is
    // violated; the scan policy is still fixed
    let mut a = Node::new(dev_utils::word());
    let mut b = Node::new(dev_utils::word());
    let e1 = EdgeId::new();
    let e2 = EdgeId::new();

    a.add_edge_ref(e1.clone());
    a.add_edge_ref(e2.clone());
    b.add_edge_ref(e1.clone());
    b.add_edge_ref(e2.clone());

    assert_eq!(
        Some(&e2),
        a.edge_to(&b),
        "scan should take the last match in incident order"
    );
}

#[test]
fn is_neighbor_should_work() {
    let mut a = Node::new(dev_utils::word());
    let mut b = Node::new(dev_utils::word());
    let c = Node::new(dev_utils::word());
    let edge = EdgeId::new();

    a.add_edge_ref(edge.clone());
    b.add_edge_ref(edge.clone());

    assert!(a.is_neighbor(&b), "nodes sharing an edge should be neighbors");
    assert!(b.is_neighbor(&a), "neighbor relation should be symmetric");
    assert!(!a.is_neighbor(&c), "nodes without a shared edge should not be neighbors");
}
