use super::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(pair: &EndpointPair) -> u64 {
    let mut hasher = DefaultHasher::new();
    pair.hash(&mut hasher);
    hasher.finish()
}

// *************
// *** tests ***
// *************

#[test]
fn endpoint_pair_should_ignore_direction() {
    let a = NodeId::new();
    let b = NodeId::new();

    let ab = EndpointPair::new(a.clone(), b.clone());
    let ba = EndpointPair::new(b.clone(), a.clone());

    assert_eq!(ab, ba, "pairs should be equal regardless of direction");
    assert_eq!(
        hash_of(&ab),
        hash_of(&ba),
        "pair hashes should be equal regardless of direction"
    );
}

#[test]
fn endpoint_pair_contains_should_work() {
    let a = NodeId::new();
    let b = NodeId::new();
    let c = NodeId::new();

    let pair = EndpointPair::new(a.clone(), b.clone());
    assert!(pair.contains(&a), "pair should contain first endpoint");
    assert!(pair.contains(&b), "pair should contain second endpoint");
    assert!(!pair.contains(&c), "pair should not contain other nodes");
}

#[test]
fn edge_equality_should_ignore_direction_and_data() {
    let a = NodeId::new();
    let b = NodeId::new();

    let ab = Edge::new(1, a.clone(), b.clone());
    let ba = Edge::new(2, b.clone(), a.clone());

    assert_eq!(ab, ba, "edges connecting the same pair should be equal");
}

#[test]
fn edge_equality_should_distinguish_pairs() {
    let a = NodeId::new();
    let b = NodeId::new();
    let c = NodeId::new();

    let ab = Edge::new(1, a.clone(), b.clone());
    let ac = Edge::new(1, a.clone(), c.clone());

    assert_ne!(ab, ac, "edges connecting different pairs should differ");
}

#[test]
fn edge_opposite_to_should_work() {
    let a = NodeId::new();
    let b = NodeId::new();

    let edge = Edge::new((), a.clone(), b.clone());
    assert_eq!(&b, edge.opposite_to(&a), "opposite of head should be tail");
    assert_eq!(&a, edge.opposite_to(&b), "opposite of tail should be head");
}

#[test]
fn edge_opposite_to_non_endpoint_should_return_head() {
    let a = NodeId::new();
    let b = NodeId::new();
    let c = NodeId::new();

    let edge = Edge::new((), a.clone(), b.clone());
    assert_eq!(&a, edge.opposite_to(&c), "non endpoint should map to head");
}

#[test]
fn edge_is_incident_to_should_work() {
    let a = NodeId::new();
    let b = NodeId::new();
    let c = NodeId::new();

    let edge = Edge::new((), a.clone(), b.clone());
    assert!(edge.is_incident_to(&a));
    assert!(edge.is_incident_to(&b));
    assert!(!edge.is_incident_to(&c));
}

#[test]
fn edge_data_accessors_should_work() {
    let a = NodeId::new();
    let b = NodeId::new();

    let mut edge = Edge::new(1, a, b);
    assert_eq!(&1, edge.data(), "data should be set");

    edge.set_data(2);
    assert_eq!(&2, edge.data(), "data should be updated");

    *edge.data_mut() += 1;
    assert_eq!(3, *edge, "data should deref");

    assert_eq!(3, edge.into_data(), "into data should return data");
}
