//! Unit tests for Node.
//!
//! These tests verify chain construction, decomposition, structural
//! equality, iteration, mapping, and folding.

use funrs::error::Error;
use funrs::maybe::Maybe;
use funrs::node::Node;
use funrs::typeclass::{Foldable, Functor, FunctorMut};
use rstest::rstest;

// =============================================================================
// Construction and decomposition
// =============================================================================

#[rstest]
fn test_singleton_next_is_nothing() {
    let node = Node::singleton(1);
    let (value, next) = node.get();
    assert_eq!(value, &1);
    assert!(next.is_nothing());
}

#[rstest]
fn test_new_next_is_just() {
    let node = Node::new(1, Maybe::Just(Node::singleton(2)));
    let (value, next) = node.get();
    assert_eq!(value, &1);
    assert_eq!(next, Maybe::Just(&Node::singleton(2)));
}

#[rstest]
fn test_of_builds_chain_in_order() {
    let chain = Node::of([1, 2, 3, 4, 5]).unwrap();
    let expected = Node::new(
        1,
        Maybe::Just(Node::new(
            2,
            Maybe::Just(Node::new(
                3,
                Maybe::Just(Node::new(4, Maybe::Just(Node::singleton(5)))),
            )),
        )),
    );
    assert_eq!(chain, expected);
}

#[rstest]
fn test_of_empty_sequence_fails() {
    assert_eq!(Node::<i32>::of([]), Err(Error::EmptyValues));
    assert_eq!(Node::of(Vec::<String>::new()), Err(Error::EmptyValues));
}

#[rstest]
fn test_get_value_and_get_next() {
    let chain = Node::of([1, 2]).unwrap();
    assert_eq!(chain.get_value(), &1);
    assert_eq!(chain.get_next().map(Node::get_value), Maybe::Just(&2));
}

#[rstest]
fn test_into_parts_detaches_remainder() {
    let chain = Node::of([1, 2, 3]).unwrap();
    let (value, rest) = chain.into_parts();
    assert_eq!(value, 1);

    let rest = rest.unsafe_get();
    assert_eq!(rest, Node::of([2, 3]).unwrap());
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_equal_chains() {
    assert_eq!(Node::singleton(1), Node::singleton(1));
    assert_eq!(
        Node::new(1, Maybe::Just(Node::singleton(2))),
        Node::new(1, Maybe::Just(Node::singleton(2)))
    );
}

#[rstest]
fn test_unequal_values() {
    assert_ne!(Node::singleton(1), Node::singleton(2));
    assert_ne!(
        Node::new(1, Maybe::Just(Node::singleton(2))),
        Node::new(1, Maybe::Just(Node::singleton(3)))
    );
}

#[rstest]
fn test_unequal_lengths() {
    assert_ne!(Node::of([1, 2]).unwrap(), Node::singleton(1));
    assert_ne!(Node::singleton(1), Node::of([1, 2]).unwrap());
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_iter_yields_values_in_order() {
    let chain = Node::of([1, 2]).unwrap();
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[rstest]
fn test_iter_is_restartable() {
    let chain = Node::of([1, 2, 3]).unwrap();
    let first: Vec<&i32> = chain.iter().collect();
    let second: Vec<&i32> = chain.iter().collect();
    assert_eq!(first, second);
}

#[rstest]
fn test_enumerated_traversal() {
    let chain = Node::of([1, 2, 3, 4, 5]).unwrap();
    for (index, value) in chain.iter().enumerate() {
        assert_eq!(*value, i32::try_from(index).unwrap() + 1);
    }
}

#[rstest]
fn test_owned_into_iter() {
    let chain = Node::of(["a".to_string(), "b".to_string()]).unwrap();
    let collected: Vec<String> = chain.into_iter().collect();
    assert_eq!(collected, vec!["a".to_string(), "b".to_string()]);
}

// =============================================================================
// map
// =============================================================================

#[rstest]
fn test_map_increments_each_value() {
    let chain = Node::of([1, 2]).unwrap();
    assert_eq!(chain.map(|x| x + 1), Node::of([2, 3]).unwrap());

    let longer = Node::of([1, 2, 3]).unwrap();
    assert_eq!(longer.map(|x| x + 1), Node::of([2, 3, 4]).unwrap());
}

#[rstest]
fn test_map_preserves_length_and_order() {
    let chain = Node::of([10, 20, 30, 40]).unwrap();
    let mapped = chain.map(|x| x / 10);
    assert_eq!(mapped.len(), chain.len());
    for (mapped_value, original_value) in mapped.iter().zip(chain.iter()) {
        assert_eq!(*mapped_value, original_value / 10);
    }
}

#[rstest]
fn test_map_does_not_mutate_original() {
    let chain = Node::of([1, 2, 3]).unwrap();
    let _ = chain.map(|x| x * 100);
    assert_eq!(chain, Node::of([1, 2, 3]).unwrap());
}

#[rstest]
fn test_map_can_change_type() {
    let chain = Node::of([1, 22, 333]).unwrap();
    let lengths = chain.map(|x| x.to_string().len());
    assert_eq!(lengths, Node::of([1, 2, 3]).unwrap());
}

// =============================================================================
// fold
// =============================================================================

#[rstest]
fn test_fold_sums_values() {
    let chain = Node::of([1, 2, 3]).unwrap();
    assert_eq!(chain.fold(|value, acc| value + acc, 0), 6);
}

#[rstest]
fn test_fold_applies_head_first() {
    let chain = Node::of(["a", "b", "c"]).unwrap();
    let joined = chain.fold(|value, acc| acc + value, String::new());
    assert_eq!(joined, "abc");
}

#[rstest]
fn test_fold_single_node() {
    let node = Node::singleton(7);
    assert_eq!(node.fold(|value, acc| value + acc, 1), 8);
}

// =============================================================================
// Type class surface
// =============================================================================

#[rstest]
fn test_functor_fmap_maps_head_only() {
    // The FnOnce functor only reaches the head; fmap_mut maps the chain
    let chain = Node::of([1, 2, 3]).unwrap();
    assert_eq!(chain.fmap(|x| x * 2), Node::singleton(2));
}

#[rstest]
fn test_functor_mut_fmap_mut_maps_whole_chain() {
    let chain = Node::of([1, 2, 3]).unwrap();
    assert_eq!(chain.fmap_mut(|x| x * 2), Node::of([2, 4, 6]).unwrap());
}

#[rstest]
fn test_functor_mut_fmap_ref_mut_preserves_original() {
    let chain = Node::of([1, 2]).unwrap();
    let mapped = chain.fmap_ref_mut(|x| x + 1);
    assert_eq!(mapped, Node::of([2, 3]).unwrap());
    assert_eq!(chain, Node::of([1, 2]).unwrap());
}

#[rstest]
fn test_foldable_fold_left_and_right() {
    let chain = Node::of(["a", "b", "c"]).unwrap();
    let left = chain
        .clone()
        .fold_left(String::new(), |acc, value| acc + value);
    assert_eq!(left, "abc");

    let right = chain.fold_right(String::new(), |value, acc| format!("{value}{acc}"));
    assert_eq!(right, "abc");
}

#[rstest]
fn test_foldable_length_and_is_empty() {
    let chain = Node::of([1, 2, 3]).unwrap();
    assert_eq!(chain.length(), 3);
    assert!(!Foldable::is_empty(&chain));
}
