//! Property-based tests for Node.
//!
//! These tests verify that chains built from arbitrary sequences preserve
//! length and order through construction, iteration, mapping, and folding.

use funrs::node::Node;
use funrs::typeclass::{Foldable, FunctorMut};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating value sequences
// =============================================================================

/// Generates a non-empty `Vec<i32>` with up to `max_size` elements.
fn values_strategy(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 1..max_size)
}

/// Generates a small non-empty value sequence for faster tests.
fn small_values() -> impl Strategy<Value = Vec<i32>> {
    values_strategy(20)
}

proptest! {
    // =========================================================================
    // Construction round-trips
    // =========================================================================

    #[test]
    fn prop_of_then_iterate_round_trips(values in small_values()) {
        let chain = Node::of(values.clone()).unwrap();
        let collected: Vec<i32> = chain.iter().copied().collect();
        prop_assert_eq!(collected, values);
    }

    #[test]
    fn prop_len_matches_input_len(values in small_values()) {
        let chain = Node::of(values.clone()).unwrap();
        prop_assert_eq!(chain.len(), values.len());
    }

    #[test]
    fn prop_head_is_first_value(values in small_values()) {
        let chain = Node::of(values.clone()).unwrap();
        prop_assert_eq!(chain.get_value(), &values[0]);
    }

    // =========================================================================
    // Equality
    // =========================================================================

    #[test]
    fn prop_equal_inputs_build_equal_chains(values in small_values()) {
        let left = Node::of(values.clone()).unwrap();
        let right = Node::of(values).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_clone_equals_original(values in small_values()) {
        let chain = Node::of(values).unwrap();
        prop_assert_eq!(chain.clone(), chain);
    }

    #[test]
    fn prop_prepending_breaks_equality(values in small_values(), extra: i32) {
        let chain = Node::of(values.clone()).unwrap();
        let mut longer_values = vec![extra];
        longer_values.extend(values);
        let longer = Node::of(longer_values).unwrap();
        prop_assert_ne!(chain, longer);
    }

    // =========================================================================
    // map
    // =========================================================================

    #[test]
    fn prop_map_preserves_length_and_order(values in small_values()) {
        let chain = Node::of(values.clone()).unwrap();
        let mapped = chain.map(|x| x.wrapping_mul(2));

        prop_assert_eq!(mapped.len(), values.len());
        for (mapped_value, original_value) in mapped.iter().zip(values.iter()) {
            prop_assert_eq!(*mapped_value, original_value.wrapping_mul(2));
        }
    }

    #[test]
    fn prop_map_identity(values in small_values()) {
        let chain = Node::of(values).unwrap();
        prop_assert_eq!(chain.map(|x| *x), chain);
    }

    #[test]
    fn prop_fmap_mut_matches_map(values in small_values()) {
        let chain = Node::of(values).unwrap();
        let mapped = chain.map(|x| x.wrapping_add(5));
        prop_assert_eq!(chain.fmap_mut(|x| x.wrapping_add(5)), mapped);
    }

    // =========================================================================
    // fold
    // =========================================================================

    #[test]
    fn prop_fold_matches_iterator_fold(values in small_values()) {
        let chain = Node::of(values.clone()).unwrap();
        let folded = chain.fold(|value, acc| acc.wrapping_add(*value), 0i32);
        let expected = values.iter().fold(0i32, |acc, value| acc.wrapping_add(*value));
        prop_assert_eq!(folded, expected);
    }

    #[test]
    fn prop_fold_left_matches_to_list_fold(values in small_values()) {
        let chain = Node::of(values).unwrap();
        let list = chain.clone().to_list();
        let left = chain.fold_left(0i32, |acc, value| acc.wrapping_sub(value));
        let expected = list.into_iter().fold(0i32, |acc, value| acc.wrapping_sub(value));
        prop_assert_eq!(left, expected);
    }

    #[test]
    fn prop_fold_head_first_order(values in small_values()) {
        let chain = Node::of(values.clone()).unwrap();
        let joined = chain.fold(|value, acc| format!("{acc}{value},"), String::new());
        let expected: String = values.iter().map(|value| format!("{value},")).collect();
        prop_assert_eq!(joined, expected);
    }
}
