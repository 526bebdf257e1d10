//! Property-based tests for Maybe.
//!
//! These tests verify the functor laws and the contracts of the
//! combinators over arbitrary values.

use funrs::maybe::Maybe;
use funrs::typeclass::{Foldable, Functor};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating Maybe
// =============================================================================

/// Generates an arbitrary `Maybe<i32>`.
fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![
        Just(Maybe::Nothing),
        any::<i32>().prop_map(Maybe::Just),
    ]
}

proptest! {
    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn prop_of_some_is_just(value: i32) {
        prop_assert!(Maybe::of(Some(value)).is_just());
    }

    #[test]
    fn prop_of_round_trips_through_nullable(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(Maybe::of(value).as_nullable(), value);
    }

    // =========================================================================
    // Functor laws
    // =========================================================================

    #[test]
    fn prop_map_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    #[test]
    fn prop_map_composition(maybe in maybe_strategy()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(3);
        prop_assert_eq!(maybe.map(f).map(g), maybe.map(|x| g(f(x))));
    }

    #[test]
    fn prop_map_preserves_absence(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.map(|x| x.wrapping_add(1)).is_nothing(), maybe.is_nothing());
    }

    #[test]
    fn prop_fmap_matches_map(maybe in maybe_strategy()) {
        let f = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(maybe.fmap(f), maybe.map(f));
    }

    // =========================================================================
    // Combinator contracts
    // =========================================================================

    #[test]
    fn prop_get_or_else(maybe in maybe_strategy(), default: i32) {
        let expected = match maybe {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        };
        prop_assert_eq!(maybe.get_or_else(default), expected);
    }

    #[test]
    fn prop_or_else_is_always_just(maybe in maybe_strategy(), default: i32) {
        prop_assert!(maybe.or_else(default).is_just());
    }

    #[test]
    fn prop_fold_matches_fold_left(maybe in maybe_strategy(), initial: i32) {
        let folded = maybe.fold(|value, acc| value.wrapping_add(acc), initial);
        let left = maybe.fold_left(initial, |acc, value| value.wrapping_add(acc));
        prop_assert_eq!(folded, left);
    }

    #[test]
    fn prop_flatten_inner(inner in maybe_strategy()) {
        prop_assert_eq!(Maybe::Just(inner).flatten(), inner);
        prop_assert_eq!(Maybe::<Maybe<i32>>::Nothing.flatten(), Maybe::Nothing);
    }

    #[test]
    fn prop_presence_discriminators_are_exclusive(maybe in maybe_strategy()) {
        prop_assert_ne!(maybe.is_just(), maybe.is_nothing());
    }
}
