#![cfg(feature = "data")]
//! Property-based tests for Alternative type class laws.
//!
//! 1. **Left Identity**: `alt(empty, x) == x`
//! 2. **Right Identity**: `alt(x, empty) == x`
//! 3. **Associativity**: `alt(alt(x, y), z) == alt(x, alt(y, z))`
//! 4. **Left Distributivity**: `map(alt(x, y), f) == alt(map(x, f), map(y, f))`

use kindred::data::{List, ListMonad, Maybe, MaybeMonadPlus};
use kindred::typeclass::{Alternative, Bias, Functor};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn list_strategy() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..8).prop_map(List::from_vec)
}

fn bias_strategy() -> impl Strategy<Value = MaybeMonadPlus> {
    prop_oneof![Just(Bias::First), Just(Bias::Last)].prop_map(MaybeMonadPlus::new)
}

proptest! {
    #[test]
    fn prop_maybe_identity(plus in bias_strategy(), value in maybe_strategy()) {
        prop_assert_eq!(plus.alt(plus.empty(), value), value);
        prop_assert_eq!(plus.alt(value, plus.empty()), value);
    }

    #[test]
    fn prop_maybe_associativity(
        plus in bias_strategy(),
        x in maybe_strategy(),
        y in maybe_strategy(),
        z in maybe_strategy()
    ) {
        prop_assert_eq!(plus.alt(plus.alt(x, y), z), plus.alt(x, plus.alt(y, z)));
    }

    #[test]
    fn prop_maybe_left_distributivity(plus in bias_strategy(), x in maybe_strategy(), y in maybe_strategy()) {
        let f = |n: i32| n.wrapping_mul(3);
        prop_assert_eq!(plus.map(plus.alt(x, y), f), plus.alt(plus.map(x, f), plus.map(y, f)));
    }

    #[test]
    fn prop_list_identity(value in list_strategy()) {
        prop_assert_eq!(ListMonad.alt(ListMonad.empty(), value.clone()), value.clone());
        prop_assert_eq!(ListMonad.alt(value.clone(), ListMonad.empty()), value);
    }

    #[test]
    fn prop_list_associativity(x in list_strategy(), y in list_strategy(), z in list_strategy()) {
        prop_assert_eq!(
            ListMonad.alt(ListMonad.alt(x.clone(), y.clone()), z.clone()),
            ListMonad.alt(x, ListMonad.alt(y, z))
        );
    }

    #[test]
    fn prop_list_left_distributivity(x in list_strategy(), y in list_strategy()) {
        let f = |n: i32| n.wrapping_sub(1);
        prop_assert_eq!(
            ListMonad.map(ListMonad.alt(x.clone(), y.clone()), f),
            ListMonad.alt(ListMonad.map(x, f), ListMonad.map(y, f))
        );
    }
}
