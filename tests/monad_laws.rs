#![cfg(feature = "data")]
//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `bind(pure(a), f) == f(a)`
//! - **Right Identity**: `bind(m, pure) == m`
//! - **Associativity**: `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`

use kindred::data::{Either, EitherMonad, List, ListMonad, Maybe, MaybeMonad};
use kindred::typeclass::{Applicative, Apply, Bind, Functor, Identity, IdentityMonad};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn list_strategy() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(-100i32..100, 0..8).prop_map(List::from_vec)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn half(n: i32) -> Maybe<i32> {
    Maybe::present_when(n % 2 == 0, || n / 2)
}

fn positive(n: i32) -> Maybe<i32> {
    Maybe::present_when(n > 0, || n)
}

fn neighbours(n: i32) -> List<i32> {
    List::from_slice(&[n - 1, n + 1])
}

fn repeat_abs(n: i32) -> List<i32> {
    List::from_vec(vec![n; (n.unsigned_abs() % 3) as usize])
}

fn checked_double(n: i32) -> Either<String, i32> {
    n.checked_mul(2).map_or_else(|| Either::Left("overflow".to_string()), Either::Right)
}

fn non_zero(n: i32) -> Either<String, i32> {
    if n == 0 { Either::Left("zero".to_string()) } else { Either::Right(n) }
}

// =============================================================================
// Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let function = |n: i32| Identity(n.wrapping_sub(7));
        prop_assert_eq!(IdentityMonad.bind(IdentityMonad.pure(value), function), function(value));
    }

    #[test]
    fn prop_identity_right_identity(value in any::<i32>()) {
        prop_assert_eq!(IdentityMonad.bind(Identity(value), Identity), Identity(value));
    }
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(MaybeMonad.bind(MaybeMonad.pure(value), half), half(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in maybe_strategy()) {
        prop_assert_eq!(MaybeMonad.bind(value, Maybe::present), value);
    }

    #[test]
    fn prop_maybe_associativity(value in maybe_strategy()) {
        let left = MaybeMonad.bind(MaybeMonad.bind(value, half), positive);
        let right = MaybeMonad.bind(value, |x| MaybeMonad.bind(half(x), positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_ap_agrees_with_bind(value in maybe_strategy(), offset in -50i32..50) {
        let add = move |n: i32| n.wrapping_add(offset);
        let applied = MaybeMonad.ap(MaybeMonad.pure(add), value);
        let bound = MaybeMonad.bind(value, move |n| MaybeMonad.pure(add(n)));
        prop_assert_eq!(applied, bound);
    }
}

// =============================================================================
// List
// =============================================================================

proptest! {
    #[test]
    fn prop_list_left_identity(value in -100i32..100) {
        prop_assert_eq!(ListMonad.bind(ListMonad.pure(value), neighbours), neighbours(value));
    }

    #[test]
    fn prop_list_right_identity(value in list_strategy()) {
        prop_assert_eq!(ListMonad.bind(value.clone(), List::singleton), value);
    }

    #[test]
    fn prop_list_associativity(value in list_strategy()) {
        let left = ListMonad.bind(ListMonad.bind(value.clone(), neighbours), repeat_abs);
        let right = ListMonad.bind(value, |x| ListMonad.bind(neighbours(x), repeat_abs));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_list_map2_agrees_with_bind(left in list_strategy(), right in list_strategy()) {
        let applied = ListMonad.map2(left.clone(), right.clone(), |a: i32, b: i32| a - b);
        let bound = ListMonad.bind(left, move |a| ListMonad.map(right.clone(), move |b: i32| a - b));
        prop_assert_eq!(applied, bound);
    }
}

// =============================================================================
// Either
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        let monad = EitherMonad::<String>::new();
        prop_assert_eq!(monad.bind(monad.pure(value), checked_double), checked_double(value));
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        let monad = EitherMonad::<String>::new();
        prop_assert_eq!(monad.bind(value.clone(), Either::Right), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let monad = EitherMonad::<String>::new();
        let left = monad.bind(monad.bind(value.clone(), checked_double), non_zero);
        let right = monad.bind(value, move |x| monad.bind(checked_double(x), non_zero));
        prop_assert_eq!(left, right);
    }
}
