#![cfg(feature = "data")]
//! Integration tests for `Either` and `EitherMonad`.

use kindred::data::{Either, EitherMonad, List, ListMonad, Maybe};
use kindred::typeclass::{Applicative, Bind, Foldable, Functor, MonadError, Traversable};
use rstest::rstest;

type Validated<A> = Either<String, A>;

fn non_negative(n: i32) -> Validated<i32> {
    if n < 0 { Either::Left(format!("{n} is negative")) } else { Either::Right(n) }
}

#[rstest]
fn test_map_touches_right_only() {
    let monad = EitherMonad::<String>::new();
    assert_eq!(monad.map(Either::Right(2), |n: i32| n * 10), Either::Right(20));
    assert_eq!(
        monad.map(Either::Left("bad".to_string()), |n: i32| n * 10),
        Either::Left("bad".to_string())
    );
}

#[rstest]
fn test_bind_stops_at_first_left() {
    let monad = EitherMonad::<String>::new();
    let result = monad.bind(non_negative(-3), |n: i32| non_negative(n - 10));
    assert_eq!(result, Either::Left("-3 is negative".to_string()));
    let result = monad.bind(non_negative(30), |n: i32| non_negative(n - 10));
    assert_eq!(result, Either::Right(20));
}

#[rstest]
fn test_traverse_reports_first_failure() {
    let monad = EitherMonad::<String>::new();
    let numbers = List::from_slice(&[1, -2, -3]);
    assert_eq!(
        ListMonad.traverse(&monad, numbers, non_negative),
        Either::Left("-2 is negative".to_string())
    );
}

#[rstest]
fn test_catch_and_handle_error() {
    let monad = EitherMonad::<String>::new();
    let failed: Validated<usize> = monad.throw_error("four".to_string());
    assert_eq!(
        monad.catch_error(failed.clone(), |message: String| Either::Right(message.len())),
        Either::Right(4)
    );
    assert_eq!(monad.handle_error(failed, |message: String| message.len() * 2), Either::Right(8));
    assert_eq!(
        monad.catch_error(monad.pure(1_usize), |_: String| Either::Right(0)),
        Either::Right(1)
    );
}

#[rstest]
fn test_fold_counts_right_only() {
    let monad = EitherMonad::<String>::new();
    assert_eq!(monad.length(Either::<String, i32>::Right(1)), 1);
    assert_eq!(monad.length(Either::<String, i32>::Left("x".to_string())), 0);
}

#[rstest]
fn test_projection_and_swap() {
    let value: Either<&str, i32> = Either::Right(5);
    assert_eq!(value.right(), Maybe::present(5));
    assert_eq!(value.left(), Maybe::empty());
    assert_eq!(value.swap(), Either::Left(5));
    assert_eq!(Either::<&str, i32>::Left("no").right_or(0), 0);
}

#[rstest]
fn test_result_round_trip() {
    let parsed: Either<std::num::ParseIntError, i32> = "12".parse::<i32>().into();
    assert_eq!(parsed.right(), Maybe::present(12));
    let back: Result<i32, &str> = Either::Left("nope").into();
    assert_eq!(back, Err("nope"));
}

#[rstest]
#[case(Either::Left("boom".to_string()), "Left(boom)")]
#[case(Either::Right(42), "Right(42)")]
fn test_display(#[case] value: Either<String, i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}
