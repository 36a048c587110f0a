#![cfg(feature = "data")]
//! Integration tests for `Stream` and `StreamMonad`.

use kindred::data::{List, Stream, StreamMonad};
use kindred::typeclass::{Applicative, Apply, Bind, Extend, Functor};
use rstest::rstest;

#[rstest]
fn test_cycle_display() {
    let names = Stream::cycle(&["foo", "bar", "baz"]).unwrap();
    assert_eq!(
        names.to_string(),
        "Stream(foo,bar,baz,foo,bar,baz,foo,bar,baz,foo...)"
    );
}

#[rstest]
fn test_cycle_of_nothing_is_rejected() {
    let empty: &[i32] = &[];
    assert!(Stream::cycle(empty).is_err());
}

#[rstest]
fn test_filter_even_display() {
    let evens = Stream::range(1).filter(|n: &i64| n % 2 == 0);
    assert_eq!(evens.to_string(), "Stream(2,4,6,8,10,12,14,16,18,20...)");
}

#[rstest]
fn test_bind_takes_the_diagonal() {
    let result = StreamMonad.bind(Stream::range(1), |step: i64| Stream::range_by(1, step));
    assert_eq!(result.to_string(), "Stream(1,3,7,13,21,31,43,57,73,91...)");
}

#[rstest]
fn test_ap_zips_functions_with_values() {
    let negate: fn(i64) -> i64 = |n| -n;
    let square: fn(i64) -> i64 = |n| n * n;
    let functions = Stream::cycle(&[negate, square]).unwrap();
    let result = StreamMonad.ap(functions, Stream::range(1));
    assert_eq!(result.to_string_limit(4), "Stream(-1,4,-3,16...)");
}

#[rstest]
fn test_pure_repeats() {
    let sevens: Stream<i32> = StreamMonad.pure(7);
    assert_eq!(sevens.take(3), List::from_slice(&[7, 7, 7]));
}

#[rstest]
fn test_map_is_lazy_and_total() {
    let squares = StreamMonad.map(Stream::range(0), |n: i64| n * n);
    assert_eq!(squares.get(12), 144);
}

#[rstest]
fn test_extend_sees_every_suffix() {
    let sums = StreamMonad.extend(Stream::range(1), |suffix: Stream<i64>| {
        suffix.take(2).iter().sum::<i64>()
    });
    assert_eq!(sums.take(3), List::from_slice(&[3, 5, 7]));
}

#[rstest]
fn test_interleave_and_intersperse() {
    let odds = Stream::range_by(1, 2);
    let evens = Stream::range_by(2, 2);
    assert_eq!(odds.interleave(&evens).take(6), List::from_slice(&[1, 2, 3, 4, 5, 6]));
    assert_eq!(
        Stream::range(1).intersperse(0).take(5),
        List::from_slice(&[1, 0, 2, 0, 3])
    );
}

#[rstest]
fn test_unfold_fibonacci() {
    let fibonacci = Stream::unfold((0u64, 1u64), |(current, next)| {
        (current, (next, current + next))
    });
    assert_eq!(
        fibonacci.take(10),
        List::from_slice(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34])
    );
}

#[rstest]
fn test_inits_and_tails() {
    let numbers = Stream::range(1);
    let prefixes = numbers.inits().take(3);
    assert_eq!(
        prefixes,
        List::from_slice(&[List::new(), List::from_slice(&[1]), List::from_slice(&[1, 2])])
    );
    assert_eq!(numbers.tails().get(2).head(), 3);
}

#[rstest]
fn test_zip_and_unzip() {
    let pairs = Stream::range(0).zip(&Stream::repeat('x'));
    let (numbers, letters) = pairs.unzip();
    assert_eq!(numbers.take(2), List::from_slice(&[0, 1]));
    assert_eq!(letters.take(2), List::from_slice(&['x', 'x']));
}

#[rstest]
fn test_deep_drop_keeps_the_stack() {
    let numbers = Stream::range(0);
    let far = numbers.drop(200_000);
    assert_eq!(far.head(), 200_000);
    drop(numbers);
}

const LAYERS: i64 = 200_000;

#[rstest]
fn test_deep_unevaluated_map_layers_drop_without_recursion() {
    let mut numbers = Stream::range(0);
    for _ in 0..LAYERS {
        numbers = numbers.map(|n: i64| n + 1);
    }
    assert_eq!(numbers.head(), LAYERS);
    drop(numbers);
}

#[rstest]
fn test_deep_unevaluated_filter_layers_drop_without_recursion() {
    let mut numbers = Stream::range(0);
    for _ in 0..LAYERS {
        numbers = numbers.filter(|n: &i64| *n >= 0);
    }
    assert_eq!(numbers.head(), 0);
    drop(numbers);
}

#[rstest]
fn test_deep_zip_and_interleave_layers_drop_without_recursion() {
    let mut numbers = Stream::range(1);
    for layer in 0..LAYERS {
        numbers = if layer % 2 == 0 {
            numbers.zip_with(&Stream::repeat(0), |n: i64, zero: i64| n + zero)
        } else {
            numbers.interleave(&Stream::repeat(-1))
        };
    }
    assert_eq!(numbers.head(), 1);
    drop(numbers);

    let reused = Stream::range(0).map(|n: i64| n * 2);
    assert_eq!(reused.take(3), List::from_slice(&[0, 2, 4]));
}

