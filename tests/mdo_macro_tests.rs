#![cfg(all(feature = "compose", feature = "data"))]
//! Integration tests for the `mdo!` macro.

use kindred::data::{Either, EitherMonad, List, ListMonad, Maybe, MaybeMonad};
use kindred::mdo;
use rstest::rstest;

#[rstest]
fn test_list_times_table() {
    let table = mdo!(ListMonad;
        a <= List::range(1, 1, 3).unwrap();
        b <= List::range(1, 1, 3).unwrap();
        yield format!("{a} x {b} = {}", a * b)
    );

    let expected: List<String> = [
        "1 x 1 = 1", "1 x 2 = 2", "1 x 3 = 3",
        "2 x 1 = 2", "2 x 2 = 4", "2 x 3 = 6",
        "3 x 1 = 3", "3 x 2 = 6", "3 x 3 = 9",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(table, expected);
}

#[rstest]
fn test_maybe_concatenation() {
    let joined = mdo!(MaybeMonad;
        first <= Maybe::present("one".to_string());
        second <= Maybe::present("two".to_string());
        yield first + &second
    );
    assert_eq!(joined, Maybe::present("onetwo".to_string()));
}

#[rstest]
fn test_maybe_empty_short_circuits() {
    let joined = mdo!(MaybeMonad;
        first <= Maybe::present("one".to_string());
        second <= Maybe::<String>::empty();
        yield first + &second
    );
    assert_eq!(joined, Maybe::empty());
}

fn count_on_fingers(a: i32, b: i32) -> Either<String, i32> {
    mdo!(EitherMonad::<String>::new();
        x <= Either::Right(a);
        y <= Either::Right(b);
        let total = x + y;
        if total > 10 {
            Either::Left("Not enough fingers!".to_string())
        } else {
            Either::Right(total)
        }
    )
}

#[rstest]
#[case(2, 3, "Right(5)")]
#[case(6, 7, "Left(Not enough fingers!)")]
fn test_either_validation(#[case] a: i32, #[case] b: i32, #[case] expected: &str) {
    assert_eq!(count_on_fingers(a, b).to_string(), expected);
}

#[rstest]
fn test_bound_values_reach_later_computations() {
    let pairs = mdo!(ListMonad;
        n <= List::from_slice(&[1_i64, 2, 3]);
        m <= List::range(n, 1, 3).unwrap();
        yield (n, m)
    );
    assert_eq!(
        pairs,
        List::from_slice(&[(1, 1), (1, 2), (1, 3), (2, 2), (2, 3), (3, 3)])
    );
}
