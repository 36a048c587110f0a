//! Functor type class - mapping over container values.
//!
//! A `Functor` instance knows how to apply a function to the value(s) held by
//! a container of one family while preserving the container's shape.
//!
//! Instances are ordinary values passed to generic code explicitly: a
//! function that wants to work over "any functor" takes the instance as an
//! argument and never inspects which family it belongs to.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! functor.map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! functor.map(functor.map(fa, f), g) == functor.map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{List, ListKind, ListMonad, Maybe, MaybeKind, MaybeMonad};
//! use kindred::typeclass::{Functor, Hkt, Kind};
//!
//! fn lengths<K: Kind, F: Functor<K>>(functor: &F, words: Hkt<K, String>) -> Hkt<K, usize> {
//!     functor.map(words, |word| word.len())
//! }
//!
//! assert_eq!(
//!     lengths::<MaybeKind, _>(&MaybeMonad, Maybe::present("four".to_string())),
//!     Maybe::present(4)
//! );
//! let words: List<String> = ["a", "bb"].iter().map(|s| s.to_string()).collect();
//! assert_eq!(lengths::<ListKind, _>(&ListMonad, words), List::from_slice(&[1, 2]));
//! ```

use super::higher::Kind;

/// A type class for container families that can have a function mapped over their contents.
///
/// # Laws
///
/// ```text
/// map(fa, |x| x) == fa
/// map(map(fa, f), g) == map(fa, |x| g(f(x)))
/// ```
pub trait Functor<K: Kind> {
    /// Applies `function` to every value held by `fa`.
    ///
    /// The function may be called any number of times (zero for an empty
    /// container, many for a list, lazily for a stream), so it must be `Fn`.
    fn map<A, B, F>(&self, fa: K::Of<A>, function: F) -> K::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static;

    /// Replaces every value held by `fa` with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::{Maybe, MaybeMonad};
    /// use kindred::typeclass::Functor;
    ///
    /// assert_eq!(MaybeMonad.replace(Maybe::present(5), "x"), Maybe::present("x"));
    /// assert_eq!(MaybeMonad.replace(Maybe::<i32>::empty(), "x"), Maybe::empty());
    /// ```
    #[inline]
    fn replace<A, B>(&self, fa: K::Of<A>, value: B) -> K::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        self.map(fa, move |_| value.clone())
    }

    /// Discards the values held by `fa`, keeping only its shape.
    #[inline]
    fn void<A>(&self, fa: K::Of<A>) -> K::Of<()>
    where
        A: Clone + 'static,
    {
        self.replace(fa, ())
    }
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{List, ListKind, ListMonad, Maybe, MaybeKind, MaybeMonad};
    use crate::typeclass::Hkt;
    use rstest::rstest;

    fn double_all<K: Kind, F: Functor<K>>(functor: &F, values: Hkt<K, i32>) -> Hkt<K, i32> {
        functor.map(values, |n| n * 2)
    }

    #[rstest]
    fn generic_map_over_maybe() {
        assert_eq!(double_all::<MaybeKind, _>(&MaybeMonad, Maybe::present(21)), Maybe::present(42));
        assert_eq!(double_all::<MaybeKind, _>(&MaybeMonad, Maybe::empty()), Maybe::empty());
    }

    #[rstest]
    fn generic_map_over_list() {
        let list = List::from_slice(&[1, 2, 3]);
        assert_eq!(double_all::<ListKind, _>(&ListMonad, list), List::from_slice(&[2, 4, 6]));
    }

    #[rstest]
    fn void_keeps_shape() {
        assert_eq!(ListMonad.void(List::from_slice(&[7, 8])), List::from_slice(&[(), ()]));
        assert_eq!(MaybeMonad.void(Maybe::<i32>::empty()), Maybe::empty());
    }

    #[rstest]
    fn composition_law_for_maybe() {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = MaybeMonad.map(MaybeMonad.map(Maybe::present(5), function1), function2);
        let right = MaybeMonad.map(Maybe::present(5), move |x| function2(function1(x)));

        assert_eq!(left, right);
        assert_eq!(left, Maybe::present(12));
    }
}
