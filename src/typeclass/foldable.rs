//! Foldable type class - reducing a finite container to a summary value.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{List, ListMonad};
//! use kindred::typeclass::{Foldable, Sum};
//!
//! let numbers = List::from_slice(&[1, 2, 3, 4]);
//! assert_eq!(ListMonad.fold_left(numbers.clone(), 0, |acc, n| acc + n), 10);
//! assert_eq!(ListMonad.fold_map(numbers, &Sum, |n| n * 2), 20);
//! ```

use super::higher::Kind;
use super::monoid::Monoid;

/// A type class for finite containers that can be folded into a single value.
///
/// Only `fold_left` and `fold_right` are required; everything else derives
/// from them.
pub trait Foldable<K: Kind> {
    /// Folds from the first value to the last.
    fn fold_left<A, B, F>(&self, fa: K::Of<A>, initial: B, function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(B, A) -> B;

    /// Folds from the last value to the first.
    fn fold_right<A, B, F>(&self, fa: K::Of<A>, initial: B, function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(A, B) -> B;

    /// Maps every value into a monoid and combines the results left to right.
    fn fold_map<A, M, D, F>(&self, fa: K::Of<A>, monoid: &D, mut function: F) -> M
    where
        A: Clone + 'static,
        D: Monoid<M>,
        F: FnMut(A) -> M,
    {
        self.fold_left(fa, monoid.identity(), |accumulated, a| {
            monoid.combine(accumulated, function(a))
        })
    }

    /// Collects the values in order.
    fn to_vec<A>(&self, fa: K::Of<A>) -> Vec<A>
    where
        A: Clone + 'static,
    {
        self.fold_left(fa, Vec::new(), |mut values, a| {
            values.push(a);
            values
        })
    }

    /// Counts the values.
    fn length<A>(&self, fa: K::Of<A>) -> usize
    where
        A: Clone + 'static,
    {
        self.fold_left(fa, 0, |count, _| count + 1)
    }

    /// Returns `true` if the container holds no values.
    fn is_empty<A>(&self, fa: K::Of<A>) -> bool
    where
        A: Clone + 'static,
    {
        self.length(fa) == 0
    }

    /// Returns `true` if any value satisfies `predicate`.
    fn exists<A, P>(&self, fa: K::Of<A>, mut predicate: P) -> bool
    where
        A: Clone + 'static,
        P: FnMut(&A) -> bool,
    {
        self.fold_left(fa, false, |found, a| found || predicate(&a))
    }

    /// Returns `true` if every value satisfies `predicate`. Vacuously `true` when empty.
    fn for_all<A, P>(&self, fa: K::Of<A>, mut predicate: P) -> bool
    where
        A: Clone + 'static,
        P: FnMut(&A) -> bool,
    {
        self.fold_left(fa, true, |all, a| all && predicate(&a))
    }
}
