//! Traversable type class - effectful mapping that collects effects.
//!
//! `traverse` maps every value of a container to an applicative computation
//! and turns the container of computations inside out: a single computation
//! producing a container. The applicative is supplied as an instance, so the
//! same `traverse` works for `Maybe`, `Either`, `List` or any other
//! [`Applicative`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{List, ListMonad, Maybe, MaybeMonad};
//! use kindred::typeclass::Traversable;
//!
//! let parse = |s: &'static str| match s.parse::<i32>() {
//!     Ok(n) => Maybe::present(n),
//!     Err(_) => Maybe::empty(),
//! };
//!
//! let all = ListMonad.traverse(&MaybeMonad, List::from_slice(&["1", "2"]), parse);
//! assert_eq!(all, Maybe::present(List::from_slice(&[1, 2])));
//!
//! let broken = ListMonad.traverse(&MaybeMonad, List::from_slice(&["1", "x"]), parse);
//! assert_eq!(broken, Maybe::empty());
//! ```

use super::applicative::Applicative;
use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::Kind;

/// A [`Functor`] and [`Foldable`] whose structure can be rebuilt inside any applicative.
///
/// # Laws
///
/// ```text
/// traverse(identity_applicative, fa, Identity::new) == Identity::new(fa)
/// ```
pub trait Traversable<K: Kind>: Functor<K> + Foldable<K> {
    /// Maps each value to a computation of `applicative` and collects the results.
    fn traverse<G, I, A, B, F>(&self, applicative: &I, fa: K::Of<A>, function: F) -> G::Of<K::Of<B>>
    where
        G: Kind,
        I: Applicative<G>,
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> G::Of<B> + 'static;

    /// Turns a container of computations into a computation of a container.
    #[inline]
    fn sequence<G, I, A>(&self, applicative: &I, fga: K::Of<G::Of<A>>) -> G::Of<K::Of<A>>
    where
        G: Kind,
        I: Applicative<G>,
        A: Clone + 'static,
    {
        self.traverse(applicative, fga, |computation| computation)
    }
}
