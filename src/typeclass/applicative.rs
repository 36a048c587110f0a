//! Apply and Applicative type classes - applying functions within containers.
//!
//! [`Apply`] extends [`Functor`] with the ability to apply functions that are
//! themselves held by a container (`ap`), and from that to lift functions of
//! several arguments into the container context (`map2`, `map3`).
//! [`Applicative`] adds `pure`, which wraps a plain value.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! ap(pure(|x| x), fa) == fa
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! ap(pure(f), pure(a)) == pure(f(a))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{Maybe, MaybeMonad};
//! use kindred::typeclass::{Applicative, Apply};
//!
//! let sum = MaybeMonad.map2(Maybe::present(1), Maybe::present(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::present(3));
//!
//! let missing = MaybeMonad.map2(Maybe::present(1), Maybe::<i32>::empty(), |x, y| x + y);
//! assert_eq!(missing, Maybe::empty());
//!
//! assert_eq!(MaybeMonad.pure(7), Maybe::present(7));
//! ```

use std::rc::Rc;

use super::functor::Functor;
use super::higher::Kind;

/// A functor whose containers can hold functions that are applied to other containers.
pub trait Apply<K: Kind>: Functor<K> {
    /// Applies the function(s) held by `functions` to the value(s) held by `fa`.
    ///
    /// Functions stored in containers must be `Clone` because multi-valued
    /// families (lists, streams) share them between elements.
    fn ap<A, B, F>(&self, functions: K::Of<F>, fa: K::Of<A>) -> K::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static;

    /// Lifts a binary function into the container context.
    ///
    /// The default goes through [`ap`](Apply::ap); families with a cheaper
    /// direct formulation override it.
    fn map2<A, B, C, F>(&self, fa: K::Of<A>, fb: K::Of<B>, function: F) -> K::Of<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let function = Rc::new(function);
        let partially_applied = self.map(fa, move |a: A| {
            let function = Rc::clone(&function);
            move |b: B| function(a.clone(), b)
        });
        self.ap(partially_applied, fb)
    }

    /// Lifts a ternary function into the container context.
    fn map3<A, B, C, D, F>(
        &self,
        fa: K::Of<A>,
        fb: K::Of<B>,
        fc: K::Of<C>,
        function: F,
    ) -> K::Of<D>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        F: Fn(A, B, C) -> D + 'static,
    {
        let paired = self.map2(fa, fb, |a, b| (a, b));
        self.map2(paired, fc, move |(a, b), c| function(a, b, c))
    }

    /// Pairs the values of two containers.
    #[inline]
    fn product<A, B>(&self, fa: K::Of<A>, fb: K::Of<B>) -> K::Of<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        self.map2(fa, fb, |a, b| (a, b))
    }
}

/// An [`Apply`] that can wrap a plain value.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{List, ListMonad};
/// use kindred::typeclass::Applicative;
///
/// assert_eq!(ListMonad.pure(3), List::singleton(3));
/// ```
pub trait Applicative<K: Kind>: Apply<K> {
    /// Wraps `value` in the minimal context of the family.
    fn pure<A>(&self, value: A) -> K::Of<A>
    where
        A: Clone + 'static;
}
