//! Bind and Monad type classes - sequencing computations within a context.
//!
//! [`Bind`] adds `bind` to [`Apply`]: the next computation is chosen by the
//! value produced by the previous one. A [`Monad`] is anything that is both
//! an [`Applicative`] and a [`Bind`]; it is implemented automatically.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! monad.bind(monad.pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! monad.bind(m, |x| monad.pure(x)) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! monad.bind(monad.bind(m, f), g) == monad.bind(m, |x| monad.bind(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{Maybe, MaybeKind, MaybeMonad};
//! use kindred::typeclass::{Hkt, Kind, Monad};
//!
//! fn halve<K: Kind, M: Monad<K>>(monad: &M, value: Hkt<K, i32>) -> Hkt<K, i32>
//! where
//!     M: Clone + 'static,
//! {
//!     let inner = monad.clone();
//!     monad.bind(value, move |n| inner.pure(n / 2))
//! }
//!
//! assert_eq!(halve::<MaybeKind, _>(&MaybeMonad, Maybe::present(10)), Maybe::present(5));
//! ```

use super::applicative::{Applicative, Apply};
use super::higher::Kind;

/// A type class for families whose computations can be chained.
pub trait Bind<K: Kind>: Apply<K> {
    /// Feeds the value(s) of `fa` to `function` and flattens the result.
    fn bind<A, B, F>(&self, fa: K::Of<A>, function: F) -> K::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> K::Of<B> + 'static;

    /// Flattens one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::{Maybe, MaybeMonad};
    /// use kindred::typeclass::Bind;
    ///
    /// assert_eq!(MaybeMonad.join(Maybe::present(Maybe::present(1))), Maybe::present(1));
    /// ```
    #[inline]
    fn join<A>(&self, ffa: K::Of<K::Of<A>>) -> K::Of<A>
    where
        A: Clone + 'static,
    {
        self.bind(ffa, |inner| inner)
    }

    /// Sequences two computations, keeping the value(s) of the second.
    ///
    /// The shape of `fa` still matters: an empty first computation makes the
    /// whole result empty, and a list runs `fb` once per element.
    #[inline]
    fn then<A, B>(&self, fa: K::Of<A>, fb: K::Of<B>) -> K::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        self.bind(fa, move |_| fb.clone())
    }
}

/// An [`Applicative`] that is also a [`Bind`].
///
/// Implemented for every type providing both; instances never implement it by hand.
pub trait Monad<K: Kind>: Applicative<K> + Bind<K> {
    /// Applies a pure function to the value(s) of `fa` through `bind` and `pure`.
    ///
    /// Agrees with [`Functor::map`](super::Functor::map) for every lawful instance.
    fn lift_m<A, B, F>(&self, fa: K::Of<A>, function: F) -> K::Of<B>
    where
        Self: Clone + 'static,
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        let monad = self.clone();
        self.bind(fa, move |a| monad.pure(function(a)))
    }
}

impl<K: Kind, T: Applicative<K> + Bind<K>> Monad<K> for T {}
