//! Alternative and MonadPlus type classes - choice between computations.
//!
//! [`Alternative`] gives an [`Applicative`] family an `empty` computation and
//! an associative `alt` with `empty` as its identity. Combined with [`Monad`]
//! this yields [`MonadPlus`], which adds filtering inside the context.

use super::applicative::Applicative;
use super::higher::Kind;
use super::monad::Monad;

/// Which operand wins when both sides of an `alt` hold a value.
///
/// Only meaningful for families holding at most one value; multi-valued
/// families concatenate instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Bias {
    /// The left operand wins.
    #[default]
    First,
    /// The right operand wins.
    Last,
}

/// An [`Applicative`] with a monoidal structure on its containers.
///
/// # Laws
///
/// ```text
/// alt(empty(), fa) == fa
/// alt(fa, empty()) == fa
/// alt(alt(fa, fb), fc) == alt(fa, alt(fb, fc))
/// ```
///
/// # Examples
///
/// ```rust
/// use kindred::data::{List, ListMonad};
/// use kindred::typeclass::Alternative;
///
/// let joined = ListMonad.alt(List::from_slice(&[1, 2]), List::from_slice(&[3]));
/// assert_eq!(joined, List::from_slice(&[1, 2, 3]));
/// assert_eq!(ListMonad.alt(ListMonad.empty(), List::singleton(4)), List::singleton(4));
/// ```
pub trait Alternative<K: Kind>: Applicative<K> {
    /// The container holding no values.
    fn empty<A>(&self) -> K::Of<A>
    where
        A: Clone + 'static;

    /// Combines two alternatives.
    fn alt<A>(&self, first: K::Of<A>, second: K::Of<A>) -> K::Of<A>
    where
        A: Clone + 'static;

    /// `pure(())` when `condition` holds, `empty()` otherwise.
    #[inline]
    fn guard(&self, condition: bool) -> K::Of<()> {
        if condition {
            self.pure(())
        } else {
            self.empty()
        }
    }
}

/// A [`Monad`] that is also an [`Alternative`]. Implemented automatically.
pub trait MonadPlus<K: Kind>: Alternative<K> + Monad<K> {
    /// Keeps only the values satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::{List, ListMonad};
    /// use kindred::typeclass::MonadPlus;
    ///
    /// let evens = ListMonad.mfilter(List::from_slice(&[1, 2, 3, 4]), |n| n % 2 == 0);
    /// assert_eq!(evens, List::from_slice(&[2, 4]));
    /// ```
    fn mfilter<A, P>(&self, fa: K::Of<A>, predicate: P) -> K::Of<A>
    where
        Self: Clone + 'static,
        A: Clone + 'static,
        P: Fn(&A) -> bool + 'static,
    {
        let plus = self.clone();
        self.bind(fa, move |a| {
            if predicate(&a) {
                plus.pure(a)
            } else {
                plus.empty()
            }
        })
    }
}

impl<K: Kind, T: Alternative<K> + Monad<K>> MonadPlus<K> for T {}
