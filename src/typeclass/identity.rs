//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps exactly one value and adds no behaviour. It is the
//! trivial inner context for transformer stacks and the simplest model for
//! checking type class laws.

use super::applicative::{Applicative, Apply};
use super::extend::Extend;
use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::{Kind, Kinded};
use super::monad::Bind;
use super::traversable::Traversable;

/// The identity functor - wraps a value without adding any behaviour.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Witness of the [`Identity`] family.
pub enum IdentityKind {}

impl Kind for IdentityKind {
    type Of<A: Clone + 'static> = Identity<A>;
}

impl<A: Clone + 'static> Kinded for Identity<A> {
    type Witness = IdentityKind;
    type Element = A;

    #[inline]
    fn widen(self) -> Identity<A> {
        self
    }

    #[inline]
    fn narrow(value: Identity<A>) -> Self {
        value
    }
}

/// Type class instance for [`Identity`].
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Bind, Identity, IdentityMonad};
///
/// let result = IdentityMonad.bind(Identity::new(20), |n| Identity::new(n + 1));
/// assert_eq!(result, Identity::new(21));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityMonad;

impl Functor<IdentityKind> for IdentityMonad {
    #[inline]
    fn map<A, B, F>(&self, fa: Identity<A>, function: F) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Apply<IdentityKind> for IdentityMonad {
    #[inline]
    fn ap<A, B, F>(&self, functions: Identity<F>, fa: Identity<A>) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        Identity((functions.0)(fa.0))
    }

    #[inline]
    fn map2<A, B, C, F>(&self, fa: Identity<A>, fb: Identity<B>, function: F) -> Identity<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        Identity(function(fa.0, fb.0))
    }
}

impl Applicative<IdentityKind> for IdentityMonad {
    #[inline]
    fn pure<A>(&self, value: A) -> Identity<A>
    where
        A: Clone + 'static,
    {
        Identity(value)
    }
}

impl Bind<IdentityKind> for IdentityMonad {
    #[inline]
    fn bind<A, B, F>(&self, fa: Identity<A>, function: F) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Identity<B> + 'static,
    {
        function(fa.0)
    }
}

impl Foldable<IdentityKind> for IdentityMonad {
    #[inline]
    fn fold_left<A, B, F>(&self, fa: Identity<A>, initial: B, mut function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(B, A) -> B,
    {
        function(initial, fa.0)
    }

    #[inline]
    fn fold_right<A, B, F>(&self, fa: Identity<A>, initial: B, mut function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(A, B) -> B,
    {
        function(fa.0, initial)
    }
}

impl Traversable<IdentityKind> for IdentityMonad {
    fn traverse<G, I, A, B, F>(
        &self,
        applicative: &I,
        fa: Identity<A>,
        function: F,
    ) -> G::Of<Identity<B>>
    where
        G: Kind,
        I: Applicative<G>,
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> G::Of<B> + 'static,
    {
        applicative.map(function(fa.0), Identity)
    }
}

impl Extend<IdentityKind> for IdentityMonad {
    #[inline]
    fn extend<A, B, F>(&self, wa: Identity<A>, function: F) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(Identity<A>) -> B + 'static,
    {
        Identity(function(wa))
    }
}

static_assertions::assert_impl_all!(IdentityMonad: Send, Sync, Copy);
