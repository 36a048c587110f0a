//! `ErrorT` - the error monad transformer.
//!
//! `ErrorT<E, M, A>` wraps an inner computation `M<Either<E, A>>`. Binding
//! runs the inner monad's effects and stops at the first `Left`; everything
//! the inner monad does (nondeterminism, optionality, ...) is kept.
//!
//! The transformer's instance, [`ErrorTMonad`], holds the inner monad's
//! instance. Its type class implementations need only what they use from
//! the inner instance: `map` needs an inner [`Functor`], the rest an inner
//! [`Monad`].

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::data::Either;
use crate::typeclass::{
    Applicative, Apply, Bind, Functor, Hkt, Kind, Kinded, Monad, MonadError,
};

/// A computation in the inner monad `M` that may fail with an `E`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{Either, Maybe, MaybeKind, MaybeMonad};
/// use kindred::transformer::ErrorT;
///
/// let lifted: ErrorT<String, MaybeKind, i32> = ErrorT::lift(&MaybeMonad, Maybe::present(1));
/// assert_eq!(lifted.run(), Maybe::present(Either::Right(1)));
/// ```
pub struct ErrorT<E, M, A>
where
    E: Clone + 'static,
    M: Kind,
    A: Clone + 'static,
{
    inner: Hkt<M, Either<E, A>>,
}

impl<E, M, A> ErrorT<E, M, A>
where
    E: Clone + 'static,
    M: Kind,
    A: Clone + 'static,
{
    /// Wraps an inner computation producing `Either<E, A>`.
    #[inline]
    pub const fn new(inner: Hkt<M, Either<E, A>>) -> Self {
        Self { inner }
    }

    /// Unwraps the inner computation.
    #[inline]
    pub fn run(self) -> Hkt<M, Either<E, A>> {
        self.inner
    }

    /// Borrows the inner computation.
    #[inline]
    pub const fn as_inner(&self) -> &Hkt<M, Either<E, A>> {
        &self.inner
    }

    /// Lifts an inner computation that cannot fail.
    pub fn lift<MI>(functor: &MI, computation: Hkt<M, A>) -> Self
    where
        MI: Functor<M>,
    {
        Self::new(functor.map(computation, Either::Right))
    }
}

impl<E, M, A> Clone for ErrorT<E, M, A>
where
    E: Clone + 'static,
    M: Kind,
    A: Clone + 'static,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E, M, A> PartialEq for ErrorT<E, M, A>
where
    E: Clone + 'static,
    M: Kind,
    A: Clone + 'static,
    Hkt<M, Either<E, A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E, M, A> fmt::Debug for ErrorT<E, M, A>
where
    E: Clone + 'static,
    M: Kind,
    A: Clone + 'static,
    Hkt<M, Either<E, A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ErrorT").field(&self.inner).finish()
    }
}

/// Witness of the `ErrorT<E, M, _>` family.
pub struct ErrorTKind<E, M> {
    _never: Infallible,
    _marker: PhantomData<fn() -> (E, M)>,
}

impl<E: Clone + 'static, M: Kind> Kind for ErrorTKind<E, M> {
    type Of<A: Clone + 'static> = ErrorT<E, M, A>;
}

impl<E, M, A> Kinded for ErrorT<E, M, A>
where
    E: Clone + 'static,
    M: Kind,
    A: Clone + 'static,
{
    type Witness = ErrorTKind<E, M>;
    type Element = A;

    #[inline]
    fn widen(self) -> Self {
        self
    }

    #[inline]
    fn narrow(value: Self) -> Self {
        value
    }
}

/// Type class instance for [`ErrorT`] over the inner instance `MI`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{Either, Maybe, MaybeKind, MaybeMonad};
/// use kindred::transformer::{ErrorT, ErrorTMonad};
/// use kindred::typeclass::{Applicative, MonadError};
///
/// let monad = ErrorTMonad::<&str, MaybeKind, _>::new(MaybeMonad);
/// let failed: ErrorT<&str, MaybeKind, i32> = monad.throw_error("boom");
/// let recovered = monad.catch_error(failed, move |error: &str| monad.pure(error.len() as i32));
/// assert_eq!(recovered.run(), Maybe::present(Either::Right(4)));
/// ```
pub struct ErrorTMonad<E, M, MI> {
    inner: MI,
    marker: PhantomData<fn() -> (E, M)>,
}

impl<E, M, MI> ErrorTMonad<E, M, MI> {
    /// Builds the instance around the inner monad's instance.
    #[inline]
    pub const fn new(inner: MI) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }

    /// The inner monad's instance.
    #[inline]
    pub const fn inner(&self) -> &MI {
        &self.inner
    }
}

impl<E, M, MI: Clone> Clone for ErrorTMonad<E, M, MI> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<E, M, MI: Copy> Copy for ErrorTMonad<E, M, MI> {}

impl<E, M, MI: Default> Default for ErrorTMonad<E, M, MI> {
    #[inline]
    fn default() -> Self {
        Self::new(MI::default())
    }
}

impl<E, M, MI: fmt::Debug> fmt::Debug for ErrorTMonad<E, M, MI> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ErrorTMonad").field(&self.inner).finish()
    }
}

impl<E, M, MI> Functor<ErrorTKind<E, M>> for ErrorTMonad<E, M, MI>
where
    E: Clone + 'static,
    M: Kind,
    MI: Functor<M>,
{
    fn map<A, B, F>(&self, fa: ErrorT<E, M, A>, function: F) -> ErrorT<E, M, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        ErrorT::new(
            self.inner
                .map(fa.run(), move |either: Either<E, A>| either.map_right(|value| function(value))),
        )
    }
}

impl<E, M, MI> Apply<ErrorTKind<E, M>> for ErrorTMonad<E, M, MI>
where
    E: Clone + 'static,
    M: Kind,
    MI: Monad<M> + Clone + 'static,
{
    fn ap<A, B, F>(&self, functions: ErrorT<E, M, F>, fa: ErrorT<E, M, A>) -> ErrorT<E, M, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        let monad = self.clone();
        self.bind(functions, move |function: F| monad.map(fa.clone(), function))
    }
}

impl<E, M, MI> Applicative<ErrorTKind<E, M>> for ErrorTMonad<E, M, MI>
where
    E: Clone + 'static,
    M: Kind,
    MI: Monad<M> + Clone + 'static,
{
    #[inline]
    fn pure<A>(&self, value: A) -> ErrorT<E, M, A>
    where
        A: Clone + 'static,
    {
        ErrorT::new(self.inner.pure(Either::Right(value)))
    }
}

impl<E, M, MI> Bind<ErrorTKind<E, M>> for ErrorTMonad<E, M, MI>
where
    E: Clone + 'static,
    M: Kind,
    MI: Monad<M> + Clone + 'static,
{
    fn bind<A, B, F>(&self, fa: ErrorT<E, M, A>, function: F) -> ErrorT<E, M, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> ErrorT<E, M, B> + 'static,
    {
        let inner = self.inner.clone();
        ErrorT::new(self.inner.bind(fa.run(), move |either: Either<E, A>| match either {
            Either::Left(error) => {
                tracing::trace!("error short-circuited bind");
                inner.pure(Either::Left(error))
            }
            Either::Right(value) => function(value).run(),
        }))
    }
}

impl<E, M, MI> MonadError<ErrorTKind<E, M>, E> for ErrorTMonad<E, M, MI>
where
    E: Clone + 'static,
    M: Kind,
    MI: Monad<M> + Clone + 'static,
{
    #[inline]
    fn throw_error<A>(&self, error: E) -> ErrorT<E, M, A>
    where
        A: Clone + 'static,
    {
        ErrorT::new(self.inner.pure(Either::Left(error)))
    }

    fn catch_error<A, F>(&self, fa: ErrorT<E, M, A>, handler: F) -> ErrorT<E, M, A>
    where
        A: Clone + 'static,
        F: Fn(E) -> ErrorT<E, M, A> + 'static,
    {
        let inner = self.inner.clone();
        ErrorT::new(self.inner.bind(fa.run(), move |either: Either<E, A>| match either {
            Either::Left(error) => {
                tracing::trace!("error handled by catch_error");
                handler(error).run()
            }
            Either::Right(value) => inner.pure(Either::Right(value)),
        }))
    }
}
