//! Either type - a value that is one of two alternatives.
//!
//! `Left` conventionally carries a failure and `Right` a success; the monad
//! instance is right-biased and short-circuits on the first `Left`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::Either;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//! let doubled = parsed.map_right(|n| n * 2);
//! assert_eq!(doubled.to_string(), "Right(84)");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::data::Maybe;
use crate::typeclass::{
    Applicative, Apply, Bind, Foldable, Functor, Kind, Kind2, Kinded, MonadError, Partial,
    Traversable,
};

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative, conventionally a failure.
    Left(L),
    /// The right alternative, conventionally a success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Collapses the value by applying the function matching its side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.cata(|n| n.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn cata<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Returns `true` for a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if this is a `Left`.
    #[inline]
    pub fn left(self) -> Maybe<L> {
        self.cata(Maybe::Present, |_| Maybe::Empty)
    }

    /// The right value, if this is a `Right`.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        self.cata(|_| Maybe::Empty, Maybe::Present)
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms a left value; a right value passes through.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.bimap(function, |value| value)
    }

    /// Transforms a right value; a left value passes through.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.bimap(|value| value, function)
    }

    /// Transforms whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a computation on the right value; a left value short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Either;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(n) };
    /// assert_eq!(Either::<i32, i32>::Right(8).bind(halve).bind(halve), Either::Right(2));
    /// assert_eq!(Either::<i32, i32>::Right(6).bind(halve).bind(halve), Either::Left(3));
    /// ```
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.cata(Either::Right, Either::Left)
    }

    /// The right value, or `default` for a `Left`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        self.cata(|_| default, |value| value)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.cata(Err, Ok)
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Witness and instances
// =============================================================================

/// Witness of the two-parameter [`Either`] family.
///
/// `Partial<EitherKind, L>` names `Either<L, _>` for a fixed left type.
pub enum EitherKind {}

impl Kind2 for EitherKind {
    type Of<A: Clone + 'static, B: Clone + 'static> = Either<A, B>;
}

impl<L: Clone + 'static, R: Clone + 'static> Kinded for Either<L, R> {
    type Witness = Partial<EitherKind, L>;
    type Element = R;

    #[inline]
    fn widen(self) -> Either<L, R> {
        self
    }

    #[inline]
    fn narrow(value: Either<L, R>) -> Self {
        value
    }
}

/// Type class instance for [`Either`] with the left type fixed to `L`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{Either, EitherMonad};
/// use kindred::typeclass::Bind;
///
/// let monad = EitherMonad::<String>::new();
/// let result = monad.bind(Either::Right(3), |n: i32| Either::Right(n + 1));
/// assert_eq!(result, Either::Right(4));
/// ```
pub struct EitherMonad<L> {
    marker: PhantomData<fn() -> L>,
}

impl<L> EitherMonad<L> {
    /// Creates the instance.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<L> Clone for EitherMonad<L> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for EitherMonad<L> {}

impl<L> Default for EitherMonad<L> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for EitherMonad<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("EitherMonad")
    }
}

type EitherOf<L> = Partial<EitherKind, L>;

impl<L: Clone + 'static> Functor<EitherOf<L>> for EitherMonad<L> {
    #[inline]
    fn map<A, B, F>(&self, fa: Either<L, A>, function: F) -> Either<L, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map_right(function)
    }
}

impl<L: Clone + 'static> Apply<EitherOf<L>> for EitherMonad<L> {
    #[inline]
    fn ap<A, B, F>(&self, functions: Either<L, F>, fa: Either<L, A>) -> Either<L, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.bind(|function| fa.map_right(function))
    }

    #[inline]
    fn map2<A, B, C, F>(&self, fa: Either<L, A>, fb: Either<L, B>, function: F) -> Either<L, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        fa.bind(|a| fb.map_right(|b| function(a, b)))
    }
}

impl<L: Clone + 'static> Applicative<EitherOf<L>> for EitherMonad<L> {
    #[inline]
    fn pure<A>(&self, value: A) -> Either<L, A>
    where
        A: Clone + 'static,
    {
        Either::Right(value)
    }
}

impl<L: Clone + 'static> Bind<EitherOf<L>> for EitherMonad<L> {
    #[inline]
    fn bind<A, B, F>(&self, fa: Either<L, A>, function: F) -> Either<L, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Either<L, B> + 'static,
    {
        fa.bind(function)
    }
}

impl<L: Clone + 'static> Foldable<EitherOf<L>> for EitherMonad<L> {
    #[inline]
    fn fold_left<A, B, F>(&self, fa: Either<L, A>, initial: B, mut function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(B, A) -> B,
    {
        match fa {
            Either::Left(_) => initial,
            Either::Right(value) => function(initial, value),
        }
    }

    #[inline]
    fn fold_right<A, B, F>(&self, fa: Either<L, A>, initial: B, mut function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(A, B) -> B,
    {
        match fa {
            Either::Left(_) => initial,
            Either::Right(value) => function(value, initial),
        }
    }
}

impl<L: Clone + 'static> Traversable<EitherOf<L>> for EitherMonad<L> {
    fn traverse<G, I, A, B, F>(
        &self,
        applicative: &I,
        fa: Either<L, A>,
        function: F,
    ) -> G::Of<Either<L, B>>
    where
        G: Kind,
        I: Applicative<G>,
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> G::Of<B> + 'static,
    {
        match fa {
            Either::Left(error) => applicative.pure(Either::Left(error)),
            Either::Right(value) => applicative.map(function(value), Either::Right),
        }
    }
}

impl<L: Clone + 'static> MonadError<EitherOf<L>, L> for EitherMonad<L> {
    #[inline]
    fn throw_error<A>(&self, error: L) -> Either<L, A>
    where
        A: Clone + 'static,
    {
        Either::Left(error)
    }

    #[inline]
    fn catch_error<A, F>(&self, fa: Either<L, A>, handler: F) -> Either<L, A>
    where
        A: Clone + 'static,
        F: Fn(L) -> Either<L, A> + 'static,
    {
        match fa {
            Either::Left(error) => handler(error),
            right @ Either::Right(_) => right,
        }
    }
}

static_assertions::assert_impl_all!(EitherMonad<String>: Send, Sync, Copy);
