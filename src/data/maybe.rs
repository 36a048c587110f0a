//! Optional values - a container holding zero or one value.
//!
//! `Maybe<A>` is either [`Maybe::Empty`] or [`Maybe::Present`]. Its one
//! primitive is [`cata`](Maybe::cata), which collapses the container into a
//! plain value given a default and a function; the accessors and
//! combinators below are expressed through it.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::Maybe;
//!
//! let port = Maybe::present("8080").bind(|text| match text.parse::<u16>() {
//!     Ok(port) => Maybe::present(port),
//!     Err(_) => Maybe::empty(),
//! });
//! assert_eq!(port, Maybe::present(8080));
//! assert_eq!(port.to_string(), "Present(8080)");
//! assert_eq!(Maybe::<u16>::empty().to_string(), "Empty");
//! ```

use std::fmt;

use crate::data::List;
use crate::error::DataError;
use crate::typeclass::{
    Alternative, Applicative, Apply, Bias, Bind, Extend, Foldable, Functor, Kind, Kinded, Monoid,
    Semigroup, Traversable,
};

/// A value that may be absent.
///
/// Equality, ordering and hashing are structural: two `Maybe`s are equal
/// when both are empty or both hold equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    Empty,
    /// Exactly one value.
    Present(A),
}

impl<A> Maybe<A> {
    /// The empty container.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// A container holding `value`.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// A container holding the value of `value`, which must be `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidArgument`] when `value` is `None`: a
    /// present container cannot be built without a value. Use
    /// [`From<Option<A>>`](Maybe#impl-From<Option<A>>-for-Maybe<A>) to map
    /// `None` to `Empty` instead.
    pub fn try_present(value: Option<A>) -> Result<Self, DataError> {
        value.map(Self::Present).ok_or_else(|| {
            DataError::invalid_argument("Maybe::try_present", "a present value is required")
        })
    }

    /// `Present(thunk())` if `condition` holds, `Empty` otherwise.
    ///
    /// The thunk only runs when the condition holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Maybe;
    ///
    /// assert_eq!(Maybe::present_when(3 > 2, || "yes"), Maybe::present("yes"));
    /// assert_eq!(Maybe::present_when(false, || unreachable!()), Maybe::<i32>::empty());
    /// ```
    pub fn present_when<F>(condition: bool, thunk: F) -> Self
    where
        F: FnOnce() -> A,
    {
        if condition {
            Self::Present(thunk())
        } else {
            Self::Empty
        }
    }

    /// Collapses the container: `default` when empty, `function(value)` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Maybe;
    ///
    /// assert_eq!(Maybe::present(4).cata(0, |n| n * 10), 40);
    /// assert_eq!(Maybe::<i32>::empty().cata(0, |n| n * 10), 0);
    /// ```
    #[inline]
    pub fn cata<B, F>(self, default: B, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Empty => default,
            Self::Present(value) => function(value),
        }
    }

    /// Like [`cata`](Maybe::cata), computing the default only when needed.
    #[inline]
    pub fn lazy_cata<B, D, F>(self, default: D, function: F) -> B
    where
        D: FnOnce() -> B,
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Empty => default(),
            Self::Present(value) => function(value),
        }
    }

    /// Like [`cata`](Maybe::cata), borrowing the value instead of consuming it.
    #[inline]
    pub fn cata_ref<'a, B, F>(&'a self, default: B, function: F) -> B
    where
        F: FnOnce(&'a A) -> B,
    {
        match self {
            Self::Empty => default,
            Self::Present(value) => function(value),
        }
    }

    /// Returns `true` if there is no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cata_ref(true, |_| false)
    }

    /// Returns `true` if there is a value.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.cata_ref(false, |_| true)
    }

    /// Borrows the value, if any.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&A> {
        self.cata_ref(Maybe::Empty, Maybe::Present)
    }

    /// The value, or `default` when empty.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        self.cata(default, |value| value)
    }

    /// The value, or the result of `supplier` when empty.
    #[inline]
    pub fn get_or_else_with<F>(self, supplier: F) -> A
    where
        F: FnOnce() -> A,
    {
        self.lazy_cata(supplier, |value| value)
    }

    /// The value, or the caller's error when empty.
    ///
    /// # Errors
    ///
    /// Returns `error()` when the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Maybe;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct MissingUser;
    ///
    /// assert_eq!(Maybe::present(1).get_or_fail(|| MissingUser), Ok(1));
    /// assert_eq!(Maybe::<i32>::empty().get_or_fail(|| MissingUser), Err(MissingUser));
    /// ```
    pub fn get_or_fail<E, F>(self, error: F) -> Result<A, E>
    where
        F: FnOnce() -> E,
    {
        self.lazy_cata(|| Err(error()), Ok)
    }

    /// The value.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::EmptyValueAccess`] when the container is empty.
    pub fn get(self) -> Result<A, DataError> {
        self.get_or_fail(|| DataError::empty_value_access("Maybe::get"))
    }

    /// The value, reporting `message` as the context of the error when empty.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::EmptyValueAccess`] carrying `message` when the
    /// container is empty.
    pub fn get_or_message(self, message: impl Into<String>) -> Result<A, DataError> {
        self.get_or_fail(|| DataError::empty_value_access(message))
    }

    /// `self` if it holds a value, `other` otherwise. Never merges the two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).or_else(Maybe::present(2)), Maybe::present(1));
    /// assert_eq!(Maybe::empty().or_else(Maybe::present(2)), Maybe::present(2));
    /// ```
    #[inline]
    pub fn or_else(self, other: Self) -> Self {
        if self.is_present() { self } else { other }
    }

    /// Keeps the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.bind(|value| {
            if predicate(&value) {
                Maybe::Present(value)
            } else {
                Maybe::Empty
            }
        })
    }

    /// Feeds the value to `function`, or stays empty.
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.cata(Maybe::Empty, function)
    }

    /// Transforms the value, if any.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.bind(|value| Maybe::Present(function(value)))
    }

    /// Compares two containers with a caller-supplied equality on the values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Maybe;
    ///
    /// let same_length = |a: &&str, b: &&str| a.len() == b.len();
    /// assert!(Maybe::present("abc").eq_by(&Maybe::present("xyz"), same_length));
    /// assert!(!Maybe::present("abc").eq_by(&Maybe::empty(), same_length));
    /// ```
    pub fn eq_by<F>(&self, other: &Self, equal: F) -> bool
    where
        F: FnOnce(&A, &A) -> bool,
    {
        self.cata_ref(other.is_empty(), |left| {
            other.cata_ref(false, |right| equal(left, right))
        })
    }

    /// Lifts a unary function into the `Maybe` context.
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Maybe<B>
    where
        F: Fn(A) -> B,
    {
        move |maybe| maybe.map(&function)
    }

    /// Lifts a binary function into the `Maybe` context.
    ///
    /// Arguments are inspected left to right; the first empty one makes the
    /// result empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Maybe;
    ///
    /// let add = Maybe::lift2(|a: i32, b: i32| a + b);
    /// assert_eq!(add(Maybe::present(1), Maybe::present(2)), Maybe::present(3));
    /// assert_eq!(add(Maybe::empty(), Maybe::present(2)), Maybe::empty());
    /// ```
    pub fn lift2<B, C, F>(function: F) -> impl Fn(Self, Maybe<B>) -> Maybe<C>
    where
        F: Fn(A, B) -> C,
    {
        move |maybe_a, maybe_b| maybe_a.bind(|a| maybe_b.map(|b| function(a, b)))
    }

    /// Lifts a ternary function into the `Maybe` context.
    pub fn lift3<B, C, D, F>(function: F) -> impl Fn(Self, Maybe<B>, Maybe<C>) -> Maybe<D>
    where
        F: Fn(A, B, C) -> D,
    {
        move |maybe_a, maybe_b, maybe_c| {
            maybe_a.bind(|a| maybe_b.bind(|b| maybe_c.map(|c| function(a, b, c))))
        }
    }

    /// A list of zero or one element.
    pub fn as_list(self) -> List<A> {
        self.cata(List::new(), List::singleton)
    }

    /// Iterates over the value, if any.
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.cata_ref(None, Some).into_iter()
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.cata(None, Some)
    }

    /// Collects the values of the present containers, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::{List, Maybe};
    ///
    /// let values = [Maybe::present(1), Maybe::empty(), Maybe::present(3)];
    /// assert_eq!(Maybe::collect_present(values), List::from_slice(&[1, 3]));
    /// ```
    pub fn collect_present<I>(values: I) -> List<A>
    where
        I: IntoIterator<Item = Self>,
    {
        values.into_iter().flatten().collect()
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        value.map_or(Self::Empty, Self::Present)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("Empty"),
            Self::Present(value) => write!(formatter, "Present({value})"),
        }
    }
}

// =============================================================================
// Witness and instances
// =============================================================================

/// Witness of the [`Maybe`] family.
pub enum MaybeKind {}

impl Kind for MaybeKind {
    type Of<A: Clone + 'static> = Maybe<A>;
}

impl<A: Clone + 'static> Kinded for Maybe<A> {
    type Witness = MaybeKind;
    type Element = A;

    #[inline]
    fn widen(self) -> Maybe<A> {
        self
    }

    #[inline]
    fn narrow(value: Maybe<A>) -> Self {
        value
    }
}

/// Functor, Apply, Applicative, Bind, Foldable, Traversable and Extend instance for [`Maybe`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaybeMonad;

impl Functor<MaybeKind> for MaybeMonad {
    #[inline]
    fn map<A, B, F>(&self, fa: Maybe<A>, function: F) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Apply<MaybeKind> for MaybeMonad {
    fn ap<A, B, F>(&self, functions: Maybe<F>, fa: Maybe<A>) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.bind(|function| fa.map(function))
    }

    fn map2<A, B, C, F>(&self, fa: Maybe<A>, fb: Maybe<B>, function: F) -> Maybe<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        Maybe::lift2(function)(fa, fb)
    }

    fn map3<A, B, C, D, F>(&self, fa: Maybe<A>, fb: Maybe<B>, fc: Maybe<C>, function: F) -> Maybe<D>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        F: Fn(A, B, C) -> D + 'static,
    {
        Maybe::lift3(function)(fa, fb, fc)
    }
}

impl Applicative<MaybeKind> for MaybeMonad {
    #[inline]
    fn pure<A>(&self, value: A) -> Maybe<A>
    where
        A: Clone + 'static,
    {
        Maybe::Present(value)
    }
}

impl Bind<MaybeKind> for MaybeMonad {
    #[inline]
    fn bind<A, B, F>(&self, fa: Maybe<A>, function: F) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Maybe<B> + 'static,
    {
        fa.bind(function)
    }
}

impl Foldable<MaybeKind> for MaybeMonad {
    fn fold_left<A, B, F>(&self, fa: Maybe<A>, initial: B, mut function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(B, A) -> B,
    {
        match fa {
            Maybe::Empty => initial,
            Maybe::Present(value) => function(initial, value),
        }
    }

    fn fold_right<A, B, F>(&self, fa: Maybe<A>, initial: B, mut function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(A, B) -> B,
    {
        match fa {
            Maybe::Empty => initial,
            Maybe::Present(value) => function(value, initial),
        }
    }
}

impl Traversable<MaybeKind> for MaybeMonad {
    fn traverse<G, I, A, B, F>(&self, applicative: &I, fa: Maybe<A>, function: F) -> G::Of<Maybe<B>>
    where
        G: Kind,
        I: Applicative<G>,
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> G::Of<B> + 'static,
    {
        match fa {
            Maybe::Empty => applicative.pure(Maybe::Empty),
            Maybe::Present(value) => applicative.map(function(value), Maybe::Present),
        }
    }
}

impl Extend<MaybeKind> for MaybeMonad {
    fn extend<A, B, F>(&self, wa: Maybe<A>, function: F) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(Maybe<A>) -> B + 'static,
    {
        if wa.is_present() {
            Maybe::Present(function(wa))
        } else {
            Maybe::Empty
        }
    }
}

/// [`MaybeMonad`] extended with a choice operation whose winner is set by [`Bias`].
///
/// # Examples
///
/// ```rust
/// use kindred::data::{Maybe, MaybeMonadPlus};
/// use kindred::typeclass::{Alternative, Bias};
///
/// let last = MaybeMonadPlus::new(Bias::Last);
/// assert_eq!(last.alt(Maybe::present(1), Maybe::present(2)), Maybe::present(2));
/// assert_eq!(MaybeMonadPlus::FIRST.alt(Maybe::present(1), Maybe::present(2)), Maybe::present(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaybeMonadPlus {
    bias: Bias,
}

impl MaybeMonadPlus {
    /// The instance preferring the left operand.
    pub const FIRST: Self = Self { bias: Bias::First };
    /// The instance preferring the right operand.
    pub const LAST: Self = Self { bias: Bias::Last };

    /// An instance with the given bias.
    #[inline]
    pub const fn new(bias: Bias) -> Self {
        Self { bias }
    }

    /// The bias of this instance.
    #[inline]
    pub const fn bias(&self) -> Bias {
        self.bias
    }
}

impl Functor<MaybeKind> for MaybeMonadPlus {
    #[inline]
    fn map<A, B, F>(&self, fa: Maybe<A>, function: F) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        MaybeMonad.map(fa, function)
    }
}

impl Apply<MaybeKind> for MaybeMonadPlus {
    #[inline]
    fn ap<A, B, F>(&self, functions: Maybe<F>, fa: Maybe<A>) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        MaybeMonad.ap(functions, fa)
    }

    #[inline]
    fn map2<A, B, C, F>(&self, fa: Maybe<A>, fb: Maybe<B>, function: F) -> Maybe<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        MaybeMonad.map2(fa, fb, function)
    }
}

impl Applicative<MaybeKind> for MaybeMonadPlus {
    #[inline]
    fn pure<A>(&self, value: A) -> Maybe<A>
    where
        A: Clone + 'static,
    {
        Maybe::Present(value)
    }
}

impl Bind<MaybeKind> for MaybeMonadPlus {
    #[inline]
    fn bind<A, B, F>(&self, fa: Maybe<A>, function: F) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Maybe<B> + 'static,
    {
        fa.bind(function)
    }
}

impl Alternative<MaybeKind> for MaybeMonadPlus {
    #[inline]
    fn empty<A>(&self) -> Maybe<A>
    where
        A: Clone + 'static,
    {
        Maybe::Empty
    }

    fn alt<A>(&self, first: Maybe<A>, second: Maybe<A>) -> Maybe<A>
    where
        A: Clone + 'static,
    {
        match self.bias {
            Bias::First => first.or_else(second),
            Bias::Last => second.or_else(first),
        }
    }
}

// =============================================================================
// Monoids over Maybe
// =============================================================================

/// Monoid keeping the first present operand. Identity: `Empty`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{FirstPresent, LastPresent, Maybe};
/// use kindred::typeclass::Monoid;
///
/// let values = [Maybe::empty(), Maybe::present(1), Maybe::present(2)];
/// assert_eq!(FirstPresent.fold_all(values), Maybe::present(1));
/// assert_eq!(LastPresent.fold_all(values), Maybe::present(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FirstPresent;

impl<A> Semigroup<Maybe<A>> for FirstPresent {
    #[inline]
    fn combine(&self, left: Maybe<A>, right: Maybe<A>) -> Maybe<A> {
        left.or_else(right)
    }
}

impl<A> Monoid<Maybe<A>> for FirstPresent {
    #[inline]
    fn identity(&self) -> Maybe<A> {
        Maybe::Empty
    }
}

/// Monoid keeping the last present operand. Identity: `Empty`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LastPresent;

impl<A> Semigroup<Maybe<A>> for LastPresent {
    #[inline]
    fn combine(&self, left: Maybe<A>, right: Maybe<A>) -> Maybe<A> {
        right.or_else(left)
    }
}

impl<A> Monoid<Maybe<A>> for LastPresent {
    #[inline]
    fn identity(&self) -> Maybe<A> {
        Maybe::Empty
    }
}

/// Monoid combining present values with the wrapped semigroup. Identity: `Empty`.
///
/// When only one side holds a value, that side is the result.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{Maybe, MaybeMonoid};
/// use kindred::typeclass::{Monoid, Sum};
///
/// let values = [Maybe::present(2), Maybe::empty(), Maybe::present(3)];
/// assert_eq!(MaybeMonoid(Sum).fold_all(values), Maybe::present(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaybeMonoid<S>(pub S);

impl<A, S: Semigroup<A>> Semigroup<Maybe<A>> for MaybeMonoid<S> {
    fn combine(&self, left: Maybe<A>, right: Maybe<A>) -> Maybe<A> {
        match (left, right) {
            (Maybe::Present(left), Maybe::Present(right)) => {
                Maybe::Present(self.0.combine(left, right))
            }
            (left @ Maybe::Present(_), Maybe::Empty) => left,
            (Maybe::Empty, right) => right,
        }
    }
}

impl<A, S: Semigroup<A>> Monoid<Maybe<A>> for MaybeMonoid<S> {
    #[inline]
    fn identity(&self) -> Maybe<A> {
        Maybe::Empty
    }
}

static_assertions::assert_impl_all!(MaybeMonad: Send, Sync, Copy);
static_assertions::assert_impl_all!(MaybeMonadPlus: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Max, MonadPlus};
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::present(7), 7)]
    #[case(Maybe::empty(), -1)]
    fn cata_with_identity(#[case] maybe: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(maybe.cata(-1, |value| value), expected);
    }

    #[rstest]
    fn lazy_cata_skips_default_when_present() {
        let result = Maybe::present(1).lazy_cata(|| unreachable!(), |n| n + 1);
        assert_eq!(result, 2);
    }

    #[rstest]
    fn try_present_rejects_missing_value() {
        assert_eq!(Maybe::try_present(Some(1)), Ok(Maybe::present(1)));
        assert_eq!(
            Maybe::<i32>::try_present(None),
            Err(DataError::InvalidArgument {
                operation: "Maybe::try_present",
                reason: "a present value is required".to_string(),
            })
        );
    }

    #[rstest]
    fn emptiness_checks() {
        assert!(Maybe::<()>::empty().is_empty());
        assert!(!Maybe::<()>::empty().is_present());
        assert!(Maybe::present(()).is_present());
    }

    #[rstest]
    fn get_variants() {
        assert_eq!(Maybe::present(3).get(), Ok(3));
        assert_eq!(
            Maybe::<i32>::empty().get(),
            Err(DataError::EmptyValueAccess {
                context: "Maybe::get".to_string()
            })
        );
        assert_eq!(
            Maybe::<i32>::empty().get_or_message("no config loaded"),
            Err(DataError::EmptyValueAccess {
                context: "no config loaded".to_string()
            })
        );
        assert_eq!(Maybe::<i32>::empty().get_or_else(9), 9);
        assert_eq!(Maybe::<i32>::empty().get_or_else_with(|| 10), 10);
    }

    #[rstest]
    fn or_else_is_left_biased() {
        assert_eq!(Maybe::present(1).or_else(Maybe::present(2)), Maybe::present(1));
        assert_eq!(Maybe::empty().or_else(Maybe::present(2)), Maybe::present(2));
        assert_eq!(Maybe::<i32>::empty().or_else(Maybe::empty()), Maybe::empty());
    }

    #[rstest]
    #[case(4, Maybe::present(4))]
    #[case(3, Maybe::empty())]
    fn filter_even(#[case] value: i32, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::present(value).filter(|n| n % 2 == 0), expected);
    }

    #[rstest]
    fn structural_equality_on_lists() {
        let left = Maybe::present(List::from_slice(&[1, 2]));
        let right = Maybe::present(List::from_slice(&[1, 2]));
        assert_eq!(left, right);
    }

    #[rstest]
    fn lift3_evaluates_left_to_right() {
        let sum3 = Maybe::lift3(|a: i32, b: i32, c: i32| a + b + c);
        assert_eq!(
            sum3(Maybe::present(1), Maybe::present(2), Maybe::present(3)),
            Maybe::present(6)
        );
        assert_eq!(
            sum3(Maybe::present(1), Maybe::empty(), Maybe::present(3)),
            Maybe::empty()
        );
    }

    #[rstest]
    fn lift_maps() {
        let length = Maybe::lift(|s: &str| s.len());
        assert_eq!(length(Maybe::present("abc")), Maybe::present(3));
    }

    #[rstest]
    fn display_format() {
        assert_eq!(Maybe::present("x").to_string(), "Present(x)");
        assert_eq!(Maybe::<i32>::empty().to_string(), "Empty");
    }

    #[rstest]
    fn option_conversions() {
        assert_eq!(Maybe::from(Some(1)), Maybe::present(1));
        assert_eq!(Maybe::<i32>::from(None), Maybe::empty());
        assert_eq!(Option::from(Maybe::present(2)), Some(2));
        assert_eq!(Maybe::present(5).iter().copied().collect::<Vec<_>>(), vec![5]);
    }

    #[rstest]
    fn as_list_has_zero_or_one_element() {
        assert_eq!(Maybe::present(1).as_list(), List::singleton(1));
        assert_eq!(Maybe::<i32>::empty().as_list(), List::new());
    }

    #[rstest]
    fn maybe_monoid_uses_inner_semigroup() {
        let monoid = MaybeMonoid(Max);
        assert_eq!(
            monoid.combine(Maybe::present(3), Maybe::present(8)),
            Maybe::present(8)
        );
        assert_eq!(monoid.combine(Maybe::present(3), Maybe::empty()), Maybe::present(3));
        assert_eq!(monoid.combine(Maybe::empty(), Maybe::present(8)), Maybe::present(8));
    }

    #[rstest]
    #[case(Maybe::present(1))]
    #[case(Maybe::empty())]
    fn monoid_identity_laws(#[case] value: Maybe<i32>) {
        assert_eq!(FirstPresent.combine(FirstPresent.identity(), value), value);
        assert_eq!(FirstPresent.combine(value, FirstPresent.identity()), value);
        assert_eq!(LastPresent.combine(LastPresent.identity(), value), value);
        assert_eq!(LastPresent.combine(value, LastPresent.identity()), value);
        let lifted = MaybeMonoid(crate::typeclass::Sum);
        assert_eq!(lifted.combine(lifted.identity(), value), value);
        assert_eq!(lifted.combine(value, lifted.identity()), value);
    }

    #[rstest]
    fn monad_plus_guard() {
        let plus = MaybeMonadPlus::FIRST;
        assert_eq!(plus.guard(true), Maybe::present(()));
        assert_eq!(plus.guard(false), Maybe::empty());
        assert_eq!(plus.mfilter(Maybe::present(2), |n| *n > 1), Maybe::present(2));
    }

    #[rstest]
    fn traverse_present_over_list_instance() {
        use crate::data::ListMonad;
        let result = MaybeMonad.traverse(&ListMonad, Maybe::present(1), |n| {
            List::from_slice(&[n, -n])
        });
        assert_eq!(
            result,
            List::from_slice(&[Maybe::present(1), Maybe::present(-1)])
        );
    }
}
