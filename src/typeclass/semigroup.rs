//! Semigroup dictionaries - associative binary operations.
//!
//! A semigroup here is a *value* describing how to combine two `A`s, not a
//! property of `A` itself. The same type can therefore be combined in many
//! ways (`i32` under [`Sum`], [`Product`], [`Min`], [`Max`], [`First`], ...) and
//! the caller picks the operation by passing the dictionary.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Dual, First, Last, Max, Min, Semigroup};
//!
//! assert_eq!(First.fold(1, [2, 3, 4, 5]), 1);
//! assert_eq!(Last.fold(1, [2, 3, 4, 5]), 5);
//! assert_eq!(Dual(First).fold(1, [2, 3, 4, 5]), 5);
//! assert_eq!(Min.fold(27, [25, 11, 64, 57]), 11);
//! assert_eq!(Max.fold(27, [25, 11, 64, 57]), 64);
//! ```

use std::ops::{Add, Mul};

use crate::error::DataError;

/// An associative way of combining two values of type `A`.
pub trait Semigroup<A> {
    /// Combines two values. Must be associative.
    fn combine(&self, left: A, right: A) -> A;

    /// Combines `initial` with every value of `values`, left to right.
    fn fold<I>(&self, initial: A, values: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        values
            .into_iter()
            .fold(initial, |accumulated, value| self.combine(accumulated, value))
    }

    /// Combines all values, or returns `None` if there are none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum.reduce_all(vec![1, 2, 3]), Some(6));
    /// assert_eq!(Sum.reduce_all(Vec::<i32>::new()), None);
    /// ```
    fn reduce_all<I>(&self, values: I) -> Option<A>
    where
        I: IntoIterator<Item = A>,
    {
        values
            .into_iter()
            .reduce(|accumulated, value| self.combine(accumulated, value))
    }

    /// Combines `value` with itself `count` times.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidArgument`] if `count` is zero, since a
    /// semigroup has no identity to return.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Concat, Semigroup};
    ///
    /// assert_eq!(Concat.combine_n("ab".to_string(), 3), Ok("ababab".to_string()));
    /// assert!(Concat.combine_n("ab".to_string(), 0).is_err());
    /// ```
    fn combine_n(&self, value: A, count: usize) -> Result<A, DataError>
    where
        A: Clone,
    {
        if count == 0 {
            return Err(DataError::invalid_argument(
                "Semigroup::combine_n",
                "count must be greater than zero",
            ));
        }
        Ok(self.fold(value.clone(), std::iter::repeat_n(value, count - 1)))
    }
}

/// Keeps the left operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct First;

impl<A> Semigroup<A> for First {
    #[inline]
    fn combine(&self, left: A, _right: A) -> A {
        left
    }
}

/// Keeps the right operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Last;

impl<A> Semigroup<A> for Last {
    #[inline]
    fn combine(&self, _left: A, right: A) -> A {
        right
    }
}

/// Keeps the smaller operand; the left one on ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Min;

impl<A: Ord> Semigroup<A> for Min {
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        if right < left { right } else { left }
    }
}

/// Keeps the larger operand; the left one on ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl<A: Ord> Semigroup<A> for Max {
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        if right > left { right } else { left }
    }
}

/// Adds the operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sum;

impl<A: Add<Output = A>> Semigroup<A> for Sum {
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        left + right
    }
}

/// Multiplies the operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Product;

impl<A: Mul<Output = A>> Semigroup<A> for Product {
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        left * right
    }
}

/// Concatenates sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Concat;

impl Semigroup<String> for Concat {
    fn combine(&self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }
}

impl<T> Semigroup<Vec<T>> for Concat {
    fn combine(&self, mut left: Vec<T>, mut right: Vec<T>) -> Vec<T> {
        left.append(&mut right);
        left
    }
}

/// Logical conjunction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct All;

impl Semigroup<bool> for All {
    #[inline]
    fn combine(&self, left: bool, right: bool) -> bool {
        left && right
    }
}

/// Logical disjunction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Any;

impl Semigroup<bool> for Any {
    #[inline]
    fn combine(&self, left: bool, right: bool) -> bool {
        left || right
    }
}

/// The wrapped semigroup with its operands swapped.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Concat, Dual, Semigroup};
///
/// let reversed = Dual(Concat).combine("world".to_string(), "hello ".to_string());
/// assert_eq!(reversed, "hello world");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dual<S>(pub S);

impl<A, S: Semigroup<A>> Semigroup<A> for Dual<S> {
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        self.0.combine(right, left)
    }
}

/// A semigroup built from a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct SemigroupFn<F> {
    operation: F,
}

impl<A, F> Semigroup<A> for SemigroupFn<F>
where
    F: Fn(A, A) -> A,
{
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        (self.operation)(left, right)
    }
}

impl<F> std::fmt::Debug for SemigroupFn<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("SemigroupFn(<function>)")
    }
}

/// Builds a semigroup from an associative binary function.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{semigroup, Semigroup};
///
/// let gcd = semigroup::from_fn(|mut a: u32, mut b: u32| {
///     while b != 0 {
///         (a, b) = (b, a % b);
///     }
///     a
/// });
/// assert_eq!(gcd.fold(12, [18, 30]), 6);
/// ```
pub fn from_fn<A, F>(operation: F) -> SemigroupFn<F>
where
    F: Fn(A, A) -> A,
{
    SemigroupFn { operation }
}
