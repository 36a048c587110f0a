//! Monoid dictionaries - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! combine(identity(), a) == a
//! combine(a, identity()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{monoid, Concat, Monoid, Sum};
//!
//! assert_eq!(Sum.fold_all(vec![1, 2, 3]), 6);
//! assert_eq!(Sum.fold_all(Vec::<i32>::new()), 0);
//! assert_eq!(Concat.fold_all(vec!["a".to_string(), "b".to_string()]), "ab");
//!
//! let bits = monoid::create(0u8, |a, b| a | b);
//! assert_eq!(bits.fold_all([0b001, 0b100]), 0b101);
//! ```

use super::semigroup::{All, Any, Concat, Dual, Max, Min, Product, Semigroup, Sum};

/// A [`Semigroup`] with an identity element.
pub trait Monoid<A>: Semigroup<A> {
    /// The identity element of `combine`.
    fn identity(&self) -> A;

    /// Combines all values, starting from the identity.
    fn fold_all<I>(&self, values: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        self.fold(self.identity(), values)
    }
}

/// Types with a least and a greatest value, used as identities for [`Max`] and [`Min`].
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Bounded, Max, Monoid};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Max.fold_all([Score(40), Score(75)]), Score(75));
/// assert_eq!(Max.fold_all(Vec::<Score>::new()), Score(0));
/// ```
pub trait Bounded {
    /// The least value of the type.
    const MIN_VALUE: Self;
    /// The greatest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl<A: Ord + Bounded> Monoid<A> for Min {
    #[inline]
    fn identity(&self) -> A {
        A::MAX_VALUE
    }
}

impl<A: Ord + Bounded> Monoid<A> for Max {
    #[inline]
    fn identity(&self) -> A {
        A::MIN_VALUE
    }
}

impl<A: std::ops::Add<Output = A> + Default> Monoid<A> for Sum {
    #[inline]
    fn identity(&self) -> A {
        A::default()
    }
}

macro_rules! impl_product_monoid {
    ($one:literal => $($numeric:ty),* $(,)?) => {
        $(
            impl Monoid<$numeric> for Product {
                #[inline]
                fn identity(&self) -> $numeric {
                    $one
                }
            }
        )*
    };
}

impl_product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_product_monoid!(1.0 => f32, f64);

impl Monoid<String> for Concat {
    #[inline]
    fn identity(&self) -> String {
        String::new()
    }
}

impl<T> Monoid<Vec<T>> for Concat {
    #[inline]
    fn identity(&self) -> Vec<T> {
        Vec::new()
    }
}

impl Monoid<bool> for All {
    #[inline]
    fn identity(&self) -> bool {
        true
    }
}

impl Monoid<bool> for Any {
    #[inline]
    fn identity(&self) -> bool {
        false
    }
}

impl<A, M: Monoid<A>> Monoid<A> for Dual<M> {
    #[inline]
    fn identity(&self) -> A {
        self.0.identity()
    }
}

/// A monoid built from an identity value and a closure. See [`create`].
#[derive(Clone)]
pub struct MonoidFn<A, F> {
    identity: A,
    operation: F,
}

impl<A, F> Semigroup<A> for MonoidFn<A, F>
where
    F: Fn(A, A) -> A,
{
    #[inline]
    fn combine(&self, left: A, right: A) -> A {
        (self.operation)(left, right)
    }
}

impl<A: Clone, F> Monoid<A> for MonoidFn<A, F>
where
    F: Fn(A, A) -> A,
{
    #[inline]
    fn identity(&self) -> A {
        self.identity.clone()
    }
}

impl<A: std::fmt::Debug, F> std::fmt::Debug for MonoidFn<A, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MonoidFn")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Builds a monoid from its identity and an associative binary function.
pub fn create<A, F>(identity: A, operation: F) -> MonoidFn<A, F>
where
    A: Clone,
    F: Fn(A, A) -> A,
{
    MonoidFn {
        identity,
        operation,
    }
}
