//! Higher-Kinded Type emulation through witness types and Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `List<_>` as type constructors
//! directly. Instead every container family declares a *witness*: an
//! uninhabited marker type implementing [`Kind`], whose associated type
//! `Of<A>` names the family applied to `A`.
//!
//! Typeclass code is written against `Hkt<K, A>` (that is,
//! `<K as Kind>::Of<A>`). Because the compiler normalises
//! `Hkt<MaybeKind, A>` to exactly `Maybe<A>`, converting between the witness
//! form and the concrete form ([`Kinded::narrow`]) is an identity that is
//! checked by the type system. A value can only be narrowed to the family
//! whose witness it carries.
//!
//! # Two-parameter families
//!
//! A family such as `Either<L, R>` implements [`Kind2`]. Fixing its first
//! parameter with [`Partial`] produces a one-parameter witness, which is the
//! type-level equivalent of partially applying the constructor:
//!
//! ```rust
//! use kindred::data::{Either, EitherKind};
//! use kindred::typeclass::{Hkt, Partial};
//!
//! let value: Hkt<Partial<EitherKind, String>, i32> = Either::Right(42);
//! assert_eq!(value, Either::Right(42));
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;

/// A witness for a one-parameter type constructor.
///
/// `Of<A>` is the constructor applied to `A`. Witness types are never
/// instantiated; they only exist so that generic code can name a container
/// family.
///
/// Every applied type is `Clone + 'static` whenever its element is, which lets
/// typeclass methods move nested containers into deferred computations.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{Maybe, MaybeKind};
/// use kindred::typeclass::Kind;
///
/// fn empty_of<K: Kind>(make: impl Fn() -> K::Of<i32>) -> K::Of<i32> {
///     make()
/// }
///
/// let value: Maybe<i32> = empty_of::<MaybeKind>(Maybe::empty);
/// assert!(value.is_empty());
/// ```
pub trait Kind: 'static {
    /// The constructor applied to `A`.
    type Of<A: Clone + 'static>: Clone + 'static;
}

/// Shorthand for a value of the family identified by witness `K` holding `A`.
pub type Hkt<K, A> = <K as Kind>::Of<A>;

/// A witness for a two-parameter type constructor.
pub trait Kind2: 'static {
    /// The constructor applied to `A` and `B`.
    type Of<A: Clone + 'static, B: Clone + 'static>: Clone + 'static;
}

/// A [`Kind2`] witness with its first parameter fixed to `X`.
///
/// `Partial<EitherKind, L>` is the witness of `Either<L, _>`.
pub struct Partial<K, X> {
    _never: Infallible,
    _marker: PhantomData<fn() -> (K, X)>,
}

impl<K: Kind2, X: Clone + 'static> Kind for Partial<K, X> {
    type Of<A: Clone + 'static> = K::Of<X, A>;
}

/// A concrete container that knows its own witness.
///
/// `widen` and `narrow` convert between the concrete form and the witness
/// form. Both are identities: the witness form of a family is the family
/// itself after normalisation, so no unchecked cast is ever needed.
///
/// # Examples
///
/// ```rust
/// use kindred::data::Maybe;
/// use kindred::typeclass::Kinded;
///
/// let widened = Maybe::present(3).widen();
/// assert_eq!(Maybe::narrow(widened), Maybe::present(3));
/// ```
pub trait Kinded: Sized {
    /// The witness of this container's family.
    type Witness: Kind;
    /// The element type this container holds.
    type Element: Clone + 'static;

    /// Converts the concrete container into its witness form.
    fn widen(self) -> Hkt<Self::Witness, Self::Element>;

    /// Recovers the concrete container from its witness form.
    fn narrow(value: Hkt<Self::Witness, Self::Element>) -> Self;
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{Either, EitherKind, List, ListKind, Maybe, MaybeKind};
    use rstest::rstest;

    static_assertions::assert_type_eq_all!(Hkt<MaybeKind, i32>, Maybe<i32>);
    static_assertions::assert_type_eq_all!(Hkt<ListKind, String>, List<String>);
    static_assertions::assert_type_eq_all!(
        Hkt<Partial<EitherKind, String>, u8>,
        Either<String, u8>
    );

    #[rstest]
    fn witness_form_is_usable_generically() {
        fn rewrap<K: Kind>(value: Hkt<K, i32>) -> Hkt<K, i32> {
            value
        }

        let value = rewrap::<MaybeKind>(Maybe::present(1));
        assert_eq!(value, Maybe::present(1));
    }

    #[rstest]
    fn partial_witness_fixes_the_left_parameter() {
        fn assert_left<K: Kind>()
        where
            Hkt<K, bool>: Into<Either<String, bool>>,
        {
        }
        assert_left::<Partial<EitherKind, String>>();
    }

    #[rstest]
    #[case(Maybe::present(5))]
    #[case(Maybe::empty())]
    fn widen_then_narrow_is_identity(#[case] original: Maybe<i32>) {
        assert_eq!(Maybe::narrow(original.clone().widen()), original);
    }
}
