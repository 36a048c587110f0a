//! Type class traits and the higher-kinded type encoding they are written against.
//!
//! Every type class here is a *dictionary*: a trait implemented by a small
//! stateless instance value (`MaybeMonad`, `ListMonad`, ...) rather than by
//! the container type itself. Generic code receives the instance as an
//! ordinary argument and calls its methods; nothing is resolved implicitly.
//!
//! - [`Functor`]: mapping over container values
//! - [`Apply`] / [`Applicative`]: applying contained functions, lifting values
//! - [`Bind`] / [`Monad`]: sequencing dependent computations
//! - [`Alternative`] / [`MonadPlus`]: choice and filtering
//! - [`Foldable`] / [`Traversable`]: reducing and effectful rebuilding
//! - [`Extend`]: context-aware mapping
//! - [`MonadError`]: raising and recovering from errors
//! - [`Semigroup`] / [`Monoid`]: combining plain values
//!
//! ## Higher-Kinded Types Emulation
//!
//! Container families are named by witness types implementing [`Kind`]; see
//! the [`Kind`] and [`Kinded`] documentation for how values move between the
//! concrete form and the witness form.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{List, ListKind, ListMonad, Maybe, MaybeKind, MaybeMonad};
//! use kindred::typeclass::{Hkt, Kind, Monad};
//!
//! fn pairs<K: Kind, M: Monad<K> + Clone + 'static>(
//!     monad: &M,
//!     left: Hkt<K, i32>,
//!     right: Hkt<K, i32>,
//! ) -> Hkt<K, (i32, i32)> {
//!     let inner = monad.clone();
//!     monad.bind(left, move |a| inner.map(right.clone(), move |b| (a, b)))
//! }
//!
//! assert_eq!(
//!     pairs::<MaybeKind, _>(&MaybeMonad, Maybe::present(1), Maybe::present(2)),
//!     Maybe::present((1, 2))
//! );
//! assert_eq!(
//!     pairs::<ListKind, _>(&ListMonad, List::from_slice(&[1, 2]), List::singleton(0)),
//!     List::from_slice(&[(1, 0), (2, 0)])
//! );
//! ```

mod alternative;
mod applicative;
mod extend;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monad_error;
pub mod monoid;
pub mod semigroup;
mod traversable;

pub use alternative::{Alternative, Bias, MonadPlus};
pub use applicative::{Applicative, Apply};
pub use extend::Extend;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::{Hkt, Kind, Kind2, Kinded, Partial};
pub use identity::{Identity, IdentityKind, IdentityMonad};
pub use monad::{Bind, Monad};
pub use monad_error::MonadError;
pub use monoid::{Bounded, Monoid, MonoidFn};
pub use semigroup::{
    All, Any, Concat, Dual, First, Last, Max, Min, Product, Semigroup, SemigroupFn, Sum,
};
pub use traversable::Traversable;
