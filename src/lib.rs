//! # kindred
//!
//! Higher-kinded type classes for Rust, passed as explicit dictionaries.
//!
//! ## Overview
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! This crate names every container family with a *witness* type and writes
//! its type classes against the witness, so one generic function can work
//! with `Maybe`, `List`, `Either<E, _>`, `Stream` or a transformer stack:
//!
//! - **Type Classes**: Functor, Apply, Applicative, Monad, Alternative,
//!   Foldable, Traversable, Extend, `MonadError`, Semigroup, Monoid
//! - **Data Types**: `Maybe`, `Either`, persistent `List`, lazy `Stream`
//! - **Transformers**: `ErrorT` adds failure to any monad
//! - **Composition**: the `mdo!` do-notation macro
//!
//! Instances are ordinary values (`MaybeMonad`, `ListMonad`, ...). Generic
//! code takes the instance as an argument and nothing is resolved
//! implicitly.
//!
//! ## Feature Flags
//!
//! - `typeclass`: witnesses, type class traits and semigroup/monoid instances
//! - `control`: the memoised `Lazy` cell
//! - `data`: `Maybe`, `Either`, `List`, `Stream` and their instances
//! - `transformer`: the `ErrorT` monad transformer
//! - `compose`: the `mdo!` macro
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`, `Either` and `List`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! fn add_all<K: Kind, M: Monad<K>>(monad: &M, numbers: Hkt<K, i32>, offset: i32) -> Hkt<K, i32> {
//!     monad.map(numbers, move |n| n + offset)
//! }
//!
//! assert_eq!(add_all(&MaybeMonad, Maybe::present(1), 10), Maybe::present(11));
//! assert_eq!(
//!     add_all(&ListMonad, List::from_slice(&[1, 2]), 10),
//!     List::from_slice(&[11, 12])
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::DataError;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "transformer")]
    pub use crate::transformer::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

mod error;

pub use error::DataError;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "transformer")]
pub mod transformer;

#[cfg(feature = "compose")]
pub mod compose;
