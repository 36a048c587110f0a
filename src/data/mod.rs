//! Functional data types and their type class instances.
//!
//! - [`Maybe`]: an optional value, with [`MaybeMonad`] and the biased
//!   [`MaybeMonadPlus`]
//! - [`Either`]: one of two alternatives, with [`EitherMonad`]
//! - [`List`]: a persistent cons list, with [`ListMonad`]
//! - [`Stream`]: an infinite lazy sequence, with [`StreamMonad`]
//!
//! Each type has a witness (`MaybeKind`, `ListKind`, ...) naming its family
//! for generic code written against the [`typeclass`](crate::typeclass) traits.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{List, ListMonad, Maybe, MaybeMonad};
//! use kindred::typeclass::Traversable;
//!
//! let parse = |text: &'static str| Maybe::from(text.parse::<i32>().ok());
//!
//! let all_numbers = List::from_slice(&["1", "2", "3"]);
//! assert_eq!(
//!     ListMonad.traverse(&MaybeMonad, all_numbers, parse),
//!     Maybe::present(List::from_slice(&[1, 2, 3]))
//! );
//!
//! let with_word = List::from_slice(&["1", "two"]);
//! assert_eq!(ListMonad.traverse(&MaybeMonad, with_word, parse), Maybe::empty());
//! ```

mod either;
mod list;
mod maybe;
mod stream;

pub use either::{Either, EitherKind, EitherMonad};
pub use list::{List, ListIntoIterator, ListIterator, ListKind, ListMonad};
pub use maybe::{FirstPresent, LastPresent, Maybe, MaybeKind, MaybeMonad, MaybeMonadPlus, MaybeMonoid};
pub use stream::{Stream, StreamIterator, StreamKind, StreamMonad};
