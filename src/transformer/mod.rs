//! Monad transformers.
//!
//! A transformer adds one capability on top of an arbitrary inner monad. The
//! inner monad is named by its witness and driven through an instance value
//! passed in when the transformer's own instance is built.
//!
//! - [`ErrorT`]: adds failure with an error of type `E` to any monad
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{Either, List, ListKind, ListMonad};
//! use kindred::transformer::{ErrorT, ErrorTMonad};
//! use kindred::typeclass::{Bind, MonadError};
//!
//! let monad = ErrorTMonad::<String, ListKind, _>::new(ListMonad);
//! let choices = ErrorT::lift(&ListMonad, List::from_slice(&[1, 2, 3]));
//! let checked = monad.bind(choices, |n: i32| {
//!     if n == 2 {
//!         ErrorTMonad::<String, ListKind, _>::new(ListMonad).throw_error(format!("rejected {n}"))
//!     } else {
//!         ErrorT::lift(&ListMonad, List::singleton(n * 10))
//!     }
//! });
//!
//! assert_eq!(
//!     checked.run(),
//!     List::from_slice(&[
//!         Either::Right(10),
//!         Either::Left("rejected 2".to_string()),
//!         Either::Right(30),
//!     ])
//! );
//! ```

mod error_t;

pub use error_t::{ErrorT, ErrorTKind, ErrorTMonad};
