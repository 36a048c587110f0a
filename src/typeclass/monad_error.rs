//! `MonadError` type class - raising and recovering from errors.
//!
//! # Laws
//!
//! ## Throw Catch Law
//!
//! ```text
//! catch_error(throw_error(e), handler) == handler(e)
//! ```
//!
//! ## Catch Pure Law
//!
//! ```text
//! catch_error(pure(a), handler) == pure(a)
//! ```
//!
//! ## Throw Short-Circuit Law
//!
//! ```text
//! bind(throw_error(e), f) == throw_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{Either, EitherMonad};
//! use kindred::typeclass::MonadError;
//!
//! let monad = EitherMonad::<String>::new();
//! let failed: Either<String, i32> = monad.throw_error("boom".to_string());
//! assert_eq!(failed, Either::Left("boom".to_string()));
//!
//! let recovered = monad.catch_error(failed, |error| Either::Right(error.len() as i32));
//! assert_eq!(recovered, Either::Right(4));
//! ```

use super::higher::Kind;
use super::monad::Monad;

/// A [`Monad`] that can fail with errors of type `E` and recover from them.
pub trait MonadError<K: Kind, E>: Monad<K> {
    /// A computation that has failed with `error`.
    fn throw_error<A>(&self, error: E) -> K::Of<A>
    where
        A: Clone + 'static;

    /// Runs `handler` on the error if `fa` has failed; otherwise returns `fa` unchanged.
    fn catch_error<A, F>(&self, fa: K::Of<A>, handler: F) -> K::Of<A>
    where
        A: Clone + 'static,
        F: Fn(E) -> K::Of<A> + 'static;

    /// Recovers from a failure with a plain value.
    fn handle_error<A, F>(&self, fa: K::Of<A>, handler: F) -> K::Of<A>
    where
        Self: Clone + 'static,
        A: Clone + 'static,
        F: Fn(E) -> A + 'static,
    {
        let monad = self.clone();
        self.catch_error(fa, move |error| monad.pure(handler(error)))
    }
}
