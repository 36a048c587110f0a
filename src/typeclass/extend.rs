//! Extend type class - context-aware mapping.
//!
//! Where `map` sees one value at a time, `extend` hands the function the whole
//! remaining context at each position: for a list that is the suffix starting
//! at the position, for a `Maybe` the container itself.
//!
//! # Laws
//!
//! ```text
//! extend(extend(w, g), f) == extend(w, |x| f(extend(x, g)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{List, ListMonad};
//! use kindred::typeclass::Extend;
//!
//! let running_sums = ListMonad.extend(List::from_slice(&[1, 2, 3]), |suffix: List<i32>| {
//!     suffix.fold_left(0, |acc, n| acc + n)
//! });
//! assert_eq!(running_sums, List::from_slice(&[6, 5, 3]));
//! ```

use super::functor::Functor;
use super::higher::Kind;

/// A [`Functor`] that can apply a function to every sub-context of a container.
pub trait Extend<K: Kind>: Functor<K> {
    /// Applies `function` to the context at each position.
    fn extend<A, B, F>(&self, wa: K::Of<A>, function: F) -> K::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(K::Of<A>) -> B + 'static;

    /// Replaces every value with the context at its position.
    #[inline]
    fn duplicate<A>(&self, wa: K::Of<A>) -> K::Of<K::Of<A>>
    where
        A: Clone + 'static,
    {
        self.extend(wa, |context| context)
    }
}
