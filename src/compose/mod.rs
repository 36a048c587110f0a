//! Composition of monadic computations.
//!
//! - [`mdo!`]: do-notation over an explicitly passed monad instance
//!
//! # Examples
//!
//! ```rust
//! use kindred::mdo;
//! use kindred::data::{List, ListMonad};
//!
//! let table = mdo!(ListMonad;
//!     a <= List::range(1, 1, 3).unwrap();
//!     b <= List::range(1, 1, 3).unwrap();
//!     yield format!("{a} x {b} = {}", a * b)
//! );
//! assert_eq!(table.len(), 9);
//! assert_eq!(table.head().get_or_else(String::new()), "1 x 1 = 1");
//! ```
//!
//! # Laws
//!
//! `mdo!` only rearranges syntax, so the monad laws carry over:
//!
//! - `mdo!(m; x <= m.pure(a); f(x)) == f(a)`
//! - `mdo!(m; x <= ma; yield x) == ma`

mod mdo_macro;

pub use crate::mdo;
