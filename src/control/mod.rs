//! Control structures for deferred evaluation.
//!
//! - [`Lazy`]: a memoised, evaluate-once cell
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Lazy;
//!
//! let lazy = Lazy::deferred(|| "computed".len());
//! assert!(!lazy.is_initialized());
//! assert_eq!(*lazy.force(), 8);
//! ```

mod lazy;

pub use lazy::{Lazy, LazyState, Thunk};
