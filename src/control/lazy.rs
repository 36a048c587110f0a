//! Lazy evaluation with memoization.
//!
//! `Lazy<T, F>` defers a computation until its value is first requested with
//! [`Lazy::force`] and caches the result for every later request. It backs
//! the tails of [`Stream`](crate::data::Stream), which is what lets a stream
//! describe infinitely many values while only computing the ones inspected.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Lazy;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let lazy = Lazy::new(|| {
//!     calls.set(calls.get() + 1);
//!     42
//! });
//! assert_eq!(calls.get(), 0);
//!
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// A boxed one-shot initializer.
pub type Thunk<T> = Box<dyn FnOnce() -> T>;

/// The internal state of a `Lazy` value.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// Not evaluated yet; holds the initializer.
    Uninit(F),
    /// Evaluated; holds the value.
    Init(T),
    /// The initializer panicked, or is running and was re-entered.
    Poisoned,
}

/// A lazily evaluated value with memoization.
///
/// Not thread-safe: the state lives in a `RefCell`.
pub struct Lazy<T, F = Thunk<T>> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a lazy value that runs `initializer` on first use.
    #[inline]
    pub fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Evaluates the value if necessary and returns a reference to it.
    ///
    /// # Panics
    ///
    /// Panics if the initializer panicked on an earlier call, or if the
    /// initializer forces the value it is computing.
    pub fn force(&self) -> Ref<'_, T> {
        let needs_initialization = match &*self.state.borrow() {
            LazyState::Init(_) => false,
            LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
            LazyState::Uninit(_) => true,
        };

        if needs_initialization {
            self.initialize();
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            _ => panic!("Lazy should be initialized at this point"),
        })
    }

    fn initialize(&self) {
        // Poisoned while the initializer runs.
        let initializer = match self.state.replace(LazyState::Poisoned) {
            LazyState::Uninit(initializer) => initializer,
            LazyState::Init(value) => {
                self.state.replace(LazyState::Init(value));
                return;
            }
            LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
        };

        let value = initializer();
        self.state.replace(LazyState::Init(value));
    }

    /// Consumes the lazy value, evaluating it if necessary.
    ///
    /// Returns `None` if it is poisoned.
    pub fn into_inner(self) -> Option<T> {
        match self.state.into_inner() {
            LazyState::Init(value) => Some(value),
            LazyState::Uninit(initializer) => Some(initializer()),
            LazyState::Poisoned => None,
        }
    }
}

impl<T: 'static> Lazy<T, Thunk<T>> {
    /// Creates a lazy value from any one-shot closure, boxing it.
    ///
    /// Lazy values created this way share one type regardless of the
    /// closure, so they can be stored in recursive structures.
    #[inline]
    pub fn deferred(initializer: impl FnOnce() -> T + 'static) -> Self {
        Self::new(Box::new(initializer))
    }

    /// Creates a lazy value that is already evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Lazy;
    ///
    /// let lazy = Lazy::new_with_value(7);
    /// assert!(lazy.is_initialized());
    /// ```
    #[inline]
    pub fn new_with_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns the value if it has been evaluated, without evaluating it.
    pub fn get(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            _ => None,
        })
        .ok()
    }

    /// Returns whether the value has been evaluated.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns whether the initializer panicked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Lazy;
    /// use std::panic::{catch_unwind, AssertUnwindSafe};
    ///
    /// let lazy: Lazy<i32, _> = Lazy::new(|| panic!("initialization failed"));
    /// let _ = catch_unwind(AssertUnwindSafe(|| lazy.force()));
    /// assert!(lazy.is_poisoned());
    /// ```
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }

    /// Moves a pending initializer out, leaving the cell poisoned.
    pub(crate) fn take_thunk(&mut self) -> Option<F> {
        let state = self.state.get_mut();
        if matches!(state, LazyState::Uninit(_)) {
            match std::mem::replace(state, LazyState::Poisoned) {
                LazyState::Uninit(initializer) => Some(initializer),
                _ => None,
            }
        } else {
            None
        }
    }

    /// Moves an evaluated value out, leaving the cell poisoned.
    pub(crate) fn take_evaluated(&mut self) -> Option<T> {
        let state = self.state.get_mut();
        if matches!(state, LazyState::Init(_)) {
            match std::mem::replace(state, LazyState::Poisoned) {
                LazyState::Init(value) => Some(value),
                _ => None,
            }
        } else {
            None
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}
