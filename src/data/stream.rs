//! Infinite, lazily evaluated streams.
//!
//! A [`Stream`] always has a head and a tail. The head is computed when its
//! cell is built; the tail sits behind a memoised [`Lazy`] and is only built
//! when something asks for it, so a stream can describe infinitely many
//! values while computing just the ones inspected.
//!
//! Operations that search for a value (`filter`, `drop_while`, `take_while`)
//! do not terminate if no element ever satisfies the condition.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::Stream;
//!
//! let evens = Stream::range(1).filter(|n| n % 2 == 0);
//! assert_eq!(evens.to_string(), "Stream(2,4,6,8,10,12,14,16,18,20...)");
//! assert_eq!(evens.get(99), 200);
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::control::Lazy;
use crate::data::List;
use crate::error::DataError;
use crate::typeclass::{Applicative, Apply, Bind, Extend, Functor, Kind, Kinded};

const DISPLAY_LIMIT: usize = 10;

struct StreamCell<A: 'static> {
    head: A,
    tail: Lazy<Stream<A>>,
}

/// An infinite sequence with a strict head and a lazy, memoised tail.
///
/// Cloning is cheap: clones share their cells, including every tail that
/// has already been evaluated.
pub struct Stream<A: 'static> {
    cell: Rc<StreamCell<A>>,
}

impl<A: 'static> Clone for Stream<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

// Dropping a uniquely owned cell releases its tail, evaluated or not, through
// a per-thread queue. A tail thunk owns the streams it was built from, so
// releasing it directly would recurse once per combinator layer.
impl<A: 'static> Drop for Stream<A> {
    fn drop(&mut self) {
        let Some(cell) = Rc::get_mut(&mut self.cell) else {
            return;
        };
        if let Some(tail) = cell.tail.take_evaluated() {
            release(tail);
        } else if let Some(thunk) = cell.tail.take_thunk() {
            release(thunk);
        }
    }
}

#[derive(Default)]
struct ReleaseQueue {
    draining: bool,
    pending: Vec<Box<dyn Any>>,
}

thread_local! {
    static RELEASE_QUEUE: RefCell<ReleaseQueue> = RefCell::new(ReleaseQueue::default());
}

/// Resets the draining flag even if a destructor panics.
struct Draining;

impl Drop for Draining {
    fn drop(&mut self) {
        let _ = RELEASE_QUEUE.try_with(|queue| queue.borrow_mut().draining = false);
    }
}

/// Drops `value`, deferring nested releases to a loop on the outermost call.
fn release<T: 'static>(value: T) {
    let mut value = Some(value);
    let outermost = RELEASE_QUEUE
        .try_with(|queue| {
            let mut queue = queue.borrow_mut();
            if queue.draining {
                if let Some(value) = value.take() {
                    queue.pending.push(Box::new(value));
                }
                false
            } else {
                queue.draining = true;
                true
            }
        })
        .unwrap_or(false);

    let _draining = outermost.then_some(Draining);
    // Queued values are gone from `value`; otherwise it is dropped here.
    drop(value);

    if outermost {
        while let Some(next) = RELEASE_QUEUE
            .try_with(|queue| queue.borrow_mut().pending.pop())
            .ok()
            .flatten()
        {
            drop(next);
        }
    }
}

impl<A: Clone + 'static> Stream<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// A stream from a head and an already built tail.
    #[inline]
    pub fn new_stream(head: A, tail: Self) -> Self {
        Self {
            cell: Rc::new(StreamCell {
                head,
                tail: Lazy::new_with_value(tail),
            }),
        }
    }

    /// A stream whose tail is built by `tail` on first access.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Stream;
    ///
    /// fn naturals_from(n: u64) -> Stream<u64> {
    ///     Stream::new_lazy_stream(n, move || naturals_from(n + 1))
    /// }
    ///
    /// assert_eq!(naturals_from(5).get(3), 8);
    /// ```
    #[inline]
    pub fn new_lazy_stream<F>(head: A, tail: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self {
            cell: Rc::new(StreamCell {
                head,
                tail: Lazy::deferred(tail),
            }),
        }
    }

    /// Builds a stream by repeatedly applying `step` to a seed.
    ///
    /// Each step yields the next element and the next seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Stream;
    ///
    /// let fibonacci = Stream::unfold((0u64, 1u64), |(a, b)| (a, (b, a + b)));
    /// assert_eq!(fibonacci.to_string(), "Stream(0,1,1,2,3,5,8,13,21,34...)");
    /// ```
    pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
        S: 'static,
        F: Fn(S) -> (A, S) + 'static,
    {
        Self::unfold_shared(seed, Rc::new(step))
    }

    fn unfold_shared<S, F>(seed: S, step: Rc<F>) -> Self
    where
        S: 'static,
        F: Fn(S) -> (A, S) + 'static,
    {
        let (head, next) = step(seed);
        Self::new_lazy_stream(head, move || Self::unfold_shared(next, step))
    }

    /// The same value forever.
    pub fn repeat(value: A) -> Self {
        Self::unfold((), move |()| (value.clone(), ()))
    }

    /// The slice's elements, repeated forever.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidArgument`] when `values` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Stream;
    ///
    /// let cycled = Stream::cycle(&["a", "b"]).unwrap();
    /// assert_eq!(cycled.to_string_limit(3), "Stream(a,b,a...)");
    /// assert!(Stream::<i32>::cycle(&[]).is_err());
    /// ```
    pub fn cycle(values: &[A]) -> Result<Self, DataError> {
        if values.is_empty() {
            return Err(DataError::invalid_argument(
                "Stream::cycle",
                "cannot cycle an empty sequence",
            ));
        }
        tracing::trace!(length = values.len(), "cycling stream");
        let values: Rc<[A]> = values.into();
        Ok(Self::unfold(0, move |index: usize| {
            (values[index].clone(), (index + 1) % values.len())
        }))
    }

    /// The values `function(0)`, `function(1)`, ...
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(usize) -> A + 'static,
    {
        Self::unfold(0, move |index: usize| (function(index), index + 1))
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// The first element.
    #[inline]
    pub fn head(&self) -> A {
        self.cell.head.clone()
    }

    /// Everything after the first element, evaluated on first access.
    #[inline]
    pub fn tail(&self) -> Self {
        self.cell.tail.force().clone()
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> A {
        self.drop(index).head()
    }

    /// Iterates over the elements. The iterator never ends.
    #[inline]
    pub fn iter(&self) -> StreamIterator<A> {
        StreamIterator {
            current: self.clone(),
        }
    }

    // =========================================================================
    // Slicing
    // =========================================================================

    /// The first `count` elements.
    pub fn take(&self, count: usize) -> List<A> {
        self.iter().take(count).collect()
    }

    /// The longest prefix whose elements satisfy `predicate`.
    pub fn take_while<P>(&self, mut predicate: P) -> List<A>
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().take_while(|element| predicate(element)).collect()
    }

    /// The stream without its first `count` elements.
    pub fn drop(&self, count: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..count {
            current = current.tail();
        }
        current
    }

    /// The stream after its longest prefix satisfying `predicate`.
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        let mut current = self.clone();
        while predicate(&current.cell.head) {
            current = current.tail();
        }
        current
    }

    /// The elements satisfying `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        Self::filter_shared(self, Rc::new(predicate))
    }

    fn filter_shared<P>(source: &Self, predicate: Rc<P>) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        let found = source.drop_while(|element| !predicate(element));
        let head = found.head();
        Self::new_lazy_stream(head, move || Self::filter_shared(&found.tail(), predicate))
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to every element.
    pub fn map<B, F>(&self, function: F) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        Self::map_shared(self.clone(), Rc::new(function))
    }

    fn map_shared<B, F>(source: Self, function: Rc<F>) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        let head = function(source.head());
        Stream::new_lazy_stream(head, move || Self::map_shared(source.tail(), function))
    }

    /// Combines elements positionally with `function`.
    pub fn zip_with<B, C, F>(&self, other: &Stream<B>, function: F) -> Stream<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        Self::zip_shared(self.clone(), other.clone(), Rc::new(function))
    }

    fn zip_shared<B, C, F>(left: Self, right: Stream<B>, function: Rc<F>) -> Stream<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let head = function(left.head(), right.head());
        Stream::new_lazy_stream(head, move || {
            Self::zip_shared(left.tail(), right.tail(), function)
        })
    }

    /// Pairs elements positionally.
    pub fn zip<B: Clone + 'static>(&self, other: &Stream<B>) -> Stream<(A, B)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Alternates elements of this stream and `other`, starting with this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Stream;
    ///
    /// let mixed = Stream::repeat(0).interleave(&Stream::range(1));
    /// assert_eq!(mixed.to_string_limit(6), "Stream(0,1,0,2,0,3...)");
    /// ```
    pub fn interleave(&self, other: &Self) -> Self {
        let rest = self.clone();
        let other = other.clone();
        Self::new_lazy_stream(self.head(), move || other.interleave(&rest.tail()))
    }

    /// Places `separator` between every two adjacent elements.
    pub fn intersperse(&self, separator: A) -> Self {
        let rest = self.clone();
        Self::new_lazy_stream(self.head(), move || {
            Self::new_lazy_stream(separator.clone(), move || {
                rest.tail().intersperse(separator)
            })
        })
    }

    /// Every finite prefix, starting with the empty one.
    pub fn inits(&self) -> Stream<List<A>> {
        let source = self.clone();
        Stream::from_fn(move |count| source.take(count))
    }

    /// Every suffix, starting with the stream itself.
    pub fn tails(&self) -> Stream<Self> {
        Stream::unfold(self.clone(), |suffix: Self| {
            let next = suffix.tail();
            (suffix, next)
        })
    }

    /// Renders the first `limit` elements followed by an ellipsis.
    pub fn to_string_limit(&self, limit: usize) -> String
    where
        A: fmt::Display,
    {
        let shown: Vec<String> = self.iter().take(limit).map(|element| element.to_string()).collect();
        format!("Stream({}...)", shown.join(","))
    }

    /// Computes element `n` of `function(element n)` for every `n`.
    fn diagonal<B, F>(source: Self, function: Rc<F>, depth: usize) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Stream<B> + 'static,
    {
        let head = function(source.head()).get(depth);
        Stream::new_lazy_stream(head, move || {
            Self::diagonal(source.tail(), function, depth + 1)
        })
    }
}

impl Stream<i64> {
    /// The integers `from`, `from + 1`, ...
    #[inline]
    pub fn range(from: i64) -> Self {
        Self::range_by(from, 1)
    }

    /// The integers `from`, `from + step`, ... Wraps around on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::Stream;
    ///
    /// assert_eq!(Stream::range_by(10, -3).to_string_limit(4), "Stream(10,7,4,1...)");
    /// ```
    pub fn range_by(from: i64, step: i64) -> Self {
        Self::unfold(from, move |value: i64| (value, value.wrapping_add(step)))
    }
}

impl<A: Clone + 'static, B: Clone + 'static> Stream<(A, B)> {
    /// Splits a stream of pairs into a pair of streams.
    pub fn unzip(&self) -> (Stream<A>, Stream<B>) {
        (
            self.map(|(left, _)| left),
            self.map(|(_, right)| right),
        )
    }
}

impl<A: Clone + fmt::Display + 'static> fmt::Display for Stream<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_string_limit(DISPLAY_LIMIT))
    }
}

impl<A: fmt::Debug + 'static> fmt::Debug for Stream<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Stream")
            .field("head", &self.cell.head)
            .field("tail_evaluated", &self.cell.tail.is_initialized())
            .finish()
    }
}

/// An endless iterator over the elements of a [`Stream`].
pub struct StreamIterator<A: 'static> {
    current: Stream<A>,
}

impl<A: Clone + 'static> Iterator for StreamIterator<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.current.head();
        self.current = self.current.tail();
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// =============================================================================
// Witness and instances
// =============================================================================

/// Witness of the [`Stream`] family.
pub enum StreamKind {}

impl Kind for StreamKind {
    type Of<A: Clone + 'static> = Stream<A>;
}

impl<A: Clone + 'static> Kinded for Stream<A> {
    type Witness = StreamKind;
    type Element = A;

    #[inline]
    fn widen(self) -> Stream<A> {
        self
    }

    #[inline]
    fn narrow(value: Stream<A>) -> Self {
        value
    }
}

/// Type class instance for [`Stream`].
///
/// Applicative operations work position by position (`pure` repeats, `ap`
/// zips), and `bind` takes the diagonal: element `n` of the result is
/// element `n` of the stream produced for element `n`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{Stream, StreamMonad};
/// use kindred::typeclass::Bind;
///
/// let diagonal = StreamMonad.bind(Stream::range(1), |i| Stream::range_by(1, i));
/// assert_eq!(diagonal.to_string(), "Stream(1,3,7,13,21,31,43,57,73,91...)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamMonad;

impl Functor<StreamKind> for StreamMonad {
    #[inline]
    fn map<A, B, F>(&self, fa: Stream<A>, function: F) -> Stream<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Apply<StreamKind> for StreamMonad {
    #[inline]
    fn ap<A, B, F>(&self, functions: Stream<F>, fa: Stream<A>) -> Stream<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.zip_with(&fa, |function, value| function(value))
    }

    #[inline]
    fn map2<A, B, C, F>(&self, fa: Stream<A>, fb: Stream<B>, function: F) -> Stream<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        fa.zip_with(&fb, function)
    }
}

impl Applicative<StreamKind> for StreamMonad {
    #[inline]
    fn pure<A>(&self, value: A) -> Stream<A>
    where
        A: Clone + 'static,
    {
        Stream::repeat(value)
    }
}

impl Bind<StreamKind> for StreamMonad {
    fn bind<A, B, F>(&self, fa: Stream<A>, function: F) -> Stream<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Stream<B> + 'static,
    {
        tracing::trace!("binding stream along the diagonal");
        Stream::diagonal(fa, Rc::new(function), 0)
    }
}

impl Extend<StreamKind> for StreamMonad {
    #[inline]
    fn extend<A, B, F>(&self, wa: Stream<A>, function: F) -> Stream<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(Stream<A>) -> B + 'static,
    {
        wa.tails().map(function)
    }
}

static_assertions::assert_impl_all!(StreamMonad: Send, Sync, Copy);
