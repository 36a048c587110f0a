//! Persistent singly-linked list with structural sharing.
//!
//! Every operation leaves its receiver untouched. `cons`, `tail` and
//! `drop_first` share the existing nodes instead of copying them, so keeping
//! old versions around is cheap.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{List, Maybe};
//!
//! let list = List::from_slice(&[2, 3]);
//! let longer = list.cons(1);
//!
//! assert_eq!(longer.to_string(), "List(1,2,3)");
//! assert_eq!(list.to_string(), "List(2,3)");
//! assert_eq!(longer.head(), Maybe::present(1));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use crate::data::Maybe;
use crate::error::DataError;
use crate::typeclass::{
    Alternative, Applicative, Apply, Bind, Concat, Extend, Foldable, Functor, Kind, Kinded,
    Monoid, Semigroup, Traversable,
};

struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `cons`       | O(1)       |
/// | `head`       | O(1)       |
/// | `tail`       | O(1)       |
/// | `len`        | O(1)       |
/// | `get`        | O(n)       |
/// | `append`     | O(n)       |
/// | `reverse`    | O(n)       |
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
    length: usize,
}

impl<T> Clone for List<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes one by one; the default drop recurses per node.
        let mut next = self.head.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut node) => node.next.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T> List<T> {
    /// The empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// A list of one element.
    #[inline]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Builds a list holding the vector's elements in order.
    #[inline]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }

    /// A new list with `element` in front, sharing this list as its tail.
    #[inline]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// The list without its first element; empty for an empty list.
    #[inline]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// The list without its first `count` elements, sharing the remaining nodes.
    pub fn drop_first(&self, count: usize) -> Self {
        let mut current = self.head.as_ref();
        let mut dropped = 0;
        while dropped < count {
            match current {
                Some(node) => {
                    current = node.next.as_ref();
                    dropped += 1;
                }
                None => break,
            }
        }
        Self {
            head: current.cloned(),
            length: self.length - dropped,
        }
    }

    /// The number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterates over references to the elements.
    #[inline]
    pub fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }
}

impl<T: Clone> List<T> {
    /// Builds a list by cloning the slice's elements.
    pub fn from_slice(slice: &[T]) -> Self {
        Self::build_from_vec(slice.to_vec())
    }

    /// Collapses the list: `empty` for an empty list, `function(head, tail)` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::List;
    ///
    /// let describe = |list: &List<i32>| {
    ///     list.cata("nothing".to_string(), |head, tail| format!("{head} and {} more", tail.len()))
    /// };
    /// assert_eq!(describe(&List::from_slice(&[7, 8, 9])), "7 and 2 more");
    /// assert_eq!(describe(&List::new()), "nothing");
    /// ```
    pub fn cata<B, F>(&self, empty: B, function: F) -> B
    where
        F: FnOnce(T, Self) -> B,
    {
        match &self.head {
            None => empty,
            Some(node) => function(node.element.clone(), self.tail()),
        }
    }

    /// The first element.
    #[inline]
    pub fn head(&self) -> Maybe<T> {
        self.cata(Maybe::Empty, |head, _| Maybe::Present(head))
    }

    /// The first element and the rest of the list.
    #[inline]
    pub fn uncons(&self) -> Maybe<(T, Self)> {
        self.cata(Maybe::Empty, |head, tail| Maybe::Present((head, tail)))
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Maybe<T> {
        self.iter().nth(index).cloned().into()
    }

    /// This list followed by `other`. Shares the nodes of `other`.
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = result.cons(element);
        }
        result
    }

    /// The elements in reverse order.
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, element| reversed.cons(element.clone()))
    }

    /// The first `count` elements.
    pub fn take(&self, count: usize) -> Self {
        self.iter().take(count).cloned().collect()
    }

    /// The longest prefix whose elements satisfy `predicate`.
    pub fn take_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().take_while(|element| predicate(element)).cloned().collect()
    }

    /// The list after its longest prefix satisfying `predicate`. Shares nodes.
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let skipped = self.iter().take_while(|element| predicate(element)).count();
        self.drop_first(skipped)
    }

    /// The elements satisfying `predicate`, in order.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).cloned().collect()
    }

    /// Applies `function` to every element.
    pub fn map<B, F>(&self, function: F) -> List<B>
    where
        F: FnMut(T) -> B,
    {
        self.iter().cloned().map(function).collect()
    }

    /// Maps every element to a list and concatenates the results.
    pub fn bind<B, F>(&self, mut function: F) -> List<B>
    where
        B: Clone,
        F: FnMut(T) -> List<B>,
    {
        let mut elements = Vec::new();
        for element in self.iter().cloned() {
            elements.extend(function(element).iter().cloned());
        }
        List::build_from_vec(elements)
    }

    /// Folds from the first element to the last.
    pub fn fold_left<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.iter().cloned().fold(initial, function)
    }

    /// Folds from the last element to the first.
    pub fn fold_right<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(initial, |accumulated, element| function(element.clone(), accumulated))
    }

    /// Pairs elements positionally; the result is as long as the shorter list.
    pub fn zip<U: Clone>(&self, other: &List<U>) -> List<(T, U)> {
        self.iter()
            .cloned()
            .zip(other.iter().cloned())
            .collect()
    }

    /// Places `separator` between every two adjacent elements.
    pub fn intersperse(&self, separator: T) -> Self {
        let mut elements = Vec::with_capacity(self.length.saturating_mul(2));
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                elements.push(separator.clone());
            }
            elements.push(element.clone());
        }
        Self::build_from_vec(elements)
    }

    /// Every suffix, longest first, ending with the empty list. Shares nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::List;
    ///
    /// let tails = List::from_slice(&[1, 2]).tails();
    /// assert_eq!(tails.to_string(), "List(List(1,2),List(2),List())");
    /// ```
    pub fn tails(&self) -> List<Self> {
        let mut suffixes = Vec::with_capacity(self.length + 1);
        let mut current = self.clone();
        while !current.is_empty() {
            let next = current.tail();
            suffixes.push(current);
            current = next;
        }
        suffixes.push(current);
        List::build_from_vec(suffixes)
    }

    /// Every prefix, shortest first, starting with the empty list.
    pub fn inits(&self) -> List<Self> {
        (0..=self.length).map(|count| self.take(count)).collect()
    }

    fn non_empty_suffixes(&self) -> List<Self> {
        let tails = self.tails();
        tails.take(self.length)
    }
}

impl List<i64> {
    /// The values from `from` towards `to` (inclusive) in increments of `step`.
    ///
    /// A negative step counts down. The list is empty when `to` lies in the
    /// opposite direction.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidArgument`] when `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::List;
    ///
    /// assert_eq!(List::range(1, 3, 10).unwrap(), List::from_slice(&[1, 4, 7, 10]));
    /// assert_eq!(List::range(5, -2, 0).unwrap(), List::from_slice(&[5, 3, 1]));
    /// assert!(List::range(0, 0, 5).is_err());
    /// ```
    pub fn range(from: i64, step: i64, to: i64) -> Result<Self, DataError> {
        if step == 0 {
            return Err(DataError::invalid_argument(
                "List::range",
                "step must not be zero",
            ));
        }
        let in_range = |value: i64| if step > 0 { value <= to } else { value >= to };
        let values = std::iter::successors(Some(from), |value| value.checked_add(step))
            .take_while(|value| in_range(*value));
        Ok(values.collect())
    }
}

impl<A: Clone, B: Clone> List<(A, B)> {
    /// Splits a list of pairs into a pair of lists.
    pub fn unzip(&self) -> (List<A>, List<B>) {
        let (lefts, rights): (Vec<A>, Vec<B>) = self.iter().cloned().unzip();
        (List::build_from_vec(lefts), List::build_from_vec(rights))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`List`].
pub struct ListIterator<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ListIterator<'_, T> {}

/// An owning iterator over the elements of a [`List`].
pub struct ListIntoIterator<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for ListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.list.uncons().into_option()?;
        self.list = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for ListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("List(")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(",")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str(")")
    }
}

// =============================================================================
// Witness and instances
// =============================================================================

/// Witness of the [`List`] family.
pub enum ListKind {}

impl Kind for ListKind {
    type Of<A: Clone + 'static> = List<A>;
}

impl<A: Clone + 'static> Kinded for List<A> {
    type Witness = ListKind;
    type Element = A;

    #[inline]
    fn widen(self) -> List<A> {
        self
    }

    #[inline]
    fn narrow(value: List<A>) -> Self {
        value
    }
}

/// Type class instance for [`List`]: nondeterministic choice.
///
/// `ap` and `map2` produce every combination, `alt` concatenates and
/// `extend` sees the non-empty suffixes.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{List, ListMonad};
/// use kindred::typeclass::Apply;
///
/// let products = ListMonad.map2(List::from_slice(&[1, 2]), List::from_slice(&[10, 100]), |a, b| a * b);
/// assert_eq!(products, List::from_slice(&[10, 100, 20, 200]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListMonad;

impl Functor<ListKind> for ListMonad {
    #[inline]
    fn map<A, B, F>(&self, fa: List<A>, function: F) -> List<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Apply<ListKind> for ListMonad {
    fn ap<A, B, F>(&self, functions: List<F>, fa: List<A>) -> List<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.bind(|function| fa.map(function))
    }

    fn map2<A, B, C, F>(&self, fa: List<A>, fb: List<B>, function: F) -> List<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        fa.bind(|a| fb.map(|b| function(a.clone(), b)))
    }
}

impl Applicative<ListKind> for ListMonad {
    #[inline]
    fn pure<A>(&self, value: A) -> List<A>
    where
        A: Clone + 'static,
    {
        List::singleton(value)
    }
}

impl Bind<ListKind> for ListMonad {
    #[inline]
    fn bind<A, B, F>(&self, fa: List<A>, function: F) -> List<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> List<B> + 'static,
    {
        fa.bind(function)
    }
}

impl Alternative<ListKind> for ListMonad {
    #[inline]
    fn empty<A>(&self) -> List<A>
    where
        A: Clone + 'static,
    {
        List::new()
    }

    #[inline]
    fn alt<A>(&self, first: List<A>, second: List<A>) -> List<A>
    where
        A: Clone + 'static,
    {
        first.append(&second)
    }
}

impl Foldable<ListKind> for ListMonad {
    #[inline]
    fn fold_left<A, B, F>(&self, fa: List<A>, initial: B, function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(B, A) -> B,
    {
        fa.fold_left(initial, function)
    }

    #[inline]
    fn fold_right<A, B, F>(&self, fa: List<A>, initial: B, function: F) -> B
    where
        A: Clone + 'static,
        F: FnMut(A, B) -> B,
    {
        fa.fold_right(initial, function)
    }

    #[inline]
    fn length<A>(&self, fa: List<A>) -> usize
    where
        A: Clone + 'static,
    {
        fa.len()
    }
}

impl Traversable<ListKind> for ListMonad {
    fn traverse<G, I, A, B, F>(&self, applicative: &I, fa: List<A>, function: F) -> G::Of<List<B>>
    where
        G: Kind,
        I: Applicative<G>,
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> G::Of<B> + 'static,
    {
        fa.fold_right(applicative.pure(List::new()), |element, accumulated| {
            applicative.map2(function(element), accumulated, |head, tail: List<B>| {
                tail.cons(head)
            })
        })
    }
}

impl Extend<ListKind> for ListMonad {
    fn extend<A, B, F>(&self, wa: List<A>, function: F) -> List<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(List<A>) -> B + 'static,
    {
        wa.non_empty_suffixes().map(function)
    }
}

impl<T: Clone> Semigroup<List<T>> for Concat {
    #[inline]
    fn combine(&self, left: List<T>, right: List<T>) -> List<T> {
        left.append(&right)
    }
}

impl<T: Clone> Monoid<List<T>> for Concat {
    #[inline]
    fn identity(&self) -> List<T> {
        List::new()
    }
}

static_assertions::assert_impl_all!(ListMonad: Send, Sync, Copy);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::MonadPlus;
    use rstest::rstest;

    #[rstest]
    fn test_display() {
        assert_eq!(List::<i32>::new().to_string(), "List()");
        assert_eq!(List::singleton(1).to_string(), "List(1)");
        assert_eq!(List::from_slice(&[1, 2, 3]).to_string(), "List(1,2,3)");
    }

    #[rstest]
    fn test_cons_shares_tail() {
        let base = List::from_slice(&[2, 3]);
        let extended = base.cons(1);
        assert_eq!(extended.tail(), base);
        assert_eq!(base.len(), 2);
        assert_eq!(extended.len(), 3);
    }

    #[rstest]
    fn test_head_uncons_get() {
        let list = List::from_slice(&['a', 'b']);
        assert_eq!(list.head(), Maybe::present('a'));
        assert_eq!(list.uncons(), Maybe::present(('a', List::singleton('b'))));
        assert_eq!(list.get(1), Maybe::present('b'));
        assert_eq!(list.get(2), Maybe::empty());
        assert_eq!(List::<char>::new().head(), Maybe::empty());
    }

    #[rstest]
    fn test_tail_of_empty_is_empty() {
        assert!(List::<i32>::new().tail().is_empty());
    }

    #[rstest]
    fn test_append_and_reverse() {
        let left = List::from_slice(&[1, 2]);
        let right = List::from_slice(&[3]);
        assert_eq!(left.append(&right), List::from_slice(&[1, 2, 3]));
        assert_eq!(left.append(&right).reverse(), List::from_slice(&[3, 2, 1]));
        assert_eq!(List::new().append(&right), right);
    }

    #[rstest]
    #[case(0, vec![], vec![1, 2, 3])]
    #[case(2, vec![1, 2], vec![3])]
    #[case(5, vec![1, 2, 3], vec![])]
    fn test_take_and_drop_first(
        #[case] count: usize,
        #[case] taken: Vec<i32>,
        #[case] rest: Vec<i32>,
    ) {
        let list = List::from_slice(&[1, 2, 3]);
        assert_eq!(list.take(count), List::from_vec(taken));
        assert_eq!(list.drop_first(count), List::from_vec(rest));
    }

    #[rstest]
    fn test_take_while_and_drop_while() {
        let list = List::from_slice(&[1, 3, 4, 5]);
        assert_eq!(list.take_while(|n| n % 2 == 1), List::from_slice(&[1, 3]));
        assert_eq!(list.drop_while(|n| n % 2 == 1), List::from_slice(&[4, 5]));
    }

    #[rstest]
    fn test_fold_directions() {
        let list = List::from_slice(&[1, 2, 3]);
        assert_eq!(list.fold_left(String::new(), |acc, n| format!("{acc}{n}")), "123");
        assert_eq!(list.fold_right(String::new(), |n, acc| format!("{acc}{n}")), "321");
    }

    #[rstest]
    fn test_zip_unzip() {
        let zipped = List::from_slice(&[1, 2, 3]).zip(&List::from_slice(&["a", "b"]));
        assert_eq!(zipped, List::from_slice(&[(1, "a"), (2, "b")]));
        let (numbers, letters) = zipped.unzip();
        assert_eq!(numbers, List::from_slice(&[1, 2]));
        assert_eq!(letters, List::from_slice(&["a", "b"]));
    }

    #[rstest]
    fn test_intersperse() {
        assert_eq!(
            List::from_slice(&[1, 2, 3]).intersperse(0),
            List::from_slice(&[1, 0, 2, 0, 3])
        );
        assert_eq!(List::<i32>::new().intersperse(0), List::new());
    }

    #[rstest]
    fn test_inits() {
        let inits = List::from_slice(&[1, 2]).inits();
        assert_eq!(inits.to_string(), "List(List(),List(1),List(1,2))");
    }

    #[rstest]
    fn test_range_rejects_zero_step() {
        assert_eq!(
            List::range(1, 0, 3),
            Err(DataError::InvalidArgument {
                operation: "List::range",
                reason: "step must not be zero".to_string(),
            })
        );
    }

    #[rstest]
    fn test_range_wrong_direction_is_empty() {
        assert_eq!(List::range(5, 1, 1), Ok(List::new()));
    }

    #[rstest]
    fn test_range_stops_before_overflow() {
        let values = List::range(i64::MAX - 1, 1, i64::MAX);
        assert_eq!(values, Ok(List::from_slice(&[i64::MAX - 1, i64::MAX])));
    }

    #[rstest]
    fn test_ord_is_lexicographic() {
        assert!(List::from_slice(&[1, 2]) < List::from_slice(&[1, 3]));
        assert!(List::from_slice(&[1]) < List::from_slice(&[1, 0]));
    }

    #[rstest]
    fn test_into_iter_and_collect() {
        let list: List<i32> = (1..=3).collect();
        let doubled: Vec<i32> = list.into_iter().map(|n| n * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[rstest]
    fn test_alternative_concatenates() {
        let result = ListMonad.alt(List::singleton(1), List::from_slice(&[2, 3]));
        assert_eq!(result, List::from_slice(&[1, 2, 3]));
        assert_eq!(
            ListMonad.mfilter(List::from_slice(&[1, 2, 3]), |n: &i32| *n != 2),
            List::from_slice(&[1, 3])
        );
    }

    #[rstest]
    fn test_ap_applies_every_function() {
        let increment: fn(i32) -> i32 = |n| n + 1;
        let double: fn(i32) -> i32 = |n| n * 2;
        let result = ListMonad.ap(List::from_slice(&[increment, double]), List::from_slice(&[10, 20]));
        assert_eq!(result, List::from_slice(&[11, 21, 20, 40]));
    }

    #[rstest]
    fn test_extend_over_empty_list() {
        let result = ListMonad.extend(List::<i32>::new(), |suffix: List<i32>| suffix.len());
        assert_eq!(result, List::new());
    }

    #[rstest]
    fn test_concat_monoid() {
        let joined = Concat.fold_all(vec![List::singleton(1), List::new(), List::from_slice(&[2, 3])]);
        assert_eq!(joined, List::from_slice(&[1, 2, 3]));
    }
}
