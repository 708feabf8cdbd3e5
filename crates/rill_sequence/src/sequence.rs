//! Immutable integer sequences with chainable eager operations.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered, immutable sequence of `i64` with chainable eager operations.
///
/// Backed by a persistent vector, so cloning is O(1) and every transform
/// returns a new sequence sharing structure with its receiver. No operation
/// mutates the receiver, which makes it safe to reuse one base sequence
/// across any number of derived chains.
///
/// Sequences are built with [`IntSequence::range`] or
/// [`IntSequence::range_inclusive`], or collected from any iterator of
/// `i64`. Order is insertion order and duplicates are permitted.
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent)
)]
pub struct IntSequence(pub(crate) im::Vector<i64>);

impl IntSequence {
    /// Returns the number of elements.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.0.get(index).copied()
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<i64> {
        self.0.front().copied()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<i64> {
        self.0.back().copied()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    /// Returns a new sequence keeping exactly the elements that satisfy
    /// `predicate`, in their original relative order.
    ///
    /// The predicate runs once per element, in sequence order.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(i64) -> bool,
    {
        Self(self.iter().filter(|&x| predicate(x)).collect())
    }

    /// Returns a new sequence keeping the elements that do *not* satisfy
    /// `predicate`.
    ///
    /// Complement of [`IntSequence::filter`] with the same predicate.
    #[must_use]
    pub fn not<P>(&self, predicate: P) -> Self
    where
        P: Fn(i64) -> bool,
    {
        self.filter(|x| !predicate(x))
    }

    /// Returns a new sequence of the same length with every element replaced
    /// by its image under `transform`.
    #[must_use]
    pub fn map<T>(&self, transform: T) -> Self
    where
        T: Fn(i64) -> i64,
    {
        Self(self.iter().map(transform).collect())
    }

    /// Returns a new sequence of the same length where elements satisfying
    /// `predicate` are replaced by their image under `transform` and all
    /// other elements pass through unchanged.
    ///
    /// Unlike `filter` followed by `map`, no position is ever removed.
    #[must_use]
    pub fn map_only<T, P>(&self, transform: T, predicate: P) -> Self
    where
        T: Fn(i64) -> i64,
        P: Fn(i64) -> bool,
    {
        Self(
            self.iter()
                .map(|x| if predicate(x) { transform(x) } else { x })
                .collect(),
        )
    }

    /// Returns true if at least one element satisfies `predicate`.
    ///
    /// Short-circuits on the first match. False for an empty sequence.
    #[must_use]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(i64) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns true if every element satisfies `predicate`.
    ///
    /// Short-circuits on the first failure. Vacuously true for an empty
    /// sequence.
    #[must_use]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(i64) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns the first element (in sequence order) satisfying `predicate`,
    /// or `None` when no element matches.
    #[must_use]
    pub fn find<P>(&self, predicate: P) -> Option<i64>
    where
        P: Fn(i64) -> bool,
    {
        self.iter().find(|&x| predicate(x))
    }

    /// Left-folds the sequence into an accumulator, starting from `initial`
    /// and applying `reducer(accumulator, element)` in sequence order.
    ///
    /// Returns `initial` unchanged for an empty sequence.
    #[must_use]
    pub fn reduce<A, R>(&self, initial: A, reducer: R) -> A
    where
        R: Fn(A, i64) -> A,
    {
        self.iter().fold(initial, reducer)
    }
}

impl fmt::Debug for IntSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for IntSequence {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for IntSequence {}

impl Hash for IntSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl FromIterator<i64> for IntSequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl IntoIterator for IntSequence {
    type Item = i64;
    type IntoIter = im::vector::ConsumingIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntSequence {
    type Item = i64;
    type IntoIter = std::iter::Copied<im::vector::Iter<'a, i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
