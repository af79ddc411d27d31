//! In-place modification of ordered sequences.
//!
//! The functions in this module mutate a container through the [Sequence] trait, which
//! is implemented for [Vec] and [VecDeque]. Positions are zero-based indices.

use std::collections::VecDeque;

/// An ordered, indexable container that supports positional insertion and removal.
pub trait Sequence {
    /// Element type
    type Item;

    /// Number of elements in the sequence
    fn len(&self) -> usize;

    /// Whether the sequence holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reference to the element at `index`, if there is one
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Index of the first element satisfying `pred`
    fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool;

    /// Inserts `item` at `index`, shifting all elements after it towards the end.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index > self.len()`.
    fn insert_at(&mut self, index: usize, item: Self::Item);

    /// Removes and returns the element at `index`, shifting all elements after it
    /// towards the front. Returns `None` and leaves the sequence unchanged if `index`
    /// is out of bounds.
    fn remove_at(&mut self, index: usize) -> Option<Self::Item>;

    /// Keeps only the elements for which `keep` returns true, in their original order.
    fn retain_items<F>(&mut self, keep: F)
    where
        F: FnMut(&Self::Item) -> bool;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    fn insert_at(&mut self, index: usize, item: T) {
        Vec::insert(self, index, item)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| Vec::remove(self, index))
    }

    fn retain_items<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        Vec::retain(self, keep)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    fn insert_at(&mut self, index: usize, item: T) {
        VecDeque::insert(self, index, item)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }

    fn retain_items<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        VecDeque::retain(self, keep)
    }
}

/// Removes the first element equal to `item`.
///
/// Returns the index the removed element occupied, which now refers to the element that
/// followed it (or equals the new length if the last element was removed). If no
/// element matches, the sequence is left untouched and `None` is returned.
///
/// # Examples
///
/// ```rust
/// use tinutil::sequence::erase;
///
/// let mut v = vec![1, 2, 3, 4, 5];
/// assert_eq!(erase(&mut v, &2), Some(1));
/// assert_eq!(v, [1, 3, 4, 5]);
/// assert_eq!(v[1], 3);
///
/// assert_eq!(erase(&mut v, &10), None);
/// assert_eq!(v, [1, 3, 4, 5]);
/// ```
pub fn erase<S, Q>(seq: &mut S, item: &Q) -> Option<usize>
where
    S: Sequence,
    S::Item: PartialEq<Q>,
    Q: ?Sized,
{
    let index = seq.position(|x| x == item)?;
    seq.remove_at(index);
    Some(index)
}

/// Removes every element equal to `item` and returns how many were removed.
///
/// The remaining elements keep their relative order.
///
/// # Examples
///
/// ```rust
/// use tinutil::sequence::erase_all;
///
/// let mut v = vec![1, 2, 1, 3, 1];
/// assert_eq!(erase_all(&mut v, &1), 3);
/// assert_eq!(v, [2, 3]);
/// assert_eq!(erase_all(&mut v, &1), 0);
/// ```
pub fn erase_all<S, Q>(seq: &mut S, item: &Q) -> usize
where
    S: Sequence,
    S::Item: PartialEq<Q>,
    Q: ?Sized,
{
    let before = seq.len();
    seq.retain_items(|x| x != item);
    before - seq.len()
}

/// Inserts `item` before the first element `x` for which `compare(&item, x)` is true, or
/// at the end if there is no such element. Returns the index of the inserted element.
///
/// `compare` must agree with the order the sequence is already in, otherwise the
/// insertion point is unspecified. Global order is neither verified nor restored. `compare`
/// may be a partial order; elements incomparable to `item` are simply skipped over.
///
/// Debug builds with the `log` feature emit a warning when an element after the inserted
/// item orders strictly before it under `compare`, which proves the sequence was not
/// ordered. This check calls `compare` up to twice more for each element after the
/// insertion point, so a stateful comparator sees more calls in debug builds than in
/// release builds.
///
/// # Examples
///
/// ```rust
/// use tinutil::sequence::insert_ordered;
///
/// let mut v = vec![1, 2, 4, 5];
/// assert_eq!(insert_ordered(&mut v, 3, |a, b| a < b), 2);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
///
/// assert_eq!(insert_ordered(&mut v, 9, |a, b| a < b), 5);
/// assert_eq!(v, [1, 2, 3, 4, 5, 9]);
/// ```
pub fn insert_ordered<S, F>(seq: &mut S, item: S::Item, mut compare: F) -> usize
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let index = seq.position(|x| compare(&item, x)).unwrap_or(seq.len());
    seq.insert_at(index, item);

    #[cfg(all(feature = "log", debug_assertions))]
    warn_if_unordered(seq, index, &mut compare);

    index
}

/// In an ordered sequence no element after the inserted item orders before it.
#[cfg(all(feature = "log", debug_assertions))]
fn warn_if_unordered<S, F>(seq: &S, index: usize, compare: &mut F)
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let Some(item) = seq.get(index) else {
        return;
    };
    // Mutual ordering means equal under a non-strict comparator.
    let offender = (index + 1..seq.len())
        .find(|&i| seq.get(i).is_some_and(|x| compare(x, item) && !compare(item, x)));
    if let Some(offender) = offender {
        log::warn!(
            "Item was inserted at position {index} but the element at position {offender} \
            orders before it; the sequence is not ordered under the given comparator"
        );
    }
}

/// Extension trait exposing the free functions of this module as methods.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use tinutil::sequence::SequenceExt;
///
/// let mut d: VecDeque<_> = [10, 30].into_iter().collect();
/// assert_eq!(d.insert_ordered(20, |a, b| a < b), 1);
/// assert_eq!(d.erase_item(&10), Some(0));
/// assert_eq!(d.erase_all_items(&30), 1);
/// assert_eq!(d, [20]);
/// ```
pub trait SequenceExt: Sequence + Sized {
    /// See [erase]
    fn erase_item<Q>(&mut self, item: &Q) -> Option<usize>
    where
        Self::Item: PartialEq<Q>,
        Q: ?Sized,
    {
        erase(self, item)
    }

    /// See [erase_all]
    fn erase_all_items<Q>(&mut self, item: &Q) -> usize
    where
        Self::Item: PartialEq<Q>,
        Q: ?Sized,
    {
        erase_all(self, item)
    }

    /// See [insert_ordered]
    fn insert_ordered<F>(&mut self, item: Self::Item, compare: F) -> usize
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        insert_ordered(self, item, compare)
    }
}

impl<S: Sequence> SequenceExt for S {}
