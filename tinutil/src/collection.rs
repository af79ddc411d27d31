//! Read-only queries over anything iterable.
//!
//! Each function takes its input as [IntoIterator], so the same call works on a whole
//! container (`&vec`), on a half-open sub-range of it (`&vec[1..3]`) or on an arbitrary
//! iterator adapter. Positions are zero-based indices relative to the start of the input;
//! `None` plays the role of the end-of-sequence sentinel.

use std::borrow::Borrow;

/// Checks whether `items` contains an element equal to `item`.
///
/// # Examples
///
/// ```rust
/// use tinutil::collection::contains;
///
/// let v = vec![1, 2, 3, 4];
/// assert!(contains(&v, &2));
/// assert!(!contains(&v, &10));
///
/// // Restricting the search to a sub-range
/// assert!(contains(&v[1..3], &2));
/// assert!(!contains(&v[1..3], &1));
///
/// // Unsized items can be looked up through `Borrow`
/// let names = vec![String::from("a"), String::from("b")];
/// assert!(contains(names.iter().map(String::as_str), "b"));
/// ```
pub fn contains<I, T>(items: I, item: &T) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    items.into_iter().any(|x| x.borrow() == item)
}

/// Returns the position of the first element satisfying `pred`.
///
/// Returns `None` if no element matches.
///
/// # Examples
///
/// ```rust
/// use tinutil::collection::find_if;
///
/// let v = vec![1, 2, 3, 4, 5, 6];
/// assert_eq!(find_if(&v, |x| *x > 3), Some(3));
/// assert_eq!(find_if(&v, |x| *x > 6), None);
/// ```
pub fn find_if<I, P>(items: I, pred: P) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    items.into_iter().position(pred)
}

/// Checks whether every element satisfies `pred`.
///
/// Stops at the first element that does not. True for an empty input.
///
/// # Examples
///
/// ```rust
/// use tinutil::collection::all_of;
///
/// let v = vec![1, 2, 3, 4, 5];
/// assert!(all_of(&v, |x| *x < 10));
/// assert!(!all_of(&v, |x| *x < 4));
/// assert!(all_of(&Vec::<i32>::new(), |_| false));
/// ```
pub fn all_of<I, P>(items: I, pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    items.into_iter().all(pred)
}

/// Checks whether at least one element satisfies `pred`.
///
/// Stops at the first element that does. False for an empty input.
///
/// # Examples
///
/// ```rust
/// use tinutil::collection::any_of;
///
/// let v = vec![1, 2, 3, 4, 5];
/// assert!(any_of(&v, |x| *x > 3));
/// assert!(!any_of(&v, |x| *x > 10));
/// assert!(!any_of(&Vec::<i32>::new(), |_| true));
/// ```
pub fn any_of<I, P>(items: I, pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    items.into_iter().any(pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;

    #[test]
    fn contains_agrees_with_scan() {
        let v = vec![3, 1, 4, 1, 5, 9, 2, 6];
        for x in 0..12 {
            assert_eq!(contains(&v, &x), v.iter().any(|y| *y == x));
        }
    }

    #[test]
    fn contains_on_empty_range() {
        let v = vec![1, 2, 3];
        assert!(!contains(&v[1..1], &2));
    }

    #[test]
    fn contains_on_iterator_adapter() {
        let v = vec![1, 2, 3, 4];
        assert!(contains(v.iter().skip(2), &3));
        assert!(!contains(v.iter().skip(2), &2));
        assert!(contains(v.iter().copied().map(|x| x * 10), &40));
    }

    #[test]
    fn find_if_returns_first_match() {
        let v = vec![5, 7, 8, 10, 12];
        assert_eq!(find_if(&v, |x| x % 2 == 0), Some(2));
        assert_eq!(find_if(&v, |x| x % 2 == 1), Some(0));
        assert_eq!(find_if(&v, |x| *x > 100), None);
        assert_eq!(find_if(Vec::<i32>::new(), |_| true), None);
    }

    #[test]
    fn find_if_on_deque() {
        let d: VecDeque<_> = [4, 3, 2, 1].into_iter().collect();
        assert_eq!(find_if(&d, |x| *x < 3), Some(2));
    }

    #[test]
    fn quantifiers_are_dual() {
        let v = vec![2, 4, 6, 7];
        let preds: [fn(&i32) -> bool; 3] = [|x| x % 2 == 0, |x| *x > 0, |x| *x > 5];
        for p in preds {
            assert_eq!(all_of(&v, p), !any_of(&v, |x| !p(x)));
        }
    }

    #[test]
    fn quantifiers_short_circuit() {
        let v = vec![1, 2, 3, 4, 5];

        let calls = Cell::new(0);
        assert!(any_of(&v, |x| {
            calls.set(calls.get() + 1);
            *x == 2
        }));
        assert_eq!(calls.get(), 2);

        calls.set(0);
        assert!(!all_of(&v, |x| {
            calls.set(calls.get() + 1);
            *x < 3
        }));
        assert_eq!(calls.get(), 3);
    }
}
