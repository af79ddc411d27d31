//! Multi-way equality checks.

/// Checks whether `value` equals any of the `candidates`.
///
/// Stops comparing at the first match. No candidates means no match.
///
/// # Examples
///
/// ```rust
/// use tinutil::value::is_in;
///
/// assert!(is_in(&1, [5, 4, 1, 6]));
/// assert!(!is_in(&1, [5, 4, 2, 6]));
/// assert!(!is_in(&1, Vec::<i32>::new()));
///
/// // Candidates only need to be comparable with the value
/// assert!(is_in(&String::from("b"), ["a", "b"]));
/// ```
pub fn is_in<T, U, I>(value: &T, candidates: I) -> bool
where
    T: PartialEq<U> + ?Sized,
    I: IntoIterator<Item = U>,
{
    candidates.into_iter().any(|candidate| *value == candidate)
}

/// Variadic form of [is_in](crate::value::is_in): `is_in!(value, a, b, ...)`.
///
/// The value is evaluated once; candidates are evaluated left to right until one compares
/// equal. Each candidate may have its own type as long as the value can be compared
/// with it.
///
/// # Examples
///
/// ```rust
/// use tinutil::is_in;
///
/// assert!(is_in!(1, 5, 4, 1, 6));
/// assert!(!is_in!(1, 5, 4, 2, 6));
/// assert!(!is_in!(1));
///
/// let name = String::from("beta");
/// assert!(is_in!(name, "alpha", String::from("beta")));
/// ```
#[macro_export]
macro_rules! is_in {
    ($value:expr $(, $candidate:expr)* $(,)?) => {{
        #[allow(unused_variables)]
        let value = &$value;
        false $(|| *value == $candidate)*
    }};
}
