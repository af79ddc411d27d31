//! Helpers for bitmask enumerations declared with [bitflags].
//!
//! Passing a type that is not a flag set is rejected at compile time by the
//! [Flags] bound.

use bitflags::Flags;

/// Checks whether `value` has at least one of the bits in `flags` set.
///
/// An empty `flags` never matches.
///
/// # Examples
///
/// ```rust
/// use tinutil::flags::has_any_flag;
///
/// bitflags::bitflags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     struct Perm: u8 {
///         const READ = 1 << 0;
///         const WRITE = 1 << 1;
///         const EXEC = 1 << 2;
///     }
/// }
///
/// let rw = Perm::READ | Perm::WRITE;
/// assert!(has_any_flag(rw, Perm::READ));
/// assert!(!has_any_flag(rw, Perm::EXEC));
/// assert!(has_any_flag(rw, Perm::EXEC | Perm::WRITE));
/// assert!(!has_any_flag(rw, Perm::empty()));
/// ```
pub fn has_any_flag<F: Flags>(value: F, flags: F) -> bool {
    value.intersects(flags)
}

/// Union of all given flag values; the empty set if there are none.
///
/// # Examples
///
/// ```rust
/// use tinutil::flags::combine_flags;
///
/// bitflags::bitflags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     struct Perm: u8 {
///         const READ = 1 << 0;
///         const WRITE = 1 << 1;
///     }
/// }
///
/// assert_eq!(combine_flags([Perm::READ, Perm::WRITE]), Perm::all());
/// assert_eq!(combine_flags::<Perm, _>([]), Perm::empty());
/// ```
pub fn combine_flags<F, I>(flags: I) -> F
where
    F: Flags,
    I: IntoIterator<Item = F>,
{
    flags.into_iter().fold(F::empty(), F::union)
}

/// The raw bits of a flag set, the bitmask counterpart of
/// [underlying_type](crate::enums::underlying_type).
///
/// # Examples
///
/// ```rust
/// use tinutil::flags::flag_bits;
///
/// bitflags::bitflags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     struct Perm: u16 {
///         const READ = 1 << 0;
///         const HIGH = 1 << 8;
///     }
/// }
///
/// assert_eq!(flag_bits(Perm::READ | Perm::HIGH), 0x101);
/// ```
pub fn flag_bits<F: Flags>(flags: F) -> F::Bits {
    flags.bits()
}
