//! Conversions between field-less enums and their integer representation.
//!
//! Enums declared through [underlying_enum!](crate::underlying_enum) carry an explicit
//! `#[repr(...)]`, implement [UnderlyingType] for the total enum-to-integer direction and
//! `TryFrom<Repr>` for the checked integer-to-enum direction.

use std::any::type_name;

use thiserror::Error;

/// Trait implemented by enums with a fixed-width integer representation
pub trait UnderlyingType: Sized {
    /// The integer type given in the enum's `#[repr(...)]`
    type Repr: Copy;

    /// The discriminant of `self` as its representation type
    fn underlying(self) -> Self::Repr;
}

/// Converts an enum value to its underlying integer.
///
/// # Examples
///
/// ```rust
/// use tinutil::enums::underlying_type;
/// use tinutil::underlying_enum;
///
/// underlying_enum! {
///     #[derive(Debug, Clone, Copy)]
///     enum Elem: i16 {
///         First,
///         Second,
///         Last = -1,
///     }
/// }
///
/// assert_eq!(underlying_type(Elem::First), 0);
/// assert_eq!(underlying_type(Elem::Second), 1);
/// assert_eq!(underlying_type(Elem::Last), -1i16);
/// ```
pub fn underlying_type<E: UnderlyingType>(e: E) -> E::Repr {
    e.underlying()
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{value} is not a discriminant of {enum_name}")]
/// Error returned when converting an integer that names no variant of the target enum
pub struct UnknownDiscriminant {
    value: i128,
    enum_name: &'static str,
}

impl UnknownDiscriminant {
    /// Creates a new UnknownDiscriminant for the enum type `E`
    pub fn new<E: ?Sized>(value: i128) -> Self {
        let enum_name = type_name::<E>();
        Self { value, enum_name }
    }

    /// The rejected integer value
    pub fn value(&self) -> i128 {
        self.value
    }

    /// Fully qualified name of the target enum type
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }
}

/// Declares a field-less enum with an explicit integer representation and implements
/// [UnderlyingType] and `TryFrom<Repr>` for it.
///
/// Supported representations are the primitive integer types up to 64 bits (`u8`..`u64`,
/// `i8`..`i64`, `usize`, `isize`).
///
/// # Examples
///
/// ```rust
/// use tinutil::enums::UnderlyingType;
/// use tinutil::underlying_enum;
///
/// underlying_enum! {
///     /// Traffic light
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Light: u8 {
///         Red = 1,
///         Yellow = 2,
///         Green = 4,
///     }
/// }
///
/// assert_eq!(Light::Green.underlying(), 4);
/// assert_eq!(Light::try_from(2u8), Ok(Light::Yellow));
///
/// let err = Light::try_from(3u8).unwrap_err();
/// assert_eq!(err.value(), 3);
/// assert!(err.enum_name().ends_with("Light"));
/// ```
#[macro_export]
macro_rules! underlying_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $discriminant:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(= $discriminant)?,
            )*
        }

        impl $crate::enums::UnderlyingType for $name {
            type Repr = $repr;

            fn underlying(self) -> $repr {
                self as $repr
            }
        }

        impl ::core::convert::TryFrom<$repr> for $name {
            type Error = $crate::enums::UnknownDiscriminant;

            fn try_from(value: $repr) -> ::core::result::Result<Self, Self::Error> {
                $(
                    if value == $name::$variant as $repr {
                        return ::core::result::Result::Ok($name::$variant);
                    }
                )*
                ::core::result::Result::Err($crate::enums::UnknownDiscriminant::new::<$name>(
                    value as i128,
                ))
            }
        }
    };
}
