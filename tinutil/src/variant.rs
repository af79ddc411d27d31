//! Discriminated access to enums used as tagged unions.
//!
//! An alternative type `A` of a union `V` implements [Alternative<V>], which yields the
//! held value only if `A` is the active alternative. The [alternatives!](crate::alternatives)
//! macro generates these impls. A union that may hold nothing is modelled as `Option<V>`.

/// Checked view of one alternative of the tagged union `V`
pub trait Alternative<V: ?Sized> {
    /// Returns the held value if the active alternative of `variant` is `Self`
    fn get_if(variant: &V) -> Option<&Self>;
}

impl<V, A> Alternative<Option<V>> for A
where
    A: Alternative<V>,
{
    fn get_if(variant: &Option<V>) -> Option<&Self> {
        variant.as_ref().and_then(<A as Alternative<V>>::get_if)
    }
}

/// Whether the active alternative of `variant` is `A`.
///
/// # Examples
///
/// ```rust
/// use tinutil::alternatives;
/// use tinutil::variant::holds_alternative;
///
/// enum Token {
///     Number(u64),
///     Word(String),
/// }
/// alternatives!(Token { Number(u64), Word(String) });
///
/// let t = Token::Number(3);
/// assert!(holds_alternative::<u64, _>(&t));
/// assert!(!holds_alternative::<String, _>(&t));
/// # let _ = Token::Word(String::new());
/// ```
pub fn holds_alternative<A, V>(variant: &V) -> bool
where
    A: Alternative<V>,
    V: ?Sized,
{
    <A as Alternative<V>>::get_if(variant).is_some()
}

/// Checks whether `variant` holds the alternative of type `A` and that held value equals
/// `alternative`.
///
/// The active alternative is checked first; only then are the values compared, so a
/// mismatching alternative always yields `false`.
///
/// # Examples
///
/// ```rust
/// use tinutil::alternatives;
/// use tinutil::variant::variant_compare;
///
/// #[derive(Debug)]
/// enum Value {
///     Int(i32),
///     Float(f32),
///     Bool(bool),
/// }
/// alternatives!(Value { Int(i32), Float(f32), Bool(bool) });
///
/// let v = Value::Int(12);
/// assert!(variant_compare(&v, &12_i32));
/// assert!(!variant_compare(&v, &15_i32));
/// assert!(!variant_compare(&v, &false));
/// assert!(!variant_compare(&v, &12.0_f32));
///
/// // An empty union never matches
/// assert!(!variant_compare(&None::<Value>, &12_i32));
/// assert!(variant_compare(&Some(Value::Bool(true)), &true));
/// ```
pub fn variant_compare<V, A>(variant: &V, alternative: &A) -> bool
where
    A: Alternative<V> + PartialEq,
    V: ?Sized,
{
    match <A as Alternative<V>>::get_if(variant) {
        Some(held) => held == alternative,
        None => false,
    }
}

/// Implements [Alternative] for each single-value alternative of an enum.
///
/// Every listed alternative must carry a distinct type. Alternatives that are not
/// listed (unit variants standing for "no value", for example) never match.
///
/// # Examples
///
/// ```rust
/// use tinutil::alternatives;
/// use tinutil::variant::Alternative;
///
/// enum Slot {
///     Empty,
///     Id(u32),
///     Name(&'static str),
/// }
/// alternatives!(Slot { Id(u32), Name(&'static str) });
///
/// assert_eq!(u32::get_if(&Slot::Id(7)), Some(&7));
/// assert_eq!(u32::get_if(&Slot::Empty), None);
/// assert_eq!(<&str>::get_if(&Slot::Name("x")), Some(&"x"));
/// ```
#[macro_export]
macro_rules! alternatives {
    ($union:ident { $($alternative:ident($type:ty)),+ $(,)? }) => {
        $(
            impl $crate::variant::Alternative<$union> for $type {
                #[allow(unreachable_patterns)]
                fn get_if(variant: &$union) -> ::core::option::Option<&Self> {
                    match variant {
                        $union::$alternative(value) => ::core::option::Option::Some(value),
                        _ => ::core::option::Option::None,
                    }
                }
            }
        )+
    };
}
