use tinutil::enums::{underlying_type, UnknownDiscriminant};
use tinutil::flags::{combine_flags, has_any_flag};
use tinutil::value::is_in;
use tinutil::variant::variant_compare;
use tinutil::{alternatives, is_in, underlying_enum};

underlying_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestEnum: i32 {
        Elem1 = 0,
        Elem2,
        Elem3,
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TestFlagEnum: u32 {
        const FLAG1 = 1 << 0;
        const FLAG2 = 1 << 1;
        const FLAG3 = 1 << 2;
        const FLAG4 = 1 << 4;
    }
}

#[derive(Debug)]
enum Variant {
    Int(i32),
    Float(f32),
    Bool(bool),
}
alternatives!(Variant { Int(i32), Float(f32), Bool(bool) });

#[test]
fn underlying_type_of_enum() {
    assert_eq!(underlying_type(TestEnum::Elem1), 0);
    assert_eq!(underlying_type(TestEnum::Elem3), 2);
}

#[test]
fn enum_from_underlying() -> anyhow::Result<()> {
    assert_eq!(TestEnum::try_from(1i32)?, TestEnum::Elem2);

    let err: UnknownDiscriminant = TestEnum::try_from(3i32).unwrap_err();
    assert_eq!(err.value(), 3);
    Ok(())
}

#[test]
fn has_any_flag_combinations() {
    let e = combine_flags([TestFlagEnum::FLAG1, TestFlagEnum::FLAG2]);
    assert!(has_any_flag(e, TestFlagEnum::FLAG1));
    assert!(!has_any_flag(e, TestFlagEnum::FLAG3));
    assert!(has_any_flag(
        e,
        combine_flags([TestFlagEnum::FLAG1, TestFlagEnum::FLAG3])
    ));
    assert!(!has_any_flag(
        e,
        combine_flags([TestFlagEnum::FLAG3, TestFlagEnum::FLAG4])
    ));
}

#[test]
fn is_in_candidates() {
    assert!(is_in!(1, 5, 4, 1, 6));
    assert!(!is_in!(1, 5, 4, 2, 6));
    assert!(is_in(&1, [5, 4, 1, 6]));
    assert!(!is_in(&1, [5, 4, 2, 6]));
}

#[test]
fn variant_compare_alternatives() {
    let v = Variant::Int(12);
    assert!(variant_compare(&v, &12_i32));
    assert!(!variant_compare(&v, &15_i32));
    assert!(!variant_compare(&v, &false));

    let f = Variant::Float(0.25);
    assert!(variant_compare(&f, &0.25_f32));
    assert!(!variant_compare(&f, &0_i32));

    let b = Variant::Bool(false);
    assert!(variant_compare(&b, &false));
    assert!(!variant_compare(&b, &true));
    assert!(!variant_compare(&b, &12_i32));
}
