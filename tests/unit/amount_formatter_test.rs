// Property-based tests for the trailing-minus amount rendition

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use taxbridge::amounts::AmountFormatter;

proptest! {
    /// The sign convention: a trailing "-" exactly for negative amounts,
    /// never a leading "-", never a decimal point
    #[test]
    fn test_sign_convention(minor_units in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let rendered = AmountFormatter::format(Decimal::from(minor_units));

        prop_assert_eq!(rendered.ends_with('-'), minor_units < 0);
        prop_assert!(!rendered.starts_with('-'));
        prop_assert!(!rendered.contains('.'));
    }

    /// Magnitude is preserved digit-for-digit across the sign flip
    #[test]
    fn test_magnitude_preserved(minor_units in 1i64..1_000_000_000_000i64) {
        let positive = AmountFormatter::format(Decimal::from(minor_units));
        let negative = AmountFormatter::format(Decimal::from(-minor_units));

        prop_assert_eq!(format!("{}-", positive), negative);
    }
}

#[test]
fn test_zero_is_unsigned() {
    assert_eq!(AmountFormatter::format(Decimal::ZERO), "0");
    assert_eq!(AmountFormatter::format(dec!(0.00)), "0");
    assert_eq!(AmountFormatter::format(dec!(-0.4)), "0");
}

#[test]
fn test_scaled_rendition() {
    assert_eq!(AmountFormatter::format_scaled(dec!(100.00), 2), "10000");
    assert_eq!(AmountFormatter::format_scaled(dec!(-1.5), 2), "150-");
    assert_eq!(AmountFormatter::format_scaled(dec!(175), 2), "17500");
    assert_eq!(AmountFormatter::format_scaled(dec!(42), 0), "42");
}
