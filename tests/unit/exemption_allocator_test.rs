// Property-based tests for exemption allocation
//
// Covers the per-line ratio codes of the request direction and the
// two-step group proration of the jurisdiction-redefinition response.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use taxbridge::amounts::ScaledAmount;
use taxbridge::exemptions::models::{TaxGroup, TaxLine};
use taxbridge::exemptions::ExemptionAllocator;

fn line(revenue: Decimal, exempt: Decimal) -> TaxLine {
    TaxLine::new(
        "000010",
        ScaledAmount::new(revenue, 2),
        ScaledAmount::new(exempt, 2),
        "01",
    )
}

proptest! {
    /// A zero exempt amount yields "00" whatever the revenue
    #[test]
    fn test_zero_exempt_is_code_00(minor_units in -1_000_000i64..1_000_000i64) {
        let results =
            ExemptionAllocator::allocate(&[line(Decimal::new(minor_units, 2), Decimal::ZERO)]);

        prop_assert_eq!(results[0].exemption_code.as_str(), "00");
    }

    /// Zero revenue never fails; the ratio is computed against a base of 1
    #[test]
    fn test_zero_revenue_uses_base_one(minor_units in 1i64..1_000_000i64) {
        let exempt = Decimal::new(minor_units, 2);
        let results = ExemptionAllocator::allocate(&[line(Decimal::ZERO, exempt)]);

        let expected = format!("06:{}", exempt.abs().normalize());
        prop_assert_eq!(results[0].exemption_code.clone(), expected);
    }

    /// The ratio is sign-insensitive on both operands
    #[test]
    fn test_ratio_uses_magnitudes(
        revenue in 1i64..1_000_000i64,
        exempt in 1i64..1_000_000i64,
    ) {
        let plain = ExemptionAllocator::allocate(&[line(
            Decimal::new(revenue, 2),
            Decimal::new(exempt, 2),
        )]);
        let flipped = ExemptionAllocator::allocate(&[line(
            Decimal::new(-revenue, 2),
            Decimal::new(-exempt, 2),
        )]);

        prop_assert_eq!(
            plain[0].exemption_code.clone(),
            flipped[0].exemption_code.clone()
        );
    }

    /// Allocation never mutates its input lines
    #[test]
    fn test_inputs_unchanged(
        revenue in 0i64..1_000_000i64,
        exempt in 0i64..1_000_000i64,
    ) {
        let lines = vec![line(Decimal::new(revenue, 2), Decimal::new(exempt, 2))];
        let before = lines.clone();
        let _ = ExemptionAllocator::allocate(&lines);

        prop_assert_eq!(lines, before);
    }
}

#[test]
fn test_ratio_trims_trailing_zeros() {
    let results = ExemptionAllocator::allocate(&[
        line(dec!(100.00), dec!(25.00)),
        line(dec!(100.00), dec!(50.00)),
        line(dec!(80.00), dec!(80.00)),
    ]);

    assert_eq!(results[0].exemption_code, "06:0.25");
    assert_eq!(results[1].exemption_code, "06:0.5");
    assert_eq!(results[2].exemption_code, "06:1");
}

#[test]
fn test_group_proration_splits_then_discounts() {
    let group = TaxGroup {
        group_name: "NV STATE TAX".to_string(),
        number_of_taxes: 4,
        number_of_groups: 2,
        group_revenue: dec!(1000),
        percent_taxable: dec!(0.65),
    };

    // 1000 / (4/2) = 500, then 500 - 500*0.65 = 175
    assert_eq!(ExemptionAllocator::prorate_group(&group), dec!(175));
}

#[test]
fn test_group_proration_edge_counts() {
    let mut group = TaxGroup {
        group_name: "CITY TAX".to_string(),
        number_of_taxes: 5,
        number_of_groups: 2,
        group_revenue: dec!(1000),
        percent_taxable: dec!(0),
    };

    // integer division: 5/2 = 2
    assert_eq!(ExemptionAllocator::prorate_group(&group), dec!(500));

    // zero groups counts as one
    group.number_of_taxes = 2;
    group.number_of_groups = 0;
    assert_eq!(ExemptionAllocator::prorate_group(&group), dec!(500));

    // a zero quotient is clamped rather than dividing by zero
    group.number_of_taxes = 1;
    group.number_of_groups = 3;
    assert_eq!(ExemptionAllocator::prorate_group(&group), dec!(1000));
}
