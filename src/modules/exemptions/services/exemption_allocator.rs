use rust_decimal::Decimal;
use tracing::debug;

use crate::modules::exemptions::models::{ExemptionResult, TaxGroup, TaxLine};

/// Exemption code for lines with no exempt amount
pub const NO_EXEMPTION: &str = "00";

/// Code prefix for ratio-based exemptions
pub const RATIO_EXEMPTION_PREFIX: &str = "06";

/// Computes exemption-ratio codes per line and prorated exempt amounts per
/// tax group.
///
/// Both directions are pure: inputs are never mutated and the same inputs
/// always produce the same outputs.
pub struct ExemptionAllocator;

impl ExemptionAllocator {
    /// Compute each line's exemption code independently.
    ///
    /// Lines with a zero exempt amount get "00". Otherwise the code is
    /// "06:<ratio>" where ratio = |exempt| / |revenue|, with trailing zeros
    /// stripped and no fixed-width padding. Revenue of zero is treated as 1
    /// so the ratio stays defined.
    pub fn allocate(lines: &[TaxLine]) -> Vec<ExemptionResult> {
        lines.iter().map(Self::allocate_line).collect()
    }

    fn allocate_line(line: &TaxLine) -> ExemptionResult {
        if line.exempt_amount.is_zero() {
            return ExemptionResult {
                line_id: line.line_id.clone(),
                exemption_code: NO_EXEMPTION.to_string(),
            };
        }

        let base = if line.revenue.is_zero() {
            Decimal::ONE
        } else {
            line.revenue.value.abs()
        };
        let ratio = (line.exempt_amount.value.abs() / base).normalize();

        ExemptionResult {
            line_id: line.line_id.clone(),
            exemption_code: format!("{}:{}", RATIO_EXEMPTION_PREFIX, ratio),
        }
    }

    /// Prorate a summed group revenue into the taxable exemption base.
    ///
    /// Step one splits the group revenue across the same-named tax lines:
    /// `count_per_group = number_of_taxes / number_of_groups` (integer
    /// division; zero groups counts as one, and a zero quotient is clamped
    /// to one so the split stays defined). Step two discounts the split
    /// revenue by the taxable percentage. The two steps run in exactly this
    /// order.
    pub fn prorate_group(group: &TaxGroup) -> Decimal {
        let groups = if group.number_of_groups == 0 {
            1
        } else {
            group.number_of_groups
        };
        let count_per_group = (group.number_of_taxes / groups).max(1);

        let mut exempt = group.group_revenue / Decimal::from(count_per_group);
        exempt -= exempt * group.percent_taxable;

        debug!(
            "prorated group {:?}: {} taxes over {} groups -> exempt base {}",
            group.group_name, group.number_of_taxes, groups, exempt
        );

        exempt
    }
}
