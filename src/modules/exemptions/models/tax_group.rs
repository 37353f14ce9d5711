use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A response-direction tax group in the jurisdiction-redefinition flow.
///
/// `number_of_taxes` counts the tax lines sharing the group's name across
/// the response; `number_of_groups` counts the distinct groups the revenue
/// was summed over. `percent_taxable` is a fraction (0.65 for 65%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxGroup {
    pub group_name: String,
    pub number_of_taxes: u32,
    pub number_of_groups: u32,
    pub group_revenue: Decimal,
    pub percent_taxable: Decimal,
}
