use serde::{Deserialize, Serialize};

use crate::modules::amounts::ScaledAmount;

/// A single document line as consumed by the exemption allocator.
///
/// Built once per source line item during request mapping and not mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    pub line_id: String,
    pub revenue: ScaledAmount,
    pub exempt_amount: ScaledAmount,
    pub trans_type_code: String,
}

impl TaxLine {
    pub fn new(
        line_id: impl Into<String>,
        revenue: ScaledAmount,
        exempt_amount: ScaledAmount,
        trans_type_code: impl Into<String>,
    ) -> Self {
        Self {
            line_id: line_id.into(),
            revenue,
            exempt_amount,
            trans_type_code: trans_type_code.into(),
        }
    }
}
