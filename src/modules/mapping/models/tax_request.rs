use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::amounts::AmountFormatter;

/// A raw ERP line item as received, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLineItem {
    pub line_id: String,
    /// Scaled integer string, trailing-minus convention
    pub revenue: String,
    /// Scaled integer string, trailing-minus convention
    pub exempt_amount: String,
    /// Scaled integer string; only present in the tax-calculation flow
    pub freight: Option<String>,
    pub trans_type_code: Option<String>,
}

/// One outbound tax-calculation request line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLineRequest {
    pub line_id: String,
    pub revenue: Decimal,
    pub trans_type_code: String,
    pub exemption_code: String,
}

/// The assembled outbound request document.
///
/// Totals are accumulated in unscaled decimal space; the scaled renditions
/// are derived once, from the finished sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRequest {
    pub lines: Vec<TaxLineRequest>,
    pub total_revenue: Decimal,
    pub total_freight: Decimal,
}

impl TaxRequest {
    pub fn total_revenue_scaled(&self, scale: u32) -> String {
        AmountFormatter::format_scaled(self.total_revenue, scale)
    }

    pub fn total_freight_scaled(&self, scale: u32) -> String {
        AmountFormatter::format_scaled(self.total_freight, scale)
    }
}
