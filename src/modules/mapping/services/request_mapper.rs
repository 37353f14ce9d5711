use rust_decimal::Decimal;
use tracing::info;

use crate::modules::amounts::services::DecimalScaler;
use crate::modules::amounts::ScaledAmount;
use crate::modules::exemptions::models::TaxLine;
use crate::modules::exemptions::services::ExemptionAllocator;
use crate::modules::mapping::models::{SourceLineItem, TaxLineRequest, TaxRequest};

/// Transaction-type code used when a line carries none
pub const DEFAULT_TRANS_TYPE: &str = "01";

/// Builds the outbound tax-calculation request from raw ERP line items.
pub struct TaxRequestMapper;

impl TaxRequestMapper {
    /// Map every source line and accumulate the document totals.
    ///
    /// Amount parsing, exemption allocation, and summation all happen in
    /// unscaled decimal space; a line's literal string representation never
    /// influences the totals. Freight only contributes when present (the
    /// tax-calculation flow), and the scaled total renditions come from
    /// `TaxRequest` accessors, derived once from the finished sums.
    pub fn build_request(
        items: &[SourceLineItem],
        scale: u32,
        default_trans_type: &str,
    ) -> TaxRequest {
        let tax_lines: Vec<TaxLine> = items
            .iter()
            .map(|item| {
                TaxLine::new(
                    item.line_id.clone(),
                    ScaledAmount::from_raw(&item.revenue, scale),
                    ScaledAmount::from_raw(&item.exempt_amount, scale),
                    Self::resolve_trans_type(item, default_trans_type),
                )
            })
            .collect();
        let exemptions = ExemptionAllocator::allocate(&tax_lines);

        let mut lines = Vec::with_capacity(items.len());
        let mut total_revenue = Decimal::ZERO;
        let mut total_freight = Decimal::ZERO;

        for (item, (line, exemption)) in items.iter().zip(tax_lines.iter().zip(&exemptions)) {
            total_revenue += line.revenue.value;
            if let Some(freight) = item.freight.as_deref() {
                total_freight += DecimalScaler::parse_scaled(freight, scale);
            }

            lines.push(TaxLineRequest {
                line_id: line.line_id.clone(),
                revenue: line.revenue.value,
                trans_type_code: line.trans_type_code.clone(),
                exemption_code: exemption.exemption_code.clone(),
            });
        }

        info!(
            "mapped {} line items (total revenue {}, total freight {})",
            lines.len(),
            total_revenue,
            total_freight
        );

        TaxRequest {
            lines,
            total_revenue,
            total_freight,
        }
    }

    /// A line's own non-blank code wins; otherwise the document default.
    fn resolve_trans_type(item: &SourceLineItem, default_trans_type: &str) -> String {
        match item.trans_type_code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => default_trans_type.to_string(),
        }
    }
}
