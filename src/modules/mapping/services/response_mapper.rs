use tracing::info;

use crate::modules::amounts::AmountFormatter;
use crate::modules::exemptions::models::TaxGroup;
use crate::modules::exemptions::services::ExemptionAllocator;
use crate::modules::jurisdictions::models::{GeocodeResult, JurisdictionRecord, UnifyMatching};
use crate::modules::jurisdictions::JurisdictionCodeBuilder;
use crate::modules::mapping::models::ExemptAmountLine;

/// Normalizes service responses back into ERP-shaped records.
pub struct TaxResponseMapper;

impl TaxResponseMapper {
    /// Map geocode lookup results into jurisdiction records.
    ///
    /// The return and error codes derive strictly from whether the lookup
    /// reported the sentinel success code; sequence numbers and error
    /// messages pass through untouched.
    pub fn map_jurisdiction_response(
        results: &[GeocodeResult],
        unify_indicator: &str,
        matching: UnifyMatching,
    ) -> Vec<JurisdictionRecord> {
        let records: Vec<JurisdictionRecord> = results
            .iter()
            .map(|result| {
                let (ret_code, err_code) = if result.is_success() {
                    (JurisdictionRecord::RET_OK, JurisdictionRecord::ERR_NONE)
                } else {
                    (JurisdictionRecord::RET_ERROR, JurisdictionRecord::ERR_LOOKUP_FAILED)
                };

                JurisdictionRecord {
                    txjcd: JurisdictionCodeBuilder::build_from_fips_embedded_with(
                        &result.geocode,
                        unify_indicator,
                        matching,
                    ),
                    sequence_num: result.sequence_num.clone(),
                    ret_code: ret_code.to_string(),
                    err_code: err_code.to_string(),
                    err_msg: result.error_message.clone(),
                }
            })
            .collect();

        info!("mapped {} geocode results into jurisdiction records", records.len());
        records
    }

    /// Prorate each group's exempt amount and render it in the ERP scaled
    /// trailing-minus convention.
    pub fn map_exempt_amounts(groups: &[TaxGroup], scale: u32) -> Vec<ExemptAmountLine> {
        groups
            .iter()
            .map(|group| ExemptAmountLine {
                group_name: group.group_name.clone(),
                exempt_amount: AmountFormatter::format_scaled(
                    ExemptionAllocator::prorate_group(group),
                    scale,
                ),
            })
            .collect()
    }
}
