use tracing::debug;

use super::state_codes;
use crate::modules::jurisdictions::models::UnifyMatching;

/// Unify-indicator value requesting jurisdiction-code unification
pub const UNIFY_FLAG: &str = "X";

/// Constructs SAP tax-jurisdiction codes (TXJCD) from raw geocodes.
///
/// Two named variants exist and are not interchangeable: one reads the FIPS
/// state key embedded in the geocode, the other splices in a state code the
/// caller already holds from elsewhere in the document.
pub struct JurisdictionCodeBuilder;

impl JurisdictionCodeBuilder {
    /// FIPS-embedded variant with the default case-sensitive flag match.
    pub fn build_from_fips_embedded(geocode: &str, unify_indicator: &str) -> String {
        Self::build_from_fips_embedded_with(geocode, unify_indicator, UnifyMatching::default())
    }

    /// Build a TXJCD from a geocode carrying its own FIPS state key.
    ///
    /// "US"-prefixed geocodes of length >= 4 hold a two-digit FIPS state key
    /// at positions 2-3; the key is replaced with its postal abbreviation
    /// (the raw digits stay when the key is unmapped) and a trailing "-" is
    /// appended. "ZZ" geocodes mark jurisdiction-less or foreign locations
    /// and are tagged with a bare "US" prefix instead, with no splicing.
    /// Every other shape passes through unchanged, as does every geocode
    /// when the unify indicator is not set.
    pub fn build_from_fips_embedded_with(
        geocode: &str,
        unify_indicator: &str,
        matching: UnifyMatching,
    ) -> String {
        if geocode.is_empty() {
            return String::new();
        }
        if !unify_requested(unify_indicator, matching) {
            return geocode.to_string();
        }
        if geocode.starts_with("ZZ") {
            return format!("US{}", geocode);
        }
        if geocode.starts_with("US") {
            if let (Some(fips), Some(rest)) = (geocode.get(2..4), geocode.get(4..)) {
                let state = state_codes::postal_for_fips(fips).unwrap_or_else(|| {
                    debug!("no postal mapping for FIPS key {:?}, keeping raw digits", fips);
                    fips
                });
                return format!("US{}{}-", state, rest);
            }
        }
        geocode.to_string()
    }

    /// Known-state variant with the default case-sensitive flag match.
    pub fn build_from_known_state(
        geocode: &str,
        state_code: &str,
        unify_indicator: &str,
    ) -> String {
        Self::build_from_known_state_with(geocode, state_code, unify_indicator, UnifyMatching::default())
    }

    /// Build a TXJCD from a geocode plus an authoritative state code.
    ///
    /// Used when the document already carries the two-letter state
    /// abbreviation: it is inserted directly after the first two characters
    /// of the geocode and a trailing "-" is appended, with no FIPS lookup.
    /// "ZZ" geocodes are tagged the same way as in the FIPS variant;
    /// geocodes shorter than two characters pass through unchanged.
    pub fn build_from_known_state_with(
        geocode: &str,
        state_code: &str,
        unify_indicator: &str,
        matching: UnifyMatching,
    ) -> String {
        if geocode.is_empty() {
            return String::new();
        }
        if !unify_requested(unify_indicator, matching) {
            return geocode.to_string();
        }
        if geocode.starts_with("ZZ") {
            return format!("US{}", geocode);
        }
        match (geocode.get(..2), geocode.get(2..)) {
            (Some(prefix), Some(rest)) => format!("{}{}{}-", prefix, state_code, rest),
            _ => geocode.to_string(),
        }
    }
}

fn unify_requested(indicator: &str, matching: UnifyMatching) -> bool {
    match matching {
        UnifyMatching::CaseSensitive => indicator == UNIFY_FLAG,
        UnifyMatching::CaseInsensitive => indicator.eq_ignore_ascii_case(UNIFY_FLAG),
    }
}
