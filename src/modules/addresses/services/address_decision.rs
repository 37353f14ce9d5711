use crate::core::{AppError, Result};
use crate::modules::addresses::models::{AddressDecision, AddressInput};

/// Decides which geocode lookup shape an address supports.
pub struct AddressDecisionEngine;

impl AddressDecisionEngine {
    /// Validate the fields the decision logic cannot default.
    ///
    /// Country and state must be present before address-decision or
    /// jurisdiction logic runs. This is the caller-side check; `decide`
    /// itself never fails.
    pub fn validate_mandatory(input: &AddressInput) -> Result<()> {
        if input.country.trim().is_empty() {
            return Err(AppError::validation("Address is missing a country"));
        }
        if !has_text(&input.state) {
            return Err(AppError::validation("Address is missing a state"));
        }
        Ok(())
    }

    /// Decide between the full-address and ZIP/city fallback lookup paths.
    ///
    /// The full-address path applies only when address validation is
    /// enabled AND street and state are present AND at least one of zip or
    /// city is present. Any missing mandatory field forces the fallback;
    /// there is no partial-credit scoring.
    pub fn decide(input: &AddressInput) -> AddressDecision {
        let use_full_address = input.enable_address_validation
            && has_text(&input.street)
            && has_text(&input.state)
            && (has_text(&input.zip) || has_text(&input.city));

        AddressDecision {
            use_full_address,
            outbound_zip: Self::derive_zip(input.zip.as_deref(), &input.country),
        }
    }

    /// Derive the ZIP value sent to the geocode service.
    ///
    /// US addresses keep the ZIP unchanged, including a +4 suffix. Any
    /// other country keeps only the portion before the first "-", since the
    /// geocode service rejects suffixed non-US postal codes. A missing ZIP
    /// yields an empty string, not an error.
    pub fn derive_zip(zip: Option<&str>, country: &str) -> String {
        let zip = match zip.map(str::trim) {
            Some(z) if !z.is_empty() => z,
            _ => return String::new(),
        };

        if country.eq_ignore_ascii_case("US") || country.eq_ignore_ascii_case("USA") {
            zip.to_string()
        } else {
            zip.split('-').next().unwrap_or_default().to_string()
        }
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).is_some_and(|v| !v.is_empty())
}
