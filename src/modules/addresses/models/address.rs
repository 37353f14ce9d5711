use serde::{Deserialize, Serialize};

/// Address fields available for one jurisdiction lookup.
///
/// Built once from the inbound document plus the address-validation feature
/// flag; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    pub enable_address_validation: bool,
    pub street: Option<String>,
    /// Supplemental street data; carried through but not part of the
    /// full-address predicate
    pub street1: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: String,
}

/// Which of the two geocode request shapes applies, plus the outbound ZIP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDecision {
    pub use_full_address: bool,
    pub outbound_zip: String,
}
