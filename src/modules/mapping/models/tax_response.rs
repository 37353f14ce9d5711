use serde::{Deserialize, Serialize};

/// Response-direction exempt amount for one tax group, rendered in the ERP
/// scaled trailing-minus convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptAmountLine {
    pub group_name: String,
    pub exempt_amount: String,
}
