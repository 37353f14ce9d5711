use serde::{Deserialize, Serialize};

/// Per-line exemption outcome: either "00" (no exemption) or a
/// "06:<ratio>" code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionResult {
    pub line_id: String,
    pub exemption_code: String,
}
