use serde::{Deserialize, Serialize};

/// One location's result from the external geocoding service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub geocode: String,
    pub sequence_num: String,
    pub response_code: String,
    pub error_message: String,
}

impl GeocodeResult {
    /// Sentinel response code the service returns for a successful lookup
    pub const SUCCESS_CODE: &'static str = "9999";

    pub fn is_success(&self) -> bool {
        self.response_code == Self::SUCCESS_CODE
    }
}
