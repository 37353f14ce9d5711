use serde::{Deserialize, Serialize};

/// Final normalized jurisdiction result for one queried location.
///
/// `ret_code` and `err_code` are derived strictly from whether the geocode
/// lookup reported the sentinel success code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionRecord {
    pub txjcd: String,
    pub sequence_num: String,
    pub ret_code: String,
    pub err_code: String,
    pub err_msg: String,
}

impl JurisdictionRecord {
    pub const RET_OK: &'static str = "0";
    pub const RET_ERROR: &'static str = "1";
    pub const ERR_NONE: &'static str = "0000";
    pub const ERR_LOOKUP_FAILED: &'static str = "1999";
}
