use serde::{Deserialize, Serialize};

/// How the unify-indicator flag is compared against its literal "X" value.
///
/// The integration scripts this engine consolidates disagreed on case
/// sensitivity, so the comparison is configurable; the strict variant is
/// the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnifyMatching {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}
