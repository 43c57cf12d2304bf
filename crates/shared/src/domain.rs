use serde::{Deserialize, Serialize};

/// One past-cycle admission record returned by the prediction endpoint.
///
/// Every field is optional on the wire; a missing field renders as a
/// placeholder rather than failing deserialization. Keys beyond these six
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_no: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_rank: Option<i64>,
}
