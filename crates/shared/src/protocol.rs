use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::CollegeRecord;

/// Path of the prediction endpoint, relative to the configured server URL.
pub const PREDICT_PATH: &str = "/predict";

/// Validated request body for the prediction endpoint.
///
/// `rank` is always a positive integer by the time a payload exists; the
/// controller rejects anything else before construction. Optional form
/// fields ride along in `extra` and flatten into the same JSON object, so
/// the wire shape is flat: `{"rank":150,"category":"GEN","pool":...,...}`.
/// Fields the user left empty are never present, not even as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub rank: i64,
    pub category: String,
    pub pool: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// Response body of the prediction endpoint.
///
/// The endpoint may pair `error` with any HTTP status, including 200, and
/// may omit `colleges` entirely on an empty result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colleges: Option<Vec<CollegeRecord>>,
}
