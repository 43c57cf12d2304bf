//! Form field collection, normalization, and validation.

use std::collections::BTreeMap;

use shared::protocol::SubmissionPayload;
use tracing::warn;

use crate::error::SubmitError;

/// Field names that must be present and non-empty before any request goes out.
pub const REQUIRED_FIELDS: [&str; 3] = ["rank", "category", "pool"];

/// Passive collaborator owned by the hosting surface: the input fields.
///
/// Values are raw user input; trimming and empty-field elision happen in
/// [`build_payload`], not here.
pub trait FormSource {
    /// Field name/value pairs in form order.
    fn fields(&self) -> Vec<(String, String)>;
}

impl FormSource for Vec<(String, String)> {
    fn fields(&self) -> Vec<(String, String)> {
        self.clone()
    }
}

/// Builds a validated payload from raw form fields.
///
/// Trims every value and drops fields that trim to empty, so an untouched
/// optional input is simply absent from the payload. Fails without any
/// network activity when a required field is missing or the rank does not
/// parse as a strictly positive base-10 integer.
pub fn build_payload(form: &dyn FormSource) -> Result<SubmissionPayload, SubmitError> {
    let mut values: BTreeMap<String, String> = BTreeMap::new();
    for (name, raw) in form.fields() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        values.insert(name, trimmed.to_string());
    }

    if REQUIRED_FIELDS
        .iter()
        .any(|field| !values.contains_key(*field))
    {
        warn!("submission rejected: required field missing");
        return Err(SubmitError::required_fields());
    }

    // Presence was just checked, so the removes cannot miss.
    let rank_raw = values.remove("rank").unwrap_or_default();
    let category = values.remove("category").unwrap_or_default();
    let pool = values.remove("pool").unwrap_or_default();

    let Some(rank) = parse_rank(&rank_raw) else {
        warn!(rank = %rank_raw, "submission rejected: rank is not a positive whole number");
        return Err(SubmitError::rank_format());
    };

    Ok(SubmissionPayload {
        rank,
        category,
        pool,
        extra: values,
    })
}

/// Strict base-10 parse; fractional, zero, negative, and non-numeric input
/// all fail. The transmitted rank is this integer, never the raw string.
fn parse_rank(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|rank| *rank > 0)
}
