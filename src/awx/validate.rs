//! Mandatory-field checks for request payloads

use crate::error::{AwxError, Result};

use super::Payload;

/// Check `payload` for every name in `required`
///
/// Returns the absent names (in `required` order) and whether all were present.
pub fn validate_params(payload: &Payload, required: &[&str]) -> (Vec<String>, bool) {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| !payload.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    let all_present = missing.is_empty();
    (missing, all_present)
}

/// Fail with [`AwxError::MissingFields`] unless every required field is present
pub fn require_fields(payload: &Payload, required: &[&str]) -> Result<()> {
    let (missing, all_present) = validate_params(payload, required);
    if all_present {
        Ok(())
    } else {
        Err(AwxError::MissingFields(missing))
    }
}
