use crate::error::{ContactError, ContactResult};

/// Validates that a required field is present. Empty strings are accepted;
/// only an absent (or null) value is rejected.
pub fn required(value: Option<String>, field: &str) -> ContactResult<String> {
    value.ok_or_else(|| ContactError::MissingField {
        field: field.to_string(),
    })
}

/// Validates a patch value for a required field: absent is fine, an explicit
/// null is not.
pub fn required_if_present(
    value: Option<Option<String>>,
    field: &str,
) -> ContactResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) => required(v, field).map(Some),
    }
}
