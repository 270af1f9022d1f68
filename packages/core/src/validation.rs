// ABOUTME: Presence checks for identifying fields
// ABOUTME: The only validation prdkit performs on user input

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Require that an optional field is present and not blank.
///
/// Returns the trimmed value on success.
pub fn require_present<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_value_is_trimmed() {
        assert_eq!(require_present("ownerId", Some("  u-1 ")), Ok("u-1"));
    }

    #[test]
    fn test_missing_and_blank_values_are_rejected() {
        assert_eq!(
            require_present("ownerId", None),
            Err(ValidationError::MissingField("ownerId"))
        );
        assert_eq!(
            require_present("email", Some("   ")),
            Err(ValidationError::MissingField("email"))
        );
    }

    #[test]
    fn test_error_message_names_field() {
        let err = require_present("ownerId", None).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: ownerId");
    }
}
