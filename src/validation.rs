//! Input validation for user-provided data.

/// Validation result with error message.
pub type ValidationResult = Result<(), String>;

/// Message shown when a required contact field is missing.
pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Checks that every required field has content.
///
/// Rules:
/// - Every field must contain at least one non-whitespace character
/// - The first blank field is reported, but the message is the same for all
pub fn validate_required<'a, I>(fields: I) -> ValidationResult
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (name, value) in fields {
        if value.trim().is_empty() {
            log::debug!("event=validation_failed field={name}");
            return Err(MISSING_FIELDS.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present_passes() {
        assert!(validate_required([("name", "Jo"), ("email", "jo@example.com")]).is_ok());
    }

    #[test]
    fn test_empty_field_fails() {
        assert_eq!(
            validate_required([("name", "Jo"), ("email", "")]),
            Err(MISSING_FIELDS.to_string())
        );
    }

    #[test]
    fn test_whitespace_only_fails() {
        assert!(validate_required([("subject", "   \t")]).is_err());
    }

    #[test]
    fn test_no_fields_passes() {
        assert!(validate_required(std::iter::empty()).is_ok());
    }
}
