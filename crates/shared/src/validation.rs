//! Common validation utilities.

use validator::ValidationError;

/// Validates that a required text field is not empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Field must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Normalizes an optional free-text field: trims, and maps `None` to empty.
pub fn trimmed_or_empty(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Alice").is_ok());
        assert!(validate_not_blank("  王小明 ").is_ok());
    }

    #[test]
    fn test_validate_not_blank_rejects_whitespace() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_validate_not_blank_error_code() {
        let err = validate_not_blank(" ").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(
            err.message.as_deref(),
            Some("Field must not be blank")
        );
    }

    #[test]
    fn test_trimmed_or_empty() {
        assert_eq!(trimmed_or_empty(Some("  camp2024 ")), "camp2024");
        assert_eq!(trimmed_or_empty(Some("")), "");
        assert_eq!(trimmed_or_empty(None), "");
    }
}
