use thiserror::Error;
use validator::ValidationError;

use crate::constants::*;
use crate::password_reset::ResetFormData;

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

/// Local rejection of a reset form submission. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{}", PASSWORD_TOO_SHORT_ERROR)]
    TooShort,
    #[error("{}", PASSWORD_MISMATCH_ERROR)]
    Mismatch,
    #[error("This form is not accepting submissions")]
    NotAccepting,
}

pub fn validate_reset_form(form: &ResetFormData) -> Result<(), FormError> {
    // Length is counted in characters, not bytes.
    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FormError::TooShort);
    }
    if form.password != form.confirm_password {
        return Err(FormError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> ResetFormData {
        ResetFormData {
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_short_password_rejected_before_mismatch() {
        for password in ["", "a", "abcde"] {
            assert_eq!(validate_reset_form(&form(password, "other")), Err(FormError::TooShort));
        }
    }

    #[test]
    fn test_mismatch_rejected() {
        assert_eq!(validate_reset_form(&form("abcdef", "abcdeg")), Err(FormError::Mismatch));
        assert_eq!(
            FormError::Mismatch.to_string(),
            "Passwords do not match."
        );
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(validate_reset_form(&form("ééééé", "ééééé")), Err(FormError::TooShort));
        assert!(validate_reset_form(&form("éééééé", "éééééé")).is_ok());
    }

    #[test]
    fn test_email_needs_at_symbol() {
        assert!(validate_email("").is_err());
        assert!(validate_email("user.example.com").is_err());
        assert!(validate_email("user@example.com").is_ok());
    }
}
