pub const VERIFY_RESET_TOKEN_ENDPOINT: &str = "/auth/verify-reset-token";
pub const RESET_PASSWORD_ENDPOINT: &str = "/auth/reset-password";
pub const FORGOT_PASSWORD_ENDPOINT: &str = "/auth/forgot-password";
pub const LOGIN_ENDPOINT: &str = "/auth/login";

pub const MISSING_TOKEN_ERROR: &str = "Invalid reset link. Please request a new password reset.";
pub const INVALID_TOKEN_ERROR: &str = "Invalid or expired reset link.";
pub const VERIFY_FAILED_ERROR: &str = "Failed to verify reset link. Please try again.";
pub const PASSWORD_TOO_SHORT_ERROR: &str = "Password must be at least 6 characters long.";
pub const PASSWORD_MISMATCH_ERROR: &str = "Passwords do not match.";
pub const RESET_FAILED_ERROR: &str = "Failed to reset password. Please try again.";
pub const SEND_EMAIL_ERROR: &str = "Failed to send email. Please try again.";
pub const LOGIN_FAILED_ERROR: &str = "Failed to sign in. Please try again.";
pub const RESET_LINK_NOTICE: &str =
    "You will receive an email with a secure link to reset your password. The link will expire in 1 hour.";
pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";

pub const MIN_PASSWORD_LENGTH: usize = 6;

// Delay before the send control is re-enabled after a successful send.
pub const RESEND_SETTLE_MS: u32 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_wording() {
        assert!(RESET_LINK_NOTICE.ends_with("The link will expire in 1 hour."));
        assert_eq!(LOGIN_FAILED_ERROR, "Failed to sign in. Please try again.");
    }
}
