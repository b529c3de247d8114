use log::{debug, warn};

use crate::constants::*;
use crate::gateway::{GatewayError, GatewayResult};
use crate::password_reset::{ResetFormData, ResetPasswordRequest, VerifyResetTokenResponse};
use crate::validation::{validate_reset_form, FormError};

/// The view the reset-password screen is showing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetStatus {
    Verifying,
    TokenInvalid { message: String },
    TokenValid { email: String, error: Option<String> },
    Submitting { email: String },
    SubmitError { email: String, message: String },
    Success,
}

/// Drives the reset-password screen: token check, form validation, submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetFlow {
    token: Option<String>,
    status: ResetStatus,
}

impl PasswordResetFlow {
    pub fn new(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        let status = match token {
            Some(_) => ResetStatus::Verifying,
            None => {
                debug!("Reset page opened without a token");
                ResetStatus::TokenInvalid {
                    message: MISSING_TOKEN_ERROR.to_string(),
                }
            }
        };
        Self { token, status }
    }

    pub fn status(&self) -> &ResetStatus {
        &self.status
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The token still waiting for verification, if any.
    pub fn pending_verification(&self) -> Option<&str> {
        match self.status {
            ResetStatus::Verifying => self.token(),
            _ => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match &self.status {
            ResetStatus::TokenValid { email, .. }
            | ResetStatus::Submitting { email }
            | ResetStatus::SubmitError { email, .. } => Some(email),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ResetStatus::TokenInvalid { message } | ResetStatus::SubmitError { message, .. } => Some(message),
            ResetStatus::TokenValid { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.status, ResetStatus::Verifying | ResetStatus::Submitting { .. })
    }

    pub fn apply_verification(&mut self, outcome: GatewayResult<VerifyResetTokenResponse>) {
        if self.status != ResetStatus::Verifying {
            warn!("Ignoring verification result outside of the verifying state");
            return;
        }
        self.status = match outcome {
            Ok(response) => {
                debug!("Reset token verified");
                ResetStatus::TokenValid {
                    email: response.email,
                    error: None,
                }
            }
            Err(e @ GatewayError::Rejected { .. }) => ResetStatus::TokenInvalid {
                message: e.user_message(INVALID_TOKEN_ERROR),
            },
            Err(e) => {
                warn!("Reset token verification failed: {}", e);
                ResetStatus::TokenInvalid {
                    message: VERIFY_FAILED_ERROR.to_string(),
                }
            }
        };
    }

    /// Validates the form and, if it passes, moves to `Submitting` and returns the request to send.
    pub fn begin_submit(&mut self, form: &ResetFormData) -> Result<ResetPasswordRequest, FormError> {
        let email = match &self.status {
            ResetStatus::TokenValid { email, .. } | ResetStatus::SubmitError { email, .. } => email.clone(),
            _ => return Err(FormError::NotAccepting),
        };
        let token = self.token.clone().ok_or(FormError::NotAccepting)?;

        if let Err(e) = validate_reset_form(form) {
            self.status = ResetStatus::TokenValid {
                email,
                error: Some(e.to_string()),
            };
            return Err(e);
        }

        self.status = ResetStatus::Submitting { email };
        Ok(ResetPasswordRequest {
            token,
            new_password: form.password.clone(),
        })
    }

    pub fn apply_submission(&mut self, outcome: GatewayResult<()>) {
        let email = match &self.status {
            ResetStatus::Submitting { email } => email.clone(),
            _ => {
                warn!("Ignoring submission result outside of the submitting state");
                return;
            }
        };
        self.status = match outcome {
            Ok(()) => {
                debug!("Password reset completed");
                ResetStatus::Success
            }
            Err(e) => {
                warn!("Password reset failed: {}", e);
                ResetStatus::SubmitError {
                    email,
                    message: e.user_message(RESET_FAILED_ERROR),
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::auth_service::AuthService;
    use crate::gateway::testing::RecordingGateway;

    fn form(password: &str, confirm: &str) -> ResetFormData {
        ResetFormData {
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn verified(email: &str) -> PasswordResetFlow {
        let mut flow = PasswordResetFlow::new(Some("tok".to_string()));
        flow.apply_verification(Ok(VerifyResetTokenResponse {
            email: email.to_string(),
            valid: Some(true),
            expires_at: None,
        }));
        flow
    }

    /// Runs the mount step the way the page does: verify only while a token is pending.
    fn mount(flow: &mut PasswordResetFlow, service: &AuthService<RecordingGateway>) {
        if let Some(token) = flow.pending_verification().map(str::to_string) {
            let outcome = block_on(service.verify_reset_token(&token));
            flow.apply_verification(outcome);
        }
    }

    #[test]
    fn test_missing_token_is_invalid_without_call() {
        for token in [None, Some(String::new())] {
            let service = AuthService::new(RecordingGateway::default());
            let mut flow = PasswordResetFlow::new(token);
            mount(&mut flow, &service);
            assert_eq!(
                flow.status(),
                &ResetStatus::TokenInvalid { message: MISSING_TOKEN_ERROR.to_string() }
            );
            assert_eq!(service.gateway().call_count(), 0);
        }
    }

    #[test]
    fn test_verified_token_exposes_email() {
        let service = AuthService::new(RecordingGateway::default().respond(200, r#"{"email": "a@b.com"}"#));
        let mut flow = PasswordResetFlow::new(Some("tok".to_string()));
        mount(&mut flow, &service);
        assert_eq!(flow.email(), Some("a@b.com"));
        assert_eq!(flow.error(), None);
        assert_eq!(flow.pending_verification(), None);
        assert_eq!(service.gateway().call_count(), 1);
    }

    #[test]
    fn test_rejected_token_shows_server_detail() {
        let service = AuthService::new(RecordingGateway::default().respond(410, r#"{"detail": "Link expired"}"#));
        let mut flow = PasswordResetFlow::new(Some("tok".to_string()));
        mount(&mut flow, &service);
        assert_eq!(flow.status(), &ResetStatus::TokenInvalid { message: "Link expired".to_string() });
    }

    #[test]
    fn test_rejected_token_without_detail_uses_fallback() {
        let service = AuthService::new(RecordingGateway::default().respond(400, "{}"));
        let mut flow = PasswordResetFlow::new(Some("tok".to_string()));
        mount(&mut flow, &service);
        assert_eq!(flow.error(), Some(INVALID_TOKEN_ERROR));
    }

    #[test]
    fn test_network_failure_during_verification() {
        let service = AuthService::new(RecordingGateway::default().fail("offline"));
        let mut flow = PasswordResetFlow::new(Some("tok".to_string()));
        mount(&mut flow, &service);
        assert_eq!(flow.error(), Some(VERIFY_FAILED_ERROR));
    }

    #[test]
    fn test_proxy_error_page_during_verification() {
        let service = AuthService::new(RecordingGateway::default().respond(502, "<html>Bad Gateway</html>"));
        let mut flow = PasswordResetFlow::new(Some("tok".to_string()));
        mount(&mut flow, &service);
        assert_eq!(
            flow.status(),
            &ResetStatus::TokenInvalid { message: VERIFY_FAILED_ERROR.to_string() }
        );
    }

    #[test]
    fn test_short_password_never_submits() {
        let mut flow = verified("a@b.com");
        for password in ["", "12345", "abcde"] {
            assert_eq!(flow.begin_submit(&form(password, password)), Err(FormError::TooShort));
            assert_eq!(
                flow.status(),
                &ResetStatus::TokenValid {
                    email: "a@b.com".to_string(),
                    error: Some(PASSWORD_TOO_SHORT_ERROR.to_string()),
                }
            );
        }
    }

    #[test]
    fn test_mismatch_never_submits() {
        let mut flow = verified("a@b.com");
        assert_eq!(flow.begin_submit(&form("abcdef", "abcdefg")), Err(FormError::Mismatch));
        assert_eq!(flow.error(), Some(PASSWORD_MISMATCH_ERROR));
        assert!(!flow.is_busy());
    }

    #[test]
    fn test_successful_submission_is_terminal() {
        let service = AuthService::new(RecordingGateway::default().respond(200, r#"{"message": "ok"}"#));
        let mut flow = verified("a@b.com");

        let request = flow.begin_submit(&form("secret1", "secret1")).unwrap();
        assert_eq!(request.token, "tok");
        assert_eq!(request.new_password, "secret1");
        assert!(flow.is_busy());

        flow.apply_submission(block_on(service.reset_password(&request)));
        assert_eq!(flow.status(), &ResetStatus::Success);
        assert_eq!(flow.begin_submit(&form("secret1", "secret1")), Err(FormError::NotAccepting));
        assert_eq!(service.gateway().call_count(), 1);
    }

    #[test]
    fn test_failed_submission_can_retry() {
        let service = AuthService::new(
            RecordingGateway::default()
                .respond(400, r#"{"detail": "Invalid or expired reset token"}"#)
                .fail("offline")
                .respond(200, ""),
        );
        let mut flow = verified("a@b.com");

        let request = flow.begin_submit(&form("secret1", "secret1")).unwrap();
        flow.apply_submission(block_on(service.reset_password(&request)));
        assert_eq!(flow.error(), Some("Invalid or expired reset token"));
        assert_eq!(flow.email(), Some("a@b.com"));

        let request = flow.begin_submit(&form("secret1", "secret1")).unwrap();
        flow.apply_submission(block_on(service.reset_password(&request)));
        assert_eq!(flow.error(), Some(RESET_FAILED_ERROR));

        // A local error from the retry state goes back to the plain form.
        assert_eq!(flow.begin_submit(&form("short", "short")), Err(FormError::TooShort));
        assert!(matches!(flow.status(), ResetStatus::TokenValid { error: Some(_), .. }));

        let request = flow.begin_submit(&form("secret1", "secret1")).unwrap();
        flow.apply_submission(block_on(service.reset_password(&request)));
        assert_eq!(flow.status(), &ResetStatus::Success);
        assert_eq!(service.gateway().call_count(), 3);
    }

    #[test]
    fn test_cannot_submit_while_verifying_or_invalid() {
        let mut flow = PasswordResetFlow::new(Some("tok".to_string()));
        assert_eq!(flow.begin_submit(&form("secret1", "secret1")), Err(FormError::NotAccepting));

        let mut flow = PasswordResetFlow::new(None);
        assert_eq!(flow.begin_submit(&form("secret1", "secret1")), Err(FormError::NotAccepting));
    }

    #[test]
    fn test_stale_results_are_ignored() {
        let mut flow = verified("a@b.com");
        flow.apply_verification(Err(GatewayError::Transport("late".to_string())));
        assert_eq!(flow.email(), Some("a@b.com"));

        flow.apply_submission(Ok(()));
        assert!(matches!(flow.status(), ResetStatus::TokenValid { .. }));
    }
}
