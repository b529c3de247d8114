use log::{debug, warn};
use serde::Serialize;

use crate::constants::*;
use crate::gateway::{GatewayError, GatewayResult, HttpGateway};
use crate::password_reset::*;

/// Typed calls to the backend auth endpoints.
pub struct AuthService<G> {
    gateway: G,
}

fn to_body<B: Serialize>(body: &B) -> GatewayResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

impl<G: HttpGateway> AuthService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn verify_reset_token(&self, token: &str) -> GatewayResult<VerifyResetTokenResponse> {
        let path = format!("{}/{}", VERIFY_RESET_TOKEN_ENDPOINT, urlencoding::encode(token));
        let response = self.gateway.get(&path).await?.into_result().map_err(|e| {
            warn!("Reset token verification rejected: {}", e);
            e
        })?;
        response.json()
    }

    /// Success bodies are ignored; any 2xx counts.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> GatewayResult<()> {
        let body = to_body(request)?;
        self.gateway.post(RESET_PASSWORD_ENDPOINT, &body).await?.into_result()?;
        debug!("Password reset accepted");
        Ok(())
    }

    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> GatewayResult<()> {
        let body = to_body(request)?;
        match self.gateway.post(FORGOT_PASSWORD_ENDPOINT, &body).await.and_then(|r| r.into_result()) {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("Forgot password request failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> GatewayResult<LoginResponse> {
        let body = to_body(request)?;
        self.gateway.post(LOGIN_ENDPOINT, &body).await?.into_result()?.json()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::gateway::testing::{Call, RecordingGateway};

    #[test]
    fn test_verify_builds_encoded_path() {
        let service = AuthService::new(RecordingGateway::default().respond(200, r#"{"email": "a@b.com"}"#));
        let result = block_on(service.verify_reset_token("a/b c")).unwrap();
        assert_eq!(result.email, "a@b.com");
        assert_eq!(
            *service.gateway().calls.borrow(),
            vec![Call::Get("/auth/verify-reset-token/a%2Fb%20c".to_string())]
        );
    }

    #[test]
    fn test_verify_bad_body_is_decode_error() {
        let service = AuthService::new(RecordingGateway::default().respond(200, "{}"));
        let err = block_on(service.verify_reset_token("t")).unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn test_reset_accepts_empty_success_body() {
        let service = AuthService::new(RecordingGateway::default().respond(204, ""));
        let request = ResetPasswordRequest {
            token: "tok".to_string(),
            new_password: "secret1".to_string(),
        };
        assert!(block_on(service.reset_password(&request)).is_ok());
        assert_eq!(
            *service.gateway().calls.borrow(),
            vec![Call::Post(
                "/auth/reset-password".to_string(),
                serde_json::json!({"token": "tok", "new_password": "secret1"})
            )]
        );
    }

    #[test]
    fn test_forgot_password_propagates_rejection() {
        let service = AuthService::new(RecordingGateway::default().respond(500, r#"{"detail": "boom"}"#));
        let request = ForgotPasswordRequest { email: "a@b.com".to_string() };
        let err = block_on(service.forgot_password(&request)).unwrap_err();
        assert_eq!(err.detail(), Some("boom"));
    }

    #[test]
    fn test_login_parses_token() {
        let body = r#"{"access_token": "jwt", "token_type": "bearer", "user": {"username": "x"}}"#;
        let service = AuthService::new(RecordingGateway::default().respond(200, body));
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
        };
        let response = block_on(service.login(&request)).unwrap();
        assert_eq!(response.access_token, "jwt");
        assert_eq!(response.user["username"], "x");
    }
}
