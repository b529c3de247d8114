use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::validation::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(custom = "validate_email")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResetTokenResponse {
    pub email: String,
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by the auth endpoints on a non-2xx status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetFormData {
    pub password: String,
    pub confirm_password: String,
}
