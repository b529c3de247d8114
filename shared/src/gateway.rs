use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::password_reset::ErrorResponse;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Builds the error for a non-2xx response, reading `{"detail": "..."}` when present.
    ///
    /// A body that is not JSON at all (a proxy error page, say) is a `Decode` failure,
    /// not a rejection authored by the backend.
    pub fn rejected(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(error) => GatewayError::Rejected {
                status,
                detail: error.detail.filter(|d| !d.trim().is_empty()),
            },
            Err(e) => GatewayError::Decode(format!("status {}: {}", status, e)),
        }
    }

    /// Server-authored message, if the backend sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            GatewayError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The message to surface: server detail for rejections, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl GatewayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a raw response into a result: 2xx passes through, anything else is `Rejected`.
    pub fn into_result(self) -> GatewayResult<GatewayResponse> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(GatewayError::rejected(self.status, &self.body))
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> GatewayResult<T> {
        serde_json::from_str(&self.body).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Outbound HTTP capability used by every auth call.
///
/// Implementations return `Ok` for any response that arrived, whatever its status;
/// `Err(Transport)` only when the request never completed. Status handling happens
/// in [`GatewayResponse::into_result`], so flows never look at transport details.
#[allow(async_fn_in_trait)]
pub trait HttpGateway {
    async fn get(&self, path: &str) -> GatewayResult<GatewayResponse>;
    async fn post(&self, path: &str, body: &serde_json::Value) -> GatewayResult<GatewayResponse>;
}
