use gloo_net::http::{Request, Response};
use shared::{AuthService, GatewayError, GatewayResponse, GatewayResult, HttpGateway};

use crate::config::api_url;

/// Browser gateway: `fetch` against the configured API origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchGateway;

async fn read(response: Response) -> GatewayResult<GatewayResponse> {
    let status = response.status();
    // An unreadable body on an error status still carries the status.
    let body = response.text().await.unwrap_or_default();
    Ok(GatewayResponse { status, body })
}

impl HttpGateway for FetchGateway {
    async fn get(&self, path: &str) -> GatewayResult<GatewayResponse> {
        let response = Request::get(&api_url(path))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        read(response).await
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> GatewayResult<GatewayResponse> {
        let response = Request::post(&api_url(path))
            .json(body)
            .map_err(|e| GatewayError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        read(response).await
    }
}

pub fn auth_service() -> AuthService<FetchGateway> {
    AuthService::new(FetchGateway)
}
