//! # Health Endpoint

use reqwest::Method;
use shared::OpaquePayload;

use super::client::ApiClient;
use crate::core::error::Result;

/// Backend liveness check.
pub async fn health_check(client: &ApiClient) -> Result<OpaquePayload> {
    let path = "/health";
    let response = client.dispatch(Method::GET, path, |req| req).await?;
    client.decode(path, response).await
}
