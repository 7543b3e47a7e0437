//! # Prediction Endpoints
//!
//! Read access to model predictions and a trigger for new generation runs.
//! Generation may be long-running on the backend; the gateway does not poll.

use reqwest::Method;
use shared::*;

use super::client::ApiClient;
use crate::core::error::{GatewayError, Result};

#[tracing::instrument(skip(client))]
pub async fn get_predictions(
    client: &ApiClient,
    filters: &PredictionFilters,
) -> Result<Vec<Prediction>> {
    let path = "/predictions";
    let response = client
        .dispatch(Method::GET, path, |req| req.query(filters))
        .await?;
    client.decode(path, response).await
}

/// Ask the modeling service to generate predictions.
///
/// Rejected locally (nothing sent) when the municipality list is empty or
/// the horizon is zero.
#[tracing::instrument(skip(client, request), fields(
    municipalities = request.municipality_ids.len(),
    disease = %request.disease,
    weeks_ahead = request.weeks_ahead
))]
pub async fn generate_predictions(
    client: &ApiClient,
    request: &GeneratePredictionsRequest,
) -> Result<OpaquePayload> {
    request.validate().map_err(GatewayError::Validation)?;

    tracing::info!("Requesting prediction generation");
    let start = std::time::Instant::now();

    let path = "/predictions/generate";
    let response = client
        .dispatch(Method::POST, path, |req| req.json(request))
        .await?;
    let job: OpaquePayload = client.decode(path, response).await?;

    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        "Prediction generation accepted"
    );
    Ok(job)
}

pub async fn get_model_performance(
    client: &ApiClient,
    filters: &PerformanceFilters,
) -> Result<OpaquePayload> {
    let path = "/predictions/performance";
    let response = client
        .dispatch(Method::GET, path, |req| req.query(filters))
        .await?;
    client.decode(path, response).await
}
