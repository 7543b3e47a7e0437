//! # Surveillance Data Endpoints
//!
//! Municipalities, arbovirus cases, social indicators, correlations and
//! geometry, all served under `/data/*`.

use reqwest::Method;
use shared::*;

use super::client::ApiClient;
use crate::core::error::Result;

/// List municipalities, optionally filtered by state, region or name.
#[tracing::instrument(skip(client))]
pub async fn get_municipalities(
    client: &ApiClient,
    filters: &MunicipalityFilters,
) -> Result<Vec<Municipality>> {
    let path = "/data/municipalities";
    let response = client
        .dispatch(Method::GET, path, |req| req.query(filters))
        .await?;
    let municipalities: Vec<Municipality> = client.decode(path, response).await?;

    tracing::debug!(count = municipalities.len(), "Municipalities fetched");
    Ok(municipalities)
}

/// Get one municipality. A missing id surfaces as `GatewayError::NotFound`.
#[tracing::instrument(skip(client))]
pub async fn get_municipality(client: &ApiClient, id: i64) -> Result<Municipality> {
    let path = format!("/data/municipalities/{}", id);
    let response = client.dispatch(Method::GET, &path, |req| req).await?;
    client.decode(&path, response).await
}

/// Weekly case counts.
#[tracing::instrument(skip(client))]
pub async fn get_cases(client: &ApiClient, filters: &CaseFilters) -> Result<Vec<ArbovirusCase>> {
    let path = "/data/cases";
    let start = std::time::Instant::now();

    let response = client
        .dispatch(Method::GET, path, |req| req.query(filters))
        .await?;
    let cases: Vec<ArbovirusCase> = client.decode(path, response).await?;

    tracing::debug!(
        count = cases.len(),
        duration_ms = start.elapsed().as_millis(),
        "Cases fetched"
    );
    Ok(cases)
}

/// Aggregate case summary. Shape is owned by the backend.
pub async fn get_cases_summary(
    client: &ApiClient,
    filters: &CaseSummaryFilters,
) -> Result<OpaquePayload> {
    let path = "/data/cases/summary";
    let response = client
        .dispatch(Method::GET, path, |req| req.query(filters))
        .await?;
    client.decode(path, response).await
}

pub async fn get_social_indicators(
    client: &ApiClient,
    filters: &IndicatorFilters,
) -> Result<Vec<SocialIndicator>> {
    let path = "/data/social-indicators";
    let response = client
        .dispatch(Method::GET, path, |req| req.query(filters))
        .await?;
    client.decode(path, response).await
}

/// Correlation between case counts and social indicators.
///
/// Each requested indicator is sent as its own `indicators[]=` pair, the
/// array convention the backend parses.
#[tracing::instrument(skip(client))]
pub async fn get_correlation_analysis(
    client: &ApiClient,
    filters: &CorrelationFilters,
) -> Result<OpaquePayload> {
    let path = "/data/correlations";
    let indicators = filters.indicator_pairs();
    let response = client
        .dispatch(Method::GET, path, |req| req.query(filters).query(&indicators))
        .await?;
    client.decode(path, response).await
}

/// Geometry for map layers. Shape is owned by the backend.
#[tracing::instrument(skip(client))]
pub async fn get_geo_data(client: &ApiClient, query: &GeoQuery) -> Result<OpaquePayload> {
    let path = "/data/geo";
    let response = client
        .dispatch(Method::GET, path, |req| req.query(query))
        .await?;
    client.decode(path, response).await
}
