//! # Alert Endpoints
//!
//! List, create, update and resolve alerts.

use reqwest::Method;
use shared::*;

use super::client::ApiClient;
use crate::core::error::{GatewayError, Result};

#[tracing::instrument(skip(client))]
pub async fn get_alerts(client: &ApiClient, filters: &AlertFilters) -> Result<Vec<Alert>> {
    let path = "/alerts";
    let response = client
        .dispatch(Method::GET, path, |req| req.query(filters))
        .await?;
    let alerts: Vec<Alert> = client.decode(path, response).await?;

    tracing::debug!(count = alerts.len(), "Alerts fetched");
    Ok(alerts)
}

#[tracing::instrument(skip(client, alert), fields(
    municipality_id = alert.municipality_id,
    disease = %alert.disease,
    level = %alert.alert_level
))]
pub async fn create_alert(client: &ApiClient, alert: &NewAlert) -> Result<Alert> {
    let path = "/alerts";
    let response = client
        .dispatch(Method::POST, path, |req| req.json(alert))
        .await?;
    let created: Alert = client.decode(path, response).await?;

    tracing::info!(alert_id = created.id, "Alert created");
    Ok(created)
}

/// Partially update an alert.
///
/// Stricter than the backend: an update with no fields set would be sent as
/// `{}` and change nothing, so it is rejected locally with
/// `GatewayError::Validation` and never reaches the wire.
#[tracing::instrument(skip(client, update))]
pub async fn update_alert(client: &ApiClient, id: i64, update: &AlertUpdate) -> Result<Alert> {
    if update.is_empty() {
        return Err(GatewayError::Validation(
            "Alert update must change at least one field".to_string(),
        ));
    }

    let path = format!("/alerts/{}", id);
    let response = client
        .dispatch(Method::PUT, &path, |req| req.json(update))
        .await?;
    client.decode(&path, response).await
}

/// Resolve an alert.
///
/// Resolving an already-resolved alert is the backend's decision; whatever it
/// answers is returned (or surfaced as an error) unchanged.
#[tracing::instrument(skip(client))]
pub async fn resolve_alert(client: &ApiClient, id: i64) -> Result<Alert> {
    let path = format!("/alerts/{}/resolve", id);
    let response = client.dispatch(Method::PATCH, &path, |req| req).await?;
    let alert: Alert = client.decode(&path, response).await?;

    tracing::info!(alert_id = alert.id, resolved = alert.is_resolved(), "Alert resolve answered");
    Ok(alert)
}
