//! # Service Traits
//!
//! Traits for dependency injection, so pages can depend on
//! `Arc<dyn DashboardApi>` and be tested against a mock.

use async_trait::async_trait;
use shared::*;

use crate::core::error::Result;
use crate::services::api::ReportFile;

/// Every backend operation the dashboard uses.
///
/// Implemented by [`ApiClient`](crate::services::api::ApiClient).
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Login with email and password. The session is not persisted.
    async fn login(&self, credentials: LoginCredentials) -> Result<AuthResponse>;

    /// Invalidate the session server-side and clear it locally.
    async fn logout(&self) -> Result<()>;

    /// The user the persisted token belongs to
    async fn get_current_user(&self) -> Result<User>;

    async fn get_municipalities(&self, filters: &MunicipalityFilters) -> Result<Vec<Municipality>>;

    async fn get_municipality(&self, id: i64) -> Result<Municipality>;

    async fn get_cases(&self, filters: &CaseFilters) -> Result<Vec<ArbovirusCase>>;

    async fn get_cases_summary(&self, filters: &CaseSummaryFilters) -> Result<OpaquePayload>;

    async fn get_social_indicators(&self, filters: &IndicatorFilters) -> Result<Vec<SocialIndicator>>;

    async fn get_correlation_analysis(&self, filters: &CorrelationFilters) -> Result<OpaquePayload>;

    async fn get_predictions(&self, filters: &PredictionFilters) -> Result<Vec<Prediction>>;

    /// Trigger prediction generation. Does not wait for or poll the job.
    async fn generate_predictions(&self, request: &GeneratePredictionsRequest) -> Result<OpaquePayload>;

    async fn get_model_performance(&self, filters: &PerformanceFilters) -> Result<OpaquePayload>;

    async fn get_alerts(&self, filters: &AlertFilters) -> Result<Vec<Alert>>;

    async fn create_alert(&self, alert: &NewAlert) -> Result<Alert>;

    async fn update_alert(&self, id: i64, update: &AlertUpdate) -> Result<Alert>;

    async fn resolve_alert(&self, id: i64) -> Result<Alert>;

    /// Generate a report file. The body is returned as raw bytes.
    async fn generate_report(&self, request: &ReportRequest) -> Result<ReportFile>;

    async fn get_geo_data(&self, query: &GeoQuery) -> Result<OpaquePayload>;

    /// Backend liveness check
    async fn health_check(&self) -> Result<OpaquePayload>;
}
