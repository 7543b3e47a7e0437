//! # API Client
//!
//! The gateway's HTTP client and its single interception point.
//!
//! Every operation goes through [`ApiClient::dispatch`]:
//!
//! ```text
//!  operation ──> dispatch ──> request hook ──> reqwest ──> response hook ──> operation
//!                               │                              │
//!                               │ read token from store        │ 2xx: pass through
//!                               │ attach Bearer header         │ 401: clear store,
//!                               │ (store failure: abort)       │      emit Invalidated,
//!                               │                              │      return Unauthorized
//!                               │                              │ other: classified error
//! ```

use async_channel::Receiver;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::*;
use std::sync::Arc;
use std::time::Instant;

use crate::config::GatewayConfig;
use crate::core::error::{GatewayError, Result};
use crate::core::service::DashboardApi;
use crate::session::{Session, SessionEvent, SessionEvents, SessionStore};

/// Longest backend error text carried into a [`GatewayError`].
const MAX_ERROR_TEXT: usize = 512;

/// HTTP client for the ARBOSOCIAL backend API.
///
/// Construct once at startup and share it (`Arc<ApiClient>`) with every
/// consumer. `reqwest::Client` pools connections internally, so concurrent
/// calls on one instance are independent of each other.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    events: SessionEvents,
}

impl ApiClient {
    /// Create the client from configuration and a session store.
    pub fn new(config: &GatewayConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "API client created"
        );

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            store,
            events: SessionEvents::new(),
        })
    }

    /// Base URL every resource path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Subscribe to session events (invalidation, logout).
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// The persisted session pair, if signed in.
    pub fn current_session(&self) -> Result<Option<Session>> {
        self.store.load()
    }

    /// Persist a login result so subsequent requests carry its token.
    pub fn store_session(&self, auth: &AuthResponse) -> Result<()> {
        self.store.save(&Session::from(auth.clone()))?;
        tracing::info!(user_id = auth.user.id, "Session stored");
        Ok(())
    }

    /// Log in and persist the session in one step.
    pub async fn sign_in(&self, credentials: LoginCredentials) -> Result<AuthResponse> {
        let auth = self.login(credentials).await?;
        self.store_session(&auth)?;
        Ok(auth)
    }

    /// Send one request through the request and response hooks.
    ///
    /// `build` adds the operation-specific parts (query, body) to the request.
    pub(crate) async fn dispatch<F>(&self, method: Method, path: &str, build: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder + Send,
    {
        // Request hook: a store failure aborts before anything is sent
        let token = self.store.token()?;

        let request_id = uuid::Uuid::new_v4().to_string();
        let mut request = self
            .client
            .request(method.clone(), self.url(path))
            .header("x-request-id", &request_id);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let request = build(request);

        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            let err = GatewayError::from(e);
            tracing::error!(
                method = %method,
                path,
                request_id = %request_id,
                duration_ms = start.elapsed().as_millis(),
                error = %err,
                "Request failed before response"
            );
            err
        })?;

        // Response hook
        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            tracing::debug!(
                method = %method,
                path,
                request_id = %request_id,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request succeeded"
            );
            return Ok(response);
        }

        let mut message = error_message(response).await;

        if status == StatusCode::UNAUTHORIZED {
            if let Err(e) = self.invalidate_session(path) {
                message = format!("{} (session could not be cleared: {})", message, e);
            }
        } else {
            tracing::warn!(
                method = %method,
                path,
                request_id = %request_id,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                error = %message,
                "Request rejected"
            );
        }

        Err(GatewayError::from_status(status, path, message))
    }

    /// Parse a successful response body as `T`.
    pub(crate) async fn decode<T: DeserializeOwned>(&self, path: &str, response: Response) -> Result<T> {
        let body = response.bytes().await.map_err(GatewayError::from)?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(path, error = %e, "Response parse error");
            GatewayError::Decode(format!("{}: {}", path, e))
        })
    }

    /// 401 teardown: clear both session slots, then signal the host once.
    ///
    /// The event is emitted even when clearing fails; the clear error is
    /// returned so the caller's `Unauthorized` carries it.
    fn invalidate_session(&self, path: &str) -> Result<()> {
        let cleared = self.store.clear();
        if let Err(e) = &cleared {
            tracing::error!(path, error = %e, "Failed to clear session after 401");
        }

        let delivered = self.events.emit(SessionEvent::Invalidated {
            status: StatusCode::UNAUTHORIZED.as_u16(),
            path: path.to_string(),
        });

        tracing::warn!(path, subscribers = delivered, "Session invalidated by 401 response");
        cleared
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("events", &self.events)
            .finish()
    }
}

/// Best human-readable message for a failed response.
///
/// Prefers the backend's `ErrorResponse`, then raw text, then the status
/// reason phrase.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    serde_json::from_str::<ErrorResponse>(&text)
        .ok()
        .and_then(ErrorResponse::into_message)
        .or_else(|| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.chars().take(MAX_ERROR_TEXT).collect())
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
}

// Implement DashboardApi trait for ApiClient
#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    async fn login(&self, credentials: LoginCredentials) -> Result<AuthResponse> {
        crate::services::api::auth::login(self, credentials).await
    }

    async fn logout(&self) -> Result<()> {
        crate::services::api::auth::logout(self).await
    }

    async fn get_current_user(&self) -> Result<User> {
        crate::services::api::auth::get_current_user(self).await
    }

    async fn get_municipalities(&self, filters: &MunicipalityFilters) -> Result<Vec<Municipality>> {
        crate::services::api::data::get_municipalities(self, filters).await
    }

    async fn get_municipality(&self, id: i64) -> Result<Municipality> {
        crate::services::api::data::get_municipality(self, id).await
    }

    async fn get_cases(&self, filters: &CaseFilters) -> Result<Vec<ArbovirusCase>> {
        crate::services::api::data::get_cases(self, filters).await
    }

    async fn get_cases_summary(&self, filters: &CaseSummaryFilters) -> Result<OpaquePayload> {
        crate::services::api::data::get_cases_summary(self, filters).await
    }

    async fn get_social_indicators(&self, filters: &IndicatorFilters) -> Result<Vec<SocialIndicator>> {
        crate::services::api::data::get_social_indicators(self, filters).await
    }

    async fn get_correlation_analysis(&self, filters: &CorrelationFilters) -> Result<OpaquePayload> {
        crate::services::api::data::get_correlation_analysis(self, filters).await
    }

    async fn get_predictions(&self, filters: &PredictionFilters) -> Result<Vec<Prediction>> {
        crate::services::api::predictions::get_predictions(self, filters).await
    }

    async fn generate_predictions(&self, request: &GeneratePredictionsRequest) -> Result<OpaquePayload> {
        crate::services::api::predictions::generate_predictions(self, request).await
    }

    async fn get_model_performance(&self, filters: &PerformanceFilters) -> Result<OpaquePayload> {
        crate::services::api::predictions::get_model_performance(self, filters).await
    }

    async fn get_alerts(&self, filters: &AlertFilters) -> Result<Vec<Alert>> {
        crate::services::api::alerts::get_alerts(self, filters).await
    }

    async fn create_alert(&self, alert: &NewAlert) -> Result<Alert> {
        crate::services::api::alerts::create_alert(self, alert).await
    }

    async fn update_alert(&self, id: i64, update: &AlertUpdate) -> Result<Alert> {
        crate::services::api::alerts::update_alert(self, id, update).await
    }

    async fn resolve_alert(&self, id: i64) -> Result<Alert> {
        crate::services::api::alerts::resolve_alert(self, id).await
    }

    async fn generate_report(&self, request: &ReportRequest) -> Result<crate::services::api::reports::ReportFile> {
        crate::services::api::reports::generate_report(self, request).await
    }

    async fn get_geo_data(&self, query: &GeoQuery) -> Result<OpaquePayload> {
        crate::services::api::data::get_geo_data(self, query).await
    }

    async fn health_check(&self) -> Result<OpaquePayload> {
        crate::services::api::health::health_check(self).await
    }
}
