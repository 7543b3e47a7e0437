//! # Gateway Tests
//!
//! Test suite for the API client. Requests go over real HTTP to a fake
//! backend: an axum router served on an ephemeral local port that records
//! every request it receives.

mod interception;

use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::json;
use shared::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::ApiClient;
use crate::config::GatewayConfig;
use crate::session::{test_session, MemorySessionStore, SessionStore};

pub const VALID_TOKEN: &str = "tok-42";
pub const EXPIRED_TOKEN: &str = "expired";
pub const PASSWORD: &str = "correct-horse";
pub const KNOWN_MUNICIPALITY: i64 = 2611606;
pub const KNOWN_ALERT: i64 = 7;
pub const CSV_REPORT: &[u8] = b"municipality,disease,confirmed_cases\nRecife,dengue,40\n";

/// One request as seen by the fake backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Recorder {
    pub fn all(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.all().pop().expect("backend should have received a request")
    }

    pub fn count(&self) -> usize {
        self.requests.lock().len()
    }
}

/// Record every request, then reject expired tokens the way the real backend does.
async fn record(State(recorder): State<Recorder>, request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    recorder.requests.lock().push(RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query: request.uri().query().map(str::to_string),
        authorization: authorization.clone(),
    });

    if authorization.as_deref() == Some(&format!("Bearer {}", EXPIRED_TOKEN)) {
        return error(StatusCode::UNAUTHORIZED, "Token expired");
    }

    next.run(request).await
}

pub struct FakeBackend {
    pub base_url: String,
    pub recorder: Recorder,
}

impl FakeBackend {
    /// Serve the standard fake API.
    pub async fn start() -> Self {
        Self::start_with(backend_routes()).await
    }

    /// Serve a custom router (routes must include the `/api` prefix).
    pub async fn start_with(routes: Router) -> Self {
        let recorder = Recorder::default();
        let app = routes.layer(middleware::from_fn_with_state(recorder.clone(), record));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Fake backend should have an address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake backend crashed");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            recorder,
        }
    }

    pub fn client(&self, store: Arc<dyn SessionStore>) -> ApiClient {
        ApiClient::new(&GatewayConfig::with_base_url(&self.base_url), store)
            .expect("Test client should build")
    }

    /// Client with an empty in-memory session.
    pub fn anonymous_client(&self) -> (ApiClient, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        (self.client(store.clone()), store)
    }

    /// Client whose store already holds `token`.
    pub fn client_with_token(&self, token: &str) -> (ApiClient, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::with_session(test_session(token)));
        (self.client(store.clone()), store)
    }
}

// ==================== FIXTURES ====================

pub fn user() -> User {
    test_session(VALID_TOKEN).user
}

pub fn recife() -> Municipality {
    Municipality {
        id: KNOWN_MUNICIPALITY,
        ibge_code: "2611606".to_string(),
        name: "Recife".to_string(),
        state: "PE".to_string(),
        region: "Nordeste".to_string(),
        population: Some(1_488_920),
        area_km2: Some(218.8),
    }
}

pub fn active_alert() -> Alert {
    Alert {
        id: KNOWN_ALERT,
        municipality_id: KNOWN_MUNICIPALITY,
        disease: Disease::Dengue,
        alert_level: AlertLevel::High,
        alert_type: "outbreak_prediction".to_string(),
        message: Some("Predicted cases above epidemic threshold".to_string()),
        predicted_cases: Some(320.0),
        confidence_score: Some(0.87),
        is_active: true,
        created_at: "2024-03-01T10:00:00".to_string(),
        resolved_at: None,
    }
}

pub fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

// ==================== FAKE API ====================

#[derive(Clone, Default)]
struct BackendState {
    alert_resolved: Arc<AtomicBool>,
}

fn backend_routes() -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(|| async { Json(json!({ "message": "Logged out" })) }))
        .route("/api/auth/me", get(me))
        .route("/api/data/municipalities", get(|| async { Json(vec![recife()]) }))
        .route("/api/data/municipalities/{id}", get(municipality))
        .route("/api/data/cases", get(cases))
        .route(
            "/api/data/cases/summary",
            get(|| async { Json(json!({ "total_confirmed": 40, "by_disease": { "dengue": 40 } })) }),
        )
        .route("/api/data/social-indicators", get(indicators))
        .route(
            "/api/data/correlations",
            get(|| async { Json(json!({ "correlations": [{ "indicator": "gini_index", "r": 0.42 }] })) }),
        )
        .route(
            "/api/data/geo",
            get(|| async { Json(json!({ "type": "FeatureCollection", "features": [] })) }),
        )
        .route("/api/predictions", get(predictions))
        .route("/api/predictions/generate", post(generate_predictions))
        .route(
            "/api/predictions/performance",
            get(|| async { Json(json!({ "arima": { "mae": 4.2 } })) }),
        )
        .route("/api/alerts", get(|| async { Json(vec![active_alert()]) }).post(create_alert))
        .route("/api/alerts/{id}", put(update_alert))
        .route("/api/alerts/{id}/resolve", patch(resolve_alert))
        .route("/api/reports/generate", post(report))
        .route("/api/health", get(|| async { Json(json!({ "status": "healthy" })) }))
        .with_state(BackendState::default())
}

async fn login(Json(credentials): Json<LoginCredentials>) -> Response {
    if credentials.password != PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    Json(AuthResponse {
        access_token: VALID_TOKEN.to_string(),
        user: User {
            email: credentials.email,
            ..user()
        },
    })
    .into_response()
}

async fn me(headers: HeaderMap) -> Response {
    let expected = format!("Bearer {}", VALID_TOKEN);
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Json(user()).into_response(),
        _ => error(StatusCode::UNAUTHORIZED, "Missing or invalid token"),
    }
}

async fn municipality(Path(id): Path<i64>) -> Response {
    if id == KNOWN_MUNICIPALITY {
        Json(recife()).into_response()
    } else {
        error(StatusCode::NOT_FOUND, "Municipality not found")
    }
}

async fn cases() -> Json<serde_json::Value> {
    Json(json!([{
        "id": 1,
        "municipality_id": KNOWN_MUNICIPALITY,
        "disease": "dengue",
        "epidemiological_week": 12,
        "year": 2024,
        "confirmed_cases": 40,
        "probable_cases": 12,
        "deaths": 0,
        "incidence_rate": 2.69,
        "notification_date": "2024-03-22"
    }]))
}

async fn indicators() -> Json<serde_json::Value> {
    Json(json!([{
        "id": 3,
        "municipality_id": KNOWN_MUNICIPALITY,
        "year": 2010,
        "gini_index": 0.68,
        "poverty_rate": null
    }]))
}

async fn predictions() -> Json<serde_json::Value> {
    Json(json!([{
        "id": 11,
        "municipality_id": KNOWN_MUNICIPALITY,
        "disease": "zika",
        "model_name": "prophet",
        "prediction_date": "2024-03-25",
        "target_week": 16,
        "target_year": 2024,
        "predicted_cases": 18.5,
        "confidence_interval_lower": 10.0,
        "confidence_interval_upper": 27.0
    }]))
}

async fn generate_predictions(Json(request): Json<GeneratePredictionsRequest>) -> Response {
    (
        StatusCode::ACCEPTED,
        Json(json!({
            "job_id": "job-1",
            "status": "queued",
            "municipalities": request.municipality_ids.len(),
            "disease": request.disease,
        })),
    )
        .into_response()
}

async fn create_alert(Json(new): Json<NewAlert>) -> Response {
    let alert = Alert {
        id: 99,
        municipality_id: new.municipality_id,
        disease: new.disease,
        alert_level: new.alert_level,
        alert_type: new.alert_type.unwrap_or_else(|| "manual".to_string()),
        message: new.message,
        predicted_cases: new.predicted_cases,
        confidence_score: new.confidence_score,
        is_active: true,
        created_at: "2024-03-05T09:00:00".to_string(),
        resolved_at: None,
    };
    (StatusCode::CREATED, Json(alert)).into_response()
}

async fn update_alert(Path(id): Path<i64>, Json(update): Json<AlertUpdate>) -> Response {
    if id != KNOWN_ALERT {
        return error(StatusCode::NOT_FOUND, "Alert not found");
    }
    let mut alert = active_alert();
    if let Some(level) = update.alert_level {
        alert.alert_level = level;
    }
    if let Some(message) = update.message {
        alert.message = Some(message);
    }
    Json(alert).into_response()
}

async fn resolve_alert(State(state): State<BackendState>, Path(id): Path<i64>) -> Response {
    if id != KNOWN_ALERT {
        return error(StatusCode::NOT_FOUND, "Alert not found");
    }
    if state.alert_resolved.swap(true, Ordering::SeqCst) {
        return error(StatusCode::CONFLICT, "Alert already resolved");
    }
    Json(Alert {
        is_active: false,
        resolved_at: Some("2024-03-06T12:00:00".to_string()),
        ..active_alert()
    })
    .into_response()
}

async fn report(Json(request): Json<ReportRequest>) -> Response {
    match request.format {
        ReportFormat::Csv => ([(header::CONTENT_TYPE, "text/csv")], CSV_REPORT).into_response(),
        _ => error(StatusCode::UNPROCESSABLE_ENTITY, "Only csv is available in tests"),
    }
}
