//! # Interception Tests
//!
//! Request hook (token attachment, store failures) and response hook
//! (401 teardown, error classification) as seen from the wire.

use super::*;
use crate::core::error::GatewayError;
use crate::core::service::DashboardApi;
use crate::session::{FileSessionStore, SessionEvent};
use std::time::Duration;

/// Store whose reads always fail, e.g. an unreadable session file.
struct BrokenStore;

impl SessionStore for BrokenStore {
    fn load(&self) -> crate::Result<Option<crate::session::Session>> {
        Err(GatewayError::Session("storage unavailable".to_string()))
    }

    fn save(&self, _session: &crate::session::Session) -> crate::Result<()> {
        Err(GatewayError::Session("storage unavailable".to_string()))
    }

    fn clear(&self) -> crate::Result<()> {
        Err(GatewayError::Session("storage unavailable".to_string()))
    }
}

/// Store that holds a session but cannot remove it.
struct ReadOnlyStore;

impl SessionStore for ReadOnlyStore {
    fn load(&self) -> crate::Result<Option<crate::session::Session>> {
        Ok(Some(test_session(EXPIRED_TOKEN)))
    }

    fn save(&self, _session: &crate::session::Session) -> crate::Result<()> {
        Ok(())
    }

    fn clear(&self) -> crate::Result<()> {
        Err(GatewayError::Session("disk is read-only".to_string()))
    }
}

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    // Arrange
    let backend = FakeBackend::start().await;
    let (api, _store) = backend.anonymous_client();

    // Act
    api.health_check().await.expect("Health check should succeed");
    api.get_municipalities(&MunicipalityFilters::default())
        .await
        .expect("Municipalities should load");
    api.get_alerts(&AlertFilters::default())
        .await
        .expect("Alerts should load");

    // Assert
    let requests = backend.recorder.all();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.authorization.is_none()));
}

#[tokio::test]
async fn test_token_is_attached_to_every_request() {
    // Arrange
    let backend = FakeBackend::start().await;
    let (api, _store) = backend.client_with_token(VALID_TOKEN);

    // Act
    api.get_current_user().await.expect("Current user should load");
    api.get_cases(&CaseFilters::default()).await.expect("Cases should load");
    api.get_predictions(&PredictionFilters::default())
        .await
        .expect("Predictions should load");
    api.get_geo_data(&GeoQuery::new(GeoType::Municipalities))
        .await
        .expect("Geo data should load");

    // Assert
    let expected = format!("Bearer {}", VALID_TOKEN);
    let requests = backend.recorder.all();
    assert_eq!(requests.len(), 4);
    for request in requests {
        assert_eq!(request.authorization.as_deref(), Some(expected.as_str()), "{}", request.path);
    }
}

#[tokio::test]
async fn test_token_saved_mid_session_is_used_by_next_request() {
    // Arrange
    let backend = FakeBackend::start().await;
    let (api, store) = backend.anonymous_client();
    api.health_check().await.expect("Health check should succeed");

    // Act
    store.save(&test_session(VALID_TOKEN)).expect("Save should succeed");
    api.health_check().await.expect("Health check should succeed");

    // Assert
    let requests = backend.recorder.all();
    assert!(requests[0].authorization.is_none());
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok-42"));
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_signals_once() {
    // Arrange
    let backend = FakeBackend::start().await;
    let (api, store) = backend.client_with_token(EXPIRED_TOKEN);
    let events = api.subscribe();

    // Act
    let result = api.get_alerts(&AlertFilters::default()).await;

    // Assert
    match result {
        Err(GatewayError::Unauthorized { message }) => assert_eq!(message, "Token expired"),
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
    assert!(store.load().expect("Load should succeed").is_none());
    assert_eq!(
        events.try_recv().expect("One event should be queued"),
        SessionEvent::Invalidated {
            status: 401,
            path: "/alerts".to_string(),
        }
    );
    assert!(events.try_recv().is_err(), "Exactly one event per 401");
}

#[tokio::test]
async fn test_each_unauthorized_response_signals_independently() {
    // Arrange
    let backend = FakeBackend::start().await;
    let (api, store) = backend.client_with_token(EXPIRED_TOKEN);
    let events = api.subscribe();

    // Act
    let first = api.get_alerts(&AlertFilters::default()).await;
    // Store is empty now, /auth/me rejects the missing token
    let second = api.get_current_user().await;

    // Assert
    assert!(first.is_err_and(|e| e.is_unauthorized()));
    assert!(second.is_err_and(|e| e.is_unauthorized()));
    assert!(store.load().expect("Load should succeed").is_none());
    assert!(matches!(events.try_recv(), Ok(SessionEvent::Invalidated { .. })));
    assert!(matches!(events.try_recv(), Ok(SessionEvent::Invalidated { .. })));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_unauthorized_clears_file_store() {
    // Arrange
    let dir = tempfile::tempdir().expect("Temp dir should be created");
    let file_store = Arc::new(FileSessionStore::new(dir.path().join("session.json")));
    file_store
        .save(&test_session(EXPIRED_TOKEN))
        .expect("Save should succeed");
    let backend = FakeBackend::start().await;
    let api = backend.client(file_store.clone());

    // Act
    let result = api.get_cases(&CaseFilters::default()).await;

    // Assert
    assert!(result.is_err_and(|e| e.is_unauthorized()));
    assert!(!file_store.path().exists());
    assert!(file_store.load().expect("Load should succeed").is_none());
}

#[tokio::test]
async fn test_unauthorized_reports_failed_session_clear() {
    // Arrange
    let backend = FakeBackend::start().await;
    let api = backend.client(Arc::new(ReadOnlyStore));
    let events = api.subscribe();

    // Act
    let result = api.get_alerts(&AlertFilters::default()).await;

    // Assert
    match result {
        Err(GatewayError::Unauthorized { message }) => {
            assert!(message.starts_with("Token expired"), "{}", message);
            assert!(message.contains("session could not be cleared"), "{}", message);
            assert!(message.contains("disk is read-only"), "{}", message);
        }
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
    assert!(matches!(events.try_recv(), Ok(SessionEvent::Invalidated { .. })));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_non_401_errors_leave_session_intact() {
    // Arrange
    let backend = FakeBackend::start().await;
    let (api, store) = backend.client_with_token(VALID_TOKEN);
    let events = api.subscribe();

    // Act
    let result = api.get_municipality(999_999).await;

    // Assert
    assert!(result.is_err_and(|e| e.is_not_found()));
    assert!(store.load().expect("Load should succeed").is_some());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_store_read_failure_aborts_before_sending() {
    // Arrange
    let backend = FakeBackend::start().await;
    let api = backend.client(Arc::new(BrokenStore));

    // Act
    let result = api.health_check().await;

    // Assert
    assert!(matches!(result, Err(GatewayError::Session(_))));
    assert_eq!(backend.recorder.count(), 0);
}

#[tokio::test]
async fn test_concurrent_requests_all_carry_token() {
    // Arrange
    let backend = FakeBackend::start().await;
    let (api, _store) = backend.client_with_token(VALID_TOKEN);
    let api = Arc::new(api);

    // Act
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let api = api.clone();
            tokio::spawn(async move { api.get_alerts(&AlertFilters::default()).await })
        })
        .collect();
    for handle in handles {
        handle
            .await
            .expect("Task should not panic")
            .expect("Alerts should load");
    }

    // Assert
    let requests = backend.recorder.all();
    assert_eq!(requests.len(), 8);
    assert!(requests
        .iter()
        .all(|r| r.authorization.as_deref() == Some("Bearer tok-42")));
}

#[tokio::test]
async fn test_server_error_is_classified() {
    // Arrange
    let routes = Router::new().route(
        "/api/health",
        get(|| async { error(StatusCode::SERVICE_UNAVAILABLE, "Database unreachable") }),
    );
    let backend = FakeBackend::start_with(routes).await;
    let (api, _store) = backend.anonymous_client();

    // Act
    let result = api.health_check().await;

    // Assert
    match result {
        Err(GatewayError::Server { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Database unreachable");
        }
        other => panic!("Expected Server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    // Arrange
    let routes = Router::new().route(
        "/api/health",
        get(|| async { (StatusCode::BAD_REQUEST, "missing parameter") }),
    );
    let backend = FakeBackend::start_with(routes).await;
    let (api, _store) = backend.anonymous_client();

    // Act
    let result = api.health_check().await;

    // Assert
    match result {
        Err(GatewayError::Client { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "missing parameter");
        }
        other => panic!("Expected Client error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    // Arrange
    let routes = Router::new().route(
        "/api/health",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    );
    let backend = FakeBackend::start_with(routes).await;
    let config = GatewayConfig::with_base_url(&backend.base_url).timeout(Duration::from_millis(200));
    let api = ApiClient::new(&config, Arc::new(MemorySessionStore::new()))
        .expect("Client should build");

    // Act
    let result = api.health_check().await;

    // Assert
    assert!(matches!(result, Err(GatewayError::Timeout)), "{:?}", result);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Arrange: grab a free port, then close it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Bind should succeed");
    let addr = listener.local_addr().expect("Listener should have an address");
    drop(listener);

    let config = GatewayConfig::with_base_url(&format!("http://{}/api", addr));
    let api = ApiClient::new(&config, Arc::new(MemorySessionStore::new()))
        .expect("Client should build");

    // Act
    let result = api.health_check().await;

    // Assert
    assert!(matches!(result, Err(GatewayError::Transport(_))), "{:?}", result);
}
