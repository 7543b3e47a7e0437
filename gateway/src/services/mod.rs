//! # Services Module
//!
//! External service integrations for the dashboard.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Dashboard pages (host)                   │
//! │                                                          │
//! │   Arc<dyn DashboardApi>            SessionEvent receiver │
//! └───────────┬──────────────────────────────────▲───────────┘
//!             │                                  │ Invalidated / LoggedOut
//!             ▼                                  │
//! ┌──────────────────────────────────────────────┴───────────┐
//! │  ApiClient (services::api)                               │
//! │   request hook: Bearer token from SessionStore           │
//! │   response hook: 401 → clear store + emit Invalidated    │
//! └───────────┬──────────────────────────────────────────────┘
//!             │ HTTP/JSON (30s timeout)
//!             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  ARBOSOCIAL Backend API                                  │
//! │  /auth/*  /data/*  /predictions/*  /alerts/*             │
//! │  /reports/generate  /health                              │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<T, GatewayError>`. Nothing is retried;
//! each call is one round trip and its failure is surfaced unchanged (after
//! the 401 teardown, when it applies).
//!
//! ## Thread Safety
//!
//! `ApiClient` is `Send + Sync`. Wrap it in `Arc` and share it across tasks;
//! calls are independent and may run concurrently.

pub mod api;
