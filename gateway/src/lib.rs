//! # ARBOSOCIAL Dashboard Gateway - Library Root
//!
//! The data-access gateway of the ARBOSOCIAL arbovirus surveillance
//! dashboard. Every page talks to the backend through this crate and nothing
//! else.
//!
//! ## Responsibilities
//!
//! - **Token lifecycle**: reads the bearer token from a [`SessionStore`]
//!   and attaches it to every request
//! - **Interception**: one choke point for every request and response
//! - **Session termination**: on HTTP 401 clears the session and emits
//!   [`SessionEvent::Invalidated`] for the host to act on
//! - **Typed contracts**: one method per backend operation, returning
//!   `shared` DTOs
//!
//! ## Module Structure
//!
//! - **config**: environment-driven configuration (`ARBOSOCIAL_API_URL`, ...)
//! - **core**: `GatewayError`, `DashboardApi` trait
//! - **logging**: `tracing` subscriber setup
//! - **services::api**: `ApiClient` and the per-resource endpoints
//! - **session**: `SessionStore` trait, memory and file stores, events
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gateway::{ApiClient, DashboardApi, GatewayConfig, MemorySessionStore, SessionEvent};
//! use shared::{LoginCredentials, MunicipalityFilters};
//!
//! # async fn run() -> gateway::Result<()> {
//! let api = Arc::new(ApiClient::new(
//!     &GatewayConfig::from_env(),
//!     Arc::new(MemorySessionStore::new()),
//! )?);
//!
//! let events = api.subscribe();
//! tokio::spawn(async move {
//!     while let Ok(SessionEvent::Invalidated { .. }) = events.recv().await {
//!         // drop page state, show the login screen
//!     }
//! });
//!
//! api.sign_in(LoginCredentials {
//!     email: "analyst@saude.gov.br".into(),
//!     password: "secret".into(),
//! })
//! .await?;
//!
//! let recife = api
//!     .get_municipalities(&MunicipalityFilters {
//!         state: Some("PE".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p gateway
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod session;

pub use config::GatewayConfig;
pub use core::{DashboardApi, GatewayError, Result};
pub use services::api::{ApiClient, ReportFile};
pub use session::{
    FileSessionStore, MemorySessionStore, Session, SessionEvent, SessionEvents, SessionStore,
};
