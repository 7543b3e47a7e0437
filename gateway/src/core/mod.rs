//! # Core Abstractions
//!
//! Error types and service traits shared by the whole gateway crate.
//!
//! - **[`error`]**: `GatewayError`, `Result<T>`
//! - **[`service`]**: `DashboardApi`, the dependency-injection seam
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gateway::config::GatewayConfig;
//! use gateway::core::service::DashboardApi;
//! use gateway::services::api::ApiClient;
//! use gateway::session::MemorySessionStore;
//!
//! # fn build() -> gateway::Result<()> {
//! // In production: the real client
//! let store = Arc::new(MemorySessionStore::new());
//! let api: Arc<dyn DashboardApi> = Arc::new(ApiClient::new(&GatewayConfig::from_env(), store)?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{GatewayError, Result};
pub use service::DashboardApi;
