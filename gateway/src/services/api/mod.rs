//! # Backend API Client Module
//!
//! HTTP client for the ARBOSOCIAL backend API. Handles authentication,
//! surveillance data, predictions, alerts, reports and health checks.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, request/response interception
//! ├── auth.rs         - /auth/* (login, logout, me)
//! ├── data.rs         - /data/* (municipalities, cases, indicators, correlations, geo)
//! ├── predictions.rs  - /predictions/* (list, generate, performance)
//! ├── alerts.rs       - /alerts/* (list, create, update, resolve)
//! ├── reports.rs      - /reports/generate (binary download)
//! └── health.rs       - /health
//! ```

pub mod alerts;
pub mod auth;
pub mod client;
pub mod data;
pub mod health;
pub mod predictions;
pub mod reports;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use reports::ReportFile;
