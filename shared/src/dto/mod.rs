//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the backend over the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login credentials, users, auth responses, error bodies
//! - [`surveillance`] - Municipalities, cases, social indicators, `Disease`
//! - [`predictions`] - Predictions and generation requests
//! - [`alerts`] - Alerts, `AlertLevel`, create/update bodies
//! - [`reports`] - Report generation and geo-data queries
//! - [`filters`] - Query filters for list endpoints
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "analyst@saude.gov.br",
//!   "password": "..."
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": 3,
//!     "email": "analyst@saude.gov.br",
//!     "name": "Analyst",
//!     "institution": "SES-PE",
//!     "role": "analyst",
//!     "is_active": true,
//!     "created_at": "2024-01-01T00:00:00"
//!   }
//! }
//! ```

pub mod alerts;
pub mod auth;
pub mod filters;
pub mod predictions;
pub mod reports;
pub mod surveillance;

pub use alerts::*;
pub use auth::*;
pub use filters::*;
pub use predictions::*;
pub use reports::*;
pub use surveillance::*;

/// Backend payload whose shape is owned by the backend and not yet typed.
///
/// Used for case summaries, correlation analyses, model performance, geo
/// data, prediction jobs and health checks.
pub type OpaquePayload = serde_json::Value;
