//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard gateway and the
//! ARBOSOCIAL backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Users, credentials and login responses
//!   - **[`dto::surveillance`]**: Municipalities, arbovirus cases and social indicators
//!   - **[`dto::predictions`]**: Model predictions and generation requests
//!   - **[`dto::alerts`]**: Alerts and their create/update bodies
//!   - **[`dto::reports`]**: Report and geo-data requests
//!   - **[`dto::filters`]**: Optional query filters for list endpoints
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and in JSON
//! - Optional fields are omitted from JSON when `None`
//! - Closed enums (`Disease`, `AlertLevel`, ...) serialize as lowercase strings
//!   and reject unknown values on deserialization
//!
//! ## Usage
//!
//! ```rust
//! use shared::{ArbovirusCase, Disease};
//!
//! let json = r#"{
//!     "id": 1, "municipality_id": 7, "disease": "dengue",
//!     "epidemiological_week": 12, "year": 2024,
//!     "confirmed_cases": 40, "probable_cases": 12, "deaths": 0
//! }"#;
//! let case: ArbovirusCase = serde_json::from_str(json).unwrap();
//! assert_eq!(case.disease, Disease::Dengue);
//! assert!(case.incidence_rate.is_none());
//! ```

pub mod dto;

// Wildcard re-export: shared is a DTO library where every export is public API
pub use dto::*;
