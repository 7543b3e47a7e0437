//! # Prediction Data Transfer Objects
//!
//! Predictions are produced by the external modeling service and are
//! read-only from the gateway's perspective.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::surveillance::Disease;

/// Predicted case count for a future epidemiological week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub id: i64,
    pub municipality_id: i64,
    pub disease: Disease,
    pub model_name: String,
    pub prediction_date: NaiveDate,
    pub target_week: u32,
    pub target_year: i32,
    pub predicted_cases: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_interval_lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_interval_upper: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_accuracy: Option<f64>,
}

/// Request body for `POST /predictions/generate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratePredictionsRequest {
    pub municipality_ids: Vec<i64>,
    pub disease: Disease,
    pub weeks_ahead: u32,
    /// Restrict generation to these models (e.g. `arima`, `lstm`, `prophet`, `ensemble`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
}

impl GeneratePredictionsRequest {
    /// Check the request before it is sent.
    pub fn validate(&self) -> Result<(), String> {
        if self.municipality_ids.is_empty() {
            return Err("At least one municipality id is required".to_string());
        }
        if self.weeks_ahead == 0 {
            return Err("Prediction horizon must be at least one week".to_string());
        }
        if let Some(models) = &self.models {
            if models.iter().any(|m| m.trim().is_empty()) {
                return Err("Model names cannot be empty".to_string());
            }
        }
        Ok(())
    }
}
