//! # Query Filters
//!
//! Optional filters for the list endpoints. Every field is optional and a
//! `None` field is never sent: absence means "no filter", not "filter on an
//! empty value". All filters serialize to a URL query string.

use serde::Serialize;

use super::alerts::AlertLevel;
use super::surveillance::Disease;

/// Filters for `GET /data/municipalities`
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MunicipalityFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Free-text search over municipality names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Filters for `GET /data/cases`
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CaseFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<Disease>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_week: Option<u32>,
}

/// Filters for `GET /data/cases/summary`
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CaseSummaryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<Disease>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Filters for `GET /data/social-indicators`
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct IndicatorFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Filters for `GET /data/correlations`
///
/// `indicators` is multi-valued and is sent as repeated `indicators[]=` pairs
/// (see [`CorrelationFilters::indicator_pairs`]), so serde skips it.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CorrelationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<Disease>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip)]
    pub indicators: Vec<String>,
}

impl CorrelationFilters {
    pub fn indicator_pairs(&self) -> Vec<(&'static str, &str)> {
        self.indicators
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| ("indicators[]", s))
            .collect()
    }
}

/// Filters for `GET /predictions`
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PredictionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<Disease>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Prediction horizon in weeks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks_ahead: Option<u32>,
}

/// Filters for `GET /predictions/performance`
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PerformanceFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<Disease>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality_id: Option<i64>,
}

/// Filters for `GET /alerts`
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AlertFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<Disease>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_level: Option<AlertLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
