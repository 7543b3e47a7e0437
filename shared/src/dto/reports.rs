//! # Report and Geo Data Transfer Objects

use serde::{Deserialize, Serialize};

/// Dataset a report is generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Cases,
    Predictions,
    Alerts,
    Correlations,
}

/// Output file format of a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ReportFormat {
    /// Conventional file extension for a downloaded report.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Excel => "xlsx",
            ReportFormat::Csv => "csv",
        }
    }
}

/// Request body for `POST /reports/generate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRequest {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub format: ReportFormat,
    /// Arbitrary filter payload forwarded to the backend as-is
    #[serde(default)]
    pub filters: serde_json::Value,
}

/// Granularity of geometry served by `GET /data/geo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoType {
    Municipalities,
    States,
    Regions,
}

/// Query for `GET /data/geo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoQuery {
    #[serde(rename = "type")]
    pub geo_type: GeoType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl GeoQuery {
    pub fn new(geo_type: GeoType) -> Self {
        Self { geo_type, level: None }
    }
}
