//! # Report Endpoint
//!
//! Report generation returns a file (PDF, Excel or CSV). The body is opaque
//! binary and is never run through a JSON parser; the caller decides what to
//! do with it.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use shared::{ReportFormat, ReportRequest};

use super::client::ApiClient;
use crate::core::error::{GatewayError, Result};

/// A generated report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    /// `Content-Type` announced by the backend, if any
    pub content_type: Option<String>,
    /// Raw file bytes
    pub bytes: Vec<u8>,
    /// Format that was requested
    pub format: ReportFormat,
}

impl ReportFile {
    /// Suggested file name, e.g. `report.csv`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.format.extension())
    }
}

#[tracing::instrument(skip(client, request), fields(
    report_type = ?request.report_type,
    format = ?request.format
))]
pub async fn generate_report(client: &ApiClient, request: &ReportRequest) -> Result<ReportFile> {
    let start = std::time::Instant::now();

    let path = "/reports/generate";
    let response = client
        .dispatch(Method::POST, path, |req| req.json(request))
        .await?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes().await.map_err(GatewayError::from)?.to_vec();

    tracing::info!(
        size_bytes = bytes.len(),
        content_type = ?content_type,
        duration_ms = start.elapsed().as_millis(),
        "Report generated"
    );

    Ok(ReportFile {
        content_type,
        bytes,
        format: request.format,
    })
}
